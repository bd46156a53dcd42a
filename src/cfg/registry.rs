// 类型注册表和工厂函数

use anyhow::{anyhow, Result};
use garde::Validate;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::RwLock;

use super::type_options::TypeOptions;

// 构造函数返回 Box<dyn Any>，实际包含的是 Box<dyn Trait>
type TraitConstructor =
    Box<dyn Fn(JsonValue) -> Result<Box<dyn Any + Send + Sync>> + Send + Sync>;

// Trait 注册表：为每个 Trait 类型维护一个独立的注册表
// 外层 HashMap 的 key 是 Trait 的 TypeId，内层 HashMap 的 key 是类型名称
static TRAIT_REGISTRY: Lazy<RwLock<HashMap<TypeId, HashMap<String, TraitConstructor>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// 为实现特定 Trait 的类型注册构造函数
///
/// 构造时先用 serde 反序列化配置，再用 garde 校验，最后通过 `From<Config>` 创建实例。
/// 同一个 Trait 下重复注册同名类型会覆盖之前的注册。
///
/// # 类型参数
/// - `T`: 具体实现类型
/// - `Trait`: 目标 trait（使用 `dyn Trait` 形式）
/// - `Config`: 配置类型
///
/// # 示例
/// ```ignore
/// register_trait::<MutexSeriesStore<f64>, dyn SeriesStore<f64>, MutexSeriesStoreConfig>(
///     "MutexSeriesStore",
/// )?;
///
/// let store: Box<dyn SeriesStore<f64>> = create_trait_from_type_options(&type_options)?;
/// ```
pub fn register_trait<T, Trait, Config>(type_name: &str) -> Result<()>
where
    T: Send + Sync + 'static,
    Trait: ?Sized + Send + Sync + 'static,
    Config: DeserializeOwned + Validate + Send + Sync + 'static,
    <Config as Validate>::Context: Default,
    T: From<Config>,
    Box<T>: Into<Box<Trait>>,
{
    let trait_id = TypeId::of::<Trait>();
    let name = type_name.to_string();

    let constructor: TraitConstructor = Box::new(move |value| {
        // 未提供 options 时按空配置处理
        let value = match value {
            JsonValue::Null => JsonValue::Object(Default::default()),
            value => value,
        };
        let config: Config = serde_json::from_value(value)?;
        config.validate()?;
        let trait_object: Box<Trait> = Box::new(T::from(config)).into();
        // 将 Box<dyn Trait> 包装成 Box<dyn Any>
        Ok(Box::new(trait_object) as Box<dyn Any + Send + Sync>)
    });

    let mut registry = TRAIT_REGISTRY
        .write()
        .map_err(|_| anyhow!("Failed to acquire write lock"))?;
    let previous = registry
        .entry(trait_id)
        .or_default()
        .insert(name.clone(), constructor);

    if previous.is_some() {
        log::debug!(
            "type '{}' re-registered for trait {}",
            name,
            std::any::type_name::<Trait>()
        );
    } else {
        log::debug!(
            "type '{}' registered for trait {}",
            name,
            std::any::type_name::<Trait>()
        );
    }

    Ok(())
}

/// 根据 TypeOptions 创建 trait object
///
/// # 示例
/// ```ignore
/// let type_options = TypeOptions::from_json(r#"{"type": "MutexSeriesStore", "options": {}}"#)?;
/// let store: Box<dyn SeriesStore<f64>> = create_trait_from_type_options(&type_options)?;
/// ```
pub fn create_trait_from_type_options<Trait>(type_options: &TypeOptions) -> Result<Box<Trait>>
where
    Trait: ?Sized + Send + Sync + 'static,
{
    let trait_id = TypeId::of::<Trait>();
    let registry = TRAIT_REGISTRY
        .read()
        .map_err(|_| anyhow!("Failed to acquire read lock"))?;

    let trait_registry = registry.get(&trait_id).ok_or_else(|| {
        anyhow!(
            "No implementations registered for trait {}",
            type_name::<Trait>()
        )
    })?;

    let constructor = trait_registry.get(&type_options.type_name).ok_or_else(|| {
        anyhow!(
            "Type '{}' not registered for trait {}",
            type_options.type_name,
            type_name::<Trait>()
        )
    })?;

    let any_box = constructor(type_options.options.clone()).map_err(|e| {
        log::warn!(
            "failed to create '{}' from options {}: {}",
            type_options.type_name,
            type_options.options,
            e
        );
        e
    })?;
    log::debug!(
        "created '{}' for trait {}",
        type_options.type_name,
        type_name::<Trait>()
    );

    // 从 Box<dyn Any> 中取回 Box<dyn Trait>
    any_box
        .downcast::<Box<Trait>>()
        .map(|boxed| *boxed)
        .map_err(|_| anyhow!("Failed to downcast to target trait type"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    trait Greeter: Send + Sync {
        fn greet(&self) -> String;
    }

    #[derive(Debug, Clone, Deserialize, Validate)]
    struct GreeterConfig {
        #[garde(length(min = 1))]
        name: String,
    }

    struct EnglishGreeter {
        name: String,
    }

    impl From<GreeterConfig> for EnglishGreeter {
        fn from(config: GreeterConfig) -> Self {
            Self { name: config.name }
        }
    }

    impl From<Box<EnglishGreeter>> for Box<dyn Greeter> {
        fn from(source: Box<EnglishGreeter>) -> Self {
            source as Box<dyn Greeter>
        }
    }

    impl Greeter for EnglishGreeter {
        fn greet(&self) -> String {
            format!("hello {}", self.name)
        }
    }

    #[test]
    fn test_register_and_create() -> Result<()> {
        register_trait::<EnglishGreeter, dyn Greeter, GreeterConfig>("EnglishGreeter")?;

        let opts = TypeOptions {
            type_name: "EnglishGreeter".to_string(),
            options: serde_json::json!({ "name": "world" }),
        };
        let greeter: Box<dyn Greeter> = create_trait_from_type_options(&opts)?;
        assert_eq!(greeter.greet(), "hello world");

        // 重复注册覆盖之前的注册
        register_trait::<EnglishGreeter, dyn Greeter, GreeterConfig>("EnglishGreeter")?;
        let greeter: Box<dyn Greeter> = create_trait_from_type_options(&opts)?;
        assert_eq!(greeter.greet(), "hello world");

        Ok(())
    }

    #[test]
    fn test_unregistered_type_error() -> Result<()> {
        register_trait::<EnglishGreeter, dyn Greeter, GreeterConfig>("EnglishGreeter")?;

        let opts = TypeOptions {
            type_name: "FrenchGreeter".to_string(),
            options: serde_json::json!({}),
        };

        let result: Result<Box<dyn Greeter>> = create_trait_from_type_options(&opts);
        let error_msg = result.err().unwrap().to_string();
        assert!(error_msg.contains("not registered"));
        assert!(error_msg.contains("FrenchGreeter"));
        Ok(())
    }

    #[test]
    fn test_invalid_config_error() -> Result<()> {
        register_trait::<EnglishGreeter, dyn Greeter, GreeterConfig>("EnglishGreeter")?;

        // 字段缺失
        let opts = TypeOptions {
            type_name: "EnglishGreeter".to_string(),
            options: serde_json::json!({ "wrong_field": "invalid" }),
        };
        let result: Result<Box<dyn Greeter>> = create_trait_from_type_options(&opts);
        assert!(result.is_err());

        // 校验失败
        let opts = TypeOptions {
            type_name: "EnglishGreeter".to_string(),
            options: serde_json::json!({ "name": "" }),
        };
        let result: Result<Box<dyn Greeter>> = create_trait_from_type_options(&opts);
        assert!(result.is_err());

        Ok(())
    }
}
