use anyhow::Result;

use crate::cfg::register_trait;

use super::{
    MutexScalarStore, MutexScalarStoreConfig, MutexSeriesStore, MutexSeriesStoreConfig,
    ScalarStore, SeriesStore,
};

/// 注册所有 ScalarStore 实现到 cfg 注册表
///
/// `ScalarStore<T>` 是泛型 trait，不同的 T 对应不同的 TypeId，
/// 因此不同元素类型可以使用相同的类型名称注册，不会冲突。
///
/// # 注册的类型
/// - `MutexScalarStore` - 基于 Mutex + HashMap 的线程安全实现
///
/// # 示例
/// ```ignore
/// use memstore::store::{register_scalar_stores, ScalarStore};
/// use memstore::cfg::{TypeOptions, create_trait_from_type_options};
///
/// register_scalar_stores::<bool>()?;
///
/// let opts = TypeOptions::from_json(r#"{
///     "type": "MutexScalarStore",
///     "options": { "initial_capacity": 100 }
/// }"#)?;
///
/// let store: Box<dyn ScalarStore<bool>> = create_trait_from_type_options(&opts)?;
/// ```
pub fn register_scalar_stores<T>() -> Result<()>
where
    T: Clone + Send + Sync + 'static,
{
    register_trait::<MutexScalarStore<T>, dyn ScalarStore<T>, MutexScalarStoreConfig>(
        "MutexScalarStore",
    )?;
    Ok(())
}

/// 注册所有 SeriesStore 实现到 cfg 注册表
///
/// # 注册的类型
/// - `MutexSeriesStore` - 基于 Mutex + HashMap 的线程安全实现
///
/// # 示例
/// ```ignore
/// use memstore::store::{register_series_stores, Ohlc, SeriesStore};
/// use memstore::cfg::{TypeOptions, create_trait_from_type_options};
///
/// register_series_stores::<Ohlc>()?;
///
/// let opts = TypeOptions::from_yaml("type: MutexSeriesStore\noptions: {}\n")?;
/// let store: Box<dyn SeriesStore<Ohlc>> = create_trait_from_type_options(&opts)?;
/// ```
pub fn register_series_stores<T>() -> Result<()>
where
    T: Clone + Send + Sync + 'static,
{
    register_trait::<MutexSeriesStore<T>, dyn SeriesStore<T>, MutexSeriesStoreConfig>(
        "MutexSeriesStore",
    )?;
    Ok(())
}
