use garde::Validate;
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::core::ScalarStore;

/// MutexScalarStore 配置结构体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, SmartDefault, Validate)]
#[serde(default)]
pub struct MutexScalarStoreConfig {
    /// 初始容量（可选，只影响预分配）
    #[garde(range(max = 16_777_216))]
    pub initial_capacity: Option<usize>,
}

/// 基于 Mutex + HashMap 的标量存储
pub struct MutexScalarStore<T>
where
    T: Clone + Send + Sync,
{
    map: Mutex<HashMap<String, T>>,
}

impl<T> MutexScalarStore<T>
where
    T: Clone + Send + Sync,
{
    pub fn new(config: MutexScalarStoreConfig) -> Self {
        let initial_map = match config.initial_capacity {
            Some(capacity) => HashMap::with_capacity(capacity),
            None => HashMap::new(),
        };

        Self {
            map: Mutex::new(initial_map),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, T>> {
        self.map.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Default for MutexScalarStore<T>
where
    T: Clone + Send + Sync,
{
    fn default() -> Self {
        Self::new(MutexScalarStoreConfig::default())
    }
}

impl<T> ScalarStore<T> for MutexScalarStore<T>
where
    T: Clone + Send + Sync,
{
    fn set(&self, key: &str, value: T) {
        self.lock().insert(key.to_string(), value);
    }

    fn get(&self, key: &str) -> Option<T> {
        self.lock().get(key).cloned()
    }

    fn size(&self) -> usize {
        self.lock().len()
    }

    fn members(&self) -> Vec<String> {
        self.lock().keys().cloned().collect()
    }

    fn is_member(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    fn clear(&self) {
        self.lock().clear();
    }
}

impl<T> From<MutexScalarStoreConfig> for MutexScalarStore<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn from(config: MutexScalarStoreConfig) -> Self {
        MutexScalarStore::new(config)
    }
}

impl<T> From<Box<MutexScalarStore<T>>> for Box<dyn ScalarStore<T>>
where
    T: Clone + Send + Sync + 'static,
{
    fn from(source: Box<MutexScalarStore<T>>) -> Self {
        source as Box<dyn ScalarStore<T>>
    }
}
