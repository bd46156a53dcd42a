use garde::Validate;
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::core::{check_idx, check_range, SeriesStore, StoreError};

/// MutexSeriesStore 配置结构体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, SmartDefault, Validate)]
#[serde(default)]
pub struct MutexSeriesStoreConfig {
    /// 初始容量（可选，只影响预分配）
    #[garde(range(max = 16_777_216))]
    pub initial_capacity: Option<usize>,
}

/// 基于 Mutex + HashMap 的序列存储
///
/// 整个 map 由一把互斥锁保护，每个公开操作在整个执行期间持有锁，
/// 返回的序列都是加锁期间拷贝出来的快照。
pub struct MutexSeriesStore<T>
where
    T: Clone + Send + Sync,
{
    map: Mutex<HashMap<String, Vec<T>>>,
}

impl<T> MutexSeriesStore<T>
where
    T: Clone + Send + Sync,
{
    pub fn new(config: MutexSeriesStoreConfig) -> Self {
        let initial_map = match config.initial_capacity {
            Some(capacity) => HashMap::with_capacity(capacity),
            None => HashMap::new(),
        };

        Self {
            map: Mutex::new(initial_map),
        }
    }

    // 每次写入都是单次的 map/vec 赋值，锁中毒时数据仍然完整，直接取回 guard
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<T>>> {
        self.map.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Default for MutexSeriesStore<T>
where
    T: Clone + Send + Sync,
{
    fn default() -> Self {
        Self::new(MutexSeriesStoreConfig::default())
    }
}

impl<T> SeriesStore<T> for MutexSeriesStore<T>
where
    T: Clone + Send + Sync,
{
    fn set(&self, key: &str, series: Vec<T>) {
        self.lock().insert(key.to_string(), series);
    }

    fn set_idx(&self, key: &str, idx: isize, value: T) -> Result<(), StoreError> {
        let mut map = self.lock();
        let series = map.get_mut(key).ok_or(StoreError::KeyDoesNotExist)?;
        let idx = check_idx(idx, series.len())?;

        series[idx] = value;
        Ok(())
    }

    fn get(&self, key: &str) -> Option<Vec<T>> {
        self.lock().get(key).cloned()
    }

    fn get_idx(&self, key: &str, idx: isize) -> Result<T, StoreError> {
        let map = self.lock();
        let series = map.get(key).ok_or(StoreError::KeyDoesNotExist)?;
        let idx = check_idx(idx, series.len())?;

        Ok(series[idx].clone())
    }

    fn get_range(&self, key: &str, lower: isize, upper: isize) -> Result<Vec<T>, StoreError> {
        let map = self.lock();
        let series = map.get(key).ok_or(StoreError::KeyDoesNotExist)?;
        let (lower, upper) = check_range(lower, upper, series.len())?;

        Ok(series[lower..upper].to_vec())
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

    fn member_len(&self, key: &str) -> Result<usize, StoreError> {
        self.lock()
            .get(key)
            .map(Vec::len)
            .ok_or(StoreError::KeyDoesNotExist)
    }

    fn clear(&self) {
        self.lock().clear();
    }
}

impl<T> From<MutexSeriesStoreConfig> for MutexSeriesStore<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn from(config: MutexSeriesStoreConfig) -> Self {
        MutexSeriesStore::new(config)
    }
}

impl<T> From<Box<MutexSeriesStore<T>>> for Box<dyn SeriesStore<T>>
where
    T: Clone + Send + Sync + 'static,
{
    fn from(source: Box<MutexSeriesStore<T>>) -> Self {
        source as Box<dyn SeriesStore<T>>
    }
}
