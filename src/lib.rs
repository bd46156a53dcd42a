//! memstore - 线程安全的内存 key/value 容器
//!
//! ## 模块
//!
//! - **store**: 标量存储与序列存储（支持带边界检查的下标、区间访问）
//! - **cfg**: 基于配置创建存储实例
//!
//! ## 示例
//!
//! ```rust
//! use memstore::store::{Float64SeriesStore, SeriesStore, StoreError};
//!
//! let store = Float64SeriesStore::default();
//! store.set("AAPL", vec![1.0, 2.0, 3.0]);
//!
//! assert_eq!(store.get_range("AAPL", 0, 2), Ok(vec![1.0, 2.0]));
//! assert_eq!(store.get_idx("AAPL", 3), Err(StoreError::IdxOutOfBounds));
//! assert_eq!(store.get_idx("MSFT", 0), Err(StoreError::KeyDoesNotExist));
//! ```

pub mod cfg;
pub mod store;

// 重新导出主要的公共 API
pub use cfg::{create_trait_from_type_options, register_trait, TypeOptions};

pub use store::{
    register_scalar_stores, register_series_stores, MutexScalarStore, MutexScalarStoreConfig,
    MutexSeriesStore, MutexSeriesStoreConfig, Ohlc, ScalarStore, SeriesStore, StoreError,
};
