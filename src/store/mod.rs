//! 内存存储模块
//!
//! 提供两类线程安全的内存 key/value 容器：
//!
//! - [`ScalarStore`]：每个 key 对应一个值
//! - [`SeriesStore`]：每个 key 对应一个有序序列，支持带边界检查的下标和区间访问
//!
//! 每个存储实例由一把互斥锁保护整个 map，所有操作都是原子的。

pub mod core;
pub mod mutex_scalar_store;
pub mod mutex_series_store;
pub mod ohlc;
pub mod register;


// 重新导出核心类型和 trait
pub use self::core::{ScalarStore, SeriesStore, StoreError};
// 重新导出具体实现
pub use mutex_scalar_store::{MutexScalarStore, MutexScalarStoreConfig};
pub use mutex_series_store::{MutexSeriesStore, MutexSeriesStoreConfig};
pub use ohlc::Ohlc;
// 重新导出注册函数
pub use register::{register_scalar_stores, register_series_stores};

// 常用元素类型的标量存储
pub type BoolStore = MutexScalarStore<bool>;
pub type IntStore = MutexScalarStore<i64>;
pub type Int32Store = MutexScalarStore<i32>;
pub type Int64Store = MutexScalarStore<i64>;
pub type Uint32Store = MutexScalarStore<u32>;
pub type Uint64Store = MutexScalarStore<u64>;
pub type Float32Store = MutexScalarStore<f32>;
pub type Float64Store = MutexScalarStore<f64>;

// 常用元素类型的序列存储
pub type IntSeriesStore = MutexSeriesStore<i64>;
pub type Uint64SeriesStore = MutexSeriesStore<u64>;
pub type Float32SeriesStore = MutexSeriesStore<f32>;
pub type Float64SeriesStore = MutexSeriesStore<f64>;
pub type OhlcSeriesStore = MutexSeriesStore<Ohlc>;
