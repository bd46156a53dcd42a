//! cfg 模块 - 基于配置创建对象
//!
//! 通过 `TypeOptions`（类型名 + 选项）和 trait 注册表，在运行时按配置创建 trait object

pub mod registry;
pub mod type_options;

// 重新导出公共 API
pub use registry::{create_trait_from_type_options, register_trait};
pub use type_options::TypeOptions;
