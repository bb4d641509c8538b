//! # 配置管理模块
//!
//! 绑定器配置，支持构建器模式和链式配置

pub mod builders;
pub mod convenience;
pub mod core;

pub use builders::BinderConfigBuilder;
pub use convenience::{lenient_binder_config, strict_binder_config};
pub use core::{BinderConfig, UnknownKeyPolicy};
