//! 内置连接池
//!
//! 两个连接池只保存配置，用于演示和测试按名称构建数据源。

pub mod dbcp;
pub mod hikari;

pub use dbcp::{BasicDataSource, BASIC_DATA_SOURCE};
pub use hikari::{HikariConfigError, HikariDataSource, HIKARI_DATA_SOURCE};

use crate::registry::DataSourceDescriptor;

/// 全部内置连接池的类型描述
pub fn builtin_descriptors() -> Vec<DataSourceDescriptor> {
    vec![BasicDataSource::descriptor(), HikariDataSource::descriptor()]
}
