//! rat_datasource - 按名称构建数据源
//!
//! 根据类型标识符和一份键值配置创建连接池实例：
//! 配置键可以是驼峰或连字符形式，值按显式转换表转换为属性声明的类型后写入实例。
//! 类型通过注册表声明，不依赖运行时反射。

// 导出所有公共模块
pub mod error;
pub mod types;
pub mod i18n;
pub mod binder;
pub mod registry;
pub mod datasource;
pub mod config;

// 重新导出常用类型和函数
pub use error::{DataSourceError, DataSourceResult};
pub use types::*;
pub use binder::{normalize_key, coerce, CoercionPolicy, CoercionRule, PropertyBinder};
pub use registry::{
    DataSourceDescriptor, DataSourceDescriptorBuilder, DataSourceInstance, DataSourceRegistry,
    PropertyDescriptor, SetterOutcome,
    register_data_source, unregister_data_source, resolve_data_source_type, registered_type_names,
    get_data_source, get_data_source_as, get_data_source_with,
};
pub use datasource::{
    BasicDataSource, HikariConfigError, HikariDataSource, BASIC_DATA_SOURCE, HIKARI_DATA_SOURCE,
};
pub use config::{
    BinderConfig, BinderConfigBuilder, UnknownKeyPolicy, lenient_binder_config, strict_binder_config,
};

// 条件编译调试宏 - 只有在 debug 模式下才输出调试信息
#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        rat_logger::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        // 在 release 模式下不输出调试信息
    };
}

/// 初始化rat_datasource库
///
/// 注册多语言错误消息。日志系统由调用者自行初始化
pub fn init() {
    i18n::ErrorMessageI18n::init();
}

/// 库版本信息
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 库名称
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// 获取库信息
pub fn get_info() -> String {
    format!("{} v{}", NAME, VERSION)
}
