//! 错误类型定义
//!
//! 数据源构建过程中所有调用方可见的错误。错误消息通过 `i18n` 模块本地化，
//! 统一使用 [`ds_error!`](crate::ds_error) 宏构造，保证字段与消息一致。

use crate::types::{PropertyKind, ValueKind};
use thiserror::Error;

/// 数据源构建错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataSourceError {
    /// 类型标识符在注册表中不存在
    #[error("{message}")]
    TypeResolutionError {
        type_name: String,
        message: String,
    },

    /// 类型已解析但无法实例化（抽象类型或工厂函数失败）
    #[error("{message}")]
    InstantiationError {
        type_name: String,
        message: String,
    },

    /// 配置值的运行时类型与属性声明类型不兼容
    #[error("{message}")]
    TypeMismatchError {
        property: String,
        expected: PropertyKind,
        actual: ValueKind,
        message: String,
    },

    /// 属性已解析但写入失败（只读属性或 setter 拒绝）
    #[error("{message}")]
    AssignmentError {
        property: String,
        message: String,
    },

    /// 严格模式下出现无法识别的配置键
    #[error("{message}")]
    UnknownPropertyError {
        type_name: String,
        property: String,
        message: String,
    },

    /// 绑定器或注册表配置错误
    #[error("{message}")]
    ConfigError {
        message: String,
    },

    /// 序列化/反序列化错误
    #[error("{message}")]
    SerializationError {
        message: String,
    },
}

/// 数据源操作结果
pub type DataSourceResult<T> = Result<T, DataSourceError>;

impl DataSourceError {
    /// 出错的属性名（仅属性级错误有值）
    pub fn property(&self) -> Option<&str> {
        match self {
            DataSourceError::TypeMismatchError { property, .. }
            | DataSourceError::AssignmentError { property, .. }
            | DataSourceError::UnknownPropertyError { property, .. } => Some(property),
            _ => None,
        }
    }

    /// 出错的类型标识符（仅类型级错误有值）
    pub fn type_name(&self) -> Option<&str> {
        match self {
            DataSourceError::TypeResolutionError { type_name, .. }
            | DataSourceError::InstantiationError { type_name, .. }
            | DataSourceError::UnknownPropertyError { type_name, .. } => Some(type_name),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for DataSourceError {
    fn from(e: serde_json::Error) -> Self {
        crate::ds_error!(serialization, e.to_string())
    }
}

/// 构造 [`DataSourceError`] 的便捷宏
///
/// 第一个参数是错误类别，后续参数依类别而定：
///
/// ```ignore
/// ds_error!(type_resolution, "com.example.Pool");
/// ds_error!(instantiation, "com.example.Pool", "抽象类型");
/// ds_error!(type_mismatch, "maxActive", PropertyKind::Int, ValueKind::Bool);
/// ds_error!(assignment, "numActive", "属性只读");
/// ds_error!(unknown_property, "com.example.Pool", "maxActiv");
/// ds_error!(config, "别名已被占用");
/// ds_error!(serialization, "JSON 解析失败");
/// ```
#[macro_export]
macro_rules! ds_error {
    (type_resolution, $type_name:expr) => {{
        let type_name: String = ($type_name).to_string();
        $crate::error::DataSourceError::TypeResolutionError {
            message: $crate::i18n::tf(
                "error.type_resolution",
                &[("type_name", type_name.as_str())],
            ),
            type_name,
        }
    }};
    (instantiation, $type_name:expr, $message:expr) => {{
        let type_name: String = ($type_name).to_string();
        let detail: String = ($message).to_string();
        $crate::error::DataSourceError::InstantiationError {
            message: $crate::i18n::tf(
                "error.instantiation",
                &[("type_name", type_name.as_str()), ("message", detail.as_str())],
            ),
            type_name,
        }
    }};
    (type_mismatch, $property:expr, $expected:expr, $actual:expr) => {{
        let property: String = ($property).to_string();
        let expected: $crate::types::PropertyKind = $expected;
        let actual: $crate::types::ValueKind = $actual;
        $crate::error::DataSourceError::TypeMismatchError {
            message: $crate::i18n::tf(
                "error.type_mismatch",
                &[
                    ("property", property.as_str()),
                    ("expected", expected.as_str()),
                    ("actual", actual.as_str()),
                ],
            ),
            property,
            expected,
            actual,
        }
    }};
    (assignment, $property:expr, $message:expr) => {{
        let property: String = ($property).to_string();
        let detail: String = ($message).to_string();
        $crate::error::DataSourceError::AssignmentError {
            message: $crate::i18n::tf(
                "error.assignment",
                &[("property", property.as_str()), ("message", detail.as_str())],
            ),
            property,
        }
    }};
    (unknown_property, $type_name:expr, $property:expr) => {{
        let type_name: String = ($type_name).to_string();
        let property: String = ($property).to_string();
        $crate::error::DataSourceError::UnknownPropertyError {
            message: $crate::i18n::tf(
                "error.unknown_property",
                &[("type_name", type_name.as_str()), ("property", property.as_str())],
            ),
            type_name,
            property,
        }
    }};
    (config, $message:expr) => {{
        let detail: String = ($message).to_string();
        $crate::error::DataSourceError::ConfigError {
            message: $crate::i18n::tf("error.config", &[("message", detail.as_str())]),
        }
    }};
    (serialization, $message:expr) => {{
        let detail: String = ($message).to_string();
        $crate::error::DataSourceError::SerializationError {
            message: $crate::i18n::tf("error.serialization", &[("message", detail.as_str())]),
        }
    }};
}
