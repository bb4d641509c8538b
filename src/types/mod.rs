//! 数据源配置类型定义
//!
//! 定义配置值、属性声明类型以及配置映射

pub mod property_value;
pub mod property_kind;
pub mod properties;

pub use property_value::{PropertyValue, ValueKind, json_value_to_property_value};
pub use property_kind::PropertyKind;
pub use properties::DataSourceProperties;
