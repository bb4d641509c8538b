//! 属性绑定器
//!
//! 解析类型 → 实例化 → 对每个配置项：规范化键 → 查找属性 → 类型转换 → 赋值。
//! 绑定器本身不持有状态，每次调用都创建新的实例。

pub mod coercion;
pub mod naming;

pub use coercion::{coerce, coercion_rule, CoercionPolicy, CoercionRule};
pub use naming::normalize_key;

use crate::config::{BinderConfig, UnknownKeyPolicy};
use crate::debug_log;
use crate::error::DataSourceResult;
use crate::registry::{DataSourceDescriptor, DataSourceInstance, DataSourceRegistry};
use crate::types::DataSourceProperties;
use std::any::Any;

/// 属性绑定器
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PropertyBinder {
    config: BinderConfig,
}

impl PropertyBinder {
    /// 创建绑定器
    pub fn new(config: BinderConfig) -> Self {
        Self { config }
    }

    /// 严格模式：拒绝未知配置键
    pub fn strict() -> Self {
        Self::new(crate::config::strict_binder_config())
    }

    /// 宽松模式：允许字符串与标量互相转换
    pub fn lenient() -> Self {
        Self::new(crate::config::lenient_binder_config())
    }

    pub fn config(&self) -> &BinderConfig {
        &self.config
    }

    /// 按类型标识符构建并配置数据源
    ///
    /// # 参数
    /// * `registry` - 用于解析类型标识符的注册表
    /// * `type_name` - 类型标识符或别名
    /// * `properties` - 配置映射
    ///
    /// # 返回值
    /// * `Ok(DataSourceInstance)` - 所有可识别的配置项均已写入
    /// * `Err(DataSourceError)` - 第一个失败的步骤，之后的配置项不再处理
    pub fn bind(
        &self,
        registry: &DataSourceRegistry,
        type_name: &str,
        properties: &DataSourceProperties,
    ) -> DataSourceResult<DataSourceInstance> {
        let descriptor = registry.resolve(type_name)?;
        self.bind_descriptor(&descriptor, properties)
    }

    /// 构建数据源并转换为具体类型
    pub fn bind_as<T: Any>(
        &self,
        registry: &DataSourceRegistry,
        type_name: &str,
        properties: &DataSourceProperties,
    ) -> DataSourceResult<T> {
        self.bind(registry, type_name, properties)?.downcast::<T>()
    }

    /// 对已解析的类型描述执行实例化与属性绑定
    pub fn bind_descriptor(
        &self,
        descriptor: &DataSourceDescriptor,
        properties: &DataSourceProperties,
    ) -> DataSourceResult<DataSourceInstance> {
        let mut instance = descriptor.instantiate()?;

        for (key, value) in properties.iter() {
            let name = normalize_key(key);
            let Some(property) = descriptor.property(&name) else {
                match self.config.unknown_keys {
                    UnknownKeyPolicy::Ignore => {
                        debug_log!("数据源 {} 没有属性 {}，跳过配置项 {}", descriptor.type_name(), name, key);
                        continue;
                    }
                    UnknownKeyPolicy::Reject => {
                        return Err(crate::ds_error!(unknown_property, descriptor.type_name(), key));
                    }
                }
            };

            let coerced = coerce(property.name(), value, property.kind(), self.config.coercion)?;
            debug_log!("设置 {}.{} = {:?}", descriptor.type_name(), property.name(), coerced);
            property.assign(instance.as_any_mut(), coerced)?;
        }

        debug_log!("数据源 {} 构建完成，配置项数: {}", descriptor.type_name(), properties.len());
        Ok(instance)
    }
}
