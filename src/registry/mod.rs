//! 数据源类型注册表
//!
//! 类型标识符（及别名）到 [`DataSourceDescriptor`] 的映射，替代运行时反射加载类。
//! 除了可独立创建的注册表，还提供一个预先注册内置连接池的全局注册表。

pub mod descriptor;
pub mod instance;

pub use descriptor::{DataSourceDescriptor, DataSourceDescriptorBuilder, PropertyDescriptor, SetterOutcome};
pub use instance::DataSourceInstance;

use crate::binder::PropertyBinder;
use crate::error::DataSourceResult;
use crate::types::DataSourceProperties;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use regex::Regex;
use rat_logger::{debug, error, info, warn};
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

/// 类型标识符格式：点号或 `::` 分隔的标识符段
const TYPE_NAME_PATTERN: &str = r"^[A-Za-z_$][A-Za-z0-9_$]*(?:(?:\.|::)[A-Za-z_$][A-Za-z0-9_$]*)*$";

static TYPE_NAME_REGEX: Lazy<Result<Regex, regex::Error>> = Lazy::new(|| Regex::new(TYPE_NAME_PATTERN));

/// 数据源类型注册表
#[derive(Debug, Clone, Default)]
pub struct DataSourceRegistry {
    types: HashMap<String, Arc<DataSourceDescriptor>>,
    aliases: HashMap<String, String>,
}

impl DataSourceRegistry {
    /// 创建空注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建已注册内置连接池的注册表
    pub fn with_builtin_pools() -> Self {
        let mut registry = Self::new();
        for descriptor in crate::datasource::builtin_descriptors() {
            let type_name = descriptor.type_name().to_string();
            if let Err(e) = registry.register(descriptor) {
                error!("内置数据源 {} 注册失败: {}", type_name, e);
            }
        }
        registry
    }

    /// 注册数据源类型
    ///
    /// 同名类型会被替换，其旧别名一并移除。别名已被其他类型占用时返回 ConfigError。
    pub fn register(&mut self, descriptor: DataSourceDescriptor) -> DataSourceResult<()> {
        let pattern = TYPE_NAME_REGEX
            .as_ref()
            .map_err(|e| crate::ds_error!(config, format!("类型标识符正则表达式无效: {}", e)))?;

        let type_name = descriptor.type_name().to_string();
        if !pattern.is_match(&type_name) {
            return Err(crate::ds_error!(config, format!("无效的类型标识符: '{}'", type_name)));
        }

        for alias in descriptor.aliases() {
            if !pattern.is_match(alias) {
                return Err(crate::ds_error!(config, format!("无效的类型别名: '{}'", alias)));
            }
            if self.types.contains_key(alias) && *alias != type_name {
                return Err(crate::ds_error!(
                    config,
                    format!("别名 '{}' 与已注册的类型标识符冲突", alias)
                ));
            }
            if let Some(owner) = self.aliases.get(alias) {
                if *owner != type_name {
                    return Err(crate::ds_error!(
                        config,
                        format!("别名 '{}' 已被 {} 占用", alias, owner)
                    ));
                }
            }
        }
        if let Some(owner) = self.aliases.get(&type_name) {
            if *owner != type_name {
                return Err(crate::ds_error!(
                    config,
                    format!("类型标识符 '{}' 已作为 {} 的别名注册", type_name, owner)
                ));
            }
        }

        if self.types.contains_key(&type_name) {
            warn!("数据源类型 {} 已注册，将被替换", type_name);
            self.aliases.retain(|_, owner| *owner != type_name);
        }

        // 与类型标识符相同的别名不需要登记
        for alias in descriptor.aliases().iter().filter(|alias| **alias != type_name) {
            self.aliases.insert(alias.clone(), type_name.clone());
        }
        info!(
            "注册数据源类型: {} (别名: {:?}, 属性数: {})",
            type_name,
            descriptor.aliases(),
            descriptor.properties().len()
        );
        self.types.insert(type_name, Arc::new(descriptor));
        Ok(())
    }

    /// 注销数据源类型及其别名
    pub fn unregister(&mut self, type_name: &str) -> Option<Arc<DataSourceDescriptor>> {
        let removed = self.types.remove(type_name)?;
        self.aliases.retain(|_, owner| owner != type_name);
        debug!("注销数据源类型: {}", type_name);
        Some(removed)
    }

    /// 按类型标识符或别名解析类型描述
    pub fn resolve(&self, type_name: &str) -> DataSourceResult<Arc<DataSourceDescriptor>> {
        if let Some(descriptor) = self.types.get(type_name) {
            return Ok(descriptor.clone());
        }
        self.aliases
            .get(type_name)
            .and_then(|canonical| self.types.get(canonical))
            .cloned()
            .ok_or_else(|| crate::ds_error!(type_resolution, type_name))
    }

    /// 类型标识符或别名是否已注册
    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name) || self.aliases.contains_key(type_name)
    }

    /// 已注册的类型标识符（不含别名），按名称排序
    pub fn type_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.types.keys().cloned().collect();
        names.sort();
        names
    }

    /// 使用默认绑定器构建数据源
    pub fn bind(&self, type_name: &str, properties: &DataSourceProperties) -> DataSourceResult<DataSourceInstance> {
        PropertyBinder::default().bind(self, type_name, properties)
    }

    /// 使用默认绑定器构建数据源并转换为具体类型
    pub fn bind_as<T: Any>(&self, type_name: &str, properties: &DataSourceProperties) -> DataSourceResult<T> {
        PropertyBinder::default().bind_as::<T>(self, type_name, properties)
    }
}

/// 全局数据源注册表，首次访问时注册内置连接池
static GLOBAL_REGISTRY: Lazy<RwLock<DataSourceRegistry>> =
    Lazy::new(|| RwLock::new(DataSourceRegistry::with_builtin_pools()));

/// 向全局注册表注册数据源类型
pub fn register_data_source(descriptor: DataSourceDescriptor) -> DataSourceResult<()> {
    GLOBAL_REGISTRY.write().register(descriptor)
}

/// 从全局注册表注销数据源类型
pub fn unregister_data_source(type_name: &str) -> Option<Arc<DataSourceDescriptor>> {
    GLOBAL_REGISTRY.write().unregister(type_name)
}

/// 在全局注册表中解析类型描述
pub fn resolve_data_source_type(type_name: &str) -> DataSourceResult<Arc<DataSourceDescriptor>> {
    GLOBAL_REGISTRY.read().resolve(type_name)
}

/// 全局注册表中已注册的类型标识符
pub fn registered_type_names() -> Vec<String> {
    GLOBAL_REGISTRY.read().type_names()
}

/// 按类型标识符构建并配置数据源（全局注册表，默认绑定器）
///
/// # 参数
/// * `type_name` - 类型标识符或别名
/// * `properties` - 配置映射，键可以是驼峰或连字符形式
pub fn get_data_source(type_name: &str, properties: &DataSourceProperties) -> DataSourceResult<DataSourceInstance> {
    get_data_source_with(&PropertyBinder::default(), type_name, properties)
}

/// 按类型标识符构建数据源并转换为具体类型
pub fn get_data_source_as<T: Any>(type_name: &str, properties: &DataSourceProperties) -> DataSourceResult<T> {
    get_data_source(type_name, properties)?.downcast::<T>()
}

/// 使用指定绑定器从全局注册表构建数据源
///
/// 读锁只在解析类型期间持有，绑定过程不阻塞其他调用方
pub fn get_data_source_with(
    binder: &PropertyBinder,
    type_name: &str,
    properties: &DataSourceProperties,
) -> DataSourceResult<DataSourceInstance> {
    let descriptor = resolve_data_source_type(type_name)?;
    binder.bind_descriptor(&descriptor, properties)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DataSourceError;
    use crate::types::PropertyKind;

    #[derive(Debug, Default)]
    struct Dummy {
        url: String,
    }

    fn dummy(type_name: &str, alias: &str) -> DataSourceDescriptor {
        DataSourceDescriptor::builder::<Dummy>(type_name)
            .alias(alias)
            .default_factory()
            .string("url", |d: &mut Dummy, v| d.url = v)
            .build()
    }

    #[test]
    fn test_resolve_by_name_and_alias() {
        let mut registry = DataSourceRegistry::new();
        registry.register(dummy("test.Dummy", "dummy")).unwrap();

        assert_eq!(registry.resolve("test.Dummy").unwrap().type_name(), "test.Dummy");
        assert_eq!(registry.resolve("dummy").unwrap().type_name(), "test.Dummy");
        assert!(registry.contains("dummy"));

        let err = registry.resolve("test.Missing").unwrap_err();
        assert!(matches!(err, DataSourceError::TypeResolutionError { ref type_name, .. } if type_name == "test.Missing"));
    }

    #[test]
    fn test_alias_conflicts() {
        let mut registry = DataSourceRegistry::new();
        registry.register(dummy("test.Dummy", "dummy")).unwrap();

        let err = registry.register(dummy("test.Other", "dummy")).unwrap_err();
        assert!(matches!(err, DataSourceError::ConfigError { .. }));

        let err = registry.register(dummy("dummy", "other")).unwrap_err();
        assert!(matches!(err, DataSourceError::ConfigError { .. }));

        let err = registry.register(dummy("test.Third", "test.Dummy")).unwrap_err();
        assert!(matches!(err, DataSourceError::ConfigError { .. }));
    }

    #[test]
    fn test_replace_drops_old_aliases() {
        let mut registry = DataSourceRegistry::new();
        registry.register(dummy("test.Dummy", "dummy")).unwrap();
        registry.register(dummy("test.Dummy", "renamed")).unwrap();

        assert!(!registry.contains("dummy"));
        assert!(registry.contains("renamed"));
        assert_eq!(registry.type_names(), vec!["test.Dummy".to_string()]);
    }

    #[test]
    fn test_alias_equal_to_type_name_can_be_replaced() {
        let mut registry = DataSourceRegistry::new();
        registry.register(dummy("test.Dummy", "test.Dummy")).unwrap();
        registry.register(dummy("test.Dummy", "test.Dummy")).unwrap();

        assert_eq!(registry.type_names(), vec!["test.Dummy".to_string()]);
        assert_eq!(registry.resolve("test.Dummy").unwrap().type_name(), "test.Dummy");
        assert!(registry.unregister("test.Dummy").is_some());
        assert!(!registry.contains("test.Dummy"));
    }

    #[test]
    fn test_type_name_pattern_compiles() {
        assert!(TYPE_NAME_REGEX.is_ok());
    }

    #[test]
    fn test_invalid_identifiers() {
        let mut registry = DataSourceRegistry::new();
        for bad in ["", "1pool", "org..Pool", "pool name", "pool-name"] {
            let err = registry.register(dummy(bad, "ok")).unwrap_err();
            assert!(matches!(err, DataSourceError::ConfigError { .. }), "应拒绝: {:?}", bad);
        }
        registry.register(dummy("my_crate::pool::Pool", "rust_pool")).unwrap();
    }

    #[test]
    fn test_unregister() {
        let mut registry = DataSourceRegistry::new();
        registry.register(dummy("test.Dummy", "dummy")).unwrap();
        assert!(registry.unregister("test.Dummy").is_some());
        assert!(!registry.contains("test.Dummy"));
        assert!(!registry.contains("dummy"));
        assert!(registry.unregister("test.Dummy").is_none());
    }

    #[test]
    fn test_builtin_pools_registered() {
        let registry = DataSourceRegistry::with_builtin_pools();
        assert!(registry.contains(crate::datasource::BASIC_DATA_SOURCE));
        assert!(registry.contains(crate::datasource::HIKARI_DATA_SOURCE));
        assert!(registry.contains("dbcp"));
        assert!(registry.contains("hikari"));

        let descriptor = registry.resolve("dbcp").unwrap();
        assert_eq!(descriptor.property("maxWait").unwrap().kind(), PropertyKind::Long);
    }

    #[test]
    fn test_every_builtin_pool_registers_cleanly() {
        let mut registry = DataSourceRegistry::new();
        let descriptors = crate::datasource::builtin_descriptors();
        let count = descriptors.len();
        for descriptor in descriptors {
            let type_name = descriptor.type_name().to_string();
            if let Err(e) = registry.register(descriptor) {
                panic!("内置数据源 {} 注册失败: {}", type_name, e);
            }
        }
        assert_eq!(registry.type_names().len(), count);
        assert_eq!(registry.type_names(), DataSourceRegistry::with_builtin_pools().type_names());
    }

    #[test]
    fn test_global_registry_round_trip() {
        register_data_source(dummy("test.GlobalDummy", "global_dummy")).unwrap();
        assert!(registered_type_names().contains(&"test.GlobalDummy".to_string()));

        let props = DataSourceProperties::new().with("url", "jdbc:h2:mem:global");
        let dummy = get_data_source_as::<Dummy>("global_dummy", &props).unwrap();
        assert_eq!(dummy.url, "jdbc:h2:mem:global");

        assert!(unregister_data_source("test.GlobalDummy").is_some());
        let err = resolve_data_source_type("global_dummy").unwrap_err();
        assert!(matches!(err, DataSourceError::TypeResolutionError { .. }));
    }
}
