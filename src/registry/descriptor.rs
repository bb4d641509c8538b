//! 数据源类型描述
//!
//! 每个可按名称构建的数据源类型注册一个 [`DataSourceDescriptor`]：
//! 工厂函数负责创建默认实例，属性表记录每个可配置属性的声明类型与 setter。
//! 描述是类型擦除的，具体类型只在构建器里出现一次。

use crate::binder::normalize_key;
use crate::error::DataSourceResult;
use crate::registry::instance::DataSourceInstance;
use crate::types::{PropertyKind, PropertyValue};
use rat_logger::warn;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

type Factory = Arc<dyn Fn() -> Result<Box<dyn Any + Send>, String> + Send + Sync>;
type Setter = Arc<dyn Fn(&mut (dyn Any + Send), PropertyValue) -> DataSourceResult<()> + Send + Sync>;

/// setter 返回值，`()` 表示总是成功，`Result<(), E>` 的错误会成为 AssignmentError
pub trait SetterOutcome {
    fn into_result(self) -> Result<(), String>;
}

impl SetterOutcome for () {
    fn into_result(self) -> Result<(), String> {
        Ok(())
    }
}

impl<E: fmt::Display> SetterOutcome for Result<(), E> {
    fn into_result(self) -> Result<(), String> {
        self.map_err(|e| e.to_string())
    }
}

/// 可配置属性
#[derive(Clone)]
pub struct PropertyDescriptor {
    name: String,
    kind: PropertyKind,
    setter: Option<Setter>,
}

impl PropertyDescriptor {
    /// 规范属性名（小驼峰）
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 声明类型
    pub fn kind(&self) -> PropertyKind {
        self.kind
    }

    /// 是否可写
    pub fn is_writable(&self) -> bool {
        self.setter.is_some()
    }

    /// 将已转换的值写入实例
    pub(crate) fn assign(&self, target: &mut (dyn Any + Send), value: PropertyValue) -> DataSourceResult<()> {
        match &self.setter {
            Some(setter) => setter(target, value),
            None => Err(crate::ds_error!(assignment, &self.name, "属性只读，没有可用的 setter")),
        }
    }
}

impl fmt::Debug for PropertyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("writable", &self.is_writable())
            .finish()
    }
}

/// 数据源类型描述
#[derive(Clone)]
pub struct DataSourceDescriptor {
    type_name: String,
    aliases: Vec<String>,
    rust_type: &'static str,
    factory: Option<Factory>,
    properties: HashMap<String, PropertyDescriptor>,
}

impl DataSourceDescriptor {
    /// 为具体类型 `T` 创建描述构建器
    ///
    /// # 参数
    /// * `type_name` - 类型标识符，如 `org.apache.commons.dbcp.BasicDataSource`
    pub fn builder<T: Any + Send>(type_name: impl Into<String>) -> DataSourceDescriptorBuilder<T> {
        DataSourceDescriptorBuilder::new(type_name)
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// 实例对应的 Rust 类型名
    pub fn rust_type_name(&self) -> &'static str {
        self.rust_type
    }

    /// 没有工厂函数的类型只能解析，不能实例化
    pub fn is_abstract(&self) -> bool {
        self.factory.is_none()
    }

    /// 按规范名查找属性
    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.get(name)
    }

    /// 按名称排序的全部属性
    pub fn properties(&self) -> Vec<&PropertyDescriptor> {
        let mut properties: Vec<&PropertyDescriptor> = self.properties.values().collect();
        properties.sort_by(|a, b| a.name.cmp(&b.name));
        properties
    }

    /// 通过工厂函数创建默认实例
    pub fn instantiate(&self) -> DataSourceResult<DataSourceInstance> {
        let factory = self.factory.as_ref().ok_or_else(|| {
            crate::ds_error!(instantiation, &self.type_name, "抽象类型没有默认构造函数")
        })?;
        let inner = factory().map_err(|msg| crate::ds_error!(instantiation, &self.type_name, msg))?;
        Ok(DataSourceInstance::new(self.type_name.clone(), self.rust_type, inner))
    }
}

impl fmt::Debug for DataSourceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataSourceDescriptor")
            .field("type_name", &self.type_name)
            .field("aliases", &self.aliases)
            .field("rust_type", &self.rust_type)
            .field("abstract", &self.is_abstract())
            .field("properties", &self.properties())
            .finish()
    }
}

/// 数据源类型描述构建器
///
/// 属性 setter 直接接受方法路径，例如 `.string("url", BasicDataSource::set_url)`。
pub struct DataSourceDescriptorBuilder<T> {
    type_name: String,
    aliases: Vec<String>,
    factory: Option<Factory>,
    properties: HashMap<String, PropertyDescriptor>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Any + Send> DataSourceDescriptorBuilder<T> {
    /// 创建新的构建器
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            aliases: Vec::new(),
            factory: None,
            properties: HashMap::new(),
            _marker: PhantomData,
        }
    }

    /// 添加别名
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// 设置工厂函数
    pub fn factory<F, E>(mut self, factory: F) -> Self
    where
        F: Fn() -> Result<T, E> + Send + Sync + 'static,
        E: fmt::Display,
    {
        self.factory = Some(Arc::new(move || {
            factory()
                .map(|instance| Box::new(instance) as Box<dyn Any + Send>)
                .map_err(|e| e.to_string())
        }));
        self
    }

    /// 使用 `Default` 作为工厂函数
    pub fn default_factory(self) -> Self
    where
        T: Default,
    {
        self.factory(|| Ok::<T, std::convert::Infallible>(T::default()))
    }

    /// 字符串属性
    pub fn string<F, R>(self, name: &str, setter: F) -> Self
    where
        F: Fn(&mut T, String) -> R + Send + Sync + 'static,
        R: SetterOutcome,
    {
        self.typed(name, PropertyKind::String, |v| match v {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }, setter)
    }

    /// 布尔属性
    pub fn boolean<F, R>(self, name: &str, setter: F) -> Self
    where
        F: Fn(&mut T, bool) -> R + Send + Sync + 'static,
        R: SetterOutcome,
    {
        self.typed(name, PropertyKind::Bool, |v| v.as_bool(), setter)
    }

    /// 32 位整数属性
    pub fn int<F, R>(self, name: &str, setter: F) -> Self
    where
        F: Fn(&mut T, i32) -> R + Send + Sync + 'static,
        R: SetterOutcome,
    {
        self.typed(name, PropertyKind::Int, |v| v.as_int(), setter)
    }

    /// 64 位整数属性
    pub fn long<F, R>(self, name: &str, setter: F) -> Self
    where
        F: Fn(&mut T, i64) -> R + Send + Sync + 'static,
        R: SetterOutcome,
    {
        self.typed(name, PropertyKind::Long, |v| v.as_long(), setter)
    }

    /// 键值映射属性
    pub fn map<F, R>(self, name: &str, setter: F) -> Self
    where
        F: Fn(&mut T, HashMap<String, PropertyValue>) -> R + Send + Sync + 'static,
        R: SetterOutcome,
    {
        self.typed(name, PropertyKind::Map, |v| match v {
            PropertyValue::Map(map) => Some(map),
            _ => None,
        }, setter)
    }

    /// 任意类型属性，值原样传入
    pub fn any<F, R>(self, name: &str, setter: F) -> Self
    where
        F: Fn(&mut T, PropertyValue) -> R + Send + Sync + 'static,
        R: SetterOutcome,
    {
        self.typed(name, PropertyKind::Any, Some, setter)
    }

    /// 只读属性：可以被解析，但绑定时返回 AssignmentError
    pub fn read_only(mut self, name: &str, kind: PropertyKind) -> Self {
        let name = self.canonical_name(name);
        self.insert(PropertyDescriptor {
            name,
            kind,
            setter: None,
        });
        self
    }

    /// 完成构建
    pub fn build(self) -> DataSourceDescriptor {
        DataSourceDescriptor {
            type_name: self.type_name,
            aliases: self.aliases,
            rust_type: std::any::type_name::<T>(),
            factory: self.factory,
            properties: self.properties,
        }
    }

    fn typed<X, F, R>(
        mut self,
        name: &str,
        kind: PropertyKind,
        extract: fn(PropertyValue) -> Option<X>,
        setter: F,
    ) -> Self
    where
        X: 'static,
        F: Fn(&mut T, X) -> R + Send + Sync + 'static,
        R: SetterOutcome,
    {
        let property = self.canonical_name(name);
        let property_name = property.clone();
        let erased: Setter = Arc::new(move |target: &mut (dyn Any + Send), value: PropertyValue| {
            let target = target.downcast_mut::<T>().ok_or_else(|| {
                crate::ds_error!(
                    assignment,
                    &property,
                    format!("目标实例不是 {}", std::any::type_name::<T>())
                )
            })?;
            let found = value.kind();
            let value = extract(value)
                .ok_or_else(|| crate::ds_error!(type_mismatch, &property, kind, found))?;
            setter(target, value)
                .into_result()
                .map_err(|msg| crate::ds_error!(assignment, &property, msg))
        });

        self.insert(PropertyDescriptor {
            name: property_name,
            kind,
            setter: Some(erased),
        });
        self
    }

    /// 属性名按配置键的规则规范化
    fn canonical_name(&self, name: &str) -> String {
        let canonical = normalize_key(name).into_owned();
        if canonical != name {
            warn!("数据源 {} 的属性 {} 含连字符，按 {} 登记", self.type_name, name, canonical);
        }
        canonical
    }

    fn insert(&mut self, property: PropertyDescriptor) {
        if let Some(previous) = self.properties.insert(property.name.clone(), property) {
            warn!("数据源 {} 的属性 {} 被重复声明，使用最后一次声明", self.type_name, previous.name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DataSourceError;

    #[derive(Debug, Default)]
    struct Gauge {
        name: String,
        size: i32,
    }

    impl Gauge {
        fn set_size(&mut self, size: i32) -> Result<(), String> {
            if size < 0 {
                return Err(format!("size 不能为负数: {}", size));
            }
            self.size = size;
            Ok(())
        }
    }

    fn gauge_descriptor() -> DataSourceDescriptor {
        DataSourceDescriptor::builder::<Gauge>("test.Gauge")
            .alias("gauge")
            .default_factory()
            .string("name", |p: &mut Gauge, v| p.name = v)
            .int("size", Gauge::set_size)
            .read_only("active", PropertyKind::Int)
            .build()
    }

    #[test]
    fn test_descriptor_metadata() {
        let descriptor = gauge_descriptor();
        assert_eq!(descriptor.type_name(), "test.Gauge");
        assert_eq!(descriptor.aliases(), &["gauge".to_string()]);
        assert!(!descriptor.is_abstract());
        assert!(descriptor.rust_type_name().ends_with("Gauge"));

        let names: Vec<&str> = descriptor.properties().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["active", "name", "size"]);
        assert!(!descriptor.property("active").unwrap().is_writable());
        assert_eq!(descriptor.property("size").unwrap().kind(), PropertyKind::Int);
    }

    #[test]
    fn test_assign_through_erased_setter() {
        let descriptor = gauge_descriptor();
        let mut instance = descriptor.instantiate().unwrap();

        descriptor
            .property("name")
            .unwrap()
            .assign(instance.as_any_mut(), PropertyValue::from("primary"))
            .unwrap();
        descriptor
            .property("size")
            .unwrap()
            .assign(instance.as_any_mut(), PropertyValue::Int(8))
            .unwrap();

        let gauge = instance.downcast_ref::<Gauge>().unwrap();
        assert_eq!(gauge.name, "primary");
        assert_eq!(gauge.size, 8);
    }

    #[test]
    fn test_assignment_failures() {
        let descriptor = gauge_descriptor();
        let mut instance = descriptor.instantiate().unwrap();

        let err = descriptor
            .property("size")
            .unwrap()
            .assign(instance.as_any_mut(), PropertyValue::Int(-1))
            .unwrap_err();
        assert!(matches!(err, DataSourceError::AssignmentError { ref property, .. } if property == "size"));

        let err = descriptor
            .property("active")
            .unwrap()
            .assign(instance.as_any_mut(), PropertyValue::Int(1))
            .unwrap_err();
        assert!(matches!(err, DataSourceError::AssignmentError { .. }));
    }

    #[test]
    fn test_hyphenated_declarations_are_normalized() {
        let descriptor = DataSourceDescriptor::builder::<Gauge>("test.HyphenGauge")
            .default_factory()
            .string("gauge-name", |p: &mut Gauge, v| p.name = v)
            .read_only("active-count", PropertyKind::Int)
            .build();

        assert!(descriptor.property("gauge-name").is_none());
        assert!(descriptor.property("gaugeName").is_some());
        assert!(!descriptor.property("activeCount").unwrap().is_writable());

        let mut instance = descriptor.instantiate().unwrap();
        let err = descriptor
            .property("gaugeName")
            .unwrap()
            .assign(instance.as_any_mut(), PropertyValue::Int(1))
            .unwrap_err();
        assert!(matches!(err, DataSourceError::TypeMismatchError { ref property, .. } if property == "gaugeName"));
    }

    #[test]
    fn test_abstract_and_failing_factories() {
        let abstract_descriptor = DataSourceDescriptor::builder::<Gauge>("test.AbstractGauge").build();
        assert!(abstract_descriptor.is_abstract());
        let err = abstract_descriptor.instantiate().unwrap_err();
        assert!(matches!(err, DataSourceError::InstantiationError { .. }));

        let failing = DataSourceDescriptor::builder::<Gauge>("test.FailingGauge")
            .factory(|| Err::<Gauge, _>("构造函数抛出异常"))
            .build();
        let err = failing.instantiate().unwrap_err();
        assert!(matches!(err, DataSourceError::InstantiationError { ref type_name, .. } if type_name == "test.FailingGauge"));
    }
}
