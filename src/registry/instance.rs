//! 已构建的数据源实例
//!
//! 绑定器返回类型擦除的实例，调用方按需向下转型为具体的连接池类型，
//! 再通过该类型自身的访问器读取属性。

use crate::error::DataSourceResult;
use std::any::Any;
use std::fmt;

/// 类型擦除的数据源实例
pub struct DataSourceInstance {
    type_name: String,
    rust_type: &'static str,
    inner: Box<dyn Any + Send>,
}

impl DataSourceInstance {
    pub(crate) fn new(type_name: String, rust_type: &'static str, inner: Box<dyn Any + Send>) -> Self {
        Self {
            type_name,
            rust_type,
            inner,
        }
    }

    /// 注册表中的类型标识符
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// 实例的 Rust 类型名
    pub fn rust_type_name(&self) -> &'static str {
        self.rust_type
    }

    /// 判断实例是否为 `T`
    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.inner.downcast_mut::<T>()
    }

    /// 取出具体类型的实例
    ///
    /// 类型不符时返回 InstantiationError，实例随之丢弃
    pub fn downcast<T: Any>(self) -> DataSourceResult<T> {
        let Self { type_name, rust_type, inner } = self;
        inner.downcast::<T>().map(|boxed| *boxed).map_err(|_| {
            crate::ds_error!(
                instantiation,
                type_name,
                format!("实例类型为 {}，无法转换为 {}", rust_type, std::any::type_name::<T>())
            )
        })
    }

    /// 取出类型擦除的实例
    pub fn into_inner(self) -> Box<dyn Any + Send> {
        self.inner
    }

    pub(crate) fn as_any_mut(&mut self) -> &mut (dyn Any + Send) {
        self.inner.as_mut()
    }
}

impl fmt::Debug for DataSourceInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataSourceInstance")
            .field("type_name", &self.type_name)
            .field("rust_type", &self.rust_type)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DataSourceError;

    #[derive(Debug, PartialEq)]
    struct Marker(u8);

    fn instance() -> DataSourceInstance {
        DataSourceInstance::new("test.Marker".to_string(), "Marker", Box::new(Marker(7)))
    }

    #[test]
    fn test_downcast_success() {
        let mut instance = instance();
        assert!(instance.is::<Marker>());
        assert_eq!(instance.downcast_ref::<Marker>(), Some(&Marker(7)));
        instance.downcast_mut::<Marker>().unwrap().0 = 9;
        assert_eq!(instance.downcast::<Marker>().unwrap(), Marker(9));
    }

    #[test]
    fn test_downcast_wrong_type() {
        let instance = instance();
        assert!(!instance.is::<String>());
        assert!(instance.downcast_ref::<String>().is_none());
        let err = instance.downcast::<String>().unwrap_err();
        assert!(matches!(err, DataSourceError::InstantiationError { ref type_name, .. } if type_name == "test.Marker"));
    }
}
