//! 数据源配置映射
//!
//! 键为原始配置名（驼峰或连字符形式），值为任意类型的 [`PropertyValue`]。

use crate::error::DataSourceResult;
use crate::types::property_value::{json_value_to_property_value, PropertyValue};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// 数据源配置映射
///
/// 内部按键排序存储，遍历顺序稳定；绑定结果与插入顺序无关。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataSourceProperties {
    inner: BTreeMap<String, PropertyValue>,
}

impl DataSourceProperties {
    /// 创建空映射
    pub fn new() -> Self {
        Self::default()
    }

    /// 链式添加配置项
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.inner.insert(key.into(), value.into());
        self
    }

    /// 插入配置项，返回同名键的旧值
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Option<PropertyValue> {
        self.inner.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.inner.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// 按键顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// 从 JSON 对象转换
    ///
    /// 顶层必须是对象，值按 [`json_value_to_property_value`] 规则转换
    pub fn from_json_value(value: serde_json::Value) -> DataSourceResult<Self> {
        match value {
            serde_json::Value::Object(obj) => Ok(obj
                .into_iter()
                .map(|(k, v)| (k, json_value_to_property_value(v)))
                .collect()),
            other => Err(crate::ds_error!(
                serialization,
                format!("数据源配置必须是 JSON 对象，但收到: {}", other)
            )),
        }
    }

    /// 从 JSON 字符串解析
    pub fn from_json_str(json: &str) -> DataSourceResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_json_value(value)
    }

    /// 从 TOML 字符串解析，表会成为 Map 值
    pub fn from_toml_str(content: &str) -> DataSourceResult<Self> {
        toml::from_str(content)
            .map_err(|e| crate::ds_error!(serialization, format!("解析TOML数据源配置失败: {}", e)))
    }
}

impl<K, V> FromIterator<(K, V)> for DataSourceProperties
where
    K: Into<String>,
    V: Into<PropertyValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            inner: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<HashMap<String, PropertyValue>> for DataSourceProperties {
    fn from(map: HashMap<String, PropertyValue>) -> Self {
        map.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a DataSourceProperties {
    type Item = (&'a String, &'a PropertyValue);
    type IntoIter = std::collections::btree_map::Iter<'a, String, PropertyValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
