use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 配置值 - 数据源属性的任意类型输入
///
/// 整数区分 32 位与 64 位，对应连接池属性声明的 int / long。
/// Rust 中不存在装箱与原始类型之分，`Some(true)` 与 `true` 转换结果一致。
///
/// 序列化为不带标签的自然形式（`16`、`"sa"`、`{...}`），反序列化时按变体顺序尝试，
/// 能放进 i32 的整数得到 `Int`。
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// 空值
    Null,
    /// 布尔值
    Bool(bool),
    /// 32 位整数
    Int(i32),
    /// 64 位整数
    Long(i64),
    /// 浮点数
    Float(f64),
    /// 字符串
    String(String),
    /// 列表
    List(Vec<PropertyValue>),
    /// 键值映射
    Map(HashMap<String, PropertyValue>),
}

/// 配置值的运行时类型，用于错误信息与转换规则查表
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Long,
    Float,
    String,
    List,
    Map,
}

impl ValueKind {
    /// 获取类型名称
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Int => "int",
            ValueKind::Long => "long",
            ValueKind::Float => "float",
            ValueKind::String => "string",
            ValueKind::List => "list",
            ValueKind::Map => "map",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyValue::Null => write!(f, "null"),
            PropertyValue::Bool(b) => write!(f, "{}", b),
            PropertyValue::Int(i) => write!(f, "{}", i),
            PropertyValue::Long(l) => write!(f, "{}", l),
            PropertyValue::Float(fl) => write!(f, "{}", fl),
            PropertyValue::String(s) => write!(f, "{}", s),
            PropertyValue::List(_) | PropertyValue::Map(_) => {
                write!(f, "{}", self.to_json_value())
            }
        }
    }
}

impl std::fmt::Debug for PropertyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 字符串带引号，便于在日志里区分 "16" 与 16
        match self {
            PropertyValue::String(s) => write!(f, "{:?}", s),
            _ => write!(f, "{}", self),
        }
    }
}

impl PropertyValue {
    /// 获取运行时类型
    pub fn kind(&self) -> ValueKind {
        match self {
            PropertyValue::Null => ValueKind::Null,
            PropertyValue::Bool(_) => ValueKind::Bool,
            PropertyValue::Int(_) => ValueKind::Int,
            PropertyValue::Long(_) => ValueKind::Long,
            PropertyValue::Float(_) => ValueKind::Float,
            PropertyValue::String(_) => ValueKind::String,
            PropertyValue::List(_) => ValueKind::List,
            PropertyValue::Map(_) => ValueKind::Map,
        }
    }

    /// 获取类型名称
    pub fn type_name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// 判断是否为空值
    pub fn is_null(&self) -> bool {
        matches!(self, PropertyValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            PropertyValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_long(&self) -> Option<i64> {
        match self {
            PropertyValue::Long(l) => Some(*l),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&HashMap<String, PropertyValue>> {
        match self {
            PropertyValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// 转换为 JSON 值
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            PropertyValue::Null => serde_json::Value::Null,
            PropertyValue::Bool(b) => serde_json::Value::Bool(*b),
            PropertyValue::Int(i) => serde_json::Value::Number(serde_json::Number::from(*i)),
            PropertyValue::Long(l) => serde_json::Value::Number(serde_json::Number::from(*l)),
            PropertyValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            PropertyValue::String(s) => serde_json::Value::String(s.clone()),
            PropertyValue::List(items) => {
                serde_json::Value::Array(items.iter().map(|item| item.to_json_value()).collect())
            }
            PropertyValue::Map(map) => {
                let object: serde_json::Map<String, serde_json::Value> = map
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json_value()))
                    .collect();
                serde_json::Value::Object(object)
            }
        }
    }
}

/// 将 serde_json::Value 转换为对应的 PropertyValue
///
/// 能放进 i32 的整数视为 Int，其余 i64 范围内的整数视为 Long，
/// 超出 i64 的数字按浮点处理
pub fn json_value_to_property_value(value: serde_json::Value) -> PropertyValue {
    match value {
        serde_json::Value::Null => PropertyValue::Null,
        serde_json::Value::Bool(b) => PropertyValue::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                match i32::try_from(i) {
                    Ok(small) => PropertyValue::Int(small),
                    Err(_) => PropertyValue::Long(i),
                }
            } else {
                PropertyValue::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        serde_json::Value::String(s) => PropertyValue::String(s),
        serde_json::Value::Array(arr) => {
            PropertyValue::List(arr.into_iter().map(json_value_to_property_value).collect())
        }
        serde_json::Value::Object(obj) => PropertyValue::Map(
            obj.into_iter()
                .map(|(k, v)| (k, json_value_to_property_value(v)))
                .collect(),
        ),
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        PropertyValue::Int(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Long(value)
    }
}

impl From<u32> for PropertyValue {
    fn from(value: u32) -> Self {
        PropertyValue::Long(value as i64)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Float(value)
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<Vec<PropertyValue>> for PropertyValue {
    fn from(value: Vec<PropertyValue>) -> Self {
        PropertyValue::List(value)
    }
}

impl From<HashMap<String, PropertyValue>> for PropertyValue {
    fn from(value: HashMap<String, PropertyValue>) -> Self {
        PropertyValue::Map(value)
    }
}

impl From<serde_json::Value> for PropertyValue {
    fn from(value: serde_json::Value) -> Self {
        json_value_to_property_value(value)
    }
}

impl<T> From<Option<T>> for PropertyValue
where
    T: Into<PropertyValue>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => PropertyValue::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_number_width() {
        assert_eq!(json_value_to_property_value(json!(16)), PropertyValue::Int(16));
        assert_eq!(json_value_to_property_value(json!(-13)), PropertyValue::Int(-13));
        assert_eq!(
            json_value_to_property_value(json!(4_000_000_000i64)),
            PropertyValue::Long(4_000_000_000)
        );
        assert_eq!(json_value_to_property_value(json!(1.5)), PropertyValue::Float(1.5));
    }

    #[test]
    fn test_json_nested_values() {
        let value = json_value_to_property_value(json!({
            "cachePrepStmts": "true",
            "hosts": ["a", "b"],
            "missing": null
        }));
        let map = value.as_map().expect("应为 Map");
        assert_eq!(map.get("cachePrepStmts"), Some(&PropertyValue::from("true")));
        assert_eq!(
            map.get("hosts"),
            Some(&PropertyValue::List(vec!["a".into(), "b".into()]))
        );
        assert_eq!(map.get("missing"), Some(&PropertyValue::Null));
    }

    #[test]
    fn test_boxed_and_plain_forms_match() {
        assert_eq!(PropertyValue::from(Some(true)), PropertyValue::from(true));
        assert_eq!(PropertyValue::from(Some(4i32)), PropertyValue::Int(4));
        assert_eq!(PropertyValue::from(None::<i64>), PropertyValue::Null);
        assert_eq!(PropertyValue::from(7u32), PropertyValue::Long(7));
    }

    #[test]
    fn test_serde_uses_plain_values() {
        assert_eq!(serde_json::from_str::<PropertyValue>("16").unwrap(), PropertyValue::Int(16));
        assert_eq!(serde_json::from_str::<PropertyValue>("-13").unwrap(), PropertyValue::Int(-13));
        assert_eq!(
            serde_json::from_str::<PropertyValue>("5000000000").unwrap(),
            PropertyValue::Long(5_000_000_000)
        );
        assert_eq!(serde_json::from_str::<PropertyValue>("1.5").unwrap(), PropertyValue::Float(1.5));
        assert_eq!(serde_json::from_str::<PropertyValue>("true").unwrap(), PropertyValue::Bool(true));
        assert_eq!(serde_json::from_str::<PropertyValue>("null").unwrap(), PropertyValue::Null);
        assert_eq!(serde_json::from_str::<PropertyValue>("\"sa\"").unwrap(), PropertyValue::from("sa"));

        assert_eq!(serde_json::to_string(&PropertyValue::Int(16)).unwrap(), "16");
        assert_eq!(serde_json::to_string(&PropertyValue::Long(1304)).unwrap(), "1304");
        assert_eq!(serde_json::to_string(&PropertyValue::from("sa")).unwrap(), "\"sa\"");
        assert_eq!(serde_json::to_string(&PropertyValue::Null).unwrap(), "null");
    }

    #[test]
    fn test_kind_and_display() {
        assert_eq!(PropertyValue::Long(1304).kind(), ValueKind::Long);
        assert_eq!(PropertyValue::from("sa").type_name(), "string");
        assert_eq!(PropertyValue::Int(-13).to_string(), "-13");
        assert_eq!(format!("{:?}", PropertyValue::from("16")), "\"16\"");
    }
}
