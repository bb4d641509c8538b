use serde::{Deserialize, Serialize};

/// 数据源属性的声明类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyKind {
    /// 字符串
    String,
    /// 布尔值
    Bool,
    /// 32 位整数
    Int,
    /// 64 位整数
    Long,
    /// 键值映射（如驱动附加参数）
    Map,
    /// 可直接赋值的任意类型，值原样传给 setter
    Any,
}

impl PropertyKind {
    /// 获取类型名称
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyKind::String => "string",
            PropertyKind::Bool => "boolean",
            PropertyKind::Int => "int",
            PropertyKind::Long => "long",
            PropertyKind::Map => "map",
            PropertyKind::Any => "any",
        }
    }
}

impl std::fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
