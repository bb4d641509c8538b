//! 配置值类型转换
//!
//! 转换规则以 (值类型, 声明类型) 为键显式查表，不依赖任何隐式转换。
//! `Exact` 策略只包含布尔、整数宽化/收窄与字符串原样赋值；
//! `Lenient` 策略额外允许字符串解析为布尔/整数，以及标量转为字符串。

use crate::error::DataSourceResult;
use crate::types::{PropertyKind, PropertyValue, ValueKind};
use serde::{Deserialize, Serialize};

/// 类型转换策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CoercionPolicy {
    /// 仅允许精确匹配及整数宽化/收窄
    #[default]
    Exact,
    /// 额外允许字符串与标量之间互相转换
    Lenient,
}

/// 单条转换规则
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoercionRule {
    /// 原样赋值
    Identity,
    /// Int -> Long
    WidenToLong,
    /// Long -> Int，超出 i32 范围视为类型不匹配
    NarrowToInt,
    /// "true"/"false" -> Bool
    ParseBool,
    /// 十进制字符串 -> Int
    ParseInt,
    /// 十进制字符串 -> Long
    ParseLong,
    /// 标量 -> String
    Stringify,
}

const EXACT_RULES: &[(ValueKind, PropertyKind, CoercionRule)] = &[
    (ValueKind::Bool, PropertyKind::Bool, CoercionRule::Identity),
    (ValueKind::Int, PropertyKind::Int, CoercionRule::Identity),
    (ValueKind::Long, PropertyKind::Int, CoercionRule::NarrowToInt),
    (ValueKind::Int, PropertyKind::Long, CoercionRule::WidenToLong),
    (ValueKind::Long, PropertyKind::Long, CoercionRule::Identity),
    (ValueKind::String, PropertyKind::String, CoercionRule::Identity),
    (ValueKind::Map, PropertyKind::Map, CoercionRule::Identity),
];

const LENIENT_RULES: &[(ValueKind, PropertyKind, CoercionRule)] = &[
    (ValueKind::String, PropertyKind::Bool, CoercionRule::ParseBool),
    (ValueKind::String, PropertyKind::Int, CoercionRule::ParseInt),
    (ValueKind::String, PropertyKind::Long, CoercionRule::ParseLong),
    (ValueKind::Bool, PropertyKind::String, CoercionRule::Stringify),
    (ValueKind::Int, PropertyKind::String, CoercionRule::Stringify),
    (ValueKind::Long, PropertyKind::String, CoercionRule::Stringify),
    (ValueKind::Float, PropertyKind::String, CoercionRule::Stringify),
];

/// 查找 (值类型, 声明类型) 对应的转换规则
pub fn coercion_rule(
    source: ValueKind,
    target: PropertyKind,
    policy: CoercionPolicy,
) -> Option<CoercionRule> {
    if target == PropertyKind::Any {
        return Some(CoercionRule::Identity);
    }

    let lookup = |table: &[(ValueKind, PropertyKind, CoercionRule)]| {
        table
            .iter()
            .find(|(s, t, _)| *s == source && *t == target)
            .map(|(_, _, rule)| *rule)
    };

    match policy {
        CoercionPolicy::Exact => lookup(EXACT_RULES),
        CoercionPolicy::Lenient => lookup(EXACT_RULES).or_else(|| lookup(LENIENT_RULES)),
    }
}

/// 将配置值转换为属性声明类型
///
/// # 参数
/// * `property` - 规范化后的属性名，仅用于错误信息
/// * `value` - 原始配置值
/// * `target` - 属性声明类型
/// * `policy` - 转换策略
///
/// # 返回值
/// * `Ok(PropertyValue)` - 与声明类型一致的值
/// * `Err(TypeMismatchError)` - 没有可用规则，或规则执行失败（收窄溢出、解析失败）
pub fn coerce(
    property: &str,
    value: &PropertyValue,
    target: PropertyKind,
    policy: CoercionPolicy,
) -> DataSourceResult<PropertyValue> {
    let source = value.kind();
    let mismatch = || crate::ds_error!(type_mismatch, property, target, source);

    let rule = coercion_rule(source, target, policy).ok_or_else(mismatch)?;

    let coerced = match (rule, value) {
        (CoercionRule::Identity, v) => Some(v.clone()),
        (CoercionRule::WidenToLong, PropertyValue::Int(i)) => Some(PropertyValue::Long(*i as i64)),
        (CoercionRule::NarrowToInt, PropertyValue::Long(l)) => {
            i32::try_from(*l).ok().map(PropertyValue::Int)
        }
        (CoercionRule::ParseBool, PropertyValue::String(s)) => {
            let s = s.trim();
            if s.eq_ignore_ascii_case("true") {
                Some(PropertyValue::Bool(true))
            } else if s.eq_ignore_ascii_case("false") {
                Some(PropertyValue::Bool(false))
            } else {
                None
            }
        }
        (CoercionRule::ParseInt, PropertyValue::String(s)) => {
            s.trim().parse::<i32>().ok().map(PropertyValue::Int)
        }
        (CoercionRule::ParseLong, PropertyValue::String(s)) => {
            s.trim().parse::<i64>().ok().map(PropertyValue::Long)
        }
        (CoercionRule::Stringify, v) => Some(PropertyValue::String(v.to_string())),
        _ => None,
    };

    coerced.ok_or_else(mismatch)
}
