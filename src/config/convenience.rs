//! # 便利配置函数模块
//!
//! 提供常用绑定器配置组合

use crate::binder::coercion::CoercionPolicy;
use crate::config::core::{BinderConfig, UnknownKeyPolicy};

/// 严格配置：拒绝未知键，只做精确类型转换
pub fn strict_binder_config() -> BinderConfig {
    BinderConfig {
        unknown_keys: UnknownKeyPolicy::Reject,
        coercion: CoercionPolicy::Exact,
    }
}

/// 宽松配置：跳过未知键，允许字符串与标量互转
///
/// 适合配置值全部以字符串形式给出的场景（如环境变量）
pub fn lenient_binder_config() -> BinderConfig {
    BinderConfig {
        unknown_keys: UnknownKeyPolicy::Ignore,
        coercion: CoercionPolicy::Lenient,
    }
}
