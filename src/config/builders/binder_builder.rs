//! # 绑定器配置构建器模块
//!
//! 提供绑定器配置的构建器实现，支持链式调用和严格验证

use crate::binder::coercion::CoercionPolicy;
use crate::config::core::{BinderConfig, UnknownKeyPolicy};
use crate::error::DataSourceError;
use rat_logger::info;

/// 绑定器配置构建器
///
/// 严格要求所有配置项必须显式设置
#[derive(Debug)]
pub struct BinderConfigBuilder {
    unknown_keys: Option<UnknownKeyPolicy>,
    coercion: Option<CoercionPolicy>,
}

impl BinderConfigBuilder {
    /// 创建新的构建器
    pub fn new() -> Self {
        Self {
            unknown_keys: None,
            coercion: None,
        }
    }

    /// 设置未知配置键的处理方式
    ///
    /// # 参数
    ///
    /// * `policy` - 未知配置键的处理方式
    pub fn unknown_keys(mut self, policy: UnknownKeyPolicy) -> Self {
        self.unknown_keys = Some(policy);
        self
    }

    /// 设置类型转换策略
    ///
    /// # 参数
    ///
    /// * `policy` - 类型转换策略
    pub fn coercion(mut self, policy: CoercionPolicy) -> Self {
        self.coercion = Some(policy);
        self
    }

    /// 构建绑定器配置
    ///
    /// # 错误
    ///
    /// 如果任何必需的配置项未设置，将返回错误
    pub fn build(self) -> Result<BinderConfig, DataSourceError> {
        let unknown_keys = self.unknown_keys.ok_or_else(|| {
            crate::ds_error!(config, "未知配置键处理方式必须设置")
        })?;

        let coercion = self.coercion.ok_or_else(|| {
            crate::ds_error!(config, "类型转换策略必须设置")
        })?;

        info!("创建绑定器配置: 未知键={:?}, 类型转换={:?}", unknown_keys, coercion);

        Ok(BinderConfig {
            unknown_keys,
            coercion,
        })
    }
}

impl Default for BinderConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
