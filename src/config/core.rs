//! # 配置管理模块 - 核心配置类型
//!
//! 绑定器自身的行为配置：未知配置键的处理方式与类型转换策略

use crate::binder::coercion::CoercionPolicy;
use crate::error::DataSourceResult;
use serde::{Deserialize, Serialize};
use rat_logger::info;

/// 未知配置键的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UnknownKeyPolicy {
    /// 静默跳过
    #[default]
    Ignore,
    /// 返回 UnknownPropertyError
    Reject,
}

/// 绑定器配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BinderConfig {
    /// 未知配置键的处理方式
    pub unknown_keys: UnknownKeyPolicy,
    /// 类型转换策略
    pub coercion: CoercionPolicy,
}

impl BinderConfig {
    /// 创建绑定器配置构建器
    pub fn builder() -> super::builders::BinderConfigBuilder {
        super::builders::BinderConfigBuilder::new()
    }

    /// 从 TOML 字符串解析配置
    ///
    /// # 参数
    ///
    /// * `content` - 已读取的 TOML 文本
    pub fn from_toml_str(content: &str) -> DataSourceResult<Self> {
        let config: BinderConfig = toml::from_str(content)
            .map_err(|e| crate::ds_error!(config, format!("解析TOML绑定器配置失败: {}", e)))?;
        info!("加载绑定器配置: {:?}", config);
        Ok(config)
    }

    /// 从 JSON 字符串解析配置
    ///
    /// # 参数
    ///
    /// * `content` - 已读取的 JSON 文本
    pub fn from_json_str(content: &str) -> DataSourceResult<Self> {
        let config: BinderConfig = serde_json::from_str(content)
            .map_err(|e| crate::ds_error!(config, format!("解析JSON绑定器配置失败: {}", e)))?;
        info!("加载绑定器配置: {:?}", config);
        Ok(config)
    }

    /// 序列化为 TOML 字符串
    pub fn to_toml_string(&self) -> DataSourceResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| crate::ds_error!(config, format!("序列化TOML绑定器配置失败: {}", e)))
    }
}
