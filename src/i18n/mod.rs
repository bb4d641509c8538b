//! 多语言错误消息模块
//!
//! 使用rat_embed_lang框架提供统一的错误消息多语言支持

use std::collections::HashMap;
use rat_embed_lang::register_translations;

/// 错误消息翻译注册器
pub struct ErrorMessageI18n;

impl ErrorMessageI18n {
    /// 注册所有错误消息翻译
    pub fn register_all_translations() {
        let mut translations = HashMap::new();

        // 类型解析失败
        let mut type_resolution_errors = HashMap::new();
        type_resolution_errors.insert("zh-CN".to_string(), "无法解析数据源类型: {type_name}".to_string());
        type_resolution_errors.insert("en-US".to_string(), "Cannot resolve data source type: {type_name}".to_string());
        type_resolution_errors.insert("ja-JP".to_string(), "データソース型を解決できません: {type_name}".to_string());
        translations.insert("error.type_resolution".to_string(), type_resolution_errors);

        // 实例化失败
        let mut instantiation_errors = HashMap::new();
        instantiation_errors.insert("zh-CN".to_string(), "数据源 {type_name} 实例化失败: {message}".to_string());
        instantiation_errors.insert("en-US".to_string(), "Failed to instantiate data source {type_name}: {message}".to_string());
        instantiation_errors.insert("ja-JP".to_string(), "データソース {type_name} のインスタンス化に失敗しました: {message}".to_string());
        translations.insert("error.instantiation".to_string(), instantiation_errors);

        // 类型不匹配
        let mut type_mismatch_errors = HashMap::new();
        type_mismatch_errors.insert("zh-CN".to_string(), "属性 {property} 需要 {expected} 类型，但收到 {actual}".to_string());
        type_mismatch_errors.insert("en-US".to_string(), "Property {property} expects {expected}, got {actual}".to_string());
        type_mismatch_errors.insert("ja-JP".to_string(), "プロパティ {property} は {expected} 型が必要ですが、{actual} を受け取りました".to_string());
        translations.insert("error.type_mismatch".to_string(), type_mismatch_errors);

        // 属性写入失败
        let mut assignment_errors = HashMap::new();
        assignment_errors.insert("zh-CN".to_string(), "属性 {property} 写入失败: {message}".to_string());
        assignment_errors.insert("en-US".to_string(), "Failed to assign property {property}: {message}".to_string());
        assignment_errors.insert("ja-JP".to_string(), "プロパティ {property} の書き込みに失敗しました: {message}".to_string());
        translations.insert("error.assignment".to_string(), assignment_errors);

        // 严格模式下的未知属性
        let mut unknown_property_errors = HashMap::new();
        unknown_property_errors.insert("zh-CN".to_string(), "数据源 {type_name} 没有属性 {property}".to_string());
        unknown_property_errors.insert("en-US".to_string(), "Data source {type_name} has no property {property}".to_string());
        unknown_property_errors.insert("ja-JP".to_string(), "データソース {type_name} にプロパティ {property} はありません".to_string());
        translations.insert("error.unknown_property".to_string(), unknown_property_errors);

        // 配置错误
        let mut config_errors = HashMap::new();
        config_errors.insert("zh-CN".to_string(), "配置错误: {message}".to_string());
        config_errors.insert("en-US".to_string(), "Configuration error: {message}".to_string());
        config_errors.insert("ja-JP".to_string(), "設定エラー: {message}".to_string());
        translations.insert("error.config".to_string(), config_errors);

        // 序列化错误
        let mut serialization_errors = HashMap::new();
        serialization_errors.insert("zh-CN".to_string(), "数据序列化失败: {message}".to_string());
        serialization_errors.insert("en-US".to_string(), "Data serialization failed: {message}".to_string());
        serialization_errors.insert("ja-JP".to_string(), "データシリアライズが失敗しました: {message}".to_string());
        translations.insert("error.serialization".to_string(), serialization_errors);

        // 注册所有翻译
        register_translations(translations);
    }

    /// 初始化错误消息多语言支持
    pub fn init() {
        Self::register_all_translations();

        // 从环境变量获取语言设置，默认为zh-CN
        let lang = std::env::var("RAT_LANG")
            .or_else(|_| std::env::var("LANG"))
            .unwrap_or_else(|_| "zh-CN".to_string());

        // 标准化语言代码
        use rat_embed_lang::normalize_language_code;
        let normalized_lang = normalize_language_code(&lang);
        set_language(&normalized_lang);
    }
}


/// 重新导出rat_embed_lang的核心函数
pub use rat_embed_lang::{t, tf, set_language, current_language};
