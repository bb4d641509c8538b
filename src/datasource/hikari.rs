//! HikariCP 风格的数据源
//!
//! 部分 setter 会校验取值，非法值在绑定时表现为 AssignmentError。

use crate::registry::DataSourceDescriptor;
use crate::types::PropertyValue;
use std::collections::HashMap;
use thiserror::Error;

/// 类型标识符
pub const HIKARI_DATA_SOURCE: &str = "com.zaxxer.hikari.HikariDataSource";

/// connectionTimeout 允许的最小值（毫秒）
pub const MIN_CONNECTION_TIMEOUT_MS: i64 = 250;

/// Hikari 配置校验错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HikariConfigError {
    #[error("connectionTimeout 不能小于 250ms: {0}")]
    ConnectionTimeoutTooSmall(i64),
    #[error("idleTimeout 不能为负数: {0}")]
    NegativeIdleTimeout(i64),
    #[error("maximumPoolSize 不能小于 1: {0}")]
    PoolSizeTooSmall(i32),
    #[error("minimumIdle 不能为负数: {0}")]
    NegativeMinimumIdle(i32),
}

/// HikariCP 风格的数据源配置
#[derive(Debug, Clone, PartialEq)]
pub struct HikariDataSource {
    driver_class_name: Option<String>,
    jdbc_url: Option<String>,
    username: Option<String>,
    password: Option<String>,
    pool_name: Option<String>,
    connection_test_query: Option<String>,
    auto_commit: bool,
    read_only: bool,
    maximum_pool_size: i32,
    minimum_idle: Option<i32>,
    connection_timeout: i64,
    idle_timeout: i64,
    max_lifetime: i64,
    data_source_properties: HashMap<String, PropertyValue>,
}

impl Default for HikariDataSource {
    fn default() -> Self {
        Self {
            driver_class_name: None,
            jdbc_url: None,
            username: None,
            password: None,
            pool_name: None,
            connection_test_query: None,
            auto_commit: true,
            read_only: false,
            maximum_pool_size: 10,
            minimum_idle: None,
            connection_timeout: 30_000,
            idle_timeout: 600_000,
            max_lifetime: 1_800_000,
            data_source_properties: HashMap::new(),
        }
    }
}

impl HikariDataSource {
    pub fn driver_class_name(&self) -> Option<&str> {
        self.driver_class_name.as_deref()
    }

    pub fn set_driver_class_name(&mut self, driver_class_name: String) {
        self.driver_class_name = Some(driver_class_name);
    }

    pub fn jdbc_url(&self) -> Option<&str> {
        self.jdbc_url.as_deref()
    }

    pub fn set_jdbc_url(&mut self, jdbc_url: String) {
        self.jdbc_url = Some(jdbc_url);
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn set_username(&mut self, username: String) {
        self.username = Some(username);
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn set_password(&mut self, password: String) {
        self.password = Some(password);
    }

    pub fn pool_name(&self) -> Option<&str> {
        self.pool_name.as_deref()
    }

    pub fn set_pool_name(&mut self, pool_name: String) {
        self.pool_name = Some(pool_name);
    }

    pub fn connection_test_query(&self) -> Option<&str> {
        self.connection_test_query.as_deref()
    }

    pub fn set_connection_test_query(&mut self, query: String) {
        self.connection_test_query = Some(query);
    }

    pub fn is_auto_commit(&self) -> bool {
        self.auto_commit
    }

    pub fn set_auto_commit(&mut self, auto_commit: bool) {
        self.auto_commit = auto_commit;
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn maximum_pool_size(&self) -> i32 {
        self.maximum_pool_size
    }

    pub fn set_maximum_pool_size(&mut self, size: i32) -> Result<(), HikariConfigError> {
        if size < 1 {
            return Err(HikariConfigError::PoolSizeTooSmall(size));
        }
        self.maximum_pool_size = size;
        Ok(())
    }

    /// 未设置时等于 maximumPoolSize
    pub fn minimum_idle(&self) -> i32 {
        self.minimum_idle.unwrap_or(self.maximum_pool_size)
    }

    pub fn set_minimum_idle(&mut self, minimum_idle: i32) -> Result<(), HikariConfigError> {
        if minimum_idle < 0 {
            return Err(HikariConfigError::NegativeMinimumIdle(minimum_idle));
        }
        self.minimum_idle = Some(minimum_idle);
        Ok(())
    }

    pub fn connection_timeout(&self) -> i64 {
        self.connection_timeout
    }

    /// 设置获取连接的超时时间（毫秒）
    ///
    /// 0 表示不限时，内部记为 `i32::MAX`
    pub fn set_connection_timeout(&mut self, millis: i64) -> Result<(), HikariConfigError> {
        if millis == 0 {
            self.connection_timeout = i64::from(i32::MAX);
            return Ok(());
        }
        if millis < MIN_CONNECTION_TIMEOUT_MS {
            return Err(HikariConfigError::ConnectionTimeoutTooSmall(millis));
        }
        self.connection_timeout = millis;
        Ok(())
    }

    pub fn idle_timeout(&self) -> i64 {
        self.idle_timeout
    }

    pub fn set_idle_timeout(&mut self, millis: i64) -> Result<(), HikariConfigError> {
        if millis < 0 {
            return Err(HikariConfigError::NegativeIdleTimeout(millis));
        }
        self.idle_timeout = millis;
        Ok(())
    }

    pub fn max_lifetime(&self) -> i64 {
        self.max_lifetime
    }

    pub fn set_max_lifetime(&mut self, millis: i64) {
        self.max_lifetime = millis;
    }

    /// 传给驱动的附加属性
    pub fn data_source_properties(&self) -> &HashMap<String, PropertyValue> {
        &self.data_source_properties
    }

    /// 合并附加属性，已有的键被覆盖
    pub fn set_data_source_properties(&mut self, properties: HashMap<String, PropertyValue>) {
        self.data_source_properties.extend(properties);
    }

    pub fn add_data_source_property(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.data_source_properties.insert(key.into(), value.into());
    }

    /// 注册表使用的类型描述
    pub fn descriptor() -> DataSourceDescriptor {
        DataSourceDescriptor::builder::<HikariDataSource>(HIKARI_DATA_SOURCE)
            .alias("hikari")
            .default_factory()
            .string("driverClassName", Self::set_driver_class_name)
            .string("jdbcUrl", Self::set_jdbc_url)
            .string("username", Self::set_username)
            .string("password", Self::set_password)
            .string("poolName", Self::set_pool_name)
            .string("connectionTestQuery", Self::set_connection_test_query)
            .boolean("autoCommit", Self::set_auto_commit)
            .boolean("readOnly", Self::set_read_only)
            .int("maximumPoolSize", Self::set_maximum_pool_size)
            .int("minimumIdle", Self::set_minimum_idle)
            .long("connectionTimeout", Self::set_connection_timeout)
            .long("idleTimeout", Self::set_idle_timeout)
            .long("maxLifetime", Self::set_max_lifetime)
            .map("dataSourceProperties", Self::set_data_source_properties)
            .build()
    }
}
