//! DBCP 风格的基础数据源
//!
//! 只保存配置，不实现连接池本身。默认值与 Commons DBCP 1.x 一致。

use crate::registry::DataSourceDescriptor;
use crate::types::PropertyKind;

/// 类型标识符
pub const BASIC_DATA_SOURCE: &str = "org.apache.commons.dbcp.BasicDataSource";

/// 未设置事务隔离级别
pub const UNKNOWN_TRANSACTION_ISOLATION: i32 = -1;

/// DBCP 风格的基础数据源配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicDataSource {
    driver_class_name: Option<String>,
    url: Option<String>,
    username: Option<String>,
    password: Option<String>,
    validation_query: Option<String>,
    default_auto_commit: bool,
    default_read_only: Option<bool>,
    default_transaction_isolation: i32,
    pool_prepared_statements: bool,
    max_open_prepared_statements: i32,
    test_on_borrow: bool,
    test_on_return: bool,
    test_while_idle: bool,
    access_to_underlying_connection_allowed: bool,
    max_active: i32,
    max_idle: i32,
    min_idle: i32,
    initial_size: i32,
    num_tests_per_eviction_run: i32,
    max_wait: i64,
    time_between_eviction_runs_millis: i64,
    min_evictable_idle_time_millis: i64,
}

impl Default for BasicDataSource {
    fn default() -> Self {
        Self {
            driver_class_name: None,
            url: None,
            username: None,
            password: None,
            validation_query: None,
            default_auto_commit: true,
            default_read_only: None,
            default_transaction_isolation: UNKNOWN_TRANSACTION_ISOLATION,
            pool_prepared_statements: false,
            max_open_prepared_statements: -1,
            test_on_borrow: true,
            test_on_return: false,
            test_while_idle: false,
            access_to_underlying_connection_allowed: false,
            max_active: 8,
            max_idle: 8,
            min_idle: 0,
            initial_size: 0,
            num_tests_per_eviction_run: 3,
            max_wait: -1,
            time_between_eviction_runs_millis: -1,
            min_evictable_idle_time_millis: 1000 * 60 * 30,
        }
    }
}

impl BasicDataSource {
    pub fn driver_class_name(&self) -> Option<&str> {
        self.driver_class_name.as_deref()
    }

    pub fn set_driver_class_name(&mut self, driver_class_name: String) {
        self.driver_class_name = Some(driver_class_name);
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn set_url(&mut self, url: String) {
        self.url = Some(url);
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

    pub fn validation_query(&self) -> Option<&str> {
        self.validation_query.as_deref()
    }

    pub fn set_validation_query(&mut self, validation_query: String) {
        self.validation_query = Some(validation_query);
    }

    pub fn default_auto_commit(&self) -> bool {
        self.default_auto_commit
    }

    pub fn set_default_auto_commit(&mut self, default_auto_commit: bool) {
        self.default_auto_commit = default_auto_commit;
    }

    /// 未设置时由驱动决定
    pub fn default_read_only(&self) -> Option<bool> {
        self.default_read_only
    }

    pub fn set_default_read_only(&mut self, default_read_only: bool) {
        self.default_read_only = Some(default_read_only);
    }

    pub fn default_transaction_isolation(&self) -> i32 {
        self.default_transaction_isolation
    }

    pub fn set_default_transaction_isolation(&mut self, level: i32) {
        self.default_transaction_isolation = level;
    }

    pub fn is_pool_prepared_statements(&self) -> bool {
        self.pool_prepared_statements
    }

    pub fn set_pool_prepared_statements(&mut self, pool_prepared_statements: bool) {
        self.pool_prepared_statements = pool_prepared_statements;
    }

    pub fn max_open_prepared_statements(&self) -> i32 {
        self.max_open_prepared_statements
    }

    pub fn set_max_open_prepared_statements(&mut self, max: i32) {
        self.max_open_prepared_statements = max;
    }

    pub fn test_on_borrow(&self) -> bool {
        self.test_on_borrow
    }

    pub fn set_test_on_borrow(&mut self, test_on_borrow: bool) {
        self.test_on_borrow = test_on_borrow;
    }

    pub fn test_on_return(&self) -> bool {
        self.test_on_return
    }

    pub fn set_test_on_return(&mut self, test_on_return: bool) {
        self.test_on_return = test_on_return;
    }

    pub fn test_while_idle(&self) -> bool {
        self.test_while_idle
    }

    pub fn set_test_while_idle(&mut self, test_while_idle: bool) {
        self.test_while_idle = test_while_idle;
    }

    pub fn is_access_to_underlying_connection_allowed(&self) -> bool {
        self.access_to_underlying_connection_allowed
    }

    pub fn set_access_to_underlying_connection_allowed(&mut self, allowed: bool) {
        self.access_to_underlying_connection_allowed = allowed;
    }

    pub fn max_active(&self) -> i32 {
        self.max_active
    }

    pub fn set_max_active(&mut self, max_active: i32) {
        self.max_active = max_active;
    }

    pub fn max_idle(&self) -> i32 {
        self.max_idle
    }

    pub fn set_max_idle(&mut self, max_idle: i32) {
        self.max_idle = max_idle;
    }

    pub fn min_idle(&self) -> i32 {
        self.min_idle
    }

    pub fn set_min_idle(&mut self, min_idle: i32) {
        self.min_idle = min_idle;
    }

    pub fn initial_size(&self) -> i32 {
        self.initial_size
    }

    pub fn set_initial_size(&mut self, initial_size: i32) {
        self.initial_size = initial_size;
    }

    pub fn num_tests_per_eviction_run(&self) -> i32 {
        self.num_tests_per_eviction_run
    }

    pub fn set_num_tests_per_eviction_run(&mut self, num: i32) {
        self.num_tests_per_eviction_run = num;
    }

    /// 获取连接的最长等待时间（毫秒），-1 表示无限等待
    pub fn max_wait(&self) -> i64 {
        self.max_wait
    }

    pub fn set_max_wait(&mut self, max_wait: i64) {
        self.max_wait = max_wait;
    }

    pub fn time_between_eviction_runs_millis(&self) -> i64 {
        self.time_between_eviction_runs_millis
    }

    pub fn set_time_between_eviction_runs_millis(&mut self, millis: i64) {
        self.time_between_eviction_runs_millis = millis;
    }

    pub fn min_evictable_idle_time_millis(&self) -> i64 {
        self.min_evictable_idle_time_millis
    }

    pub fn set_min_evictable_idle_time_millis(&mut self, millis: i64) {
        self.min_evictable_idle_time_millis = millis;
    }

    /// 当前活动连接数；这里没有真实连接池，始终为 0
    pub fn num_active(&self) -> i32 {
        0
    }

    /// 注册表使用的类型描述
    pub fn descriptor() -> DataSourceDescriptor {
        DataSourceDescriptor::builder::<BasicDataSource>(BASIC_DATA_SOURCE)
            .alias("dbcp")
            .default_factory()
            .string("driverClassName", Self::set_driver_class_name)
            .string("url", Self::set_url)
            .string("username", Self::set_username)
            .string("password", Self::set_password)
            .string("validationQuery", Self::set_validation_query)
            .boolean("defaultAutoCommit", Self::set_default_auto_commit)
            .boolean("defaultReadOnly", Self::set_default_read_only)
            .boolean("poolPreparedStatements", Self::set_pool_prepared_statements)
            .boolean("testOnBorrow", Self::set_test_on_borrow)
            .boolean("testOnReturn", Self::set_test_on_return)
            .boolean("testWhileIdle", Self::set_test_while_idle)
            .boolean("accessToUnderlyingConnectionAllowed", Self::set_access_to_underlying_connection_allowed)
            .int("defaultTransactionIsolation", Self::set_default_transaction_isolation)
            .int("maxActive", Self::set_max_active)
            .int("maxIdle", Self::set_max_idle)
            .int("minIdle", Self::set_min_idle)
            .int("initialSize", Self::set_initial_size)
            .int("maxOpenPreparedStatements", Self::set_max_open_prepared_statements)
            .int("numTestsPerEvictionRun", Self::set_num_tests_per_eviction_run)
            .long("maxWait", Self::set_max_wait)
            .long("timeBetweenEvictionRunsMillis", Self::set_time_between_eviction_runs_millis)
            .long("minEvictableIdleTimeMillis", Self::set_min_evictable_idle_time_millis)
            .read_only("numActive", PropertyKind::Int)
            .build()
    }
}
