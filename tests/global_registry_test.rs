//! 全局注册表与绑定器配置测试

use rat_datasource::{
    get_data_source_as, get_data_source_with, register_data_source, registered_type_names,
    unregister_data_source, BasicDataSource, BinderConfig, CoercionPolicy, DataSourceDescriptor,
    DataSourceError, DataSourceProperties, HikariDataSource, PropertyBinder, UnknownKeyPolicy,
    BASIC_DATA_SOURCE, HIKARI_DATA_SOURCE,
};
use std::thread;

#[derive(Debug, Default, PartialEq)]
struct ShardPool {
    name: String,
    weight: i32,
    enabled: bool,
}

impl ShardPool {
    fn set_weight(&mut self, weight: i32) -> Result<(), String> {
        if weight < 0 {
            return Err(format!("weight 不能为负数: {}", weight));
        }
        self.weight = weight;
        Ok(())
    }
}

#[test]
fn test_builtin_pools_present() {
    let names = registered_type_names();
    assert!(names.contains(&BASIC_DATA_SOURCE.to_string()));
    assert!(names.contains(&HIKARI_DATA_SOURCE.to_string()));
}

#[test]
fn test_concurrent_binding_is_independent() {
    let handles: Vec<_> = (0..8i32)
        .map(|i| {
            thread::spawn(move || {
                let props = DataSourceProperties::new()
                    .with("url", format!("jdbc:h2:mem:ds_{}", i))
                    .with("max-active", i)
                    .with("max-wait", i64::from(i) * 100);
                get_data_source_as::<BasicDataSource>(BASIC_DATA_SOURCE, &props).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let ds = handle.join().unwrap();
        let i = i as i32;
        assert_eq!(ds.url(), Some(format!("jdbc:h2:mem:ds_{}", i).as_str()));
        assert_eq!(ds.max_active(), i);
        assert_eq!(ds.max_wait(), i64::from(i) * 100);
    }
}

#[test]
fn test_concurrent_register_and_bind() {
    let writer = thread::spawn(|| {
        for i in 0..20 {
            let descriptor = DataSourceDescriptor::builder::<ShardPool>(format!("test.shard.Pool{}", i))
                .default_factory()
                .string("name", |p: &mut ShardPool, v| p.name = v)
                .int("weight", ShardPool::set_weight)
                .boolean("enabled", |p: &mut ShardPool, v| p.enabled = v)
                .build();
            register_data_source(descriptor).unwrap();
        }
    });
    let readers: Vec<_> = (0..4)
        .map(|_| {
            thread::spawn(|| {
                for _ in 0..20 {
                    let props = DataSourceProperties::new().with("jdbc-url", "jdbc:h2:mem:r");
                    let ds = get_data_source_as::<HikariDataSource>(HIKARI_DATA_SOURCE, &props).unwrap();
                    assert_eq!(ds.jdbc_url(), Some("jdbc:h2:mem:r"));
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    let props = DataSourceProperties::new()
        .with("name", "shard_7")
        .with("weight", 3)
        .with("enabled", true);
    let pool = get_data_source_as::<ShardPool>("test.shard.Pool7", &props).unwrap();
    assert_eq!(
        pool,
        ShardPool {
            name: "shard_7".to_string(),
            weight: 3,
            enabled: true,
        }
    );

    let err = get_data_source_as::<ShardPool>("test.shard.Pool7", &DataSourceProperties::new().with("weight", -1))
        .unwrap_err();
    assert!(matches!(err, DataSourceError::AssignmentError { ref property, .. } if property == "weight"));

    for i in 0..20 {
        assert!(unregister_data_source(&format!("test.shard.Pool{}", i)).is_some());
    }
}

#[test]
fn test_binder_from_toml_config() {
    let config = BinderConfig::from_toml_str(
        r#"
        unknown_keys = "Reject"
        coercion = "Lenient"
        "#,
    )
    .unwrap();
    assert_eq!(config.unknown_keys, UnknownKeyPolicy::Reject);
    assert_eq!(config.coercion, CoercionPolicy::Lenient);

    let binder = PropertyBinder::new(config);
    let props = DataSourceProperties::new().with("max-idle", "6");
    let ds = get_data_source_with(&binder, "dbcp", &props)
        .unwrap()
        .downcast::<BasicDataSource>()
        .unwrap();
    assert_eq!(ds.max_idle(), 6);

    let err = get_data_source_with(&binder, "dbcp", &props.with("bogus", 1)).unwrap_err();
    assert!(matches!(err, DataSourceError::UnknownPropertyError { .. }));
}

#[test]
fn test_invalid_binder_config() {
    let err = BinderConfig::from_toml_str("unknown_keys = \"sometimes\"").unwrap_err();
    assert!(matches!(err, DataSourceError::ConfigError { .. }));

    let err = BinderConfig::builder().unknown_keys(UnknownKeyPolicy::Ignore).build().unwrap_err();
    assert!(matches!(err, DataSourceError::ConfigError { .. }));
}
