//! Integration tests for TOML and environment configuration loading.
//!
//! Uses `figment::Jail` for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use milk_config::MilkConfig;
use milk_core::Role;
use pretty_assertions::assert_eq;

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://api.ceialmilk.com/"
timeout_secs = 5
user_agent = "test-agent"

[storage]
path = "/var/lib/ceialmilk/state.json"

[general]
default_limit = 50
admin_roles = ["ADMIN"]
"#,
        )?;

        let config: MilkConfig = Figment::from(Serialized::defaults(MilkConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.origin(), "https://api.ceialmilk.com");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.api.user_agent, "test-agent");
        assert_eq!(config.storage.path, "/var/lib/ceialmilk/state.json");
        assert_eq!(config.general.default_limit, 50);
        assert_eq!(config.general.admin_roles, vec![Role::Admin]);
        assert!(config.validate().is_ok());
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
timeout_secs = 10
"#,
        )?;

        let config: MilkConfig = Figment::from(Serialized::defaults(MilkConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.general.default_limit, 20);
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "http://from-toml:8080"
"#,
        )?;
        jail.set_env("MILK_API__BASE_URL", "http://from-env:9090");

        let config: MilkConfig = Figment::from(Serialized::defaults(MilkConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("MILK_").split("__"))
            .extract()?;

        assert_eq!(config.api.base_url, "http://from-env:9090");
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".ceialmilk")?;
        jail.create_file(
            ".ceialmilk/config.toml",
            r#"
[general]
default_limit = 5
"#,
        )?;
        jail.set_env("MILK_STORAGE__PATH", "state.json");

        let config = MilkConfig::load().expect("config loads");
        assert_eq!(config.general.default_limit, 5);
        assert_eq!(config.storage.path, "state.json");
        Ok(())
    });
}

#[test]
fn load_rejects_invalid_base_url() {
    Jail::expect_with(|jail| {
        jail.set_env("MILK_API__BASE_URL", "localhost:8080");
        let err = MilkConfig::load().expect_err("invalid url must fail");
        assert!(err.to_string().contains("api.base_url"));
        Ok(())
    });
}
