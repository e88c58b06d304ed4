use std::env;

use super::Config;
use super::ConfigKey;

#[test]
fn it_maps_keys_to_env_vars() {
    assert_eq!(Config::env_var(ConfigKey::ApiURL), "WOPEE_API_URL");
    assert_eq!(Config::env_var(ConfigKey::ApiKey), "WOPEE_API_KEY");
    assert_eq!(Config::env_var(ConfigKey::ProjectUuid), "WOPEE_PROJECT_UUID");
}

#[test]
fn it_defaults_to_a_placeholder_project_uuid() {
    assert_eq!(Config::default(ConfigKey::ProjectUuid), "YOUR_PROJECT_UUID");
    assert_eq!(Config::default(ConfigKey::ApiURL), "");
    assert_eq!(Config::default(ConfigKey::ApiKey), "");
}

#[test]
fn it_loads_defaults_then_env_overrides() {
    env::set_var("WOPEE_PROJECT_UUID", "project-from-env");
    Config::load();
    env::remove_var("WOPEE_PROJECT_UUID");

    assert_eq!(Config::get(ConfigKey::ProjectUuid), "project-from-env");
}
