#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::env;

use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::IntoEnumIterator;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Eq, PartialEq, EnumIter, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    ApiKey,
    ApiURL,
    ProjectUuid,
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return "".to_string();
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        let res = match key {
            ConfigKey::ApiKey => "",
            ConfigKey::ApiURL => "",
            ConfigKey::ProjectUuid => "YOUR_PROJECT_UUID",
        };

        return res.to_string();
    }

    /// Environment variable backing a key, e.g. `ApiURL` reads
    /// `WOPEE_API_URL`.
    pub fn env_var(key: ConfigKey) -> String {
        return format!(
            "WOPEE_{}",
            key.to_string().to_uppercase().replace('-', "_")
        );
    }

    /// Resets every key to its default, then applies non-empty environment
    /// overrides. Values are read once here, never on the request path.
    pub fn load() {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key));
        }

        for key in ConfigKey::iter() {
            if let Ok(val) = env::var(Config::env_var(key)) {
                if val.is_empty() {
                    continue;
                }
                Config::set(key, &val);
            }
        }

        tracing::debug!(
            api_url = Config::get(ConfigKey::ApiURL),
            project_uuid = Config::get(ConfigKey::ProjectUuid),
            api_key_set = !Config::get(ConfigKey::ApiKey).is_empty(),
            "config"
        );
    }
}
