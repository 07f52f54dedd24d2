use std::collections::HashMap;
use crate::config::constants::INPUT_ENV_PREFIX;
use crate::traits::input_source::InputSource;

/// Action inputs, resolved the way GitHub Actions passes them: an
/// `INPUT_<NAME>` environment variable wins over the `[inputs]` table of the
/// config file.
pub struct ActionInputs {
    env: HashMap<String, String>,
    defaults: HashMap<String, toml::Value>,
}

impl ActionInputs {
    pub fn new(env: HashMap<String, String>, defaults: HashMap<String, toml::Value>) -> Self {
        Self { env, defaults }
    }

    pub fn from_env(defaults: HashMap<String, toml::Value>) -> Self {
        let env = std::env::vars()
            .filter(|(key, _)| key.starts_with(INPUT_ENV_PREFIX))
            .collect();
        Self::new(env, defaults)
    }

    fn env_key(name: &str) -> String {
        format!("{}{}", INPUT_ENV_PREFIX, name.replace(' ', "_").to_uppercase())
    }

    fn parse_boolean(value: &str) -> Option<bool> {
        match value.trim() {
            "true" | "True" | "TRUE" => Some(true),
            "false" | "False" | "FALSE" => Some(false),
            _ => None,
        }
    }

    fn default_boolean(&self, name: &str) -> bool {
        match self.defaults.get(name) {
            Some(toml::Value::Boolean(value)) => *value,
            Some(toml::Value::String(value)) => Self::parse_boolean(value).unwrap_or(false),
            _ => false,
        }
    }
}

impl InputSource for ActionInputs {
    fn input_boolean(&self, name: &str) -> bool {
        if let Some(raw) = self.env.get(&Self::env_key(name)) {
            match Self::parse_boolean(raw) {
                Some(value) => return value,
                None if raw.trim().is_empty() => {}
                None => log::warn!("⚠️ Input '{}' is not a boolean ('{}'), falling back to config", name, raw),
            }
        }

        self.default_boolean(name)
    }
}
