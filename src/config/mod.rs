// Configuration registry: dotted keys backed by a YAML file and environment overrides

pub mod settings;

use anyhow::{bail, Context, Result};
use serde_yaml::Value;
use std::{collections::BTreeMap, path::Path};

use crate::error::SeedError;

pub const USER_NAME_KEY: &str = "app.user_name";
pub const USER_EMAIL_KEY: &str = "app.user_email";
pub const USER_PASSWORD_KEY: &str = "app.user_password";
pub const BCRYPT_ROUNDS_KEY: &str = "hashing.bcrypt_rounds";

/// Keys that may come from the environment even when the config file doesn't mention them.
const WELL_KNOWN_KEYS: [&str; 4] = [
    USER_NAME_KEY,
    USER_EMAIL_KEY,
    USER_PASSWORD_KEY,
    BCRYPT_ROUNDS_KEY,
];

/// Flat key-value view over the application config.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    values: BTreeMap<String, String>,
}

impl Config {
    /// Parse a YAML document, flattening nested mappings into dotted keys.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let root: Value = serde_yaml::from_str(yaml).context("Failed to parse config YAML")?;
        let mut values = BTreeMap::new();

        match root {
            // Empty document
            Value::Null => {}
            Value::Mapping(_) => flatten_into(&mut values, "", &root)?,
            _ => bail!("Config root must be a mapping"),
        }

        Ok(Self { values })
    }

    /// Load the config file (if any), then apply overrides from the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let yaml = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file {}", path.display()))?;
                Self::from_yaml_str(&yaml)?
            }
            None => Self::default(),
        };

        // Non-UTF-8 variables can't name or hold a config value; skip them
        let vars = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)));

        Ok(config.with_overrides(vars))
    }

    /// Apply environment-style overrides (`APP_USER_NAME` for `app.user_name`).
    ///
    /// Only known keys are overridable: anything already loaded plus the well-known seeder keys.
    pub fn with_overrides<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let vars: BTreeMap<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_string(), v.into()))
            .collect();

        let mut keys: Vec<String> = self.values.keys().cloned().collect();
        for key in WELL_KNOWN_KEYS {
            if !self.values.contains_key(key) {
                keys.push(key.to_string());
            }
        }

        for key in keys {
            if let Some(value) = vars.get(&env_name_for(&key)) {
                self.values.insert(key, value.clone());
            }
        }

        self
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Lookup that treats absent and blank values alike.
    pub fn require(&self, key: &str) -> Result<&str, SeedError> {
        match self.get(key) {
            Some(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(SeedError::MissingConfig(key.to_string())),
        }
    }
}

/// Environment variable name for a dotted config key.
pub fn env_name_for(key: &str) -> String {
    key.replace('.', "_").to_uppercase()
}

fn flatten_into(values: &mut BTreeMap<String, String>, prefix: &str, value: &Value) -> Result<()> {
    match value {
        Value::Mapping(mapping) => {
            for (k, v) in mapping {
                let segment = scalar_to_string(k)
                    .with_context(|| format!("Unsupported key under '{}'", prefix))?;
                let key = if prefix.is_empty() {
                    segment
                } else {
                    format!("{}.{}", prefix, segment)
                };
                flatten_into(values, &key, v)?;
            }
        }
        Value::Null => {}
        Value::Sequence(_) => bail!("Config key '{}' holds a list, which is not supported", prefix),
        Value::Tagged(tagged) => flatten_into(values, prefix, &tagged.value)?,
        scalar => {
            let text = scalar_to_string(scalar)?;
            values.insert(prefix.to_string(), text);
        }
    }
    Ok(())
}

fn scalar_to_string(value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => bail!("Expected a scalar, found {:?}", other),
    }
}
