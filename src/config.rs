// ⚙️ Configuration - Environment-driven settings
//
// Rules are checked in order; the first missing required variable aborts the load.

use crate::error::StoreError;
use std::collections::HashMap;
use std::path::PathBuf;

pub const DATA_STORE_PATH: &str = "DATA_STORE_PATH";
pub const DEFAULT_DATA_STORE_PATH: &str = "./data";
pub const HOA_FILE_NAME: &str = "hoa.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigRule {
    pub name: String,
    pub required: bool,
    pub description: String,
    pub default: Option<String>,
}

impl ConfigRule {
    pub fn required(name: &str, description: &str) -> Self {
        ConfigRule {
            name: name.to_string(),
            required: true,
            description: description.to_string(),
            default: None,
        }
    }

    pub fn optional(name: &str, description: &str, default: &str) -> Self {
        ConfigRule {
            name: name.to_string(),
            required: false,
            description: description.to_string(),
            default: Some(default.to_string()),
        }
    }
}

/// Rules this crate reads
pub fn default_rules() -> Vec<ConfigRule> {
    vec![ConfigRule::optional(
        DATA_STORE_PATH,
        "Directory holding the csv files",
        DEFAULT_DATA_STORE_PATH,
    )]
}

#[derive(Debug, Clone, Default)]
pub struct Configuration {
    data: HashMap<String, String>,
}

impl Configuration {
    /// Resolve `rules` against `env`.
    ///
    /// Empty values count as missing. Missing optional values fall back to the
    /// rule default, or the empty string.
    pub fn load<I, K, V>(env: I, rules: &[ConfigRule]) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let env: HashMap<String, String> = env
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        let mut data = HashMap::new();
        for rule in rules {
            let value = env.get(&rule.name).filter(|v| !v.is_empty());

            let resolved = match value {
                Some(v) => v.clone(),
                None if rule.required => {
                    return Err(StoreError::MissingEnvVar {
                        name: rule.name.clone(),
                        description: rule.description.clone(),
                    })
                }
                None => rule.default.clone().unwrap_or_default(),
            };

            data.insert(rule.name.clone(), resolved);
        }

        Ok(Configuration { data })
    }

    /// `load` against the process environment
    pub fn from_env(rules: &[ConfigRule]) -> Result<Self, StoreError> {
        Self::load(std::env::vars(), rules)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.data.get(name).map(String::as_str)
    }

    pub fn data_store_path(&self) -> PathBuf {
        PathBuf::from(self.get(DATA_STORE_PATH).unwrap_or(DEFAULT_DATA_STORE_PATH))
    }

    /// Location of the HOA csv file
    pub fn store_file(&self) -> PathBuf {
        self.data_store_path().join(HOA_FILE_NAME)
    }
}
