use std::str::FromStr;

use crate::error::{Result, StoreError};

/// Recognized status labels, in display order. Both [`crate::data::Dish`] and
/// [`crate::data::Restaurant`] take their status from this list.
pub const STATUS_LIST: [&str; 3] = ["Want to Try", "Recommended", "Do Not Recommend"];

/// What `DishStore::add` does with an id that is already in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdPolicy {
    /// Reject the new record.
    #[default]
    Unique,
    /// Append anyway. `remove` will then drop every copy.
    Permissive,
}

impl FromStr for IdPolicy {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unique" => Ok(Self::Unique),
            "permissive" => Ok(Self::Permissive),
            other => Err(StoreError::Config {
                key: "DISH_ID_POLICY",
                message: format!("expect `unique` or `permissive`, got {other:?}"),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub id_policy: IdPolicy,
    pub seed: bool,
    pub log_level: tracing::Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            id_policy: IdPolicy::default(),
            seed: true,
            log_level: tracing::Level::INFO,
        }
    }
}

impl Config {
    /// Read `DISH_ID_POLICY`, `DISH_SEED` and `DISH_LOG` from the process env.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`], but values come from `lookup`. Unset keys
    /// keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(policy) = lookup("DISH_ID_POLICY") {
            config.id_policy = policy.parse()?;
        }

        if let Some(seed) = lookup("DISH_SEED") {
            config.seed = match seed.trim() {
                "true" | "1" => true,
                "false" | "0" => false,
                other => {
                    return Err(StoreError::Config {
                        key: "DISH_SEED",
                        message: format!("expect a boolean, got {other:?}"),
                    })
                }
            };
        }

        if let Some(level) = lookup("DISH_LOG") {
            config.log_level = level.trim().parse().map_err(|_| StoreError::Config {
                key: "DISH_LOG",
                message: format!("unknown log level {level:?}"),
            })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_env_is_empty() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.id_policy, IdPolicy::Unique);
        assert!(config.seed);
        assert_eq!(config.log_level, tracing::Level::INFO);
    }

    #[test]
    fn test_read_all_keys() {
        let config = Config::from_lookup(lookup_from(&[
            ("DISH_ID_POLICY", "Permissive"),
            ("DISH_SEED", "0"),
            ("DISH_LOG", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.id_policy, IdPolicy::Permissive);
        assert!(!config.seed);
        assert_eq!(config.log_level, tracing::Level::DEBUG);
    }

    #[test]
    fn test_reject_bad_values() {
        let err = Config::from_lookup(lookup_from(&[("DISH_ID_POLICY", "loose")])).unwrap_err();
        assert!(matches!(err, StoreError::Config { key: "DISH_ID_POLICY", .. }));

        let err = Config::from_lookup(lookup_from(&[("DISH_SEED", "maybe")])).unwrap_err();
        assert!(matches!(err, StoreError::Config { key: "DISH_SEED", .. }));

        let err = Config::from_lookup(lookup_from(&[("DISH_LOG", "loud")])).unwrap_err();
        assert!(matches!(err, StoreError::Config { key: "DISH_LOG", .. }));
    }
}
