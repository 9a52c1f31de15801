//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/karytree/karytree.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `KARYTREE_*` prefix

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::errors::{TreeError, TreeResult};
use crate::traversal::Order;

/// Payload type the command line front end builds trees of.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    #[default]
    Real,
    Complex,
}

impl FromStr for ValueKind {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "real" | "f64" => Ok(ValueKind::Real),
            "complex" => Ok(ValueKind::Complex),
            other => Err(TreeError::Config {
                message: format!("unknown value kind: {other}"),
            }),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Real => f.write_str("real"),
            ValueKind::Complex => f.write_str("complex"),
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified, inherit").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub arity: Option<usize>,
    pub orders: Option<Vec<Order>>,
    pub render: Option<bool>,
    pub value_kind: Option<ValueKind>,
}

/// Unified configuration for karytree.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Branching factor used when a layout does not declare one (default: 2)
    pub arity: usize,
    /// Traversals printed by `show` (default: all five)
    pub orders: Vec<Order>,
    /// Print the box-drawing rendering of the tree (default: true)
    pub render: bool,
    /// How layout values are interpreted (default: real)
    pub value_kind: ValueKind,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arity: 2,
            orders: Order::ALL.to_vec(),
            render: true,
            value_kind: ValueKind::Real,
        }
    }
}

/// Get the XDG config directory for karytree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "karytree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("karytree.toml"))
}

fn config_err(e: ConfigError) -> TreeError {
    TreeError::Config {
        message: e.to_string(),
    }
}

fn parse_flag(key: &str, val: &str) -> TreeResult<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(TreeError::Config {
            message: format!("{key} is not a boolean: {val}"),
        }),
    }
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> TreeResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| TreeError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| TreeError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins wherever it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            arity: overlay.arity.unwrap_or(self.arity),
            orders: overlay.orders.clone().unwrap_or_else(|| self.orders.clone()),
            render: overlay.render.unwrap_or(self.render),
            value_kind: overlay.value_kind.unwrap_or(self.value_kind),
        }
    }

    /// Load settings from all layers.
    ///
    /// A missing global file is fine; a missing explicit `config_file` is an error.
    #[instrument(level = "debug")]
    pub fn load(config_file: Option<&Path>) -> TreeResult<Self> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(path) = config_file {
            current = current.merge_with(&load_raw_settings(path)?);
        }

        current = Self::apply_env_overrides(current)?;
        current.validate()?;
        debug!(?current, "settings loaded");
        Ok(current)
    }

    /// Apply KARYTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> TreeResult<Self> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("KARYTREE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("orders"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("arity") {
            settings.arity = val.trim().parse().map_err(|_| TreeError::Config {
                message: format!("KARYTREE_ARITY is not a number: {val}"),
            })?;
        }
        if let Ok(val) = config.get_string("render") {
            settings.render = parse_flag("KARYTREE_RENDER", &val)?;
        }
        if let Ok(val) = config.get_string("value_kind") {
            settings.value_kind = val.parse()?;
        }
        if let Ok(vals) = config.get::<Vec<String>>("orders") {
            settings.orders = vals
                .iter()
                .map(|v| v.parse())
                .collect::<TreeResult<Vec<Order>>>()?;
        }

        Ok(settings)
    }

    fn validate(&self) -> TreeResult<()> {
        if self.arity == 0 {
            return Err(TreeError::Config {
                message: "arity must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Configured orders that are defined for `arity`, in configured order.
    pub fn orders_for(&self, arity: usize) -> Vec<Order> {
        self.orders
            .iter()
            .copied()
            .filter(|order| order.supports_arity(arity))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.arity, 2);
        assert_eq!(settings.orders.len(), 5);
        assert!(settings.render);
        assert_eq!(settings.value_kind, ValueKind::Real);
    }

    #[test]
    fn test_merge_keeps_unspecified() {
        let overlay = RawSettings {
            arity: Some(3),
            ..Default::default()
        };
        let merged = Settings::default().merge_with(&overlay);
        assert_eq!(merged.arity, 3);
        assert!(merged.render);
        assert_eq!(merged.orders, Order::ALL.to_vec());
    }

    #[test]
    fn test_orders_for_drops_in_order_on_ternary() {
        let settings = Settings::default();
        assert!(!settings.orders_for(3).contains(&Order::InOrder));
        assert!(settings.orders_for(2).contains(&Order::InOrder));
    }

    #[test]
    fn test_value_kind_parse() {
        assert_eq!("Complex".parse::<ValueKind>().unwrap(), ValueKind::Complex);
        assert!("quaternion".parse::<ValueKind>().is_err());
    }

    #[test]
    fn test_parse_flag_is_strict() {
        assert!(parse_flag("KARYTREE_RENDER", " On ").unwrap());
        assert!(!parse_flag("KARYTREE_RENDER", "0").unwrap());
        assert!(!parse_flag("KARYTREE_RENDER", "false").unwrap());
        let err = parse_flag("KARYTREE_RENDER", "flase").unwrap_err();
        assert!(matches!(err, TreeError::Config { ref message } if message.contains("flase")));
    }
}
