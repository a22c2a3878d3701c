//! Runtime configuration for Rayleigh friction.
//!
//! Four values control the forcing:
//!
//! | Key | Type | Meaning |
//! |---|---|---|
//! | `config_rayleigh_friction` | bool | full-column damping on/off |
//! | `config_rayleigh_damping_coeff` | real (1/s) | full-column damping rate |
//! | `config_rayleigh_bottom_friction` | bool | bottom-level damping on/off |
//! | `config_rayleigh_bottom_damping_coeff` | real (1/s) | bottom damping rate |
//!
//! Values can come from a typed [`RayleighConfig`] (serde, missing fields
//! default to off/zero) or be looked up by name from any [`ConfigStore`],
//! where every key must be present.
//!
//! # Example
//!
//! ```
//! use rayleigh_rs::config::{JsonConfigStore, RayleighConfig};
//!
//! let store: JsonConfigStore = r#"{
//!     "config_rayleigh_friction": true,
//!     "config_rayleigh_damping_coeff": 1.0e-4,
//!     "config_rayleigh_bottom_friction": false,
//!     "config_rayleigh_bottom_damping_coeff": 0.0
//! }"#
//! .parse()
//! .unwrap();
//!
//! let config = RayleighConfig::from_store(&store).unwrap();
//! assert!(config.friction_enabled);
//! assert_eq!(config.damping_coeff, 1.0e-4);
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{RayleighError, Result};

/// Key enabling full-column friction.
pub const KEY_FRICTION: &str = "config_rayleigh_friction";
/// Key for the full-column damping coefficient.
pub const KEY_DAMPING_COEFF: &str = "config_rayleigh_damping_coeff";
/// Key enabling bottom-level friction.
pub const KEY_BOTTOM_FRICTION: &str = "config_rayleigh_bottom_friction";
/// Key for the bottom damping coefficient.
pub const KEY_BOTTOM_DAMPING_COEFF: &str = "config_rayleigh_bottom_damping_coeff";

/// Raw Rayleigh friction settings as read from configuration.
///
/// No range checks are applied here; negative coefficients pass through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RayleighConfig {
    /// Enable damping over every active level.
    #[serde(rename = "config_rayleigh_friction")]
    pub friction_enabled: bool,
    /// Full-column damping rate (1/s).
    #[serde(rename = "config_rayleigh_damping_coeff")]
    pub damping_coeff: f64,
    /// Enable damping at the deepest active level.
    #[serde(rename = "config_rayleigh_bottom_friction")]
    pub bottom_friction_enabled: bool,
    /// Bottom damping rate (1/s).
    #[serde(rename = "config_rayleigh_bottom_damping_coeff")]
    pub bottom_damping_coeff: f64,
}

impl RayleighConfig {
    /// Configuration with both terms switched off.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Enable full-column friction with the given rate.
    pub fn with_friction(mut self, damping_coeff: f64) -> Self {
        self.friction_enabled = true;
        self.damping_coeff = damping_coeff;
        self
    }

    /// Enable bottom friction with the given rate.
    pub fn with_bottom_friction(mut self, bottom_damping_coeff: f64) -> Self {
        self.bottom_friction_enabled = true;
        self.bottom_damping_coeff = bottom_damping_coeff;
        self
    }

    /// Read all four values by name. Every key must be present.
    pub fn from_store<C: ConfigStore + ?Sized>(store: &C) -> Result<Self> {
        Ok(Self {
            friction_enabled: store.get_bool(KEY_FRICTION)?,
            damping_coeff: store.get_real(KEY_DAMPING_COEFF)?,
            bottom_friction_enabled: store.get_bool(KEY_BOTTOM_FRICTION)?,
            bottom_damping_coeff: store.get_real(KEY_BOTTOM_DAMPING_COEFF)?,
        })
    }

    /// Deserialize from a JSON document. Absent keys take their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Name-keyed access to runtime configuration.
pub trait ConfigStore {
    /// Look up a boolean option.
    fn get_bool(&self, key: &str) -> Result<bool>;

    /// Look up a real-valued option.
    fn get_real(&self, key: &str) -> Result<f64>;
}

/// [`ConfigStore`] backed by a flat JSON object.
#[derive(Clone, Debug, Default)]
pub struct JsonConfigStore {
    values: Map<String, Value>,
}

impl JsonConfigStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an already-parsed JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(values) => Ok(Self { values }),
            other => Err(RayleighError::NotAnObject {
                found: json_kind(&other),
            }),
        }
    }

    /// Insert or replace a value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn lookup(&self, key: &str) -> Result<&Value> {
        self.values.get(key).ok_or_else(|| RayleighError::MissingKey {
            key: key.to_string(),
        })
    }
}

impl FromStr for JsonConfigStore {
    type Err = RayleighError;

    fn from_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }
}

impl ConfigStore for JsonConfigStore {
    fn get_bool(&self, key: &str) -> Result<bool> {
        self.lookup(key)?
            .as_bool()
            .ok_or_else(|| RayleighError::WrongType {
                key: key.to_string(),
                expected: "boolean",
            })
    }

    fn get_real(&self, key: &str) -> Result<f64> {
        self.lookup(key)?
            .as_f64()
            .ok_or_else(|| RayleighError::WrongType {
                key: key.to_string(),
                expected: "number",
            })
    }
}

/// JSON type name, for error messages.
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
