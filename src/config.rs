use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::bindings::CaseSensitivity;
use crate::error::{Error, Result};
use crate::key::codes;

/// Recognizer configuration. Immutable once a recognizer is built.
///
/// Deserializes from camelCase JSON; every missing field takes its default.
/// A field of the wrong type is a parse error, not a silent fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Key code that activates while inactive and evaluates while active.
    pub activation_key_code: u32,
    /// Key code that dismisses while active.
    pub dismiss_key_code: u32,
    /// Key identity that acts like `activation_key_code`.
    /// When `None`, the conventional name of the code is used (see [`codes::name`]).
    pub activation_key: Option<String>,
    /// Key identity that acts like `dismiss_key_code`.
    /// When `None`, the conventional name of the code is used (see [`codes::name`]).
    pub dismiss_key: Option<String>,
    pub case_sensitive: bool,
    /// Key codes that never affect the recognizer.
    pub blacklisted_key_codes: BTreeSet<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            activation_key_code: codes::ENTER,
            dismiss_key_code: codes::ESCAPE,
            activation_key: None,
            dismiss_key: None,
            case_sensitive: true,
            blacklisted_key_codes: BTreeSet::from([codes::SHIFT]),
        }
    }
}

impl Config {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn case_sensitivity(&self) -> CaseSensitivity {
        self.case_sensitive.into()
    }

    /// Key identity that activates and evaluates.
    pub fn activation_identity(&self) -> Option<&str> {
        self.activation_key
            .as_deref()
            .or_else(|| codes::name(self.activation_key_code))
    }

    /// Key identity that dismisses.
    pub fn dismiss_identity(&self) -> Option<&str> {
        self.dismiss_key
            .as_deref()
            .or_else(|| codes::name(self.dismiss_key_code))
    }

    /// Reject configurations under which the recognizer could never complete a cycle.
    pub fn validate(&self) -> Result<()> {
        if self.activation_key_code == self.dismiss_key_code {
            return Err(Error::InvalidConfig(format!(
                "activation and dismiss keys share code {}",
                self.activation_key_code
            )));
        }
        for (name, code) in [
            ("activation", self.activation_key_code),
            ("dismiss", self.dismiss_key_code),
        ] {
            if self.blacklisted_key_codes.contains(&code) {
                return Err(Error::InvalidConfig(format!(
                    "{name} key code {code} is blacklisted"
                )));
            }
        }
        for (name, identity) in [
            ("activation", &self.activation_key),
            ("dismiss", &self.dismiss_key),
        ] {
            if identity.as_deref() == Some("") {
                return Err(Error::InvalidConfig(format!(
                    "{name} key identity is empty"
                )));
            }
        }

        // A key that both activates and dismisses can never evaluate.
        let activation = self.activation_identity();
        let dismiss = self.dismiss_identity();
        let dismiss_code_name = codes::name(self.dismiss_key_code);
        let activation_code_name = codes::name(self.activation_key_code);
        if (activation.is_some() && (activation == dismiss || activation == dismiss_code_name))
            || (dismiss.is_some() && dismiss == activation_code_name)
        {
            return Err(Error::InvalidConfig(
                "activation and dismiss keys overlap".to_string(),
            ));
        }
        Ok(())
    }

    /// One `name: value` line per setting, in declaration order.
    pub fn settings(&self) -> Vec<String> {
        let identity = |k: Option<&str>| k.unwrap_or("none").to_string();
        let blacklist = self
            .blacklisted_key_codes
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(",");

        vec![
            format!("activationKeyCode: {}", self.activation_key_code),
            format!("dismissKeyCode: {}", self.dismiss_key_code),
            format!("activationKey: {}", identity(self.activation_identity())),
            format!("dismissKey: {}", identity(self.dismiss_identity())),
            format!("caseSensitive: {}", self.case_sensitive),
            format!("blacklistedKeyCodes: {blacklist}"),
        ]
    }
}
