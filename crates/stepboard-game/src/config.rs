//! Session configuration.

use stepboard_core::{NotationImport, STARTING_FEN};

use crate::error::ConfigError;

/// Environment variable holding the placement used by `set_up_board`.
pub const PLACEMENT_VAR: &str = "STEPBOARD_PLACEMENT";

/// Environment variable selecting how saved state strings are decoded.
pub const NOTATION_IMPORT_VAR: &str = "STEPBOARD_NOTATION_IMPORT";

/// Knobs for a [`GameSession`](crate::GameSession).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Placement (or full FEN) loaded by `set_up_board`.
    pub initial_placement: String,
    /// Decoding used by `set_state_string`.
    pub notation_import: NotationImport,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_placement: STARTING_FEN.to_string(),
            notation_import: NotationImport::Full,
        }
    }
}

impl SessionConfig {
    /// Build a config from a key lookup, falling back to defaults for
    /// missing keys.
    ///
    /// `lookup` is usually `|key| std::env::var(key).ok()`.
    pub fn from_lookup<F>(lookup: F) -> Result<SessionConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = SessionConfig::default();

        if let Some(placement) = lookup(PLACEMENT_VAR) {
            let placement = placement.trim();
            if placement.is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: PLACEMENT_VAR,
                    reason: "placement is empty".to_string(),
                });
            }
            config.initial_placement = placement.to_string();
        }

        if let Some(mode) = lookup(NOTATION_IMPORT_VAR) {
            config.notation_import = mode
                .trim()
                .parse()
                .map_err(|reason| ConfigError::InvalidValue {
                    key: NOTATION_IMPORT_VAR,
                    reason,
                })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_use_defaults() {
        let config = SessionConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, SessionConfig::default());
        assert_eq!(config.initial_placement, STARTING_FEN);
    }

    #[test]
    fn keys_override_defaults() {
        let config = SessionConfig::from_lookup(|key| match key {
            PLACEMENT_VAR => Some("8/8/8/8/8/8/8/4K3".to_string()),
            NOTATION_IMPORT_VAR => Some("color-digits".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.initial_placement, "8/8/8/8/8/8/8/4K3");
        assert_eq!(config.notation_import, NotationImport::ColorDigits);
    }

    #[test]
    fn bad_mode_is_rejected() {
        let result = SessionConfig::from_lookup(|key| {
            (key == NOTATION_IMPORT_VAR).then(|| "pawns-only".to_string())
        });
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { key: NOTATION_IMPORT_VAR, .. })
        ));
    }

    #[test]
    fn blank_placement_is_rejected() {
        let result = SessionConfig::from_lookup(|key| (key == PLACEMENT_VAR).then(|| "  ".to_string()));
        assert!(result.is_err());
    }
}
