//! Configuration sources for key agreement
//!
//! The only option consulted by a session is the shared-secret format flag,
//! looked up as `"<namespace>.ecp_x_coordinate_only"`. When the flag is true
//! (the default) the shared secret is the x-coordinate alone, as in
//! RFC 5903; when false it is `x‖y`, as in RFC 4753.

use alloc::format;
use alloc::string::String;

use ecpdh_api::Settings;
use serde::{Deserialize, Serialize};

/// Namespace used when none is configured
pub const DEFAULT_NAMESPACE: &str = "charon";

/// Option name of the shared-secret format flag
pub const X_COORDINATE_ONLY_KEY: &str = "ecp_x_coordinate_only";

/// Fully qualified key of the shared-secret format flag in `namespace`
pub fn x_coordinate_only_key(namespace: &str) -> String {
    format!("{}.{}", namespace, X_COORDINATE_ONLY_KEY)
}

/// Static settings, typically deserialized from a configuration file
///
/// Missing fields take their defaults, so `{}` is a valid document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EcpSettings {
    /// Namespace the options are looked up in
    pub namespace: String,
    /// Derive the shared secret from the x-coordinate only
    pub ecp_x_coordinate_only: bool,
}

impl EcpSettings {
    /// Settings in the default namespace with the given format flag
    pub fn new(ecp_x_coordinate_only: bool) -> Self {
        Self {
            ecp_x_coordinate_only,
            ..Self::default()
        }
    }
}

impl Default for EcpSettings {
    fn default() -> Self {
        Self {
            namespace: String::from(DEFAULT_NAMESPACE),
            ecp_x_coordinate_only: true,
        }
    }
}

impl Settings for EcpSettings {
    fn get_bool(&self, key: &str, default: bool) -> bool {
        match key.strip_prefix(self.namespace.as_str()).and_then(|rest| rest.strip_prefix('.')) {
            Some(X_COORDINATE_ONLY_KEY) => self.ecp_x_coordinate_only,
            _ => default,
        }
    }
}

#[cfg(feature = "std")]
pub use self::memory::MemorySettings;

#[cfg(feature = "std")]
mod memory {
    use std::collections::HashMap;
    use std::sync::RwLock;

    use ecpdh_api::Settings;
    use tracing::warn;

    /// Mutable in-memory settings store
    ///
    /// Values can be changed while sessions hold a reference to the store;
    /// every lookup sees the latest value.
    #[derive(Debug, Default)]
    pub struct MemorySettings {
        values: RwLock<HashMap<String, bool>>,
    }

    impl MemorySettings {
        /// Create an empty store
        pub fn new() -> Self {
            Self::default()
        }

        /// Set `key` to `value`, replacing any previous value
        pub fn set(&self, key: impl Into<String>, value: bool) {
            let mut values = match self.values.write() {
                Ok(guard) => guard,
                Err(poisoned) => {
                    warn!("Settings lock was poisoned - recovering state");
                    poisoned.into_inner()
                }
            };
            values.insert(key.into(), value);
        }

        /// Remove `key`, so lookups fall back to their default
        pub fn remove(&self, key: &str) {
            let mut values = match self.values.write() {
                Ok(guard) => guard,
                Err(poisoned) => {
                    warn!("Settings lock was poisoned - recovering state");
                    poisoned.into_inner()
                }
            };
            values.remove(key);
        }
    }

    impl Settings for MemorySettings {
        fn get_bool(&self, key: &str, default: bool) -> bool {
            let values = match self.values.read() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            values.get(key).copied().unwrap_or(default)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_format() {
        assert_eq!(x_coordinate_only_key("charon"), "charon.ecp_x_coordinate_only");
        assert_eq!(x_coordinate_only_key("pluto"), "pluto.ecp_x_coordinate_only");
    }

    #[test]
    fn test_static_settings_lookup() {
        let settings = EcpSettings::default();
        assert!(settings.get_bool("charon.ecp_x_coordinate_only", false));

        let settings = EcpSettings::new(false);
        assert!(!settings.get_bool("charon.ecp_x_coordinate_only", true));

        // Other keys and other namespaces fall back to the default
        assert!(settings.get_bool("charon.something_else", true));
        assert!(settings.get_bool("pluto.ecp_x_coordinate_only", true));
        assert!(settings.get_bool("charonecp_x_coordinate_only", true));
    }

    #[test]
    fn test_deserialize_settings() {
        let settings: EcpSettings =
            serde_json::from_str(r#"{"namespace": "pluto", "ecp_x_coordinate_only": false}"#).unwrap();
        assert_eq!(settings.namespace, "pluto");
        assert!(!settings.get_bool("pluto.ecp_x_coordinate_only", true));

        let settings: EcpSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, EcpSettings::default());

        let settings: EcpSettings = serde_json::from_str(r#"{"ecp_x_coordinate_only": false}"#).unwrap();
        assert_eq!(settings.namespace, DEFAULT_NAMESPACE);
        assert!(!settings.ecp_x_coordinate_only);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_memory_settings() {
        let settings = MemorySettings::new();
        let key = x_coordinate_only_key(DEFAULT_NAMESPACE);
        assert!(settings.get_bool(&key, true));

        settings.set(key.clone(), false);
        assert!(!settings.get_bool(&key, true));

        settings.set(key.clone(), true);
        assert!(settings.get_bool(&key, false));

        settings.remove(&key);
        assert!(!settings.get_bool(&key, false));
    }
}
