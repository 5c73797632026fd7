//! Publish protocol: staging an alert configuration under namespaced keys

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::config::AlertConfig;
use crate::store::FlashStore;

/// Default prefix for staged flash keys.
pub const DEFAULT_NAMESPACE: &str = "sweet_alert";

/// Errors surfaced while publishing an alert configuration.
#[derive(Debug, Error)]
pub enum FlashError {
    /// The configuration could not be serialized to JSON.
    #[error("failed to serialize alert configuration")]
    Serialize(#[from] serde_json::Error),
    /// The flash store rejected a write.
    #[error("flash store write failed for key `{key}`")]
    Store {
        key: String,
        #[source]
        source: anyhow::Error,
    },
}

impl FlashError {
    fn store(key: impl Into<String>, source: anyhow::Error) -> Self {
        Self::Store {
            key: key.into(),
            source,
        }
    }
}

/// Writes configuration snapshots to a flash store under a namespace prefix.
///
/// Each top-level configuration key is staged individually as
/// `{namespace}.{key}` (one level flat; `buttons` stays a single value), and
/// the whole configuration is additionally staged as a JSON string under
/// `{namespace}.alert` for callers that prefer a single combined read.
#[derive(Debug, Clone)]
pub struct FlashPublisher {
    namespace: String,
}

impl Default for FlashPublisher {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}

impl FlashPublisher {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Stage the given configuration snapshot, replacing whatever was staged
    /// under this namespace before. The last publish before the next read
    /// cycle wins.
    pub fn publish<S: FlashStore + ?Sized>(
        &self,
        store: &mut S,
        config: &AlertConfig,
    ) -> Result<(), FlashError> {
        store
            .remove(&self.namespace)
            .map_err(|source| FlashError::store(&self.namespace, source))?;

        let entries = match config.to_value()? {
            Value::Object(entries) => entries,
            // A struct configuration always serializes to an object.
            _ => Map::new(),
        };

        for (key, value) in &entries {
            let staged_key = format!("{}.{}", self.namespace, key);
            store
                .flash(&staged_key, value.clone())
                .map_err(|source| FlashError::store(&staged_key, source))?;
        }

        let staged_keys = entries.len();
        let alert_key = format!("{}.alert", self.namespace);
        let combined = Value::Object(entries).to_string();
        store
            .flash(&alert_key, Value::String(combined))
            .map_err(|source| FlashError::store(&alert_key, source))?;

        debug!(
            namespace = %self.namespace,
            keys = staged_keys,
            "flashed alert configuration"
        );
        Ok(())
    }
}
