//! Alert configuration data model

pub mod button;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use button::{ButtonConfig, ButtonOverrides, ButtonSlot};

/// Severity icon controlling the dialog's visual treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Warning,
    Error,
    Success,
    Info,
}

impl Icon {
    /// The wire name of the icon.
    pub fn as_str(&self) -> &'static str {
        match self {
            Icon::Warning => "warning",
            Icon::Error => "error",
            Icon::Success => "success",
            Icon::Info => "info",
        }
    }
}

/// The configuration for a single modal alert.
///
/// Built and mutated through [`Notifier`](crate::Notifier), which maintains
/// the invariants between fields (a timer never coexists with a button,
/// `text` and `content` are mutually exclusive). The `extra` map carries
/// unrecognized `set_config` keys and serializes flattened at the top level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertConfig {
    /// Plain-text message body; starts as the empty string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// HTML message body, set by `html()` in place of `text`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Optional title line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Severity icon; absent means an untyped alert
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    /// Auto-close delay in milliseconds; absent means no auto-close
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timer: Option<u64>,
    /// Whether clicking outside the modal dismisses it
    #[serde(
        rename = "closeOnClickOutside",
        skip_serializing_if = "Option::is_none"
    )]
    pub close_on_click_outside: Option<bool>,
    /// Button slots keyed by caller-chosen identifiers
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub buttons: BTreeMap<String, ButtonSlot>,
    /// Unrecognized keys from `set_config`, kept at the top level
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AlertConfig {
    /// The default configuration: empty text, the given auto-close timer,
    /// and both well-known button slots declared but disabled.
    pub fn new(default_timer_ms: u64) -> Self {
        let mut buttons = BTreeMap::new();
        buttons.insert("cancel".to_string(), ButtonSlot::disabled());
        buttons.insert("confirm".to_string(), ButtonSlot::disabled());

        Self {
            text: Some(String::new()),
            content: None,
            title: None,
            icon: None,
            timer: Some(default_timer_ms),
            close_on_click_outside: None,
            buttons,
            extra: Map::new(),
        }
    }

    /// The configuration as a JSON object.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    /// Look up a top-level key of the serialized configuration.
    ///
    /// Returns `None` for unknown keys, never an error.
    pub fn get(&self, key: &str) -> Option<Value> {
        let value = self.to_value().ok()?;
        value.as_object()?.get(key).cloned()
    }

    /// Shallow-merge an arbitrary JSON object into the configuration.
    ///
    /// Known keys are routed into their typed fields; a value of the wrong
    /// shape for its key falls through to the extra map so nothing is lost.
    /// Unknown keys land in the extra map directly. Non-object input is
    /// ignored. This is the escape hatch behind `set_config`: merged values
    /// bypass the builder's invariants.
    pub fn merge(&mut self, partial: Value) {
        let Value::Object(entries) = partial else {
            return;
        };

        for (key, value) in entries {
            match key.as_str() {
                "text" => route(&mut self.text, &mut self.extra, &key, value),
                "content" => route(&mut self.content, &mut self.extra, &key, value),
                "title" => route(&mut self.title, &mut self.extra, &key, value),
                "icon" => route(&mut self.icon, &mut self.extra, &key, value),
                "timer" => route(&mut self.timer, &mut self.extra, &key, value),
                "closeOnClickOutside" => {
                    route(&mut self.close_on_click_outside, &mut self.extra, &key, value)
                }
                "buttons" => match serde_json::from_value(value.clone()) {
                    Ok(buttons) => {
                        self.buttons = buttons;
                        self.extra.remove(&key);
                    }
                    Err(_) => {
                        self.buttons.clear();
                        self.extra.insert(key, value);
                    }
                },
                _ => {
                    self.extra.insert(key, value);
                }
            }
        }
    }
}

/// Route a merged value into its typed field, falling back to the extra map
/// when the shape does not fit. The typed field and the extra map never hold
/// the same key at once, so the serialized object stays free of duplicates.
fn route<T: serde::de::DeserializeOwned>(
    slot: &mut Option<T>,
    extra: &mut Map<String, Value>,
    key: &str,
    value: Value,
) {
    match serde_json::from_value::<Option<T>>(value.clone()) {
        Ok(parsed) => {
            *slot = parsed;
            extra.remove(key);
        }
        Err(_) => {
            *slot = None;
            extra.insert(key.to_string(), value);
        }
    }
}
