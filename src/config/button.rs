//! Button configuration and the default-merge rule for `add_button`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Configuration for a single alert button.
///
/// Field names follow the widget's wire format (`className`, `closeModal`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonConfig {
    /// Button label
    pub text: String,
    /// Whether the button is rendered
    pub visible: bool,
    /// Value surfaced to the caller when the button is activated
    pub value: Value,
    /// Extra CSS class for the button element
    pub class_name: String,
    /// Whether activating the button dismisses the modal
    pub close_modal: bool,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            visible: false,
            value: Value::Null,
            class_name: String::new(),
            close_modal: true,
        }
    }
}

impl ButtonConfig {
    /// Build a button by layering, in order: the default shape, the display
    /// text with `visible: true`, and finally the caller's overrides.
    pub fn merged(text: impl Into<String>, overrides: &ButtonOverrides) -> Self {
        let mut button = Self {
            text: text.into(),
            visible: true,
            ..Self::default()
        };
        overrides.apply_to(&mut button);
        button
    }
}

/// A button slot in the alert configuration.
///
/// The wire format declares every well-known slot up front: a slot holds
/// either the literal `false` (declared but disabled) or a full button
/// object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ButtonSlot {
    /// A fully configured button
    Enabled(ButtonConfig),
    /// A declared-but-disabled slot, serialized as a bare boolean
    Disabled(bool),
}

impl ButtonSlot {
    /// A disabled slot, the initial state of `confirm` and `cancel`.
    pub fn disabled() -> Self {
        Self::Disabled(false)
    }

    /// Whether this slot holds a configured button.
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled(_))
    }

    /// The button configuration, if the slot is enabled.
    pub fn as_config(&self) -> Option<&ButtonConfig> {
        match self {
            Self::Enabled(config) => Some(config),
            Self::Disabled(_) => None,
        }
    }
}

/// Caller-supplied overrides for `add_button`, applied last in the merge.
///
/// Every field is optional; unset fields keep the merged default. Overrides
/// win even against the forced display values, so a button can be added
/// hidden via `.visible(false)`.
#[derive(Debug, Clone, Default)]
pub struct ButtonOverrides {
    text: Option<String>,
    visible: Option<bool>,
    value: Option<Value>,
    class_name: Option<String>,
    close_modal: Option<bool>,
}

impl ButtonOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the display text set by `add_button`.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Override visibility (`add_button` forces `true` otherwise).
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    /// Set the value surfaced when the button is activated.
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the button's CSS class.
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Control whether activating the button dismisses the modal.
    pub fn close_modal(mut self, close_modal: bool) -> Self {
        self.close_modal = Some(close_modal);
        self
    }

    fn apply_to(&self, button: &mut ButtonConfig) {
        if let Some(text) = &self.text {
            button.text = text.clone();
        }
        if let Some(visible) = self.visible {
            button.visible = visible;
        }
        if let Some(value) = &self.value {
            button.value = value.clone();
        }
        if let Some(class_name) = &self.class_name {
            button.class_name = class_name.clone();
        }
        if let Some(close_modal) = self.close_modal {
            button.close_modal = close_modal;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_button_shape() {
        let button = ButtonConfig::default();
        assert_eq!(button.text, "");
        assert!(!button.visible);
        assert_eq!(button.value, Value::Null);
        assert_eq!(button.class_name, "");
        assert!(button.close_modal);
    }

    #[test]
    fn merged_forces_text_and_visibility() {
        let button = ButtonConfig::merged("Yes", &ButtonOverrides::default());
        assert_eq!(button.text, "Yes");
        assert!(button.visible);
        assert!(button.close_modal);
        assert_eq!(button.value, Value::Null);
    }

    #[test]
    fn overrides_win_over_forced_values() {
        let overrides = ButtonOverrides::new()
            .visible(false)
            .close_modal(false)
            .value(json!({"choice": 1}))
            .class_name("btn-danger");
        let button = ButtonConfig::merged("Delete", &overrides);

        assert_eq!(button.text, "Delete");
        assert!(!button.visible);
        assert!(!button.close_modal);
        assert_eq!(button.value, json!({"choice": 1}));
        assert_eq!(button.class_name, "btn-danger");
    }

    #[test]
    fn override_text_replaces_display_text() {
        let button = ButtonConfig::merged("Ignored", &ButtonOverrides::new().text("Actual"));
        assert_eq!(button.text, "Actual");
    }

    #[test]
    fn disabled_slot_serializes_as_false() {
        let value = serde_json::to_value(ButtonSlot::disabled()).unwrap();
        assert_eq!(value, json!(false));
    }

    #[test]
    fn enabled_slot_uses_wire_field_names() {
        let spec = ButtonSlot::Enabled(ButtonConfig::merged("OK", &ButtonOverrides::default()));
        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(
            value,
            json!({
                "text": "OK",
                "visible": true,
                "value": null,
                "className": "",
                "closeModal": true,
            })
        );
    }

    #[test]
    fn button_spec_round_trips_both_variants() {
        let disabled: ButtonSlot = serde_json::from_value(json!(false)).unwrap();
        assert!(!disabled.is_enabled());

        let enabled: ButtonSlot =
            serde_json::from_value(json!({"text": "Go", "visible": true})).unwrap();
        let config = enabled.as_config().unwrap();
        assert_eq!(config.text, "Go");
        assert!(config.close_modal);
    }
}
