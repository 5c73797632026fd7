//! The fluent alert builder

use serde_json::Value;
use tracing::warn;

use crate::config::{AlertConfig, ButtonConfig, ButtonOverrides, ButtonSlot, Icon};
use crate::publish::{FlashError, FlashPublisher};
use crate::settings::Settings;
use crate::store::FlashStore;

/// Fluent builder for a single modal alert, bound to a flash store.
///
/// Display methods (`message` and the severity helpers) publish the current
/// configuration as a side effect, so a bare `alert.success(...)` is enough
/// for the common case. Mutations made afterwards (attaching buttons,
/// changing the timer, switching to HTML mode) are captured by the final
/// publish: [`finish`](Self::finish) performs it with error propagation, and
/// dropping the builder performs it best-effort, so the store always holds
/// the latest state when the next request reads it.
///
/// One builder describes one alert within one request; it has no identity
/// beyond that.
pub struct Notifier<S: FlashStore> {
    store: S,
    publisher: FlashPublisher,
    config: AlertConfig,
    finished: bool,
}

impl<S: FlashStore> Notifier<S> {
    /// Create a builder with the default settings.
    pub fn new(store: S) -> Self {
        Self::with_settings(store, &Settings::default())
    }

    /// Create a builder with explicit defaults (auto-close timer, key
    /// namespace).
    pub fn with_settings(store: S, settings: &Settings) -> Self {
        Self {
            store,
            publisher: FlashPublisher::new(settings.namespace.clone()),
            config: AlertConfig::new(settings.autoclose_ms),
            finished: false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Display operations, each publishes the configuration
    // ─────────────────────────────────────────────────────────────────────

    /// Display an alert with a text and an optional title and icon.
    ///
    /// Setting the text clears any HTML `content` from an earlier `html()`
    /// call; the two are mutually exclusive. Title and icon are only set
    /// when provided, so repeated calls keep earlier values.
    pub fn message(
        &mut self,
        text: impl Into<String>,
        title: Option<&str>,
        icon: Option<Icon>,
    ) -> Result<&mut Self, FlashError> {
        self.config.text = Some(text.into());
        self.config.content = None;

        if let Some(title) = title {
            self.config.title = Some(title.to_string());
        }
        if let Some(icon) = icon {
            self.config.icon = Some(icon);
        }

        self.publish()?;
        Ok(self)
    }

    /// Display an untyped alert with a text and a title.
    pub fn basic(&mut self, text: impl Into<String>, title: &str) -> Result<&mut Self, FlashError> {
        self.message(text, Some(title), None)
    }

    /// Display an info alert.
    pub fn info(&mut self, text: impl Into<String>, title: &str) -> Result<&mut Self, FlashError> {
        self.message(text, Some(title), Some(Icon::Info))
    }

    /// Display a success alert.
    pub fn success(
        &mut self,
        text: impl Into<String>,
        title: &str,
    ) -> Result<&mut Self, FlashError> {
        self.message(text, Some(title), Some(Icon::Success))
    }

    /// Display an error alert.
    pub fn error(&mut self, text: impl Into<String>, title: &str) -> Result<&mut Self, FlashError> {
        self.message(text, Some(title), Some(Icon::Error))
    }

    /// Display a warning alert.
    pub fn warning(
        &mut self,
        text: impl Into<String>,
        title: &str,
    ) -> Result<&mut Self, FlashError> {
        self.message(text, Some(title), Some(Icon::Warning))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Configuration
    // ─────────────────────────────────────────────────────────────────────

    /// Set the auto-close delay. `None` keeps the current timer; it is not
    /// a clear.
    pub fn autoclose(&mut self, milliseconds: Option<u64>) -> &mut Self {
        if let Some(milliseconds) = milliseconds {
            self.config.timer = Some(milliseconds);
        }
        self
    }

    /// Add a button under `key`, merging the default button shape, the
    /// display text with `visible: true`, and the caller's overrides, in
    /// that order.
    ///
    /// Re-adding an existing key rebuilds the button from scratch with the
    /// same rule; the previous entry's overrides do not survive. Any button
    /// disables auto-close and click-outside dismissal.
    pub fn add_button(
        &mut self,
        key: impl Into<String>,
        text: impl Into<String>,
        overrides: ButtonOverrides,
    ) -> &mut Self {
        let button = ButtonConfig::merged(text, &overrides);
        self.config
            .buttons
            .insert(key.into(), ButtonSlot::Enabled(button));

        self.close_on_click_outside(false);
        self.config.timer = None;

        self
    }

    /// Add a confirmation button.
    pub fn confirm_button(&mut self, text: impl Into<String>) -> &mut Self {
        self.add_button("confirm", text, ButtonOverrides::default())
    }

    /// Add a cancel button.
    pub fn cancel_button(&mut self, text: impl Into<String>) -> &mut Self {
        self.add_button("cancel", text, ButtonOverrides::default())
    }

    /// Toggle dismissing the alert by clicking outside it.
    pub fn close_on_click_outside(&mut self, value: bool) -> &mut Self {
        self.config.close_on_click_outside = Some(value);
        self
    }

    /// Make the alert dismissible only through its confirmation button: no
    /// auto-close, no click-outside.
    pub fn persistent(&mut self, text: impl Into<String>) -> &mut Self {
        self.add_button("confirm", text, ButtonOverrides::default())
    }

    /// Render the message as HTML: moves `text` into `content`. A no-op when
    /// no text is set, including a second call.
    pub fn html(&mut self) -> &mut Self {
        if let Some(text) = self.config.text.take() {
            self.config.content = Some(text);
        }
        self
    }

    /// Shallow-merge arbitrary configuration, bypassing the builder's
    /// invariants. An escape hatch for widget options without a dedicated
    /// method; keeping the result consistent is the caller's responsibility.
    pub fn set_config(&mut self, partial: Value) -> &mut Self {
        self.config.merge(partial);
        self
    }

    // ─────────────────────────────────────────────────────────────────────
    // Reads and publishing
    // ─────────────────────────────────────────────────────────────────────

    /// The current configuration.
    pub fn config(&self) -> &AlertConfig {
        &self.config
    }

    /// A top-level configuration value, or `None` for unknown keys.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.config.get(key)
    }

    /// The current configuration as a JSON string.
    pub fn json_config(&self) -> Result<String, FlashError> {
        Ok(self.config.to_value()?.to_string())
    }

    /// Publish the current configuration snapshot to the store.
    pub fn publish(&mut self) -> Result<(), FlashError> {
        self.publisher.publish(&mut self.store, &self.config)
    }

    /// Publish the final state and consume the builder.
    ///
    /// The drop hook would publish anyway; this is the error-checked path.
    pub fn finish(mut self) -> Result<(), FlashError> {
        let result = self.publish();
        self.finished = true;
        result
    }
}

impl<S: FlashStore> Drop for Notifier<S> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        if let Err(error) = self.publish() {
            warn!(%error, "failed to flash alert configuration at end of request");
        }
    }
}
