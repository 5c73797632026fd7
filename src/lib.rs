//! Sweet Flash - fluent flash alerts for server-rendered web apps
//!
//! Builds the configuration for a single modal alert and stages it in a
//! one-shot flash store, so the next page render can pick it up and hand it
//! to the client-side dialog widget.
//!
//! ```
//! use sweet_flash::{alert, MemoryFlashStore};
//!
//! let mut store = MemoryFlashStore::new();
//!
//! let mut flash = alert(&mut store);
//! flash.success("Your profile was updated.", "Saved")?;
//! flash.confirm_button("OK");
//! flash.finish()?;
//!
//! // The next request reads the staged configuration exactly once.
//! assert!(store.take("sweet_alert.alert").is_some());
//! assert!(store.take("sweet_alert.alert").is_none());
//! # Ok::<(), sweet_flash::FlashError>(())
//! ```

pub mod alert;
pub mod config;
pub mod publish;
pub mod settings;
pub mod store;

pub use alert::Notifier;
pub use config::{AlertConfig, ButtonConfig, ButtonOverrides, ButtonSlot, Icon};
pub use publish::{FlashError, FlashPublisher, DEFAULT_NAMESPACE};
pub use settings::{Settings, DEFAULT_AUTOCLOSE_MS};
pub use store::{FlashEntry, FlashStore, MemoryFlashStore};

/// Start building an alert against `store` with the default settings.
pub fn alert<S: FlashStore>(store: S) -> Notifier<S> {
    Notifier::new(store)
}
