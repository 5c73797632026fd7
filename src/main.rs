//! Sweet Flash demo - stage an alert, then replay the next request's read

use anyhow::Result;
use sweet_flash::{MemoryFlashStore, Notifier, Settings};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Log to stderr so the staged output stays readable
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry().with(fmt_layer).init();

    let settings = match Settings::load() {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            Settings::default()
        }
    };

    let mut store = MemoryFlashStore::new();

    // Request 1: a handler displays an alert, a later handler decides it
    // needs explicit confirmation.
    {
        let mut flash = Notifier::with_settings(&mut store, &settings);
        flash.success("Your profile was updated.", "Saved")?;
        flash.confirm_button("OK");
        flash.finish()?;
    }

    // Request 2: read each staged key exactly once.
    let keys: Vec<String> = store.entries().keys().cloned().collect();
    for key in keys {
        if let Some(value) = store.take(&key) {
            println!("{key} = {value}");
        }
    }
    println!("staged entries left after the read: {}", store.len());

    Ok(())
}
