use anyhow::{Context as _, Result};
use color_selector::PickerConfig;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

/// Print the JSON schema of the picker config, or write it to the path given
/// as the first argument.
///
/// ```bash
/// cargo run -p generate-config-schema -- color-selector.schema.json
/// ```
fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("generate_config_schema=info".parse()?),
        )
        .init();

    let schema = schemars::schema_for!(PickerConfig);
    let json = serde_json::to_string_pretty(&schema)?;

    match std::env::args().nth(1) {
        Some(path) => {
            std::fs::write(&path, json + "\n")
                .with_context(|| format!("Failed to write schema to {}", path))?;
            tracing::info!("Wrote picker config schema to {}", path);
        }
        None => println!("{}", json),
    }

    Ok(())
}
