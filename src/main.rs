use anyhow::Result;
use textlens::config::{Config, API_URL_ENV};
use textlens::{logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Error: {e}");
            eprintln!("\n💡 To use this app:");
            eprintln!("1. Point it at a running analysis service");
            eprintln!("2. Set the address via {API_URL_ENV} or in textlens.toml under [api] base_url");
            eprintln!("3. Run the app again");
            return Ok(());
        }
    };

    logger::init(&config.logging)?;

    // Run the TUI application
    ui::run_app(&config).await?;

    Ok(())
}
