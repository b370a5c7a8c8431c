//! Show the effective configuration.

use anyhow::Result;
use console::style;

use heirloom_infra::filesystem::config_path;

use crate::state::AppState;

pub fn show_config(state: &AppState, json: bool) -> Result<()> {
    let path = config_path(&state.data_dir);

    if json {
        let output = serde_json::json!({
            "config_file": path.display().to_string(),
            "config": state.config,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let config = &state.config;
    println!();
    println!("  {}  {}", style("Config file:").bold(), style(path.display()).dim());
    println!("  {}      {}", style("Webhook:").bold(), style(&config.webhook_url).cyan());
    println!("  {}      {}s", style("Timeout:").bold(), config.timeout().as_secs());
    println!("  {}       {}", style("Source:").bold(), config.source);
    println!(
        "  {}  {}",
        style("Transcripts:").bold(),
        config.transcript_dir.display()
    );
    println!();

    Ok(())
}
