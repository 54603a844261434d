use std::path::Path;

use anyhow::Result;

use swipedeck_core::AppConfig;

pub fn run(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        println!("Config already exists at {}", path.display());
        println!("\nTo overwrite it with defaults, run:");
        println!("  swipedeck init --force");
        return Ok(());
    }

    AppConfig::default().save_to(path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
