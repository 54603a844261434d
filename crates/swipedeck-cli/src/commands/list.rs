use std::path::Path;

use anyhow::Result;

use swipedeck_core::AppConfig;
use swipedeck_tui::widgets::glyph_symbol;

pub fn run(config: &AppConfig, deck: Option<&Path>, json: bool) -> Result<()> {
    let items = super::load_items(config, deck)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("The deck is empty.");
        println!("\nAdd [[items]] tables to the config, or run:");
        println!("  swipedeck list --deck <file>");
        return Ok(());
    }

    println!("Cards ({}):\n", items.len());

    for (index, item) in items.iter().enumerate() {
        println!("  {}. {} {}", index + 1, glyph_symbol(&item.glyph), item.title);
        if !item.description.is_empty() {
            println!("     {}", item.description);
        }
        println!();
    }

    Ok(())
}
