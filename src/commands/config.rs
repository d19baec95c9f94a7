use rpawogen::configtool::{AppConfig, get_config_file};

pub fn show_config() -> Result<(), String> {
    let path = get_config_file().map_err(|e| e.to_string())?;
    let config = AppConfig::load_from(&path).map_err(|e| e.to_string())?;
    println!("Config file: {}", path.display());
    let text = serde_json::to_string_pretty(&config).map_err(|e| e.to_string())?;
    println!("{}", text);
    Ok(())
}

pub fn update_config(
    default_length: Option<usize>,
    min_length: Option<usize>,
    max_length: Option<usize>,
    show_password: Option<bool>,
    clipboard_clear_secs: Option<u64>,
) -> Result<(), String> {
    let mut config = AppConfig::load().map_err(|e| format!("Failed to load config: {}", e))?;
    if let Some(v) = default_length { config.default_length = v; }
    if let Some(v) = min_length { config.min_length = v; }
    if let Some(v) = max_length { config.max_length = v; }
    if let Some(v) = show_password { config.show_password = v; }
    if let Some(v) = clipboard_clear_secs { config.clipboard_clear_secs = v; }
    config.save().map_err(|e| format!("Failed to save config: {}", e))?;
    println!("Configuration updated.");
    Ok(())
}

pub fn reset_config() -> Result<(), String> {
    AppConfig::default().save().map_err(|e| format!("Failed to save config: {}", e))?;
    println!("Configuration reset to defaults.");
    Ok(())
}
