//! Config command handler.

use crate::config::{config_path, Config};
use crate::error::{HeaderError, Result};
use crate::output::{print_info, BOLD, CYAN, RESET};

/// Format the effective configuration as TOML.
pub fn format_config(config: &Config) -> Result<String> {
    toml::to_string(config)
        .map_err(|e| HeaderError::Config(format!("Failed to serialize config: {}", e)))
}

/// Print the config file location and the effective configuration.
pub fn config_display_command(config: &Config) -> Result<()> {
    let path = config_path()?;
    println!("{CYAN}{BOLD}Config file:{RESET} {}", path.display());
    if !path.exists() {
        print_info("Config file not created yet, showing defaults.");
    }
    println!();
    print!("{}", format_config(config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;

    #[test]
    fn test_format_config_round_trips() {
        let config = Config {
            base_path: "/ui".to_string(),
            color: false,
            ..Default::default()
        };
        let text = format_config(&config).unwrap();
        assert!(text.contains("base_path = \"/ui\""));
        assert_eq!(parse_config(&text).unwrap(), config);
    }
}
