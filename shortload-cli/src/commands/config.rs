use crate::cli::ConfigCommands;
use anyhow::{Context, Result};
use shortload_config::{ConfigLoader, ShortloadConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Handle configuration management commands
pub fn handle_config_command(
    command: &ConfigCommands,
    config_path: Option<&PathBuf>,
) -> Result<()> {
    match command {
        ConfigCommands::Validate { config_file } => handle_config_validate(config_file),
        ConfigCommands::Generate { output, force } => {
            handle_config_generate(output.as_deref(), *force)
        }
        ConfigCommands::Show { format } => handle_config_show(config_path, format),
    }
}

/// Handle configuration validation
fn handle_config_validate(config_file: &Path) -> Result<()> {
    info!("Validating configuration file: {:?}", config_file);

    if !config_file.exists() {
        return Err(anyhow::anyhow!(
            "Configuration file not found: {:?}",
            config_file
        ));
    }

    match ConfigLoader::new().from_file(config_file) {
        Ok(config) => {
            let registry = config.scenario.build_registry()?;
            println!("✅ Configuration file is valid");
            println!("   Target: {}", config.target.host);
            println!("   Users: {} (hatch rate {})", config.load.users, config.load.hatch_rate);
            println!("   Tasks: {}", registry.len());
            info!("Configuration validation passed");
            Ok(())
        }
        Err(e) => {
            println!("❌ Configuration validation failed: {}", e);
            error!("Configuration validation failed: {}", e);
            Err(e.into())
        }
    }
}

/// Handle configuration generation
fn handle_config_generate(output: Option<&Path>, force: bool) -> Result<()> {
    let content = ShortloadConfig::generate_sample();

    let Some(output) = output else {
        print!("{}", content);
        return Ok(());
    };
    info!("Generating sample configuration at: {:?}", output);

    if output.exists() && !force {
        return Err(anyhow::anyhow!(
            "Output file already exists: {:?}. Use --force to overwrite.",
            output
        ));
    }

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent).context("Failed to create output directory")?;
    }

    fs::write(output, content).context("Failed to write configuration file")?;
    println!("✅ Sample configuration generated at: {:?}", output);
    Ok(())
}

/// Handle configuration display
fn handle_config_show(config_path: Option<&PathBuf>, format: &str) -> Result<()> {
    let config = crate::load_config(config_path)?;

    let rendered = match format.to_lowercase().as_str() {
        "yaml" | "yml" => serde_yaml::to_string(&config).context("Failed to serialize config to YAML")?,
        "json" => serde_json::to_string_pretty(&config).context("Failed to serialize config to JSON")?,
        _ => {
            return Err(anyhow::anyhow!(
                "Unsupported format: {}. Supported formats: yaml, json",
                format
            ));
        }
    };

    println!("{}", rendered);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_generate_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("shortload.yaml");
        fs::write(&output, "existing").unwrap();

        assert!(handle_config_generate(Some(&output), false).is_err());
        assert_eq!(fs::read_to_string(&output).unwrap(), "existing");

        handle_config_generate(Some(&output), true).unwrap();
        assert!(fs::read_to_string(&output).unwrap().contains("target:"));
    }

    #[test]
    fn test_generate_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("nested/configs/shortload.yaml");

        handle_config_generate(Some(&output), false).unwrap();
        assert!(output.exists());
    }

    #[test]
    fn test_validate_reports_bad_files() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "load:\n  users: 0").unwrap();
        assert!(handle_config_validate(file.path()).is_err());

        assert!(handle_config_validate(Path::new("/nonexistent/shortload.yaml")).is_err());
    }

    #[test]
    fn test_show_rejects_unknown_format() {
        assert!(handle_config_show(None, "toml").is_err());
    }
}
