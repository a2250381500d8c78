//! Config command implementation.
//!
//! Manages the preferences file that supplies CLI defaults. Only defaults
//! live here; calculations are never stored.

use anyhow::Result;
use clap::{Args, Subcommand};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use cuppa_core::{CompoundingFrequency, DepositFrequency};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use crate::output::{print_header, print_info, print_success, print_warning, KeyValue};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Get a configuration value
    Get(GetArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// List available configuration keys
    List,

    /// Reset configuration to defaults
    Reset(ResetArgs),

    /// Show configuration file location
    Path,
}

/// Arguments for get subcommand.
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Configuration key
    pub key: String,
}

/// Arguments for set subcommand.
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key
    pub key: String,

    /// Configuration value
    pub value: String,
}

/// Arguments for reset subcommand.
#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Reset all settings (not just one)
    #[arg(long)]
    pub all: bool,

    /// Specific key to reset (optional)
    pub key: Option<String>,
}

/// Preference keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    /// Default output format
    DefaultFormat,
    /// Default deposit frequency
    DepositFrequency,
    /// Default compounding frequency
    CompoundingFrequency,
    /// Symbol prefixed to currency amounts
    CurrencySymbol,
    /// Whether to use colors
    UseColors,
}

impl ConfigKey {
    fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default_format" | "format" => Some(Self::DefaultFormat),
            "deposit_frequency" | "deposit" => Some(Self::DepositFrequency),
            "compounding_frequency" | "compounding" => Some(Self::CompoundingFrequency),
            "currency_symbol" | "symbol" => Some(Self::CurrencySymbol),
            "use_colors" | "colors" => Some(Self::UseColors),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::DefaultFormat => "default_format",
            Self::DepositFrequency => "deposit_frequency",
            Self::CompoundingFrequency => "compounding_frequency",
            Self::CurrencySymbol => "currency_symbol",
            Self::UseColors => "use_colors",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Self::DefaultFormat => "Default output format (table, json, csv, minimal)",
            Self::DepositFrequency => "Default deposit frequency (daily, weekly, monthly, annually)",
            Self::CompoundingFrequency => {
                "Default compounding frequency (daily, monthly, quarterly, annually)"
            }
            Self::CurrencySymbol => "Symbol shown before amounts ($, €, £, ...)",
            Self::UseColors => "Enable colored output (true, false)",
        }
    }

    fn default_value(&self) -> &'static str {
        match self {
            Self::DefaultFormat => "table",
            Self::DepositFrequency => "monthly",
            Self::CompoundingFrequency => "annually",
            Self::CurrencySymbol => "$",
            Self::UseColors => "true",
        }
    }

    fn all() -> &'static [Self] {
        &[
            Self::DefaultFormat,
            Self::DepositFrequency,
            Self::CompoundingFrequency,
            Self::CurrencySymbol,
            Self::UseColors,
        ]
    }

    fn parse(s: &str) -> CliResult<Self> {
        Self::from_str(s).ok_or_else(|| CliError::UnknownConfigKey(s.to_string()))
    }
}

/// Preferences stored as a flat JSON object.
#[derive(Debug, Default, serde::Serialize)]
pub struct Preferences {
    #[serde(flatten)]
    values: HashMap<String, String>,
}

impl Preferences {
    /// Loads preferences, treating a missing file as all defaults.
    ///
    /// A file that is not a JSON object is ignored with a warning, and
    /// entries whose value is not a string are dropped.
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content, path))
    }

    fn from_json(content: &str, path: &Path) -> Self {
        let raw: HashMap<String, serde_json::Value> = match serde_json::from_str(content) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "ignoring unreadable preferences");
                return Self::default();
            }
        };

        let mut values = HashMap::with_capacity(raw.len());
        for (key, value) in raw {
            match value {
                serde_json::Value::String(text) => {
                    values.insert(key, text);
                }
                other => {
                    tracing::warn!(%key, value = %other, "ignoring non-string preference");
                }
            }
        }
        tracing::debug!(path = %path.display(), "loaded preferences");
        Self { values }
    }

    /// Writes preferences, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> CliResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "saved preferences");
        Ok(())
    }

    fn get(&self, key: ConfigKey) -> Option<&String> {
        self.values.get(key.as_str())
    }

    fn value_or_default(&self, key: ConfigKey) -> &str {
        self.get(key).map_or(key.default_value(), String::as_str)
    }

    fn set(&mut self, key: ConfigKey, value: String) {
        self.values.insert(key.as_str().to_string(), value);
    }

    fn remove(&mut self, key: ConfigKey) {
        self.values.remove(key.as_str());
    }

    /// Output format used when `--format` is not given.
    pub fn default_format(&self) -> OutputFormat {
        OutputFormat::parse(self.value_or_default(ConfigKey::DefaultFormat)).unwrap_or_default()
    }

    /// Deposit frequency used when the flag is not given.
    pub fn deposit_frequency(&self) -> DepositFrequency {
        self.value_or_default(ConfigKey::DepositFrequency)
            .parse()
            .unwrap_or_default()
    }

    /// Compounding frequency used when the flag is not given.
    pub fn compounding_frequency(&self) -> CompoundingFrequency {
        self.value_or_default(ConfigKey::CompoundingFrequency)
            .parse()
            .unwrap_or_default()
    }

    /// Symbol prefixed to displayed amounts.
    pub fn currency_symbol(&self) -> &str {
        self.value_or_default(ConfigKey::CurrencySymbol)
    }

    /// Whether colored output is enabled.
    pub fn use_colors(&self) -> bool {
        parse_bool(self.value_or_default(ConfigKey::UseColors)).unwrap_or(true)
    }
}

/// Resolves the preferences file path.
pub fn config_path(explicit: Option<&Path>) -> CliResult<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    let home = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or(CliError::ConfigDir)?;
    Ok(home.join("cuppa").join("config.json"))
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, format: OutputFormat, path: &Path) -> Result<()> {
    match args.command {
        ConfigCommand::Show => execute_show(format, path),
        ConfigCommand::Get(get_args) => execute_get(get_args, format, path),
        ConfigCommand::Set(set_args) => execute_set(set_args, path),
        ConfigCommand::List => execute_list(format),
        ConfigCommand::Reset(reset_args) => execute_reset(reset_args, path),
        ConfigCommand::Path => execute_path(path),
    }
}

/// Show current configuration.
fn execute_show(format: OutputFormat, path: &Path) -> Result<()> {
    let config = Preferences::load(path)?;

    match format {
        OutputFormat::Table => {
            let results: Vec<KeyValue> = ConfigKey::all()
                .iter()
                .map(|key| KeyValue::new(key.as_str(), config.value_or_default(*key)))
                .collect();
            print_header("Current Configuration");
            crate::output::print_output(&results, format)?;
        }
        OutputFormat::Json => {
            let output: BTreeMap<&str, &str> = ConfigKey::all()
                .iter()
                .map(|key| (key.as_str(), config.value_or_default(*key)))
                .collect();
            crate::output::print_json_value(&output)?;
        }
        OutputFormat::Csv => {
            let results: Vec<KeyValue> = ConfigKey::all()
                .iter()
                .map(|key| KeyValue::new(key.as_str(), config.value_or_default(*key)))
                .collect();
            crate::output::print_output(&results, format)?;
        }
        OutputFormat::Minimal => {
            for key in ConfigKey::all() {
                println!("{}={}", key.as_str(), config.value_or_default(*key));
            }
        }
    }

    Ok(())
}

/// Get a configuration value.
fn execute_get(args: GetArgs, format: OutputFormat, path: &Path) -> Result<()> {
    let config = Preferences::load(path)?;
    let key = ConfigKey::parse(&args.key)?;
    let value = config.value_or_default(key);

    match format {
        OutputFormat::Table | OutputFormat::Csv => {
            println!("{}: {}", key.as_str(), value);
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "key": key.as_str(),
                "value": value
            });
            crate::output::print_json_value(&output)?;
        }
        OutputFormat::Minimal => {
            println!("{}", value);
        }
    }

    Ok(())
}

/// Set a configuration value.
fn execute_set(args: SetArgs, path: &Path) -> Result<()> {
    let key = ConfigKey::parse(&args.key)?;
    let value = validate_config_value(key, &args.value)?;

    let mut config = Preferences::load(path)?;
    config.set(key, value.clone());
    config.save(path)?;

    print_success(&format!("Set {} = {}", key.as_str(), value));
    Ok(())
}

/// List available configuration keys.
fn execute_list(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            let results: Vec<KeyValue> = ConfigKey::all()
                .iter()
                .map(|key| {
                    KeyValue::new(
                        key.as_str(),
                        format!("{} (default: {})", key.description(), key.default_value()),
                    )
                })
                .collect();
            print_header("Available Configuration Keys");
            crate::output::print_output(&results, format)?;
        }
        OutputFormat::Json => {
            let output: Vec<_> = ConfigKey::all()
                .iter()
                .map(|key| {
                    serde_json::json!({
                        "key": key.as_str(),
                        "description": key.description(),
                        "default": key.default_value()
                    })
                })
                .collect();
            crate::output::print_json_value(&output)?;
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            wtr.write_record(["key", "description", "default"])?;
            for key in ConfigKey::all() {
                wtr.write_record([key.as_str(), key.description(), key.default_value()])?;
            }
            wtr.flush()?;
        }
        OutputFormat::Minimal => {
            for key in ConfigKey::all() {
                println!("{}", key.as_str());
            }
        }
    }

    Ok(())
}

/// Reset configuration.
fn execute_reset(args: ResetArgs, path: &Path) -> Result<()> {
    if args.all {
        Preferences::default().save(path)?;
        print_success("Reset all configuration to defaults");
    } else if let Some(key_str) = args.key {
        let key = ConfigKey::parse(&key_str)?;
        let mut config = Preferences::load(path)?;
        config.remove(key);
        config.save(path)?;
        print_success(&format!(
            "Reset {} to default ({})",
            key.as_str(),
            key.default_value()
        ));
    } else {
        print_warning("Use --all to reset all settings, or specify a key to reset");
    }

    Ok(())
}

/// Show configuration file path.
fn execute_path(path: &Path) -> Result<()> {
    print_info(&format!("Config file: {}", path.display()));
    if path.exists() {
        print_info("Status: exists");
    } else {
        print_info("Status: not created yet (using defaults)");
    }
    Ok(())
}

/// Validates a value for `key` and returns its normalized form.
fn validate_config_value(key: ConfigKey, value: &str) -> CliResult<String> {
    let invalid = |hint: &'static str| CliError::InvalidConfigValue {
        key: key.as_str(),
        value: value.to_string(),
        hint,
    };

    match key {
        ConfigKey::DefaultFormat => OutputFormat::parse(value)
            .map(|format| format.as_str().to_string())
            .ok_or_else(|| invalid("Use table, json, csv, or minimal.")),
        ConfigKey::DepositFrequency => value
            .parse::<DepositFrequency>()
            .map(|freq| freq.as_str().to_string())
            .map_err(|_| invalid("Use daily, weekly, monthly, or annually.")),
        ConfigKey::CompoundingFrequency => value
            .parse::<CompoundingFrequency>()
            .map(|freq| freq.as_str().to_string())
            .map_err(|_| invalid("Use daily, monthly, quarterly, or annually.")),
        ConfigKey::CurrencySymbol => {
            let symbol = value.trim();
            if symbol.is_empty() || symbol.chars().count() > 4 {
                return Err(invalid("Use a symbol of 1 to 4 characters."));
            }
            Ok(symbol.to_string())
        }
        ConfigKey::UseColors => parse_bool(value)
            .map(|flag| flag.to_string())
            .ok_or_else(|| invalid("Use true or false.")),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() {
        let dir = TempDir::new().unwrap();
        let prefs = Preferences::load(&dir.path().join("missing.json")).unwrap();
        assert_eq!(prefs.default_format(), OutputFormat::Table);
        assert_eq!(prefs.deposit_frequency(), DepositFrequency::Monthly);
        assert_eq!(prefs.compounding_frequency(), CompoundingFrequency::Annually);
        assert_eq!(prefs.currency_symbol(), "$");
        assert!(prefs.use_colors());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut prefs = Preferences::default();
        prefs.set(ConfigKey::CompoundingFrequency, "quarterly".to_string());
        prefs.set(ConfigKey::CurrencySymbol, "€".to_string());
        prefs.save(&path).unwrap();

        let reloaded = Preferences::load(&path).unwrap();
        assert_eq!(reloaded.compounding_frequency(), CompoundingFrequency::Quarterly);
        assert_eq!(reloaded.currency_symbol(), "€");
        assert_eq!(reloaded.deposit_frequency(), DepositFrequency::Monthly);
    }

    #[test]
    fn test_corrupt_value_falls_back_to_default() {
        let mut prefs = Preferences::default();
        prefs.set(ConfigKey::DepositFrequency, "hourly".to_string());
        prefs.set(ConfigKey::DefaultFormat, "yaml".to_string());
        assert_eq!(prefs.deposit_frequency(), DepositFrequency::Monthly);
        assert_eq!(prefs.default_format(), OutputFormat::Table);
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let prefs = Preferences::load(&path).unwrap();
        assert_eq!(prefs.default_format(), OutputFormat::Table);
        assert_eq!(prefs.currency_symbol(), "$");
    }

    #[test]
    fn test_non_string_values_are_dropped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"use_colors": false, "currency_symbol": "£", "deposit_frequency": 12}"#,
        )
        .unwrap();

        let prefs = Preferences::load(&path).unwrap();
        assert!(prefs.use_colors());
        assert_eq!(prefs.currency_symbol(), "£");
        assert_eq!(prefs.deposit_frequency(), DepositFrequency::Monthly);
        assert!(prefs.get(ConfigKey::UseColors).is_none());
    }

    #[test]
    fn test_key_aliases() {
        assert_eq!(ConfigKey::from_str("symbol"), Some(ConfigKey::CurrencySymbol));
        assert_eq!(ConfigKey::from_str("COMPOUNDING"), Some(ConfigKey::CompoundingFrequency));
        assert!(matches!(
            ConfigKey::parse("precision"),
            Err(CliError::UnknownConfigKey(_))
        ));
    }

    #[test]
    fn test_validate_normalizes_values() {
        assert_eq!(
            validate_config_value(ConfigKey::DepositFrequency, "Weekly").unwrap(),
            "weekly"
        );
        assert_eq!(
            validate_config_value(ConfigKey::DefaultFormat, "JSON").unwrap(),
            "json"
        );
        assert_eq!(validate_config_value(ConfigKey::UseColors, "no").unwrap(), "false");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(validate_config_value(ConfigKey::CompoundingFrequency, "weekly").is_err());
        assert!(validate_config_value(ConfigKey::CurrencySymbol, "").is_err());
        assert!(validate_config_value(ConfigKey::CurrencySymbol, "dollars").is_err());
        assert!(validate_config_value(ConfigKey::UseColors, "maybe").is_err());
    }

    #[test]
    fn test_explicit_config_path_wins() {
        let path = config_path(Some(Path::new("/tmp/cuppa-test.json"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/cuppa-test.json"));
    }
}
