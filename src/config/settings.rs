use std::env;

/// How the CLI writes normalized lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One normalized line per input line
    Text,
    /// JSON Lines with the original text and change counts
    Json,
}

/// Settings for the command-line front end
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Output format (default: text)
    pub format: OutputFormat,

    /// Drop lines whose normalized form is too short to synthesize (default: false)
    pub skip_trivial: bool,

    /// Read input lines from this file instead of stdin
    pub input_path: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            skip_trivial: false,
            input_path: None,
        }
    }
}

impl CliConfig {
    /// Load CLI settings from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(format_str) = env::var("MARATHI_NORM_FORMAT") {
            config.format = match format_str.to_lowercase().as_str() {
                "json" | "jsonl" => OutputFormat::Json,
                _ => OutputFormat::Text,
            };
        }

        if let Ok(val) = env::var("MARATHI_NORM_SKIP_TRIVIAL") {
            config.skip_trivial = val.to_lowercase() == "true";
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.skip_trivial);
        assert!(config.input_path.is_none());
    }

    #[test]
    fn test_from_env_values() {
        env::set_var("MARATHI_NORM_FORMAT", "JSON");
        env::set_var("MARATHI_NORM_SKIP_TRIVIAL", "true");

        let config = CliConfig::from_env();
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.skip_trivial);

        // Unknown formats fall back to text
        env::set_var("MARATHI_NORM_FORMAT", "yaml");
        env::set_var("MARATHI_NORM_SKIP_TRIVIAL", "no");

        let config = CliConfig::from_env();
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.skip_trivial);

        // Cleanup
        env::remove_var("MARATHI_NORM_FORMAT");
        env::remove_var("MARATHI_NORM_SKIP_TRIVIAL");
    }
}
