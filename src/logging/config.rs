use std::env;

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Directory for the JSON log file; file logging is off when unset
    pub log_dir: Option<String>,

    /// Filter for console output on stderr (default: "marathi_normalizer=info")
    pub console_log_level: String,

    /// Filter for file output (default: "debug")
    pub file_log_level: String,

    /// Console format: "pretty" or "compact" (default: "compact")
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Compact,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: None,
            console_log_level: "marathi_normalizer=info".to_string(),
            file_log_level: "debug".to_string(),
            format: LogFormat::Compact,
        }
    }
}

impl LogConfig {
    /// Load logging configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("MARATHI_NORM_LOG_DIR") {
            if !dir.trim().is_empty() {
                config.log_dir = Some(dir);
            }
        }

        if let Ok(level) = env::var("RUST_LOG") {
            config.console_log_level = level;
        }

        if let Ok(level) = env::var("MARATHI_NORM_FILE_LOG_LEVEL") {
            config.file_log_level = level;
        }

        if let Ok(format_str) = env::var("LOG_FORMAT") {
            config.format = match format_str.to_lowercase().as_str() {
                "pretty" => LogFormat::Pretty,
                _ => LogFormat::Compact,
            };
        }

        config
    }
}
