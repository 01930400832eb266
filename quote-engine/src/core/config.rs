/// Quote tool configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | QUOTE_LOG_LEVEL | info | Max log level |
/// | QUOTE_LOG_DIR | (unset) | Directory for daily rolling log files |
/// | ENVIRONMENT | development | Runtime environment |
/// | QUOTE_MATRIX_QUANTITIES | 10,20,30,50,100 | Default price matrix quantities |
/// | QUOTE_MATRIX_MAX_COLORS | 4 | Default price matrix color columns |
///
/// # Example
///
/// ```ignore
/// QUOTE_LOG_LEVEL=debug quote cost order.json
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_dir: Option<String>,
    /// development | staging | production
    pub environment: String,
    pub matrix_quantities: Vec<u32>,
    pub matrix_max_colors: u32,
}

const DEFAULT_MATRIX_QUANTITIES: [u32; 5] = [10, 20, 30, 50, 100];

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            log_level: std::env::var("QUOTE_LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("QUOTE_LOG_DIR").ok().filter(|d| !d.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            matrix_quantities: std::env::var("QUOTE_MATRIX_QUANTITIES")
                .ok()
                .and_then(|v| parse_quantities(&v))
                .unwrap_or_else(|| DEFAULT_MATRIX_QUANTITIES.to_vec()),
            matrix_max_colors: std::env::var("QUOTE_MATRIX_MAX_COLORS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(4),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            log_dir: None,
            environment: "development".into(),
            matrix_quantities: DEFAULT_MATRIX_QUANTITIES.to_vec(),
            matrix_max_colors: 4,
        }
    }
}

/// Comma-separated quantity list; None if any entry is not a number
pub fn parse_quantities(value: &str) -> Option<Vec<u32>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse().ok())
        .collect()
}
