use std::env;

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Start the session with the sample public groups.
    pub seed_sample_groups: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            seed_sample_groups: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(env::var("PORT").ok(), env::var("MOTIVGYM_SEED").ok())
    }

    fn from_vars(port: Option<String>, seed: Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            port: port
                .and_then(|value| value.trim().parse::<u16>().ok())
                .unwrap_or(defaults.port),
            seed_sample_groups: seed
                .map(|value| !matches!(value.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no" | "off"))
                .unwrap_or(defaults.seed_sample_groups),
        }
    }
}
