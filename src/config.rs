use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub processing: ProcessingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProcessingConfig {
    /// Largest snapshot body accepted by the /api routes, in bytes.
    #[serde(default = "default_max_snapshot_bytes")]
    pub max_snapshot_bytes: usize,
    /// Run the Overview and Resolvers modes concurrently on blocking threads.
    #[serde(default = "default_parallel_modes")]
    pub parallel_modes: bool,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            max_snapshot_bytes: default_max_snapshot_bytes(),
            parallel_modes: default_parallel_modes(),
        }
    }
}

fn default_max_snapshot_bytes() -> usize {
    8 * 1024 * 1024
}

fn default_parallel_modes() -> bool {
    true
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(!self.server.host.is_empty(), "server.host must be non-empty");
        anyhow::ensure!(
            self.processing.max_snapshot_bytes > 0,
            "processing.max_snapshot_bytes must be > 0, got {}",
            self.processing.max_snapshot_bytes
        );
        Ok(())
    }
}
