use std::env;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// Listener binding. The only runtime configuration the service takes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Read `RAPPORT_HOST` and `RAPPORT_PORT`, falling back to defaults.
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let host = lookup("RAPPORT_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("RAPPORT_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| eyre::eyre!("invalid RAPPORT_PORT {raw:?}: {e}"))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
