use anyhow::{Context, Result};

/// Points returned per curve when the caller does not ask for a specific count.
pub const DEFAULT_MAX_POINTS: usize = 200;
pub const MIN_POINTS: usize = 2;
pub const MAX_POINTS_LIMIT: usize = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// HTTP port; `None` runs the server over stdio
    pub port: Option<u16>,
    pub bind_addr: String,
    pub max_points: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: None,
            bind_addr: "0.0.0.0".to_string(),
            max_points: DEFAULT_MAX_POINTS,
        }
    }
}

impl ServerConfig {
    /// Build from environment variables.
    ///
    /// | Env Var | Default | Purpose |
    /// |---------|---------|---------|
    /// | `PORT` | (none) | Serve over HTTP on this port instead of stdio |
    /// | `BIND_ADDR` | `0.0.0.0` | HTTP listen address |
    /// | `PAYOFF_MAX_POINTS` | `200` | Default curve size in tool responses |
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let port = lookup("PORT")
            .map(|v| v.parse::<u16>().with_context(|| format!("Invalid PORT: {v}")))
            .transpose()?;

        let bind_addr = lookup("BIND_ADDR").unwrap_or(defaults.bind_addr);

        let max_points = match lookup("PAYOFF_MAX_POINTS") {
            Some(v) => v
                .parse::<usize>()
                .with_context(|| format!("Invalid PAYOFF_MAX_POINTS: {v}"))?
                .clamp(MIN_POINTS, MAX_POINTS_LIMIT),
            None => defaults.max_points,
        };

        Ok(Self {
            port,
            bind_addr,
            max_points,
        })
    }

    pub fn listen_addr(&self) -> Option<String> {
        self.port.map(|port| format!("{}:{port}", self.bind_addr))
    }
}
