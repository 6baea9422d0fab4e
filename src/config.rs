use std::path::PathBuf;

/// Environment variable holding the listening port.
pub const PORT_ENV: &str = "PORT";

/// Environment variable holding the listening host.
pub const HOST_ENV: &str = "HOST";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Address string handed to the TCP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Address printed for humans; wildcard hosts are shown as `localhost`.
    pub fn display_addr(&self) -> String {
        let host = match self.host.as_str() {
            "0.0.0.0" | "::" | "" => "localhost",
            other => other,
        };
        format!("{}:{}", host, self.port)
    }
}

/// Load a `.env` file from the current directory or its ancestors.
///
/// A missing file is not an error; the environment is simply left as is.
pub fn load_env_file() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}
