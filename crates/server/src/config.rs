use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 80;
pub const DEFAULT_LOG_LEVEL: &str = "debug";
pub const DEFAULT_LOG_DIR: &str = ".";
pub const DEFAULT_LOG_FILE: &str = "stantest.log";
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 10;

/// Server configuration, assembled once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Tracing filter directive used when `RUST_LOG` is unset.
    pub log_level: String,
    pub log_dir: PathBuf,
    pub log_file: String,
    /// How long in-flight requests may run after a shutdown signal.
    pub shutdown_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            log_file: DEFAULT_LOG_FILE.to_string(),
            shutdown_timeout: Duration::from_secs(DEFAULT_SHUTDOWN_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_dir.join(&self.log_file)
    }
}
