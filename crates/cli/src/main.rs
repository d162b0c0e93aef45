use clap::Parser;
use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use server::config::{
    Config, DEFAULT_HOST, DEFAULT_LOG_DIR, DEFAULT_LOG_FILE, DEFAULT_LOG_LEVEL, DEFAULT_PORT,
    DEFAULT_SHUTDOWN_TIMEOUT_SECS,
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use utoipa::OpenApi;

#[derive(Parser)]
#[command(name = "episode-server")]
#[command(version = env!("APP_VERSION"))]
#[command(about = "Filters submitted episode lists down to DRM-enabled shows", long_about = None)]
struct Cli {
    /// Host to bind to
    #[arg(long, env = "STAN_EPISODE_SERVER_HOST", default_value_t = DEFAULT_HOST)]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "STAN_EPISODE_SERVER_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Log filter directive, overridden by RUST_LOG
    #[arg(long, env = "STAN_EPISODE_SERVER_LOG_LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Directory holding the log file
    #[arg(long, env = "STAN_EPISODE_SERVER_LOG_DIR", default_value = DEFAULT_LOG_DIR)]
    log_dir: PathBuf,

    /// Log file name, appended to across runs
    #[arg(long, env = "STAN_EPISODE_SERVER_LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Seconds to wait for in-flight requests on shutdown
    #[arg(long, env = "STAN_EPISODE_SERVER_SHUTDOWN_TIMEOUT", default_value_t = DEFAULT_SHUTDOWN_TIMEOUT_SECS)]
    shutdown_timeout: u64,

    /// Print the OpenAPI document and exit
    #[arg(long)]
    print_openapi: bool,
}

impl Cli {
    fn into_config(self) -> Config {
        Config {
            host: self.host,
            port: self.port,
            log_level: self.log_level,
            log_dir: self.log_dir,
            log_file: self.log_file,
            shutdown_timeout: Duration::from_secs(self.shutdown_timeout),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.print_openapi {
        println!("{}", server::openapi::ApiDoc::openapi().to_pretty_json()?);
        return Ok(());
    }

    let config = cli.into_config();

    // Must stay alive until exit so buffered lines reach the log file
    let _guard = init_tracing(&config)?;

    server::banner::print_banner(env!("APP_VERSION"));
    tracing::debug!("Loaded configuration: {:?}", config);
    tracing::info!("Writing logs to {}", config.log_path().display());

    server::run_server(config).await
}

fn init_tracing(config: &Config) -> Result<WorkerGuard, Box<dyn std::error::Error>> {
    std::fs::create_dir_all(&config.log_dir)?;

    let file = tracing_appender::rolling::never(&config.log_dir, &config.log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .try_init()?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, FromArgMatches};

    use super::*;

    /// Parse flags only, ignoring any `STAN_EPISODE_SERVER_*` variables set
    /// in the test environment.
    fn parse_flags(args: &[&str]) -> Result<Cli, clap::Error> {
        let matches = Cli::command()
            .mut_args(|arg| arg.env(None::<&'static str>))
            .try_get_matches_from(args.iter().copied())?;
        Cli::from_arg_matches(&matches)
    }

    #[test]
    fn test_defaults() {
        let cli = parse_flags(&["episode-server"]).unwrap();
        assert_eq!(cli.into_config(), Config::default());
    }

    #[test]
    fn test_flags() {
        let cli = parse_flags(&[
            "episode-server",
            "--host",
            "127.0.0.1",
            "-p",
            "8080",
            "--log-level",
            "info",
            "--shutdown-timeout",
            "3",
        ])
        .unwrap();
        let config = cli.into_config();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.shutdown_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(parse_flags(&["episode-server", "--port", "eighty"]).is_err());
    }

    #[test]
    fn test_env_fallback_registered() {
        let command = Cli::command();
        let port = command
            .get_arguments()
            .find(|arg| arg.get_id() == "port")
            .unwrap();
        assert_eq!(
            port.get_env().and_then(|name| name.to_str()),
            Some("STAN_EPISODE_SERVER_PORT")
        );
    }
}
