//! HTTP server command
//!
//! Runs the quiz API against a SQLite database, creating the schema on start.

use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use clap::Parser;

use quizdeck_server::db::pool::DEFAULT_MAX_CONNECTIONS;
use quizdeck_server::db::DEFAULT_DATABASE_URL;
use quizdeck_server::ServerConfig;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Interface to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// SQLite database URL
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Maximum pooled database connections
    #[arg(long, env = "MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl ServeArgs {
    fn into_config(self) -> ServerConfig {
        ServerConfig {
            bind_addr: SocketAddr::new(self.host, self.port),
            database_url: self.database_url,
            max_connections: self.max_connections,
        }
    }
}

/// Run the HTTP server until Ctrl+C or SIGTERM
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.into_config();

    tracing::info!(
        addr = %config.bind_addr,
        database = %config.database_url,
        "starting quizdeck server"
    );

    quizdeck_server::serve(config)
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_build_config() {
        let args = ServeArgs::parse_from([
            "serve",
            "--host",
            "127.0.0.1",
            "--port",
            "9100",
            "--database-url",
            "sqlite://other.db",
            "--max-connections",
            "2",
        ]);
        let config = args.into_config();

        assert_eq!(config.bind_addr, "127.0.0.1:9100".parse::<SocketAddr>().unwrap());
        assert_eq!(config.database_url, "sqlite://other.db");
        assert_eq!(config.max_connections, 2);
    }
}
