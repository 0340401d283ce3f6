// crates/host/src/config.rs

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

/// HTTP front end for the Soroban IDE agents.
///
/// Model settings come from the environment (see `GroqClient::from_env`);
/// a `.env` file in the working directory is loaded first.
#[derive(Debug, Parser)]
#[command(name = "ide-agent", version, about)]
pub struct Args {
    /// Interface to bind.
    #[arg(long, env = "AGENT_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "AGENT_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, env = "AGENT_LOG", default_value = "info")]
    pub log: String,
}

impl Args {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_all_interfaces() {
        let args = Args::try_parse_from(["ide-agent"]).unwrap();
        assert_eq!(args.port, 8000);
        assert_eq!(args.socket_addr().unwrap().to_string(), "0.0.0.0:8000");
    }

    #[test]
    fn flags_override_defaults() {
        let args =
            Args::try_parse_from(["ide-agent", "--host", "127.0.0.1", "--port", "9001"]).unwrap();
        assert_eq!(args.socket_addr().unwrap().to_string(), "127.0.0.1:9001");
    }

    #[test]
    fn hostnames_are_rejected() {
        let args = Args::try_parse_from(["ide-agent", "--host", "localhost"]).unwrap();
        assert!(args.socket_addr().is_err());
    }
}
