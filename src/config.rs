//! Runtime configuration from command-line flags, with `APP_*` environment fallbacks.

use clap::{ArgAction, Parser, ValueEnum};
use std::fmt;

/// Deployment mode. Outside production, error responses carry a diagnostic `stack`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }

    pub fn exposes_diagnostics(&self) -> bool {
        *self != Environment::Production
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "crud-api", version, about = "In-memory CRUD API for users, products and tasks")]
pub struct Config {
    /// Interface to listen on.
    #[arg(long, env = "APP_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "APP_PORT", default_value_t = 3000)]
    pub port: u16,

    #[arg(long, env = "APP_ENV", value_enum, default_value_t = Environment::Development)]
    pub environment: Environment,

    /// Load the demo users, products and tasks at startup.
    #[arg(long, env = "APP_SEED", default_value_t = true, action = ArgAction::Set)]
    pub seed: bool,

    /// Mailbox size of each resource actor.
    #[arg(long, env = "APP_CHANNEL_CAPACITY", default_value_t = 32, value_parser = parse_capacity)]
    pub channel_capacity: usize,
}

impl Config {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_capacity(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("channel capacity must be at least 1".to_string()),
        Ok(capacity) => Ok(capacity),
        Err(e) => Err(e.to_string()),
    }
}
