//! Handles settings for the application.
//!
//! Sources, lowest precedence first:
//! - `config/fairsplit.toml` (or the file passed with `--config`), optional
//! - environment variables prefixed with `FAIRSPLIT`, e.g.
//!   `FAIRSPLIT_SERVER__PORT=8080`
//! - command line flags
use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "config/fairsplit.toml";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Server {
    pub bind: String,
    pub port: u16,
    /// Seed the demo group at startup and expose `POST /demo/reset`.
    pub demo: bool,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 3000,
            demo: false,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PaymentLink {
    pub fallback_handle: String,
    pub fallback_name: String,
    pub note: String,
}

impl Default for PaymentLink {
    fn default() -> Self {
        let template = engine::PaymentLinkTemplate::default();
        Self {
            fallback_handle: template.fallback_handle,
            fallback_name: template.fallback_name,
            note: template.note,
        }
    }
}

impl From<PaymentLink> for engine::PaymentLinkTemplate {
    fn from(value: PaymentLink) -> Self {
        Self {
            fallback_handle: value.fallback_handle,
            fallback_name: value.fallback_name,
            note: value.note,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub server: Server,
    pub payment_link: PaymentLink,
}

#[derive(Debug, Parser)]
#[command(name = "fairsplit", version, about = "Shared expenses ledger and settlement server")]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the bind address.
    #[arg(long)]
    bind: Option<String>,
    /// Override the listening port.
    #[arg(long)]
    port: Option<u16>,
    /// Override the log level (trace, debug, info, warn, error).
    #[arg(long)]
    level: Option<String>,
    /// Enable demo mode.
    #[arg(long)]
    demo: bool,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let args = Args::parse();

        let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
        let mut settings: Settings = Config::builder()
            .add_source(File::with_name(config_path).required(false))
            .add_source(
                Environment::with_prefix("FAIRSPLIT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        if let Some(bind) = args.bind {
            settings.server.bind = bind;
        }
        if let Some(port) = args.port {
            settings.server.port = port;
        }
        if let Some(level) = args.level {
            settings.app.level = level;
        }
        if args.demo {
            settings.server.demo = true;
        }

        Ok(settings)
    }
}
