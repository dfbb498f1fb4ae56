use std::path::PathBuf;
use std::str::FromStr;
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use tracing::Level;
use dnscodec::{DNSClass, DNSType};
use crate::args::Args;

pub const DEFAULT_MAX_MESSAGE_SIZE: usize = 512;

#[derive(Default, Deserialize, Debug)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub codec: CodecConfig,
    #[serde(default)]
    pub query: QueryConfig,
}

impl Config {
    pub fn apply_args(mut self, args: &Args) -> Self {
        self.logging.level = args.log_level.clone().or(self.logging.level);
        self.codec.max_message_size = args.max_message_size.or(self.codec.max_message_size);

        self
    }

    pub fn log_level(&self) -> Result<Level> {
        match &self.logging.level {
            Some(level) => Level::from_str(level).map_err(|_| anyhow!("invalid log level {:?}", level)),
            None => Ok(Level::INFO),
        }
    }

    pub fn max_message_size(&self) -> usize {
        self.codec.max_message_size.unwrap_or(DEFAULT_MAX_MESSAGE_SIZE)
    }

    /// Query type from `arg`, then the config file, then `A`.
    pub fn qtype(&self, arg: Option<&str>) -> Result<DNSType> {
        match arg.or(self.query.qtype.as_deref()) {
            Some(qtype) => Ok(DNSType::from_str(qtype)?),
            None => Ok(DNSType::A),
        }
    }

    /// Query class from `arg`, then the config file, then `IN`.
    pub fn qclass(&self, arg: Option<&str>) -> Result<DNSClass> {
        match arg.or(self.query.qclass.as_deref()) {
            Some(qclass) => Ok(DNSClass::from_str(qclass)?),
            None => Ok(DNSClass::IN),
        }
    }

    pub fn recursion_desired(&self) -> bool {
        self.query.recursion_desired.unwrap_or(true)
    }
}

#[derive(Default, Deserialize, Debug)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

#[derive(Default, Deserialize, Debug)]
pub struct CodecConfig {
    pub max_message_size: Option<usize>,
}

#[derive(Default, Deserialize, Debug)]
pub struct QueryConfig {
    pub qtype: Option<String>,
    pub qclass: Option<String>,
    pub recursion_desired: Option<bool>,
}

/// `~/.dnscodec/conf.toml`, when a home directory can be found.
pub fn default_config_path() -> Option<PathBuf> {
    home::home_dir().map(|home| home.join(".dnscodec").join("conf.toml"))
}

/// Loads `path` if given. Otherwise the default file is used when it
/// exists, and built-in defaults when it does not. Nothing is created.
pub fn load_config(path: Option<&str>) -> Result<Config> {
    if let Some(path) = path {
        return load(PathBuf::from(path));
    }

    match default_config_path() {
        Some(file) if file.is_file() => load(file),
        _ => Ok(Config::default()),
    }
}

fn load(p: PathBuf) -> Result<Config> {
    let file = std::fs::read_to_string(&p).with_context(|| format!("cannot read {}", p.display()))?;

    let cfg: Config = toml::from_str(&file).with_context(|| format!("invalid config {}", p.display()))?;

    Ok(cfg)
}
