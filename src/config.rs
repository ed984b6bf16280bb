use config::{Config, Environment, File};
use serde::Deserialize;
use std::time::Duration;

use crate::workflow::ContentLimits;

/// Runtime settings, read from `setup.toml` and overridden by `NOTES_*` variables.
#[derive(Debug, Deserialize, PartialEq)]
pub struct Args {
    pub log_level: String,
    pub port: u16,
    pub database_host: Option<String>,
    pub database_port: u16,
    pub database_name: String,
    pub database_username: String,
    pub database_password: String,
    pub database_max_connections: u32,
    pub grammar_api_url: String,
    pub grammar_language: String,
    pub grammar_timeout_secs: u64,
    pub content_min_chars: usize,
    pub content_max_chars: usize,
}

impl Args {
    pub fn load() -> Result<Self, handle_errors::Error> {
        Self::from_file("setup")
    }

    pub fn from_file(name: &str) -> Result<Self, handle_errors::Error> {
        let args = Config::builder()
            .set_default("log_level", "info")
            .and_then(|b| b.set_default("port", 5000))
            .and_then(|b| b.set_default("database_port", 5432))
            .and_then(|b| b.set_default("database_name", "markdown_notes"))
            .and_then(|b| b.set_default("database_username", "postgres"))
            .and_then(|b| b.set_default("database_password", ""))
            .and_then(|b| b.set_default("database_max_connections", 5))
            .and_then(|b| b.set_default("grammar_api_url", "https://api.languagetool.org/v2/check"))
            .and_then(|b| b.set_default("grammar_language", "en-US"))
            .and_then(|b| b.set_default("grammar_timeout_secs", 10))
            .and_then(|b| b.set_default("content_min_chars", 10))
            .and_then(|b| b.set_default("content_max_chars", 2000))
            .map_err(handle_errors::Error::ConfigurationError)?
            .add_source(File::with_name(name).required(false))
            .add_source(Environment::with_prefix("NOTES").try_parsing(true))
            .build()
            .and_then(|config| config.try_deserialize::<Args>())
            .map_err(handle_errors::Error::ConfigurationError)?;

        if args.content_min_chars > args.content_max_chars {
            return Err(handle_errors::Error::ConfigurationError(
                config::ConfigError::Message(format!(
                    "content_min_chars ({}) is larger than content_max_chars ({})",
                    args.content_min_chars, args.content_max_chars
                )),
            ));
        }
        Ok(args)
    }

    /// Connection string for PostgreSQL, or `None` when notes stay in memory.
    pub fn database_url(&self) -> Option<String> {
        self.database_host.as_ref().map(|host| {
            format!(
                "postgres://{}:{}@{}:{}/{}",
                self.database_username,
                self.database_password,
                host,
                self.database_port,
                self.database_name
            )
        })
    }

    pub fn grammar_timeout(&self) -> Duration {
        Duration::from_secs(self.grammar_timeout_secs)
    }

    pub fn content_limits(&self) -> ContentLimits {
        ContentLimits {
            min: self.content_min_chars,
            max: self.content_max_chars,
        }
    }
}
