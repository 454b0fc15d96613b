//! Layered configuration
//!
//! `defaults/linelang.default.toml` is embedded into the crate so docs and
//! runtime behavior stay in sync. Callers layer user files and single-key
//! overrides on top via [`Loader`] before deserializing into [`LinelangConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/linelang.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct LinelangConfig {
    pub parser: ParserConfig,
    pub output: OutputConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    pub allow_partial: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub indent: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Indented tree with ranges and captures.
    Pretty,
    /// The AST serialized as JSON.
    Json,
    /// Primary capture of every leaf, one per line.
    Flatten,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 3] = ["pretty", "json", "flatten"];
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Builds a [`LinelangConfig`] from, lowest precedence first: the embedded
/// defaults, any TOML files added with [`Loader::with_file`], and the
/// per-invocation settings (`--partial`, `--format`, `--log-level` in the CLI).
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            builder: Config::builder()
                .add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// Layer a TOML file that must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.toml_source(path.as_ref(), true)
    }

    /// Layer a TOML file, skipping it when absent.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.toml_source(path.as_ref(), false)
    }

    fn toml_source(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// `parser.allow_partial`
    pub fn allow_partial(self, allow: bool) -> Result<Self, ConfigError> {
        self.set_override("parser.allow_partial", allow)
    }

    /// `output.format`; checked against [`OutputFormat`] in [`Loader::build`].
    pub fn output_format(self, format: &str) -> Result<Self, ConfigError> {
        self.set_override("output.format", format)
    }

    /// `log.level`
    pub fn log_level(self, level: &str) -> Result<Self, ConfigError> {
        self.set_override("log.level", level)
    }

    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<LinelangConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults with nothing layered on top.
pub fn load_defaults() -> Result<LinelangConfig, ConfigError> {
    Loader::new().build()
}
