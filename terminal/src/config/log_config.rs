use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tictactoe_engine::config::Validate;
use tictactoe_engine::logger::LogTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogTargetKind {
    #[default]
    Off,
    Stdout,
    Stderr,
    File,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct LogConfig {
    #[serde(default)]
    pub target: LogTargetKind,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub use_prefix: bool,
}

impl LogConfig {
    pub fn to_log_target(&self) -> Result<LogTarget, String> {
        match self.target {
            LogTargetKind::Off => Ok(LogTarget::Off),
            LogTargetKind::Stdout => Ok(LogTarget::Stdout),
            LogTargetKind::Stderr => Ok(LogTarget::Stderr),
            LogTargetKind::File => match &self.file_path {
                Some(path) if !path.is_empty() => Ok(LogTarget::File(path.clone())),
                _ => Err("log file_path is required when target is 'file'".to_string()),
            },
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> Result<(), String> {
        self.to_log_target().map(|_| ())
    }
}
