mod first_player_config;
mod log_config;
mod main_config;
mod marks_config;

pub use first_player_config::FirstPlayerSetting;
pub use log_config::{LogConfig, LogTargetKind};
pub use main_config::{Config, get_config_manager};
pub use marks_config::MarksConfig;
