mod config;
mod game_loop;
mod prompt;
mod render;

use std::io;
use std::path::PathBuf;
use clap::Parser;
use tictactoe_engine::config::ConfigManager;
use tictactoe_engine::logger::{self, LogTarget};
use tictactoe_engine::log;
use tictactoe_engine::tictactoe::Mark;

use config::{Config, LogConfig, LogTargetKind, get_config_manager};
use game_loop::run_game;

#[derive(Parser)]
#[command(name = "tictactoe", version, about = "Tic-Tac-Toe against a computer that never loses")]
struct Args {
    /// Move first without being asked
    #[arg(long, conflicts_with = "second")]
    first: bool,

    /// Let the computer move first without being asked
    #[arg(long)]
    second: bool,

    /// Path to the YAML config file
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    log_target: Option<LogTargetKind>,

    /// Append log lines to this file
    #[arg(long)]
    log_file: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,
}

impl Args {
    fn first_player(&self, config: &Config) -> Option<Mark> {
        if self.first {
            Some(Mark::Human)
        } else if self.second {
            Some(Mark::Computer)
        } else {
            config.first_player.resolve()
        }
    }

    fn log_target(&self, config: &LogConfig) -> Result<LogTarget, String> {
        let mut log_config = config.clone();
        if let Some(path) = &self.log_file {
            log_config.file_path = Some(path.clone());
            log_config.target = LogTargetKind::File;
        }
        if let Some(target) = self.log_target {
            log_config.target = target;
        }
        log_config.to_log_target()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = match &args.config {
        Some(path) => ConfigManager::from_yaml_file(path.clone()),
        None => get_config_manager(),
    };
    let config: Config = config_manager.get_config()?;

    let prefix = if args.use_log_prefix || config.log.use_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, &args.log_target(&config.log)?)?;

    let first_player = args.first_player(&config);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    match run_game(&mut input, &mut output, first_player, &config.marks) {
        Ok(outcome) => {
            log!("Finished with {:?}", outcome);
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
            println!();
            println!("Input closed, leaving the game.");
            log!("Input closed before the game ended");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FirstPlayerSetting;

    #[test]
    fn test_cli_flags_override_config() {
        let config = Config {
            first_player: FirstPlayerSetting::Human,
            ..Config::default()
        };

        let args = Args::parse_from(["tictactoe", "--second"]);
        assert_eq!(args.first_player(&config), Some(Mark::Computer));

        let args = Args::parse_from(["tictactoe"]);
        assert_eq!(args.first_player(&config), Some(Mark::Human));
        assert_eq!(args.first_player(&Config::default()), None);
    }

    #[test]
    fn test_first_and_second_conflict() {
        assert!(Args::try_parse_from(["tictactoe", "--first", "--second"]).is_err());
    }

    #[test]
    fn test_log_file_flag_selects_file_target() {
        let args = Args::parse_from(["tictactoe", "--log-file", "game.log"]);
        assert_eq!(
            args.log_target(&LogConfig::default()),
            Ok(LogTarget::File("game.log".to_string()))
        );

        let args = Args::parse_from(["tictactoe", "--log-target", "stderr"]);
        assert_eq!(args.log_target(&LogConfig::default()), Ok(LogTarget::Stderr));

        let args = Args::parse_from(["tictactoe", "--log-target", "file"]);
        assert!(args.log_target(&LogConfig::default()).is_err());
    }
}
