mod command;
mod config;
mod game_loop;
mod render;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use common::config::Validate;
use common::games::connect::{FirstPlayer, GameSession};
use common::{log, logger};

use config::{ConsoleConfig, DEFAULT_CONFIG_FILE, load_config};
use game_loop::run_game;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FirstPlayerArg {
    X,
    O,
    Random,
}

impl From<FirstPlayerArg> for FirstPlayer {
    fn from(arg: FirstPlayerArg) -> Self {
        match arg {
            FirstPlayerArg::X => FirstPlayer::X,
            FirstPlayerArg::O => FirstPlayer::O,
            FirstPlayerArg::Random => FirstPlayer::Random,
        }
    }
}

#[derive(Parser)]
#[command(name = "connect_console")]
struct Args {
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    #[arg(long)]
    board_size: Option<usize>,
    #[arg(long)]
    win_length: Option<usize>,
    #[arg(long, value_enum)]
    first_player: Option<FirstPlayerArg>,
    #[arg(long)]
    use_log_prefix: bool,
}

impl Args {
    fn apply_overrides(&self, mut config: ConsoleConfig) -> ConsoleConfig {
        if let Some(board_size) = self.board_size {
            config.board_size = board_size;
        }
        if let Some(win_length) = self.win_length {
            config.win_length = win_length;
        }
        if let Some(first_player) = self.first_player {
            config.first_player = first_player.into();
        }
        config
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Console".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let file_config = match load_config(&args.config) {
        Ok(config) => config,
        Err(e) => {
            log!("Failed to load {}: {}, using defaults", args.config.display(), e);
            ConsoleConfig::default()
        }
    };
    let config = args.apply_overrides(file_config);
    config.validate()?;

    let mut session = GameSession::new(config.board_size, config.win_length, config.first_player)?;

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_game(&mut session, stdin.lock(), &mut stdout)?;

    log!("Goodbye");
    Ok(())
}
