//! Terminal front end for the uno-engine rule engine.
//!
//! Subcommands:
//! - `play`: interactive game at the terminal, optionally recorded to YAML
//! - `replay`: reconstruct a recorded game and print where it ended up

mod human;

use std::env;
use std::fs;
use std::process;

use color_eyre::eyre::{eyre, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use human::HumanProvider;
use uno_engine::config::GameConfig;
use uno_engine::error::GameError;
use uno_engine::game::Game;
use uno_engine::provider::{play_one_turn, DecisionProvider, RandomProvider};
use uno_engine::replay::{replay, GameRecorder, RecordedGame};

const USAGE: &str = r#"uno-cli

USAGE:
    uno-cli play [--players N] [--config PATH] [--save PATH] [--auto]
    uno-cli replay PATH [--config PATH]

OPTIONS:
    --players N    Number of seats (default: 4)
    --config PATH  Game configuration YAML (card table, house rules)
    --save PATH    Record the game to a YAML save file after every move
    --auto         Let a random policy play every seat
"#;

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("play") => cmd_play(&args[1..]),
        Some("replay") => cmd_replay(&args[1..]),
        _ => {
            eprintln!("{USAGE}");
            process::exit(2);
        }
    }
}

fn load_config(path: &str) -> Result<GameConfig> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&contents)?)
}

fn cmd_play(args: &[String]) -> Result<()> {
    let mut players: Option<usize> = None;
    let mut config_path: Option<String> = None;
    let mut save_path: Option<String> = None;
    let mut auto = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!("{USAGE}");
                return Ok(());
            }
            "--players" => {
                let value = args.get(i + 1).ok_or_else(|| eyre!("missing value for --players"))?;
                players = Some(value.parse()?);
                i += 2;
            }
            "--config" => {
                config_path = Some(
                    args.get(i + 1)
                        .ok_or_else(|| eyre!("missing value for --config"))?
                        .clone(),
                );
                i += 2;
            }
            "--save" => {
                save_path = Some(
                    args.get(i + 1)
                        .ok_or_else(|| eyre!("missing value for --save"))?
                        .clone(),
                );
                i += 2;
            }
            "--auto" => {
                auto = true;
                i += 1;
            }
            other => return Err(eyre!("unknown argument: {other}")),
        }
    }

    let mut config = match config_path {
        Some(path) => load_config(&path)?,
        None => GameConfig::default(),
    };
    if let Some(players) = players {
        config.player_count = players;
    }

    let mut game = Game::new(config)?;
    game.start()?;

    let recorder = save_path.map(|path| GameRecorder::new(&game, path));

    if auto {
        run_game(game, RandomProvider, recorder)
    } else {
        run_game(game, HumanProvider, recorder)
    }
}

fn run_game<P: DecisionProvider>(
    mut game: Game,
    mut provider: P,
    mut recorder: Option<GameRecorder>,
) -> Result<()> {
    while !game.is_over() {
        match play_one_turn(&mut game, &mut provider) {
            Ok(action) => {
                if let Some(recorder) = recorder.as_mut() {
                    recorder.record(action);
                    recorder.export()?;
                }
            }
            Err(GameError::DeckExhausted) => break,
            Err(error) => {
                println!("{error}");
                continue;
            }
        }
    }

    announce(&game);
    Ok(())
}

fn cmd_replay(args: &[String]) -> Result<()> {
    let mut path: Option<String> = None;
    let mut config_path: Option<String> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!("{USAGE}");
                return Ok(());
            }
            "--config" => {
                config_path = Some(
                    args.get(i + 1)
                        .ok_or_else(|| eyre!("missing value for --config"))?
                        .clone(),
                );
                i += 2;
            }
            other if path.is_none() => {
                path = Some(other.to_string());
                i += 1;
            }
            other => return Err(eyre!("unknown argument: {other}")),
        }
    }

    let path = path.ok_or_else(|| eyre!("missing save file path"))?;
    let config = match config_path {
        Some(path) => load_config(&path)?,
        None => GameConfig::default(),
    };

    let recorded = RecordedGame::load(&path)?;
    info!(moves = recorded.moves.len(), "loaded save file");

    let game = replay(&recorded, &config)?;
    announce(&game);
    Ok(())
}

fn announce(game: &Game) {
    match game.winner() {
        Some(seat) => println!("Player {seat} wins!"),
        None if game.is_over() => println!("The deck ran out; nobody wins."),
        None => {
            println!("Game still in progress:");
            for seat in 0..game.player_count() {
                let count = game.hand(seat).map_or(0, |hand| hand.cards_count());
                println!("Player {seat}: {count} cards");
            }
        }
    }
}
