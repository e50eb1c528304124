//! Rock-Paper-Scissors-PLUS referee.
//!
//! Plays one game on stdin/stdout with the offline scripted controller.
//! Logs go to stderr.
//!
//! ```bash
//! RPS_SEED=7 RUST_LOG=rps_arbiter=debug cargo run
//! ```

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use rps_arbiter::{GameConfig, GameResult, GameRng, ScriptedController, Session, Side};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(io::stderr)
        .init();

    let config = GameConfig::from_env();
    let rng = GameRng::from_seed_opt(config.seed);
    tracing::info!(seed = rng.seed(), max_rounds = config.max_rounds, "starting game");

    let mut session = Session::new(config, ScriptedController::new(), rng);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}", "=".repeat(60));
    println!("ROCK-PAPER-SCISSORS-PLUS GAME REFEREE");
    println!("{}", "=".repeat(60));

    let greeting = session.greet().context("controller failed to greet")?;
    println!("REFEREE: {greeting}\n");

    let mut lines = stdin.lock().lines();
    while !session.is_game_over() {
        println!("{}", "-".repeat(60));
        print!("Round {} - Your move: ", session.snapshot().round + 1);
        stdout.flush()?;

        let Some(line) = lines.next() else {
            tracing::warn!("input closed before the game finished");
            break;
        };
        let line = line.context("failed to read move")?;

        match session.play_turn(&line) {
            Ok(report) => println!("\nREFEREE: {}\n", report.narration),
            Err(err) => {
                tracing::error!(%err, "turn aborted");
                return Err(err).context("unrecoverable controller failure");
            }
        }
    }

    print_summary(&session);
    Ok(())
}

fn print_summary(session: &Session<ScriptedController, GameRng>) {
    let view = session.snapshot();

    println!("{}", "=".repeat(60));
    println!("GAME OVER");
    println!("{}", "=".repeat(60));
    println!("\nFinal Score: You {} - Bot {}", view.user_score, view.bot_score);

    match session.final_result() {
        Some(GameResult::Winner(Side::User)) => println!("YOU WIN! Congratulations!"),
        Some(GameResult::Winner(Side::Bot)) => println!("BOT WINS! Better luck next time!"),
        Some(GameResult::Draw) => println!("IT'S A DRAW! Well played!"),
        None => println!("Game ended early after {} rounds.", view.round),
    }

    println!("\nGame History:");
    for record in session.history() {
        println!(
            "  Round {}: You {} vs Bot {} -> {} ({})",
            record.round, record.user_move, record.bot_move, record.winner, record.score_after
        );
    }
}
