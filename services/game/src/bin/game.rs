//! services/game/src/bin/game.rs

use std::collections::HashMap;
use std::io::Write;
use std::sync::Arc;

use async_openai::{config::OpenAIConfig, Client};
use chrono::Utc;
use game_lib::{
    adapters::{kv::PgKvStore, openai::OpenAiProvider},
    config::Config,
    error::AppError,
};
use sqlx::postgres::PgPoolOptions;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;
use word_guess_core::{
    date_stamp,
    domain::{GameConfig, GameStatus, PublicGame, PublicRound, Side},
    Game,
};

/// Pre-selected words for specific days, consulted before on-demand
/// generation. Empty by default; populate with date stamp → word entries.
fn word_calendar() -> HashMap<String, String> {
    HashMap::new()
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting game...");

    // --- 2. Connect to Database & Run Migrations ---
    info!("Connecting to database...");
    let db_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;
    let kv_store = Arc::new(PgKvStore::new(db_pool));
    info!("Running database migrations...");
    kv_store.run_migrations().await?;
    info!("Database migrations complete.");

    // --- 3. Initialize the Embedding Provider ---
    let openai_config = OpenAIConfig::new().with_api_key(
        config
            .openai_api_key
            .as_ref()
            .ok_or_else(|| AppError::Internal("OPENAI_API_KEY is required".to_string()))?,
    );
    let provider = Arc::new(OpenAiProvider::new(
        Client::with_config(openai_config),
        config.embedding_model.clone(),
        config.word_model.clone(),
    ));

    // --- 4. Assemble the Game ---
    let game = Game::new(
        kv_store,
        provider,
        word_calendar(),
        GameConfig {
            initial_guess: config.initial_guess.clone(),
            max_attempts: config.max_attempts,
        },
    );

    // --- 5. Resolve Player Identity and Today's Date ---
    let user_id = config
        .user_id
        .clone()
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let day = date_stamp(Utc::now());
    println!("Word guesser ({day})");
    println!("Playing as {user_id} (set GAME_USER to resume this game later)\n");

    // --- 6. Play ---
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let view = game.view(&user_id, &day).await?;
        render(&view);

        match view.status() {
            GameStatus::Won => {
                println!("You won!");
                break;
            }
            GameStatus::Lost => {
                println!("No attempts left! You lost!");
                break;
            }
            GameStatus::NotStarted | GameStatus::InProgress => {}
        }

        println!("{} guesses left", view.attempts_left);
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        match game.submit(&user_id, &day, &line).await {
            Ok(_) => {}
            Err(err) if err.is_rejection() => println!("{err}\n"),
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

/// Prints the public rounds: each head-to-head as "left VS right" with the
/// winner marked, then the pending champion awaiting its next challenger.
fn render(view: &PublicGame) {
    for round in &view.rounds {
        match round {
            PublicRound::Complete {
                left,
                right,
                winner,
            } => {
                let (left_mark, right_mark) = match winner {
                    Side::Left => ("*", " "),
                    Side::Right => (" ", "*"),
                };
                println!(
                    "{left_mark}{} [{}%]  VS  [{}%] {}{right_mark}",
                    left.word, left.distance, right.distance, right.word
                );
            }
            PublicRound::Pending { word, distance } => {
                println!("{word} [{distance}%]  VS  ?");
            }
        }
    }
}
