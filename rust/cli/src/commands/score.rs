//! Score command: settles a table of completed hands read from JSON.
//!
//! The input is an array of seats:
//!
//! ```json
//! [
//!   {"id": "p1", "name": "Ann", "front": "Qh Qd 2c", "middle": "...", "back": "...", "fantasyland": false},
//!   {"id": "p2", "front": "...", "middle": "...", "back": "..."}
//! ]
//! ```
//!
//! Results go to stdout as pretty JSON. When `--output` is given, or a log
//! directory is configured, the game is also appended as one `GameRecord`
//! line to that JSONL file (`<log_dir>/games.jsonl` for the directory case).

use super::table::validate_table;
use crate::config;
use crate::error::CliError;
use crate::io_utils::read_text_auto;
use crate::ui;
use pineapple_engine::cards::parse_cards;
use pineapple_engine::logger::{GameLogger, GameRecord};
use pineapple_engine::player::{Hand, Player};
use pineapple_engine::scoring::score_players;
use serde::Deserialize;
use std::io::Write;
use std::path::PathBuf;
use uuid::Uuid;

const LOG_FILE_NAME: &str = "games.jsonl";

#[derive(Debug, Deserialize)]
struct SeatInput {
    id: String,
    #[serde(default)]
    name: Option<String>,
    front: String,
    middle: String,
    back: String,
    #[serde(default)]
    fantasyland: bool,
}

pub fn handle_score_command(
    input: &str,
    output: Option<&str>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let text = read_text_auto(input)?;
    let seats: Vec<SeatInput> = serde_json::from_str(&text)
        .map_err(|e| CliError::InvalidInput(format!("{}: {}", input, e)))?;

    let mut players = build_players(&seats)?;
    let sheets = score_players(&mut players);
    let record = GameRecord::from_scored("", Uuid::new_v4(), None, &players, &sheets);

    let summary = serde_json::json!({
        "game_id": record.game_id,
        "players": record.players.iter().map(|p| serde_json::json!({
            "id": p.id,
            "fouled": p.fouled,
            "royalties": p.royalties.total,
            "points": p.points,
        })).collect::<Vec<_>>(),
        "sheets": record.sheets,
        "fantasyland_queue": record.fantasyland_queue,
    });
    let json_str = serde_json::to_string_pretty(&summary).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    if record.players.iter().all(|p| p.fouled) {
        ui::display_warning(err, "every hand fouled; no points changed hands")?;
    }

    let target = output
        .map(PathBuf::from)
        .or_else(|| cfg.log_dir.map(|dir| PathBuf::from(dir).join(LOG_FILE_NAME)));
    if let Some(path) = target {
        let mut logger = GameLogger::append(&path)?;
        let record = GameRecord {
            record_id: logger.next_id(),
            ..record
        };
        logger.write(&record)?;
        tracing::info!(
            record_id = %record.record_id,
            game_id = %record.game_id,
            path = %path.display(),
            "game record appended"
        );
    }
    Ok(())
}

fn build_players(seats: &[SeatInput]) -> Result<Vec<Player>, CliError> {
    let players = seats
        .iter()
        .map(|seat| -> Result<Player, CliError> {
            let hand = Hand::from_rows(
                parse_cards(&seat.front)?,
                parse_cards(&seat.middle)?,
                parse_cards(&seat.back)?,
            )?;
            let name = seat.name.clone().unwrap_or_else(|| seat.id.clone());
            Ok(Player::with_hand(&seat.id, name, hand, seat.fantasyland))
        })
        .collect::<Result<Vec<_>, _>>()?;
    validate_table(&players)?;
    Ok(players)
}
