//! Replay command: re-scores a JSONL game history and checks every stored result.
//!
//! Each line is a `GameRecord`. The rows are rebuilt into fresh players,
//! scored again, and compared field by field against what the record says:
//! pair sheets, per-player points, fouls, royalties and the Fantasyland queue.
//! A record whose seats could not have shared one deck is reported without
//! re-scoring. Running scores are not compared since they depend on earlier games.
//! Each game is printed with its rows and point delta per player.

use super::table::validate_table;
use crate::error::{BatchValidationError, CliError};
use crate::formatters::{format_hand, format_points};
use crate::io_utils::read_text_auto;
use crate::ui;
use pineapple_engine::logger::GameRecord;
use pineapple_engine::player::Hand;
use pineapple_engine::scoring::score_players;
use std::io::Write;

pub fn handle_replay_command(
    input: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let content = read_text_auto(input).map_err(|e| {
        let _ = ui::write_error(err, &format!("Failed to read {}", input));
        CliError::InvalidInput(e)
    })?;

    let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.is_empty() {
        writeln!(out, "No games found in file.")?;
        return Ok(());
    }

    let mut failures: Vec<BatchValidationError<String>> = Vec::new();
    let mut replayed = 0usize;
    for (idx, line) in lines.iter().enumerate() {
        let line_no = format!("line {}", idx + 1);
        let record: GameRecord = parse_json_or_continue!(line, failures, line_no);
        replayed += 1;
        write_game(out, &record)?;
        let context = if record.record_id.is_empty() {
            line_no
        } else {
            record.record_id.clone()
        };
        for message in verify_record(&record) {
            failures.push(BatchValidationError {
                item_context: context.clone(),
                message,
            });
        }
    }

    for failure in &failures {
        ui::display_warning(err, &failure.to_string())?;
    }
    writeln!(
        out,
        "Replayed: {} games, {} mismatches",
        replayed,
        failures.len()
    )?;
    tracing::info!(replayed, mismatches = failures.len(), "replay finished");

    if failures.is_empty() {
        Ok(())
    } else {
        Err(CliError::InvalidInput(format!(
            "{} record(s) in {} did not verify",
            failures.len(),
            input
        )))
    }
}

fn write_game(out: &mut dyn Write, record: &GameRecord) -> std::io::Result<()> {
    writeln!(out, "Game {} ({})", record.record_id, record.game_id)?;
    for p in &record.players {
        let foul = if p.fouled { ", fouled" } else { "" };
        writeln!(
            out,
            "{} {}: {}{}",
            p.id,
            p.name,
            format_points(p.points),
            foul
        )?;
        // oversized rows are reported by verify_record
        if let Ok(hand) = Hand::from_rows(p.front.clone(), p.middle.clone(), p.back.clone()) {
            writeln!(out, "{}", format_hand(&hand))?;
        }
    }
    Ok(())
}

/// Re-scores one record; returns a message per disagreement.
fn verify_record(record: &GameRecord) -> Vec<String> {
    let mut players = match record.to_players() {
        Ok(players) => players,
        Err(e) => return vec![format!("cannot rebuild hands: {}", e)],
    };
    if let Err(e) = validate_table(&players) {
        return vec![format!("impossible table: {}", e)];
    }
    let sheets = score_players(&mut players);
    let fresh = GameRecord::from_scored(
        record.record_id.clone(),
        record.game_id,
        record.seed,
        &players,
        &sheets,
    );

    let mut problems = Vec::new();
    if fresh.sheets != record.sheets {
        problems.push("pair sheets differ from a fresh score".to_string());
    }
    for (stored, now) in record.players.iter().zip(&fresh.players) {
        if stored.points != now.points {
            problems.push(format!(
                "player {} scored {}, record says {}",
                stored.id, now.points, stored.points
            ));
        }
        if stored.fouled != now.fouled {
            problems.push(format!(
                "player {} fouled is {}, record says {}",
                stored.id, now.fouled, stored.fouled
            ));
        }
        if stored.royalties != now.royalties {
            problems.push(format!(
                "player {} royalties are {}, record says {}",
                stored.id, now.royalties.total, stored.royalties.total
            ));
        }
    }
    if fresh.fantasyland_queue != record.fantasyland_queue {
        problems.push(format!(
            "fantasyland queue is {:?}, record says {:?}",
            fresh.fantasyland_queue, record.fantasyland_queue
        ));
    }
    problems
}
