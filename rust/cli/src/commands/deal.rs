//! Deal command: seats a table and shows each player's initial cards.
//!
//! Seed and player count fall back to the resolved configuration, so
//! `PINEAPPLE_SEED` makes the output reproducible without flags.

use crate::config;
use crate::error::CliError;
use crate::formatters::format_row;
use pineapple_engine::engine::Engine;
use std::io::Write;

pub fn handle_deal_command(
    seed: Option<u64>,
    players: Option<u8>,
    fantasyland: &[String],
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let players = players.unwrap_or(cfg.players);
    config::validate_players(players).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    let ids: Vec<String> = (1..=players).map(|i| format!("p{}", i)).collect();
    let names: Vec<String> = (1..=players).map(|i| format!("Player {}", i)).collect();
    if let Some(unknown) = fantasyland.iter().find(|f| !ids.contains(f)) {
        return Err(CliError::InvalidInput(format!(
            "unknown fantasyland player {} (expected p1..p{})",
            unknown, players
        )));
    }

    let mut engine = Engine::new(Some(seed));
    let mut game = engine.create_game(&ids, &names, fantasyland)?;
    game.deal_initial_cards()?;

    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Game: {}", game.id())?;
    for p in game.players() {
        let tag = if p.is_fantasyland() { " (fantasyland)" } else { "" };
        writeln!(
            out,
            "{} {}{}: {}",
            p.id(),
            p.name(),
            tag,
            format_row(p.current_cards())
        )?;
    }
    writeln!(out, "Deck: {} cards remaining", game.deck().remaining())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn deal(seed: u64, players: u8, fl: &[&str]) -> Result<String, CliError> {
        let fl: Vec<String> = fl.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        handle_deal_command(Some(seed), Some(players), &fl, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    #[serial]
    fn test_deal_command_deterministic() {
        assert_eq!(deal(12345, 2, &[]).unwrap(), deal(12345, 2, &[]).unwrap());
    }

    #[test]
    #[serial]
    fn test_deal_command_output_format() {
        let output = deal(999, 3, &["p2"]).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Seed: 999");
        assert!(lines[1].starts_with("Game: "));
        assert!(lines[2].starts_with("p1 Player 1: ["));
        assert!(lines[3].starts_with("p2 Player 2 (fantasyland): ["));
        assert_eq!(lines[5], "Deck: 28 cards remaining");
    }

    #[test]
    #[serial]
    fn test_deal_command_rejects_bad_player_count() {
        assert!(matches!(deal(1, 5, &[]), Err(CliError::InvalidInput(_))));
        assert!(matches!(deal(1, 1, &[]), Err(CliError::InvalidInput(_))));
    }

    #[test]
    #[serial]
    fn test_deal_command_rejects_unknown_fantasyland_id() {
        assert!(matches!(deal(1, 2, &["p3"]), Err(CliError::InvalidInput(_))));
    }
}
