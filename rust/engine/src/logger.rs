use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use uuid::Uuid;

use crate::cards::Card;
use crate::errors::GameError;
use crate::game::{GameState, GameStatus};
use crate::player::{Hand, Player};
use crate::rules::{calculate_royalties, earns_fantasyland, Royalties};
use crate::scoring::ScoreSheet;

/// Final rows and result of one seat.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: String,
    pub name: String,
    pub front: Vec<Card>,
    pub middle: Vec<Card>,
    pub back: Vec<Card>,
    /// Whether the seat played this game from Fantasyland
    pub fantasyland: bool,
    pub fouled: bool,
    pub royalties: Royalties,
    /// Net points won or lost in this game across all pairings
    pub points: i32,
    /// Running score after this game
    pub score: i32,
}

impl PlayerRecord {
    /// Rebuilds a seat with these rows and a zero score, for re-scoring.
    pub fn to_player(&self) -> Result<Player, GameError> {
        let hand = Hand::from_rows(self.front.clone(), self.middle.clone(), self.back.clone())?;
        Ok(Player::with_hand(
            &self.id,
            &self.name,
            hand,
            self.fantasyland,
        ))
    }
}

/// One finished game, serialized as a single JSONL line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Log identifier (format: YYYYMMDD-NNNNNN)
    pub record_id: String,
    pub game_id: Uuid,
    /// Seed of the deck shuffle, when the game came from a seeded engine
    pub seed: Option<u64>,
    pub players: Vec<PlayerRecord>,
    pub sheets: Vec<ScoreSheet>,
    pub fantasyland_queue: Vec<String>,
    /// RFC3339, filled in by [`GameLogger::write`] when missing
    #[serde(default)]
    pub ts: Option<String>,
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

impl GameRecord {
    /// Snapshots a scored game.
    pub fn from_state(record_id: impl Into<String>, state: &GameState) -> Result<Self, GameError> {
        if state.status() != GameStatus::Finished {
            return Err(GameError::InvalidPhase {
                expected: GameStatus::Finished,
                actual: state.status(),
            });
        }
        Ok(Self::from_scored(
            record_id,
            state.id(),
            state.seed(),
            state.players(),
            state.score_sheets(),
        ))
    }

    /// Builds a record from players already run through
    /// [`score_players`](crate::scoring::score_players) and the sheets it returned.
    pub fn from_scored(
        record_id: impl Into<String>,
        game_id: Uuid,
        seed: Option<u64>,
        players: &[Player],
        sheets: &[ScoreSheet],
    ) -> Self {
        let records = players
            .iter()
            .map(|p| PlayerRecord {
                id: p.id().to_string(),
                name: p.name().to_string(),
                front: p.hand().front().to_vec(),
                middle: p.hand().middle().to_vec(),
                back: p.hand().back().to_vec(),
                fantasyland: p.is_fantasyland(),
                fouled: p.is_fouled(),
                royalties: calculate_royalties(p.hand()),
                points: points_for(p.id(), sheets),
                score: p.score(),
            })
            .collect();
        let fantasyland_queue = players
            .iter()
            .filter(|p| earns_fantasyland(p.hand(), p.is_fantasyland()))
            .map(|p| p.id().to_string())
            .collect();
        Self {
            record_id: record_id.into(),
            game_id,
            seed,
            players: records,
            sheets: sheets.to_vec(),
            fantasyland_queue,
            ts: None,
            meta: None,
        }
    }

    pub fn to_players(&self) -> Result<Vec<Player>, GameError> {
        self.players.iter().map(PlayerRecord::to_player).collect()
    }
}

/// Net points `player_id` collected across `sheets`.
pub fn points_for(player_id: &str, sheets: &[ScoreSheet]) -> i32 {
    sheets
        .iter()
        .map(|s| {
            if s.player_a == player_id {
                s.points_a
            } else if s.player_b == player_id {
                s.points_b
            } else {
                0
            }
        })
        .sum()
}

pub fn format_game_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Appends [`GameRecord`]s to a JSONL file and hands out sequential record ids.
pub struct GameLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl GameLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        Self::open(path.as_ref(), OpenOptions::new().write(true).create(true).truncate(true))
    }

    /// Opens `path` for appending, keeping any records already in it.
    /// The id sequence continues after the existing line count.
    pub fn append<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let existing = match std::fs::read_to_string(path.as_ref()) {
            Ok(text) => text.lines().filter(|l| !l.trim().is_empty()).count(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => 0,
            Err(e) => return Err(e),
        };
        let mut logger =
            Self::open(path.as_ref(), OpenOptions::new().create(true).append(true))?;
        logger.seq = u32::try_from(existing).unwrap_or(u32::MAX);
        Ok(logger)
    }

    fn open(path: &Path, options: &OpenOptions) -> std::io::Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = options.open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// Logger with a fixed date that writes nowhere.
    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_game_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &GameRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
