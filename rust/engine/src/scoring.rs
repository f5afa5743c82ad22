//! Pairwise showdown scoring.
//!
//! Every unordered pair of players is compared once. Row points and the scoop
//! bonus move between the two players and cancel out; royalties are added to
//! each player's own total on top of that, so a table's deltas sum to the
//! royalties paid out.

use serde::{Deserialize, Serialize};

use crate::player::{Player, Row};
use crate::rules::{calculate_royalties, is_fouled, RowValues};

/// Flat swing when exactly one side of a pairing is fouled.
pub const FOUL_PENALTY: i32 = 6;
/// Extra points for winning all three rows against one opponent.
pub const SCOOP_BONUS: i32 = 3;

/// Outcome of one pairing, seen from `player_a`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSheet {
    pub player_a: String,
    pub player_b: String,
    pub fouled_a: bool,
    pub fouled_b: bool,
    /// +1 / -1 / 0 per row in front, middle, back order; all zero when a foul decided the pairing
    pub rows: [i32; 3],
    /// +SCOOP_BONUS if A scooped, -SCOOP_BONUS if B did, else 0
    pub scoop: i32,
    pub royalties_a: i32,
    pub royalties_b: i32,
    pub points_a: i32,
    pub points_b: i32,
}

/// Scores one pairing in full.
pub fn score_pair(a: &Player, b: &Player) -> ScoreSheet {
    let fouled_a = is_fouled(a.hand());
    let fouled_b = is_fouled(b.hand());
    let mut sheet = ScoreSheet {
        player_a: a.id().to_string(),
        player_b: b.id().to_string(),
        fouled_a,
        fouled_b,
        rows: [0; 3],
        scoop: 0,
        royalties_a: 0,
        royalties_b: 0,
        points_a: 0,
        points_b: 0,
    };

    match (fouled_a, fouled_b) {
        (true, true) => return sheet,
        (true, false) => {
            sheet.points_a = -FOUL_PENALTY;
            sheet.points_b = FOUL_PENALTY;
            return sheet;
        }
        (false, true) => {
            sheet.points_a = FOUL_PENALTY;
            sheet.points_b = -FOUL_PENALTY;
            return sheet;
        }
        (false, false) => {}
    }

    // Both unfouled; incomplete hands have no row values and only collect royalties (zero).
    if let (Some(va), Some(vb)) = (RowValues::of(a.hand()), RowValues::of(b.hand())) {
        for (slot, row) in sheet.rows.iter_mut().zip(Row::ALL) {
            *slot = match va.get(row).cmp(&vb.get(row)) {
                std::cmp::Ordering::Greater => 1,
                std::cmp::Ordering::Less => -1,
                std::cmp::Ordering::Equal => 0,
            };
        }
    }
    let row_points: i32 = sheet.rows.iter().sum();
    sheet.scoop = match row_points {
        3 => SCOOP_BONUS,
        -3 => -SCOOP_BONUS,
        _ => 0,
    };
    sheet.royalties_a = calculate_royalties(a.hand()).total;
    sheet.royalties_b = calculate_royalties(b.hand()).total;
    sheet.points_a = row_points + sheet.scoop + sheet.royalties_a;
    sheet.points_b = -row_points - sheet.scoop + sheet.royalties_b;
    sheet
}

/// Points each side of a pairing receives.
pub fn compare_hands(a: &Player, b: &Player) -> (i32, i32) {
    let sheet = score_pair(a, b);
    (sheet.points_a, sheet.points_b)
}

/// Flags fouls, then applies every pairing's points to the players' running scores.
pub fn score_players(players: &mut [Player]) -> Vec<ScoreSheet> {
    for p in players.iter_mut() {
        let fouled = is_fouled(p.hand());
        p.set_fouled(fouled);
    }
    let n = players.len();
    let mut deltas = vec![0i32; n];
    let mut sheets = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            let sheet = score_pair(&players[i], &players[j]);
            deltas[i] += sheet.points_a;
            deltas[j] += sheet.points_b;
            sheets.push(sheet);
        }
    }
    for (p, delta) in players.iter_mut().zip(deltas) {
        p.add_score(delta);
    }
    sheets
}
