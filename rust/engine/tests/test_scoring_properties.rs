use pineapple_engine::cards::{full_deck, parse_cards, Card};
use pineapple_engine::hand::evaluate_hand;
use pineapple_engine::player::{Hand, Player};
use pineapple_engine::rules::{calculate_royalties, is_fouled, qualifies_for_fantasyland};
use pineapple_engine::scoring::{
    compare_hands, score_pair, score_players, FOUL_PENALTY, SCOOP_BONUS,
};
use proptest::prelude::*;

fn seat_from(id: usize, cards: &[Card]) -> Player {
    let hand = Hand::from_rows(
        cards[..3].to_vec(),
        cards[3..8].to_vec(),
        cards[8..13].to_vec(),
    )
    .unwrap();
    Player::with_hand(format!("p{id}"), format!("P{id}"), hand, false)
}

fn table(deck: &[Card], n: usize) -> Vec<Player> {
    deck.chunks(13).take(n).enumerate().map(|(i, c)| seat_from(i, c)).collect()
}

/// Like `seat_from`, but the stronger five-card group always goes to the back.
fn ordered_seat_from(id: usize, cards: &[Card]) -> Player {
    let mut fives = [cards[3..8].to_vec(), cards[8..13].to_vec()];
    let strength = |c: &[Card]| evaluate_hand(&c.try_into().unwrap()).strength;
    if strength(fives[0].as_slice()) > strength(fives[1].as_slice()) {
        fives.swap(0, 1);
    }
    let [middle, back] = fives;
    let hand = Hand::from_rows(cards[..3].to_vec(), middle, back).unwrap();
    Player::with_hand(format!("p{id}"), format!("P{id}"), hand, false)
}

/// Tables of 2-4 seats where no hand is fouled.
fn clean_table() -> impl Strategy<Value = Vec<Player>> {
    (Just(full_deck()).prop_shuffle(), 2usize..=4)
        .prop_map(|(deck, n)| {
            deck.chunks(13)
                .take(n)
                .enumerate()
                .map(|(i, c)| ordered_seat_from(i, c))
                .collect::<Vec<_>>()
        })
        .prop_filter("every hand unfouled", |players| {
            players.iter().all(|p| !is_fouled(p.hand()))
        })
}

fn seat(id: &str, rows: [&str; 3]) -> Player {
    let [f, m, b] = rows.map(|r| parse_cards(r).unwrap());
    Player::with_hand(id, id, Hand::from_rows(f, m, b).unwrap(), false)
}

#[test]
fn scoop_is_zero_sum_between_the_pair() {
    let a = seat("a", ["4s 3d 2c", "5h 5d 7c 8s 9h", "Ts Td Jc Qh Kh"]);
    let b = seat("b", ["As Kd 2d", "6s 6d 8c 8d 3h", "Js Jd Jh 4c 4d"]);
    let (pa, pb) = compare_hands(&a, &b);
    let rb = calculate_royalties(b.hand()).total;
    assert_eq!(pa, -3 - SCOOP_BONUS);
    assert_eq!(pb, 3 + SCOOP_BONUS + rb);
}

proptest! {
    #[test]
    fn prop_deltas_sum_to_royalties_of_unfouled_pairings(
        deck in Just(full_deck()).prop_shuffle(),
        n in 2usize..=4,
    ) {
        let mut players = table(&deck, n);
        let royalties: Vec<i32> = players.iter().map(|p| calculate_royalties(p.hand()).total).collect();
        let fouled: Vec<bool> = players.iter().map(|p| is_fouled(p.hand())).collect();

        let sheets = score_players(&mut players);
        prop_assert_eq!(sheets.len(), n * (n - 1) / 2);

        let mut expected = 0;
        for i in 0..n {
            for j in (i + 1)..n {
                if !fouled[i] && !fouled[j] {
                    expected += royalties[i] + royalties[j];
                }
            }
        }
        let total: i32 = players.iter().map(Player::score).sum();
        prop_assert_eq!(total, expected);
        if fouled.iter().all(|f| !f) {
            prop_assert_eq!(total, (n as i32 - 1) * royalties.iter().sum::<i32>());
        }
    }

    #[test]
    fn prop_pair_outcomes_follow_foul_rules(deck in Just(full_deck()).prop_shuffle()) {
        let players = table(&deck, 2);
        let (a, b) = (&players[0], &players[1]);
        let (pa, pb) = compare_hands(a, b);
        match (is_fouled(a.hand()), is_fouled(b.hand())) {
            (true, true) => prop_assert_eq!((pa, pb), (0, 0)),
            (true, false) => prop_assert_eq!((pa, pb), (-FOUL_PENALTY, FOUL_PENALTY)),
            (false, true) => prop_assert_eq!((pa, pb), (FOUL_PENALTY, -FOUL_PENALTY)),
            (false, false) => {
                let ra = calculate_royalties(a.hand()).total;
                let rb = calculate_royalties(b.hand()).total;
                prop_assert_eq!((pa - ra) + (pb - rb), 0);
                prop_assert!((pa - ra).abs() <= 3 + SCOOP_BONUS);
            }
        }
    }

    #[test]
    fn prop_fouled_hands_earn_nothing(deck in Just(full_deck()).prop_shuffle()) {
        let players = table(&deck, 4);
        for p in &players {
            if is_fouled(p.hand()) {
                prop_assert_eq!(calculate_royalties(p.hand()).total, 0);
            }
        }
    }

    #[test]
    fn prop_clean_table_pays_out_every_royalty_n_minus_one_times(players in clean_table()) {
        let mut players = players;
        let n = players.len() as i32;
        let royalties: i32 = players.iter().map(|p| calculate_royalties(p.hand()).total).sum();
        score_players(&mut players);
        prop_assert!(players.iter().all(|p| !p.is_fouled()));
        let total: i32 = players.iter().map(Player::score).sum();
        prop_assert_eq!(total, (n - 1) * royalties);
    }

    #[test]
    fn prop_scoop_only_for_sweeping_every_row(deck in Just(full_deck()).prop_shuffle()) {
        let players = table(&deck, 2);
        let sheet = score_pair(&players[0], &players[1]);
        if sheet.fouled_a || sheet.fouled_b {
            prop_assert_eq!(sheet.scoop, 0);
            prop_assert_eq!(sheet.rows, [0; 3]);
        }
        let swept_by_a = sheet.rows.iter().all(|&r| r == 1);
        let swept_by_b = sheet.rows.iter().all(|&r| r == -1);
        prop_assert_eq!(sheet.scoop == SCOOP_BONUS, swept_by_a);
        prop_assert_eq!(sheet.scoop == -SCOOP_BONUS, swept_by_b);
        prop_assert_eq!(sheet.scoop != 0, swept_by_a || swept_by_b);
    }

    #[test]
    fn prop_clean_pairs_scoop_only_for_sweeping_every_row(players in clean_table()) {
        let sheet = score_pair(&players[0], &players[1]);
        let swept = sheet.rows == [1; 3] || sheet.rows == [-1; 3];
        prop_assert_eq!(sheet.scoop != 0, swept);
        prop_assert_eq!(sheet.scoop, sheet.rows[0] * SCOOP_BONUS * i32::from(swept));
        prop_assert_eq!(
            sheet.points_a - sheet.royalties_a,
            sheet.rows.iter().sum::<i32>() + sheet.scoop
        );
    }

    #[test]
    fn prop_unfinished_hands_are_clean_and_earn_nothing(
        deck in Just(full_deck()).prop_shuffle(),
        front in 0usize..=3,
        middle in 0usize..=5,
        back in 0usize..=5,
    ) {
        prop_assume!(front + middle + back < 13);
        let hand = Hand::from_rows(
            deck[..front].to_vec(),
            deck[front..front + middle].to_vec(),
            deck[front + middle..front + middle + back].to_vec(),
        )
        .unwrap();
        prop_assert!(!hand.is_complete());
        prop_assert!(!is_fouled(&hand));
        prop_assert_eq!(calculate_royalties(&hand).total, 0);
        prop_assert!(!qualifies_for_fantasyland(&hand));
    }
}
