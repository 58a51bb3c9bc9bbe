use std::fmt;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::hand::{clamp_ten, hand_value, is_soft, ACE};

#[wasm_bindgen]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "PascalCase")]
pub enum Decision {
    Hit,
    Stand,
    DoubleDown,
    Split,
    /// No recommendation exists for the hands as they stand.
    Invalid,
}

impl Decision {
    pub fn label(&self) -> &'static str {
        match self {
            Decision::Hit => "HIT",
            Decision::Stand => "STAND",
            Decision::DoubleDown => "DOUBLE DOWN",
            Decision::Split => "SPLIT",
            Decision::Invalid => "INVALID",
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, Decision::Invalid)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const H: Decision = Decision::Hit;
const S: Decision = Decision::Stand;
const D: Decision = Decision::DoubleDown;
const P: Decision = Decision::Split;

pub const DEALER_COLUMNS: usize = 10;
pub const STRATEGY_ROWS: usize = 18;
pub const PAIR_ROWS: usize = 10;

/// Rows 0..=16 are hard 5..=21. Soft 13..=20 reuse rows 10..=17.
pub const STRATEGY_CHART: [[Decision; DEALER_COLUMNS]; STRATEGY_ROWS] = [
    //  2  3  4  5  6  7  8  9 10  A
    [H, H, H, H, H, H, H, H, H, H], // 5
    [H, H, H, H, H, H, H, H, H, H], // 6
    [H, H, H, H, H, H, H, H, H, H], // 7
    [H, H, H, H, H, H, H, H, H, H], // 8
    [H, D, D, D, D, H, H, H, H, H], // 9
    [D, D, D, D, D, D, D, D, H, H], // 10
    [D, D, D, D, D, D, D, D, D, H], // 11
    [H, H, S, S, S, H, H, H, H, H], // 12
    [S, S, S, S, S, H, H, H, H, H], // 13
    [S, S, S, S, S, H, H, H, H, H], // 14
    [S, S, S, S, S, H, H, H, H, H], // 15 / soft 13
    [S, S, S, S, S, S, S, S, S, S], // 16 / soft 14
    [S, S, S, S, S, S, S, S, S, S], // 17 / soft 15
    [S, S, S, S, S, S, S, S, S, S], // 18 / soft 16
    [S, S, S, S, S, S, S, S, S, S], // 19 / soft 17
    [S, S, S, S, S, S, S, S, S, S], // 20 / soft 18
    [S, S, S, S, S, S, S, S, S, S], // 21 / soft 19
    [H, H, H, H, H, H, H, H, H, H], // soft 20
];

pub const PAIR_CHART: [[Decision; DEALER_COLUMNS]; PAIR_ROWS] = [
    //  2  3  4  5  6  7  8  9 10  A
    [P, P, P, P, P, P, H, H, H, H], // A,A
    [P, P, P, P, P, P, H, H, H, H], // 2,2
    [H, H, H, P, P, H, H, H, H, H], // 3,3
    [H, H, H, P, P, H, H, H, H, H], // 4,4
    [D, D, D, D, D, D, D, D, H, H], // 5,5
    [P, P, P, P, P, H, H, H, H, H], // 6,6
    [P, P, P, P, P, P, H, H, H, H], // 7,7
    [P, P, P, P, P, P, P, P, P, P], // 8,8
    [P, P, P, P, P, S, P, P, S, S], // 9,9
    [S, S, S, S, S, S, S, S, S, S], // 10,10
];

/// The dealer's first card with faces and aces read as 10, or 0 with no cards.
pub fn dealer_up_card(dealer: &[u8]) -> u8 {
    dealer.first().map_or(0, |&card| clamp_ten(card))
}

pub fn dealer_column(up_card: u8) -> usize {
    usize::from(up_card.saturating_sub(2)).min(DEALER_COLUMNS - 1)
}

fn pair_rank(card: u8) -> u8 {
    if card == ACE {
        1
    } else {
        clamp_ten(card)
    }
}

/// Pair chart row for a two-card hand of equal rank.
pub fn pair_row(player: &[u8]) -> Option<usize> {
    let [first, second] = player else {
        return None;
    };
    let rank = pair_rank(*first);
    if rank != pair_rank(*second) {
        return None;
    }
    if rank == 1 {
        return Some(0);
    }
    rank.checked_sub(1)
        .map(usize::from)
        .filter(|&row| row < PAIR_ROWS)
}

pub fn soft_row(total: u8) -> Option<usize> {
    match total {
        13..=21 => Some(usize::from(total - 13) + 10).filter(|&row| row < STRATEGY_ROWS),
        _ => None,
    }
}

pub fn hard_row(total: u8) -> Option<usize> {
    match total {
        5..=21 => Some(usize::from(total - 5).min(16)),
        _ => None,
    }
}

/// Basic strategy for a player hand against the dealer's cards, both normalized.
pub fn recommend(player: &[u8], dealer: &[u8]) -> Decision {
    if player.is_empty() || dealer.is_empty() {
        return Decision::Invalid;
    }
    let up_card = dealer_up_card(dealer);
    if up_card == 0 {
        return Decision::Invalid;
    }
    let column = dealer_column(up_card);

    if let Some(row) = pair_row(player) {
        return PAIR_CHART[row][column];
    }

    let total = hand_value(player);
    let row = if is_soft(player) {
        soft_row(total)
    } else {
        hard_row(total)
    };
    row.map_or(Decision::Invalid, |row| STRATEGY_CHART[row][column])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::normalize_rank;

    fn cards(raw: &[u8]) -> Vec<u8> {
        raw.iter().map(|&c| normalize_rank(c)).collect()
    }

    #[test]
    fn test_dealer_column_mapping() {
        assert_eq!(dealer_column(2), 0);
        assert_eq!(dealer_column(6), 4);
        assert_eq!(dealer_column(10), 8);
        assert_eq!(dealer_column(1), 0);
    }

    #[test]
    fn test_dealer_ace_reads_as_ten() {
        assert_eq!(dealer_up_card(&cards(&[1])), 10);
        assert_eq!(dealer_up_card(&cards(&[12, 4])), 10);
        assert_eq!(dealer_up_card(&[]), 0);
    }

    #[test]
    fn test_pair_rows() {
        assert_eq!(pair_row(&cards(&[1, 1])), Some(0));
        assert_eq!(pair_row(&cards(&[2, 2])), Some(1));
        assert_eq!(pair_row(&cards(&[8, 8])), Some(7));
        assert_eq!(pair_row(&cards(&[10, 13])), Some(9));
        assert_eq!(pair_row(&cards(&[1, 10])), None);
        assert_eq!(pair_row(&cards(&[8, 8, 8])), None);
        assert_eq!(pair_row(&[0, 0]), None);
    }

    #[test]
    fn test_soft_rows_stop_before_soft_21() {
        assert_eq!(soft_row(12), None);
        assert_eq!(soft_row(13), Some(10));
        assert_eq!(soft_row(17), Some(14));
        assert_eq!(soft_row(20), Some(17));
        assert_eq!(soft_row(21), None);
    }

    #[test]
    fn test_hard_rows() {
        assert_eq!(hard_row(4), None);
        assert_eq!(hard_row(5), Some(0));
        assert_eq!(hard_row(16), Some(11));
        assert_eq!(hard_row(21), Some(16));
        assert_eq!(hard_row(22), None);
    }

    #[test]
    fn test_recommend_pairs() {
        assert_eq!(recommend(&cards(&[8, 8]), &cards(&[6])), Decision::Split);
        assert_eq!(recommend(&cards(&[1, 1]), &cards(&[9])), Decision::Hit);
        assert_eq!(recommend(&cards(&[5, 5]), &cards(&[3])), Decision::DoubleDown);
        assert_eq!(recommend(&cards(&[9, 9]), &cards(&[7])), Decision::Stand);
        for up in 1..=13 {
            assert_eq!(recommend(&cards(&[10, 13]), &cards(&[up])), Decision::Stand);
        }
    }

    #[test]
    fn test_recommend_hard_totals() {
        assert_eq!(recommend(&cards(&[10, 6]), &cards(&[10])), Decision::Stand);
        assert_eq!(recommend(&cards(&[10, 2]), &cards(&[2])), Decision::Hit);
        assert_eq!(recommend(&cards(&[10, 2]), &cards(&[4])), Decision::Stand);
        assert_eq!(recommend(&cards(&[6, 5]), &cards(&[10])), Decision::DoubleDown);
        assert_eq!(recommend(&cards(&[6, 5]), &cards(&[1])), Decision::DoubleDown);
        assert_eq!(recommend(&cards(&[2, 2, 1, 10]), &cards(&[6])), Decision::Stand);
    }

    #[test]
    fn test_recommend_soft_totals() {
        assert_eq!(recommend(&cards(&[1, 6]), &cards(&[2])), Decision::Stand);
        assert_eq!(recommend(&cards(&[1, 2]), &cards(&[7])), Decision::Hit);
        assert_eq!(recommend(&cards(&[1, 2]), &cards(&[6])), Decision::Stand);
        assert_eq!(recommend(&cards(&[1, 9]), &cards(&[5])), Decision::Hit);
    }

    #[test]
    fn test_recommend_without_row_is_invalid() {
        assert_eq!(recommend(&[], &cards(&[5])), Decision::Invalid);
        assert_eq!(recommend(&cards(&[9]), &[]), Decision::Invalid);
        assert_eq!(recommend(&cards(&[1, 10]), &cards(&[5])), Decision::Invalid);
        assert_eq!(recommend(&cards(&[1]), &cards(&[5])), Decision::Invalid);
        assert_eq!(recommend(&cards(&[3]), &cards(&[5])), Decision::Invalid);
        assert_eq!(recommend(&cards(&[10, 9, 5]), &cards(&[5])), Decision::Invalid);
        assert_eq!(recommend(&cards(&[10, 6]), &[0]), Decision::Invalid);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Decision::DoubleDown.label(), "DOUBLE DOWN");
        assert_eq!(Decision::Invalid.to_string(), "INVALID");
        assert!(!Decision::Invalid.is_valid());
        assert!(Decision::Split.is_valid());
    }
}
