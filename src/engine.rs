use std::str::FromStr;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::{
    hand::Hand,
    strategy::{self, Decision},
};

/// Which hand receives the next card.
#[wasm_bindgen]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Dealer,
}

impl Default for Side {
    fn default() -> Self {
        Side::Player
    }
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Dealer,
            Side::Dealer => Side::Player,
        }
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "player" | "p" => Ok(Side::Player),
            "dealer" | "d" => Ok(Side::Dealer),
            other => Err(format!("unknown side `{other}`")),
        }
    }
}

/// Tracks the cards seen for one hand and answers strategy queries about them.
///
/// The engine owns no locking. Hosts sharing it across threads wrap it in a mutex.
#[derive(Debug, Clone, Default)]
pub struct StrategyEngine {
    player: Hand,
    dealer: Hand,
    side: Side,
    cursor: u8,
}

impl StrategyEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.player.clear();
        self.dealer.clear();
        self.side = Side::Player;
        self.cursor = 0;
        log::debug!("hands cleared");
    }

    /// Adds a raw rank to the active hand. Cards beyond a hand's capacity are dropped.
    pub fn add_card(&mut self, rank: u8) {
        let side = self.side;
        let hand = match side {
            Side::Player => &mut self.player,
            Side::Dealer => &mut self.dealer,
        };
        if hand.push(rank) {
            log::trace!("{side:?} <- {rank} ({} cards)", hand.len());
        } else {
            log::debug!("{side:?} hand full, dropped rank {rank}");
        }
    }

    pub fn switch_side(&mut self) {
        self.set_side(self.side.other());
    }

    pub fn set_side(&mut self, side: Side) {
        self.side = side;
        log::debug!("active side: {side:?}");
    }

    pub fn current_side(&self) -> Side {
        self.side
    }

    pub fn player(&self) -> &Hand {
        &self.player
    }

    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }

    pub fn player_value(&self) -> u8 {
        self.player.value()
    }

    pub fn dealer_value(&self) -> u8 {
        self.dealer.value()
    }

    pub fn dealer_up_card(&self) -> u8 {
        strategy::dealer_up_card(self.dealer.cards())
    }

    pub fn is_soft(&self) -> bool {
        self.player.is_soft()
    }

    pub fn is_pair(&self) -> bool {
        strategy::pair_row(self.player.cards()).is_some()
    }

    pub fn decide(&self) -> Decision {
        let decision = strategy::recommend(self.player.cards(), self.dealer.cards());
        log::trace!(
            "{:?} vs up {} -> {decision}",
            self.player.cards(),
            self.dealer_up_card()
        );
        decision
    }

    pub fn decision_label(&self) -> &'static str {
        self.decide().label()
    }

    /// Input selector position kept for the host's card picker.
    pub fn cursor(&self) -> u8 {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: u8) {
        self.cursor = cursor;
    }
}
