/// Most cards a single hand will hold.
pub const HAND_CAPACITY: usize = 10;

/// Normalized value of an ace before any reduction.
pub const ACE: u8 = 11;

/// Maps a dealt rank (1..=13) to its blackjack point value.
pub fn normalize_rank(card: u8) -> u8 {
    match card {
        1 => ACE,
        c if c > 10 => 10,
        c => c,
    }
}

/// Best total for a hand of normalized cards. Every ace starts at 11 and is
/// knocked down to 1 while the hand is over 21.
pub fn hand_value(cards: &[u8]) -> u8 {
    let mut total = 0;
    let mut aces = 0;

    for &card in cards {
        if card == ACE {
            aces += 1;
        }
        total += card;
    }

    while total > 21 && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    total
}

/// A hand is soft when it holds an ace and counting every ace as 11 does not bust.
pub fn is_soft(cards: &[u8]) -> bool {
    let naive: u8 = cards.iter().sum();
    cards.contains(&ACE) && naive <= 21
}

/// Face cards and a normalized ace both read as 10.
pub fn clamp_ten(card: u8) -> u8 {
    card.min(10)
}

/// Fixed-capacity sequence of normalized cards. Appends past capacity are dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hand {
    cards: [u8; HAND_CAPACITY],
    len: usize,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes and appends a raw rank. Returns false when the hand was full.
    pub fn push(&mut self, raw: u8) -> bool {
        if self.len >= HAND_CAPACITY {
            return false;
        }
        self.cards[self.len] = normalize_rank(raw);
        self.len += 1;
        true
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    pub fn cards(&self) -> &[u8] {
        &self.cards[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == HAND_CAPACITY
    }

    pub fn first(&self) -> Option<u8> {
        self.cards().first().copied()
    }

    pub fn value(&self) -> u8 {
        hand_value(self.cards())
    }

    pub fn is_soft(&self) -> bool {
        is_soft(self.cards())
    }
}
