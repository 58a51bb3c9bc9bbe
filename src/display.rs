use crate::hand::Hand;

pub const HIDDEN: &str = "?";

/// Short label for a raw or normalized card. Aces read "A" in either form.
pub fn card_label(card: u8) -> &'static str {
    match card {
        1 | 11 => "A",
        2 => "2",
        3 => "3",
        4 => "4",
        5 => "5",
        6 => "6",
        7 => "7",
        8 => "8",
        9 => "9",
        10 => "10",
        _ => HIDDEN,
    }
}

pub fn card_labels(hand: &Hand) -> Vec<&'static str> {
    hand.cards().iter().map(|&card| card_label(card)).collect()
}

/// Dealer labels with every card after the up-card replaced by a placeholder.
pub fn masked_labels(hand: &Hand) -> Vec<&'static str> {
    hand.cards()
        .iter()
        .enumerate()
        .map(|(i, &card)| if i == 0 { card_label(card) } else { HIDDEN })
        .collect()
}

pub fn player_line(hand: &Hand) -> String {
    format!(
        "Player cards: [{}] (Total: {})",
        card_labels(hand).join(", "),
        hand.value()
    )
}

pub fn dealer_line(hand: &Hand, show_all: bool) -> String {
    let cards = if hand.is_empty() {
        "none".to_string()
    } else if show_all {
        card_labels(hand).join(", ")
    } else {
        masked_labels(hand).join(", ")
    };
    if show_all {
        format!("Dealer cards: [{cards}] (Total: {})", hand.value())
    } else {
        format!("Dealer cards: [{cards}]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(raw: &[u8]) -> Hand {
        let mut hand = Hand::new();
        for &card in raw {
            hand.push(card);
        }
        hand
    }

    #[test]
    fn test_card_label() {
        assert_eq!(card_label(1), "A");
        assert_eq!(card_label(11), "A");
        assert_eq!(card_label(7), "7");
        assert_eq!(card_label(10), "10");
        assert_eq!(card_label(0), "?");
        assert_eq!(card_label(12), "?");
    }

    #[test]
    fn test_player_line() {
        assert_eq!(player_line(&hand(&[1, 6])), "Player cards: [A, 6] (Total: 17)");
        assert_eq!(player_line(&hand(&[])), "Player cards: [] (Total: 0)");
    }

    #[test]
    fn test_dealer_line_masks_hole_card() {
        let dealer = hand(&[13, 7]);
        assert_eq!(dealer_line(&dealer, false), "Dealer cards: [10, ?]");
        assert_eq!(dealer_line(&dealer, true), "Dealer cards: [10, 7] (Total: 17)");
        assert_eq!(dealer_line(&hand(&[]), false), "Dealer cards: [none]");
        assert_eq!(dealer_line(&hand(&[]), true), "Dealer cards: [none] (Total: 0)");
    }

    #[test]
    fn test_masked_labels_keep_only_up_card() {
        assert_eq!(masked_labels(&hand(&[1, 5, 9])), vec!["A", "?", "?"]);
        assert!(masked_labels(&hand(&[])).is_empty());
    }
}
