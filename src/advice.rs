use serde::{Deserialize, Serialize};

use crate::{
    display,
    engine::{Side, StrategyEngine},
    strategy::Decision,
};

#[derive(Debug, Default, Deserialize)]
pub struct AdviceInput {
    #[serde(default, alias = "playerCards")]
    pub player: Vec<u8>,
    #[serde(default, alias = "dealerCards")]
    pub dealer: Vec<u8>,
    #[serde(default, alias = "revealDealer")]
    pub reveal_dealer: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Advice {
    pub player_cards: Vec<&'static str>,
    pub dealer_cards: Vec<&'static str>,
    pub player_value: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dealer_value: Option<u8>,
    pub dealer_up_card: u8,
    pub soft: bool,
    pub pair: bool,
    pub decision: Decision,
    pub label: &'static str,
}

impl Advice {
    pub fn from_engine(engine: &StrategyEngine, reveal_dealer: bool) -> Self {
        let decision = engine.decide();
        let dealer_cards = if reveal_dealer {
            display::card_labels(engine.dealer())
        } else {
            display::masked_labels(engine.dealer())
        };
        Advice {
            player_cards: display::card_labels(engine.player()),
            dealer_cards,
            player_value: engine.player_value(),
            dealer_value: reveal_dealer.then(|| engine.dealer_value()),
            dealer_up_card: engine.dealer_up_card(),
            soft: engine.is_soft(),
            pair: engine.is_pair(),
            decision,
            label: decision.label(),
        }
    }
}

/// Replays a request through a fresh engine. Extra cards past a hand's capacity are dropped.
pub fn run(input: &AdviceInput) -> Advice {
    let mut engine = StrategyEngine::new();
    for (side, cards) in [(Side::Player, &input.player), (Side::Dealer, &input.dealer)] {
        engine.set_side(side);
        for &card in cards {
            engine.add_card(card);
        }
    }
    Advice::from_engine(&engine, input.reveal_dealer)
}

pub fn run_json(request: &str) -> Result<String, String> {
    let input: AdviceInput =
        serde_json::from_str(request).map_err(|err| format!("Invalid input: {err}"))?;
    serde_json::to_string(&run(&input)).map_err(|err| format!("Serialization failed: {err}"))
}
