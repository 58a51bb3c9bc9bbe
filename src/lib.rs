use wasm_bindgen::prelude::*;

pub mod advice;
pub mod display;
pub mod engine;
pub mod hand;
pub mod logging;
pub mod strategy;

pub use engine::{Side, StrategyEngine};
pub use hand::{Hand, HAND_CAPACITY};
pub use strategy::Decision;

/// Stateful advisor for a JS host feeding cards one at a time.
#[wasm_bindgen]
#[derive(Default)]
pub struct Advisor {
    engine: StrategyEngine,
}

#[wasm_bindgen]
impl Advisor {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Advisor {
        console_error_panic_hook::set_once();
        Advisor::default()
    }

    pub fn reset(&mut self) {
        self.engine.reset();
    }

    pub fn add_card(&mut self, rank: u8) {
        self.engine.add_card(rank);
    }

    pub fn switch_side(&mut self) {
        self.engine.switch_side();
    }

    pub fn set_side(&mut self, side: Side) {
        self.engine.set_side(side);
    }

    pub fn set_side_name(&mut self, name: &str) -> Result<(), JsValue> {
        let side = name
            .parse::<Side>()
            .map_err(|err| JsValue::from_str(&format!("Invalid input: {err}")))?;
        self.engine.set_side(side);
        Ok(())
    }

    pub fn current_side(&self) -> Side {
        self.engine.current_side()
    }

    pub fn player_value(&self) -> u8 {
        self.engine.player_value()
    }

    pub fn dealer_value(&self) -> u8 {
        self.engine.dealer_value()
    }

    pub fn dealer_up_card(&self) -> u8 {
        self.engine.dealer_up_card()
    }

    pub fn player_count(&self) -> usize {
        self.engine.player().len()
    }

    pub fn dealer_count(&self) -> usize {
        self.engine.dealer().len()
    }

    pub fn decide(&self) -> Decision {
        self.engine.decide()
    }

    pub fn decision_label(&self) -> String {
        self.engine.decision_label().to_string()
    }

    pub fn player_line(&self) -> String {
        display::player_line(self.engine.player())
    }

    pub fn dealer_line(&self, show_all: bool) -> String {
        display::dealer_line(self.engine.dealer(), show_all)
    }

    pub fn cursor(&self) -> u8 {
        self.engine.cursor()
    }

    pub fn set_cursor(&mut self, cursor: u8) {
        self.engine.set_cursor(cursor);
    }

    pub fn snapshot(&self, reveal_dealer: bool) -> Result<JsValue, JsValue> {
        let advice = advice::Advice::from_engine(&self.engine, reveal_dealer);
        serde_wasm_bindgen::to_value(&advice)
            .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
    }
}

#[wasm_bindgen]
pub fn advise(params: &JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    let input: advice::AdviceInput = serde_wasm_bindgen::from_value(params.clone())
        .map_err(|err| JsValue::from_str(&format!("Invalid input: {err}")))?;

    let result = advice::run(&input);

    serde_wasm_bindgen::to_value(&result)
        .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
}

#[wasm_bindgen]
pub fn advise_json(request: &str) -> Result<String, JsValue> {
    console_error_panic_hook::set_once();
    advice::run_json(request).map_err(|err| JsValue::from_str(&err))
}

#[wasm_bindgen]
pub fn init_logging(level: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let level = logging::parse_level(level).map_err(|err| JsValue::from_str(&err))?;
    logging::init(level);
    Ok(())
}
