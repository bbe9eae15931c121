//! Browser binding
//!
//! Thin wrapper over [`Engine`] for the JS host. Snapshots cross the boundary
//! as JSON strings; the host parses them and drives its own animations,
//! calling `settle` once a placement has finished moving.

use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::engine::Engine;
use crate::sim::TileId;

#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
    log::info!("Triple Stack starting...");
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct WasmGame {
    engine: Engine,
}

#[wasm_bindgen]
impl WasmGame {
    /// `config_json` is the fetched `uiConfig.json`, if the host has one
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<WasmGame, JsValue> {
        let config = GameConfig::from_json_or_default(config_json.as_deref());
        let seed = js_sys::Date::now() as u64;
        let engine = Engine::new(&config, seed).map_err(to_js)?;
        log::info!("Game initialized with seed: {}", seed);
        Ok(Self { engine })
    }

    pub fn snapshot(&self) -> Result<String, JsValue> {
        self.engine.snapshot().to_json().map_err(to_js)
    }

    #[wasm_bindgen(js_name = selectTile)]
    pub fn select_tile(&mut self, id: u32) -> Result<String, JsValue> {
        self.engine.select_tile(TileId(id));
        self.snapshot()
    }

    pub fn settle(&mut self) -> Result<String, JsValue> {
        self.engine.settle();
        self.snapshot()
    }

    pub fn reset(&mut self) -> Result<String, JsValue> {
        self.engine.reset().map_err(to_js)?;
        self.snapshot()
    }

    /// Milliseconds the host should animate a placement before `settle`
    #[wasm_bindgen(js_name = settleDelayMs)]
    pub fn settle_delay_ms(&self) -> u32 {
        self.engine.params().settle_delay_ms()
    }

    /// Milliseconds the cleared tiles of a match should flash
    #[wasm_bindgen(js_name = matchClearMs)]
    pub fn match_clear_ms(&self) -> u32 {
        self.engine.params().match_clear_ms()
    }
}
