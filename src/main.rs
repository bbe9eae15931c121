//! Triple Stack entry point
//!
//! The web build starts from `web::wasm_main`. Natively this runs a headless
//! demo game with the autoplay policy and prints the moves.
//!
//! Usage: `triple-stack [CONFIG_JSON] [SEED]`

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use std::process::ExitCode;
    use std::time::{SystemTime, UNIX_EPOCH};

    use triple_stack::{Engine, GameConfig};

    env_logger::init();
    log::info!("Triple Stack (native) starting...");

    let mut args = std::env::args().skip(1);
    let config_json = match args.next() {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => Some(json),
            Err(e) => {
                log::warn!("Could not read {}: {}", path, e);
                None
            }
        },
        None => None,
    };
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    let config = GameConfig::from_json_or_default(config_json.as_deref());
    let mut engine = match Engine::new(&config, seed) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Config error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("Seed {seed}: {} tiles", engine.state().all_tiles.len());
    while let Some(id) = engine.autoplay_step() {
        let state = engine.state();
        let faces: Vec<String> = state
            .slot_tiles()
            .map(|t| {
                engine
                    .params()
                    .face(t.kind)
                    .map_or_else(|| t.kind.to_string(), |f| f.name.clone())
            })
            .collect();
        println!(
            "#{:<3} {:>4}  score {:>5}  open {:>2}  slot [{}]",
            state.moves,
            id.to_string(),
            state.score,
            state.selectable_tiles().count(),
            faces.join(", ")
        );
    }

    let state = engine.state();
    if state.is_won() {
        println!("Cleared the stack! Final score {}", state.score);
    } else {
        println!(
            "Slot full with {} tiles left. Final score {}",
            state.live_count(),
            state.score
        );
    }
    ExitCode::SUCCESS
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::wasm_main, this is just to satisfy the compiler
}
