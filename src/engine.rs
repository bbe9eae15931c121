//! Action entry point
//!
//! [`Engine`] owns the resolved parameters, the authoritative [`GameState`]
//! and the seed stream used for resets. Presentation code talks to the game
//! only through these methods and reads state back by reference or as a
//! [`Snapshot`].

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::{ConfigResult, EngineParams, GameConfig};
use crate::sim::{self, GameState, TileId};
use crate::snapshot::Snapshot;

#[derive(Debug, Clone)]
pub struct Engine {
    params: EngineParams,
    state: GameState,
    /// Seeds successive games after the first
    seeds: Pcg32,
    /// First id not yet handed out; ids are unique across resets
    next_id: u32,
}

impl Engine {
    /// Resolve `config` and deal the first board
    pub fn new(config: &GameConfig, seed: u64) -> ConfigResult<Self> {
        Self::with_params(config.resolve()?, seed)
    }

    pub fn with_params(params: EngineParams, seed: u64) -> ConfigResult<Self> {
        params.validate()?;
        let mut engine = Self {
            params,
            state: GameState::new(seed, Vec::new()),
            seeds: Pcg32::seed_from_u64(seed),
            next_id: 1,
        };
        engine.generate(seed)?;
        Ok(engine)
    }

    /// Deal a fresh board from `seed`, discarding the current game
    pub fn generate(&mut self, seed: u64) -> ConfigResult<&GameState> {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut tiles = sim::generate_board(
            &self.params.board,
            self.params.match_count,
            self.next_id,
            &mut rng,
        )?;
        self.next_id += tiles.len() as u32;

        sim::refresh_selectable(&mut tiles, self.params.tile_size(), self.params.overlap_threshold);
        self.state = GameState::new(seed, tiles);

        log::info!(
            "New game with seed {} ({} tiles, {} open)",
            seed,
            self.state.all_tiles.len(),
            self.state.selectable_tiles().count()
        );
        Ok(&self.state)
    }

    /// Start over with the next seed in the stream
    pub fn reset(&mut self) -> ConfigResult<&GameState> {
        let seed = self.seeds.random::<u64>();
        self.generate(seed)
    }

    /// Tap a tile. Invalid taps return the unchanged state.
    pub fn select_tile(&mut self, id: TileId) -> &GameState {
        sim::select_tile(&mut self.state, &self.params, id);
        &self.state
    }

    /// The host finished showing the last placement; taps are accepted again
    pub fn settle(&mut self) -> &GameState {
        sim::settle(&mut self.state);
        &self.state
    }

    /// Select and settle in one step, for callers without animations
    pub fn tap(&mut self, id: TileId) -> &GameState {
        sim::select_tile(&mut self.state, &self.params, id);
        sim::settle(&mut self.state);
        &self.state
    }

    /// Let the demo player take one turn; `None` when it has nothing to do
    pub fn autoplay_step(&mut self) -> Option<TileId> {
        let id = sim::choose_tile(&self.state)?;
        self.tap(id);
        Some(id)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn params(&self) -> &EngineParams {
        &self.params
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, &self.params)
    }
}
