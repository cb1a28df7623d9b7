//! A session runs every game of one input file through one `TurnEngine`,
//! collecting result records in order. Win counts and the games-played
//! counter carry across the session's games.

pub mod input;

use std::path::Path;

use tracing::info;

use crate::core::RulesConfig;
use crate::error::Result;
use crate::rules::{ActionOutput, TurnEngine};

pub use input::{DecksInput, GameInput, InputFile, StartGameInput};

/// One invocation's worth of games.
#[derive(Clone, Debug)]
pub struct Session {
    engine: TurnEngine,
}

impl Session {
    #[must_use]
    pub fn new(config: RulesConfig) -> Self {
        Self {
            engine: TurnEngine::new(config),
        }
    }

    #[must_use]
    pub fn engine(&self) -> &TurnEngine {
        &self.engine
    }

    /// Play every game of `input` in order.
    ///
    /// All startup records are resolved before the first action runs, so a
    /// bad deck index or starting player produces no partial output.
    pub fn run(&mut self, input: &InputFile) -> Result<Vec<ActionOutput>> {
        let setups = input
            .games
            .iter()
            .map(|game| input.setup(&game.start_game))
            .collect::<Result<Vec<_>>>()?;

        let mut results = Vec::new();
        for (setup, game) in setups.into_iter().zip(&input.games) {
            self.engine.start_game(setup);
            results.extend(game.actions.iter().filter_map(|action| self.engine.apply(action)));
            self.engine.finish_game();
        }

        let tally = self.engine.tally();
        info!(
            games = tally.games_played,
            records = results.len(),
            "session finished"
        );
        Ok(results)
    }
}

/// Read and run an input file.
pub fn run_file(path: impl AsRef<Path>, config: RulesConfig) -> Result<Vec<ActionOutput>> {
    let path = path.as_ref();
    info!(path = %path.display(), "loading input");
    let input = InputFile::from_json(&std::fs::read_to_string(path)?)?;
    Session::new(config).run(&input)
}
