//! Generator view state: niche input, generated (transient) ideas, per-idea saves

use crate::api::ApiError;
use crate::constants::MSG_EMPTY_NICHE;
use crate::types::{Idea, RequestPhase, SaveIdeaRequest};
use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct GeneratorState {
    pub niche_input: String,
    /// Niche the displayed ideas were generated for
    pub active_niche: String,
    pub phase: RequestPhase,
    pub ideas: Vec<Idea>,
    /// Bumped every time `ideas` is replaced
    pub batch: u64,
    saving: HashSet<usize>,
}

impl GeneratorState {
    /// Validate the input and enter `Loading`. Returns the niche to request,
    /// or `None` when nothing should be sent.
    pub fn submit(&mut self) -> Option<String> {
        if self.phase.is_loading() {
            return None;
        }
        let niche = self.niche_input.trim();
        if niche.is_empty() {
            self.phase = RequestPhase::Error(MSG_EMPTY_NICHE.to_string());
            return None;
        }
        let niche = niche.to_string();
        self.phase = RequestPhase::Loading;
        Some(niche)
    }

    /// Failures keep the previous list on screen.
    pub fn finish_generate(&mut self, niche: String, result: Result<Vec<Idea>, ApiError>) {
        match result {
            Ok(ideas) => {
                self.ideas = ideas;
                self.active_niche = niche;
                self.batch += 1;
                self.saving.clear();
                self.phase = RequestPhase::Success;
            }
            Err(e) => {
                self.phase = RequestPhase::Error(e.to_string());
            }
        }
    }

    /// Mark the idea at `index` as saving and build its payload.
    /// Returns `None` for unknown indices or a save already in flight.
    pub fn begin_save(&mut self, index: usize) -> Option<(u64, SaveIdeaRequest)> {
        let idea = self.ideas.get(index)?;
        if !self.saving.insert(index) {
            return None;
        }
        Some((self.batch, idea.to_save_request(&self.active_niche)))
    }

    pub fn finish_save(&mut self, batch: u64, index: usize) {
        if batch == self.batch {
            self.saving.remove(&index);
        }
    }

    pub fn is_saving(&self, index: usize) -> bool {
        self.saving.contains(&index)
    }
}
