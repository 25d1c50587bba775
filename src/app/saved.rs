//! Saved-ideas view state: the persisted list and delete confirmation

use crate::api::ApiError;
use crate::types::{Idea, RequestPhase};
use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct SavedState {
    pub phase: RequestPhase,
    pub ideas: Vec<Idea>,
    /// Id awaiting the user's confirmation
    pub pending_confirm: Option<String>,
    deleting: HashSet<String>,
}

impl SavedState {
    /// Entering the view always refetches.
    pub fn mount(&mut self) {
        self.phase = RequestPhase::Loading;
        self.pending_confirm = None;
    }

    pub fn finish_fetch(&mut self, result: Result<Vec<Idea>, ApiError>) {
        match result {
            Ok(ideas) => {
                self.ideas = ideas;
                self.phase = RequestPhase::Success;
            }
            Err(e) => {
                self.phase = RequestPhase::Error(e.to_string());
            }
        }
    }

    /// Ask for confirmation. Ideas without an id cannot be deleted.
    pub fn request_delete(&mut self, id: Option<&str>) -> bool {
        match id {
            Some(id) if !self.deleting.contains(id) => {
                self.pending_confirm = Some(id.to_string());
                true
            }
            _ => false,
        }
    }

    pub fn cancel_delete(&mut self) {
        self.pending_confirm = None;
    }

    /// Returns the id to delete once the user has confirmed.
    pub fn confirm_delete(&mut self) -> Option<String> {
        let id = self.pending_confirm.take()?;
        self.deleting.insert(id.clone());
        Some(id)
    }

    /// On success exactly one entry with `id` is removed; on failure the list is untouched.
    pub fn finish_delete(&mut self, id: &str, result: Result<(), ApiError>) -> Result<(), ApiError> {
        self.deleting.remove(id);
        result?;
        if let Some(pos) = self.ideas.iter().position(|i| i.id.as_deref() == Some(id)) {
            self.ideas.remove(pos);
        }
        Ok(())
    }

    pub fn is_deleting(&self, id: &str) -> bool {
        self.deleting.contains(id)
    }
}
