//! Background requests: one tokio task per user action, reporting back as an `ApiEvent`

use super::App;
use crate::constants::{MSG_DELETED, MSG_SAVED, MSG_SAVE_ERROR};
use crate::types::*;
use eframe::egui;
use std::future::Future;
use tracing::{debug, info, warn};

impl App {
    /// Run `request` on the runtime and deliver its event to the UI thread.
    fn spawn_request<F>(&self, ctx: &egui::Context, request: F)
    where
        F: Future<Output = ApiEvent> + Send + 'static,
    {
        let tx = self.events_tx.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let event = request.await;
            if tx.send(event).is_err() {
                debug!("UI closed before request finished");
            }
            ctx.request_repaint();
        });
    }

    pub fn submit_generate(&mut self, ctx: &egui::Context) {
        let Some(niche) = self.generator.submit() else {
            debug!("Generate request not sent");
            return;
        };
        info!(niche = %niche, "Generating ideas");

        let backend = self.backend.clone();
        self.spawn_request(ctx, async move {
            let result = backend.generate_ideas(&niche).await;
            ApiEvent::Generated { niche, result }
        });
    }

    pub fn save_generated(&mut self, ctx: &egui::Context, index: usize) {
        let Some((batch, request)) = self.generator.begin_save(index) else {
            return;
        };
        info!(index, niche = %request.niche, "Saving idea");

        let backend = self.backend.clone();
        self.spawn_request(ctx, async move {
            let result = backend.save_idea(&request).await;
            ApiEvent::Saved { batch, index, result }
        });
    }

    pub fn fetch_saved(&mut self, ctx: &egui::Context) {
        self.saved.mount();
        debug!("Fetching saved ideas");

        let backend = self.backend.clone();
        self.spawn_request(ctx, async move {
            ApiEvent::SavedListLoaded(backend.saved_ideas().await)
        });
    }

    pub fn confirm_delete(&mut self, ctx: &egui::Context) {
        let Some(id) = self.saved.confirm_delete() else {
            return;
        };
        info!(id = %id, "Deleting idea");

        let backend = self.backend.clone();
        self.spawn_request(ctx, async move {
            let result = backend.delete_idea(&id).await;
            ApiEvent::Deleted { id, result }
        });
    }

    pub fn check_health(&mut self, ctx: &egui::Context) {
        if self.health == HealthStatus::Checking {
            return;
        }
        self.health = HealthStatus::Checking;

        let backend = self.backend.clone();
        self.spawn_request(ctx, async move { ApiEvent::Health(backend.health().await) });
    }

    /// Drain finished requests into view state.
    pub fn poll_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_event(event);
        }
    }

    pub(crate) fn apply_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::Generated { niche, result } => {
                match &result {
                    Ok(ideas) => info!(count = ideas.len(), niche = %niche, "Ideas generated"),
                    Err(e) => warn!(error = %e, niche = %niche, "Idea generation failed"),
                }
                self.generator.finish_generate(niche, result);
            }
            ApiEvent::Saved { batch, index, result } => {
                self.generator.finish_save(batch, index);
                match result {
                    Ok(outcome) => {
                        match &outcome {
                            SaveOutcome::Persisted(idea) => debug!(id = ?idea.id, "Backend assigned id"),
                            SaveOutcome::Acknowledged { message } => {
                                debug!(message = %message, "Backend acknowledged save")
                            }
                        }
                        info!(index, "Idea saved");
                        self.show_toast(MSG_SAVED, ToastKind::Success);
                    }
                    Err(e) => {
                        warn!(error = %e, index, "Saving idea failed");
                        self.show_toast(MSG_SAVE_ERROR, ToastKind::Error);
                    }
                }
            }
            ApiEvent::SavedListLoaded(result) => {
                match &result {
                    Ok(ideas) => {
                        let without_id = ideas.iter().filter(|i| !i.is_persisted()).count();
                        if without_id > 0 {
                            warn!(count = without_id, "Saved ideas without an id cannot be deleted");
                        }
                        info!(count = ideas.len(), "Saved ideas loaded");
                    }
                    Err(e) => warn!(error = %e, "Fetching saved ideas failed"),
                }
                self.saved.finish_fetch(result);
            }
            ApiEvent::Deleted { id, result } => match self.saved.finish_delete(&id, result) {
                Ok(()) => {
                    info!(id = %id, "Idea deleted");
                    self.show_toast(MSG_DELETED, ToastKind::Success);
                }
                Err(e) => {
                    warn!(error = %e, id = %id, "Deleting idea failed");
                    self.show_toast(e.to_string(), ToastKind::Error);
                }
            },
            ApiEvent::Health(result) => {
                self.health = match result {
                    Ok(()) => HealthStatus::Online,
                    Err(e) => {
                        warn!(error = %e, "Backend health check failed");
                        HealthStatus::Offline(e.to_string())
                    }
                };
            }
        }
    }
}
