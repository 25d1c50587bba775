//! App module - contains the main application state and logic

mod generator;
mod modals;
mod requests;
mod saved;
mod views;

use generator::GeneratorState;
use saved::SavedState;

use crate::api::{HttpBackend, IdeaBackend};
use crate::settings::Settings;
use crate::theme;
use crate::types::*;
use eframe::egui;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use tracing::info;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) route: Route,
    pub(crate) generator: GeneratorState,
    pub(crate) saved: SavedState,
    pub(crate) health: HealthStatus,
    pub(crate) toast: Option<Toast>,
    // Backend access
    pub(crate) backend: Arc<dyn IdeaBackend>,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) events_tx: Sender<ApiEvent>,
    pub(crate) events_rx: Receiver<ApiEvent>,
    // Settings & window
    pub(crate) settings: Settings,
    pub(crate) data_dir: PathBuf,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) started: bool,
    // Central panel rect for toast positioning
    pub(crate) central_panel_rect: Option<egui::Rect>,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        data_dir: PathBuf,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let backend = HttpBackend::new(settings.api_url(), settings.request_timeout())?;
        info!(url = %backend.base_url(), "Backend configured");

        Ok(Self::with_backend(Arc::new(backend), settings, data_dir)?)
    }

    /// Build the app state around any backend; no window required.
    pub fn with_backend(
        backend: Arc<dyn IdeaBackend>,
        settings: Settings,
        data_dir: PathBuf,
    ) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("reel-planner-io")
            .enable_all()
            .build()?;
        let (events_tx, events_rx) = mpsc::channel();

        Ok(Self {
            route: Route::Root,
            generator: GeneratorState::default(),
            saved: SavedState::default(),
            health: HealthStatus::Unknown,
            toast: None,
            backend,
            runtime,
            events_tx,
            events_rx,
            settings,
            data_dir,
            window_pos: None,
            window_size: None,
            needs_center: false,
            started: false,
            central_panel_rect: None,
        })
    }

    /// First-frame work: resolve the entry route and probe the backend.
    pub fn start(&mut self, ctx: &egui::Context) {
        if self.started {
            return;
        }
        self.started = true;
        self.navigate(ctx, Route::Root);
        self.check_health(ctx);
    }

    /// Switch screens. Entering the saved-ideas view mounts it, which refetches.
    pub fn navigate(&mut self, ctx: &egui::Context, route: Route) {
        let target = route.resolve();
        if target == self.route {
            return;
        }
        info!(from = ?self.route, to = ?target, "Navigating");
        self.route = target;
        if target == Route::SavedIdeas {
            self.fetch_saved(ctx);
        }
    }

    pub fn show_toast(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.toast = Some(Toast::new(message, kind));
    }

    pub fn save_settings(&mut self) {
        self.settings.window_x = self.window_pos.map(|p| p.x);
        self.settings.window_y = self.window_pos.map(|p| p.y);
        self.settings.window_w = self.window_size.map(|s| s.x);
        self.settings.window_h = self.window_size.map(|s| s.y);
        self.settings.save(&self.data_dir);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::constants::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Default)]
    struct FakeBackend {
        generated: Vec<Idea>,
        stored: Vec<Idea>,
        fail: bool,
        calls: Mutex<Vec<String>>,
        save_requests: Mutex<Vec<SaveIdeaRequest>>,
    }

    impl FakeBackend {
        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn failure(&self, message: &str) -> ApiError {
            ApiError::Status {
                status: 500,
                message: message.to_string(),
            }
        }
    }

    #[async_trait]
    impl IdeaBackend for FakeBackend {
        async fn generate_ideas(&self, niche: &str) -> Result<Vec<Idea>, ApiError> {
            self.record(format!("generate:{}", niche));
            if self.fail {
                return Err(self.failure(MSG_GENERATE_FAILED));
            }
            Ok(self.generated.clone())
        }

        async fn save_idea(&self, request: &SaveIdeaRequest) -> Result<SaveOutcome, ApiError> {
            self.record("save".into());
            self.save_requests.lock().unwrap().push(request.clone());
            if self.fail {
                return Err(self.failure(MSG_SAVE_FAILED));
            }
            Ok(SaveOutcome::Acknowledged {
                message: "Idea saved successfully".into(),
            })
        }

        async fn saved_ideas(&self) -> Result<Vec<Idea>, ApiError> {
            self.record("list".into());
            if self.fail {
                return Err(self.failure(MSG_SAVED_LIST_FAILED));
            }
            Ok(self.stored.clone())
        }

        async fn delete_idea(&self, id: &str) -> Result<(), ApiError> {
            self.record(format!("delete:{}", id));
            if self.fail {
                return Err(ApiError::Status {
                    status: 404,
                    message: "Idea not found or already deleted".into(),
                });
            }
            Ok(())
        }

        async fn health(&self) -> Result<(), ApiError> {
            self.record("health".into());
            Ok(())
        }
    }

    fn idea(text: &str, id: Option<&str>) -> Idea {
        Idea {
            id: id.map(str::to_string),
            idea: text.to_string(),
            hooks: vec![format!("{} hook", text)],
            caption_short: format!("{} short", text),
            caption_long: format!("{} long", text),
            hashtags: vec!["reels".into()],
            niche: None,
            created_at: None,
        }
    }

    fn app_with(backend: Arc<FakeBackend>) -> App {
        App::with_backend(backend, Settings::default(), std::env::temp_dir()).unwrap()
    }

    /// Wait for one background request to finish and apply it.
    fn next_event(app: &mut App) {
        let event = app
            .events_rx
            .recv_timeout(Duration::from_secs(5))
            .expect("request should finish");
        app.apply_event(event);
    }

    fn no_pending_events(app: &App) -> bool {
        app.events_rx.recv_timeout(Duration::from_millis(100)).is_err()
    }

    #[test]
    fn test_root_redirects_to_generator() {
        let backend = Arc::new(FakeBackend::default());
        let mut app = app_with(backend.clone());
        let ctx = egui::Context::default();
        assert_eq!(app.route, Route::Root);

        app.start(&ctx);
        assert_eq!(app.route, Route::Generator);
        next_event(&mut app);
        assert_eq!(app.health, HealthStatus::Online);
        assert_eq!(backend.calls(), vec!["health"]);
    }

    #[test]
    fn test_blank_niche_never_sends() {
        let backend = Arc::new(FakeBackend::default());
        let mut app = app_with(backend.clone());
        let ctx = egui::Context::default();

        app.generator.niche_input = "   ".into();
        app.submit_generate(&ctx);

        assert_eq!(app.generator.phase.error(), Some(MSG_EMPTY_NICHE));
        assert!(!app.generator.phase.is_loading());
        assert!(no_pending_events(&app));
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_generate_shows_every_idea() {
        let backend = Arc::new(FakeBackend {
            generated: vec![idea("a", None), idea("b", None), idea("c", None)],
            ..Default::default()
        });
        let mut app = app_with(backend.clone());
        let ctx = egui::Context::default();

        app.generator.niche_input = "fitness".into();
        app.submit_generate(&ctx);
        assert!(app.generator.phase.is_loading());

        next_event(&mut app);
        assert!(!app.generator.phase.is_loading());
        assert_eq!(app.generator.phase, RequestPhase::Success);
        assert_eq!(app.generator.ideas.len(), 3);
        assert_eq!(backend.calls(), vec!["generate:fitness"]);
    }

    #[test]
    fn test_generate_failure_clears_loading() {
        let backend = Arc::new(FakeBackend {
            fail: true,
            ..Default::default()
        });
        let mut app = app_with(backend);
        let ctx = egui::Context::default();

        app.generator.niche_input = "fitness".into();
        app.submit_generate(&ctx);
        assert!(app.generator.phase.is_loading());

        next_event(&mut app);
        assert!(!app.generator.phase.is_loading());
        assert_eq!(app.generator.phase.error(), Some(MSG_GENERATE_FAILED));
    }

    #[test]
    fn test_save_sends_idea_fields_and_active_niche() {
        let backend = Arc::new(FakeBackend {
            generated: vec![idea("a", None), idea("b", None)],
            ..Default::default()
        });
        let mut app = app_with(backend.clone());
        let ctx = egui::Context::default();

        app.generator.niche_input = "pottery".into();
        app.submit_generate(&ctx);
        next_event(&mut app);

        app.save_generated(&ctx, 1);
        assert!(app.generator.is_saving(1));
        next_event(&mut app);

        let requests = backend.save_requests.lock().unwrap().clone();
        assert_eq!(requests, vec![idea("b", None).to_save_request("pottery")]);
        assert!(!app.generator.is_saving(1));
        assert_eq!(app.generator.ideas.len(), 2);
        let toast = app.toast.as_ref().unwrap();
        assert_eq!(toast.message, MSG_SAVED);
        assert_eq!(toast.kind, ToastKind::Success);
    }

    #[test]
    fn test_save_failure_keeps_transient_list() {
        let backend = Arc::new(FakeBackend {
            fail: true,
            ..Default::default()
        });
        let mut app = app_with(backend);
        let ctx = egui::Context::default();
        app.generator
            .finish_generate("pottery".into(), Ok(vec![idea("a", None)]));

        app.save_generated(&ctx, 0);
        next_event(&mut app);

        assert_eq!(app.generator.ideas.len(), 1);
        let toast = app.toast.as_ref().unwrap();
        assert_eq!(toast.message, MSG_SAVE_ERROR);
        assert_eq!(toast.kind, ToastKind::Error);
    }

    #[test]
    fn test_entering_saved_view_fetches_each_time() {
        let backend = Arc::new(FakeBackend {
            stored: vec![idea("a", Some("1")), idea("b", Some("2"))],
            ..Default::default()
        });
        let mut app = app_with(backend.clone());
        let ctx = egui::Context::default();

        app.navigate(&ctx, Route::SavedIdeas);
        assert!(app.saved.phase.is_loading());
        next_event(&mut app);
        assert_eq!(app.saved.ideas.len(), 2);

        // Re-selecting the current view does not remount it
        app.navigate(&ctx, Route::SavedIdeas);
        assert!(no_pending_events(&app));

        app.navigate(&ctx, Route::Generator);
        app.navigate(&ctx, Route::SavedIdeas);
        next_event(&mut app);
        assert_eq!(backend.calls(), vec!["list", "list"]);
    }

    #[test]
    fn test_saved_fetch_failure_shows_error() {
        let backend = Arc::new(FakeBackend {
            fail: true,
            ..Default::default()
        });
        let mut app = app_with(backend);
        let ctx = egui::Context::default();

        app.navigate(&ctx, Route::SavedIdeas);
        next_event(&mut app);
        assert!(!app.saved.phase.is_loading());
        assert_eq!(app.saved.phase.error(), Some(MSG_SAVED_LIST_FAILED));
    }

    #[test]
    fn test_delete_flow() {
        let backend = Arc::new(FakeBackend {
            stored: vec![idea("a", Some("1")), idea("b", Some("2"))],
            ..Default::default()
        });
        let mut app = app_with(backend.clone());
        let ctx = egui::Context::default();
        app.navigate(&ctx, Route::SavedIdeas);
        next_event(&mut app);

        // Nothing is sent until the user confirms
        assert!(app.saved.request_delete(Some("1")));
        assert!(no_pending_events(&app));

        app.confirm_delete(&ctx);
        assert!(app.saved.is_deleting("1"));
        next_event(&mut app);

        let remaining: Vec<_> = app.saved.ideas.iter().filter_map(|i| i.id.clone()).collect();
        assert_eq!(remaining, vec!["2"]);
        assert_eq!(backend.calls(), vec!["list", "delete:1"]);
        assert_eq!(app.toast.as_ref().unwrap().message, MSG_DELETED);
    }

    #[test]
    fn test_delete_failure_surfaces_detail() {
        let mut app = app_with(Arc::new(FakeBackend {
            fail: true,
            ..Default::default()
        }));
        let ctx = egui::Context::default();
        app.saved
            .finish_fetch(Ok(vec![idea("a", Some("1")), idea("b", Some("2"))]));

        app.saved.request_delete(Some("2"));
        app.confirm_delete(&ctx);
        next_event(&mut app);

        assert_eq!(app.saved.ideas.len(), 2);
        assert!(!app.saved.is_deleting("2"));
        let toast = app.toast.as_ref().unwrap();
        assert_eq!(toast.message, "Idea not found or already deleted");
        assert_eq!(toast.kind, ToastKind::Error);
    }
}
