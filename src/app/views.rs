//! View rendering (top bar, generator, saved ideas)

use super::App;
use crate::constants::APP_NAME;
use crate::theme;
use crate::types::*;
use crate::ui::components::{empty_state, error_panel, idea_card, loading};
use crate::utils::format_relative;
use eframe::egui;
use egui::RichText;
use egui_phosphor::regular as icons;

impl App {
    // ========================================================================
    // TOP BAR
    // ========================================================================

    pub(crate) fn render_top_bar(&mut self, ctx: &egui::Context) {
        let mut target = None;
        let mut recheck = false;

        egui::TopBottomPanel::top("top_bar")
            .exact_height(theme::TOP_BAR_HEIGHT)
            .frame(theme::top_bar_frame())
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        RichText::new(format!("{}  {}", icons::LIGHTBULB, APP_NAME))
                            .size(theme::FONT_TITLE)
                            .strong()
                            .color(theme::ACCENT),
                    );
                    ui.add_space(theme::SPACING_XL);

                    for (route, icon, label) in [
                        (Route::Generator, icons::SPARKLE, "Generator"),
                        (Route::SavedIdeas, icons::BOOKMARK_SIMPLE, "Saved Ideas"),
                    ] {
                        let selected = self.route == route;
                        if ui
                            .selectable_label(selected, format!("{}  {}", icon, label))
                            .clicked()
                        {
                            target = Some(route);
                        }
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let (color, text) = match &self.health {
                            HealthStatus::Unknown => (theme::TEXT_DIM, "Backend unknown"),
                            HealthStatus::Checking => (theme::STATUS_WARNING, "Checking..."),
                            HealthStatus::Online => (theme::STATUS_SUCCESS, "Backend online"),
                            HealthStatus::Offline(_) => (theme::STATUS_ERROR, "Backend offline"),
                        };
                        let status = ui.add(
                            egui::Label::new(
                                RichText::new(format!("{}  {}", icons::CIRCLE, text))
                                    .size(theme::FONT_LABEL)
                                    .color(color),
                            )
                            .sense(egui::Sense::click()),
                        );
                        let hover = match &self.health {
                            HealthStatus::Offline(err) => format!("{}\nClick to re-check", err),
                            _ => "Click to re-check".to_string(),
                        };
                        if status.on_hover_text(hover).clicked() {
                            recheck = true;
                        }
                        ui.label(
                            RichText::new(self.settings.api_url())
                                .size(theme::FONT_SMALL)
                                .color(theme::TEXT_DIM),
                        );
                    });
                });
            });

        if let Some(route) = target {
            self.navigate(ctx, route);
        }
        if recheck {
            self.check_health(ctx);
        }
    }

    // ========================================================================
    // GENERATOR VIEW
    // ========================================================================

    pub(crate) fn render_generator(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let mut submit = false;
        let mut save = None;
        let is_loading = self.generator.phase.is_loading();

        ui.label(
            RichText::new("Generate Reel Ideas")
                .size(theme::FONT_TITLE)
                .strong(),
        );
        ui.add_space(theme::SPACING_MD);

        ui.horizontal(|ui| {
            let input = ui.add_enabled(
                !is_loading,
                egui::TextEdit::singleline(&mut self.generator.niche_input)
                    .hint_text("Enter your niche...")
                    .desired_width(theme::NICHE_INPUT_WIDTH),
            );
            if input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submit = true;
            }

            let label = if is_loading { "Generating..." } else { "Generate Ideas" };
            let button = theme::button_accent(format!("{}  {}", icons::SPARKLE, label));
            if ui.add_enabled(!is_loading, button).clicked() {
                submit = true;
            }
        });

        if let Some(err) = self.generator.phase.error() {
            ui.add_space(theme::SPACING_SM);
            error_panel(ui, err);
        }
        ui.add_space(theme::SPACING_LG);

        if is_loading {
            loading(ui, "Generating ideas...");
        } else if self.generator.ideas.is_empty() {
            empty_state(ui, "Enter a niche and click \"Generate Ideas\" to get started");
        } else {
            for (index, idea) in self.generator.ideas.iter().enumerate() {
                let saving = self.generator.is_saving(index);
                idea_card(ui, idea, None, |ui| {
                    let label = if saving { "Saving..." } else { "Save Idea" };
                    let button = theme::button_accent(format!("{}  {}", icons::FLOPPY_DISK, label));
                    if ui.add_enabled(!saving, button).clicked() {
                        save = Some(index);
                    }
                });
            }
        }

        if submit {
            self.submit_generate(ctx);
        }
        if let Some(index) = save {
            self.save_generated(ctx, index);
        }
    }

    // ========================================================================
    // SAVED IDEAS VIEW
    // ========================================================================

    pub(crate) fn render_saved(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let mut back = false;
        let mut refresh = false;
        let mut delete: Option<String> = None;
        let is_loading = self.saved.phase.is_loading();

        ui.horizontal(|ui| {
            if ui
                .add(theme::button(format!("{}  Back to Generator", icons::ARROW_LEFT)))
                .clicked()
            {
                back = true;
            }
            ui.add_space(theme::SPACING_MD);
            ui.label(
                RichText::new("Your Saved Ideas")
                    .size(theme::FONT_TITLE)
                    .strong(),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let button = theme::button(format!("{}  Refresh", icons::ARROWS_CLOCKWISE));
                if ui.add_enabled(!is_loading, button).clicked() {
                    refresh = true;
                }
            });
        });
        ui.add_space(theme::SPACING_LG);

        match &self.saved.phase {
            RequestPhase::Loading => loading(ui, "Loading saved ideas..."),
            RequestPhase::Error(msg) => error_panel(ui, msg),
            _ if self.saved.ideas.is_empty() => {
                empty_state(ui, "You haven't saved any ideas yet.")
            }
            _ => {
                let now = chrono::Utc::now();
                for idea in &self.saved.ideas {
                    let created = idea.created_at_utc().map(|t| format_relative(t, now));
                    idea_card(ui, idea, created.as_deref(), |ui| match idea.id.as_deref() {
                        Some(id) if self.saved.is_deleting(id) => {
                            ui.horizontal(|ui| {
                                ui.spinner();
                                ui.label(RichText::new("Deleting...").color(theme::TEXT_MUTED));
                            });
                        }
                        Some(id) => {
                            let button =
                                theme::button_danger(format!("{}  Delete Idea", icons::TRASH));
                            if ui.add(button).clicked() {
                                delete = Some(id.to_string());
                            }
                        }
                        None => {
                            ui.add_enabled(false, theme::button("Not Saved (No ID)"));
                        }
                    });
                }
            }
        }

        if back {
            self.navigate(ctx, Route::Generator);
        }
        if refresh {
            self.fetch_saved(ctx);
        }
        if let Some(id) = delete {
            self.saved.request_delete(Some(&id));
        }
    }
}
