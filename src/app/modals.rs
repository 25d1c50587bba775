//! Modal dialogs and toast notifications

use super::App;
use crate::constants::MSG_CONFIRM_DELETE;
use crate::theme;
use crate::types::ToastKind;
use eframe::egui;
use egui_phosphor::regular as icons;

const TOAST_VISIBLE_SECS: f32 = 3.0;
const TOAST_FADE_SECS: f32 = 0.5;

impl App {
    pub(crate) fn render_delete_confirm(&mut self, ctx: &egui::Context) {
        let Some(id) = self.saved.pending_confirm.clone() else {
            return;
        };
        let title = self
            .saved
            .ideas
            .iter()
            .find(|i| i.id.as_deref() == Some(id.as_str()))
            .map(|i| i.idea.clone());

        let mut confirmed = false;
        let mut cancelled = false;

        let modal_area = egui::Modal::default_area(egui::Id::new("delete_confirm_modal"))
            .default_width(theme::MODAL_WIDTH + theme::SPACING_XL * 2.0);
        let modal = egui::Modal::new(egui::Id::new("delete_confirm_modal"))
            .area(modal_area)
            .backdrop_color(egui::Color32::from_black_alpha(180))
            .frame(theme::modal_frame());
        let modal_response = modal.show(ctx, |ui| {
            ui.set_min_width(theme::MODAL_WIDTH);
            ui.set_max_width(theme::MODAL_WIDTH);

            ui.vertical_centered(|ui| {
                ui.add_space(theme::SPACING_SM);
                ui.label(
                    egui::RichText::new(icons::TRASH)
                        .size(32.0)
                        .color(theme::STATUS_ERROR),
                );
                ui.add_space(theme::SPACING_MD);
                ui.label(egui::RichText::new(MSG_CONFIRM_DELETE).size(theme::FONT_HEADING).strong());
                if let Some(title) = &title {
                    ui.add_space(theme::SPACING_SM);
                    ui.add(
                        egui::Label::new(egui::RichText::new(title).color(theme::TEXT_MUTED)).wrap(),
                    );
                }
            });

            ui.add_space(theme::SPACING_XL);
            ui.horizontal(|ui| {
                ui.set_min_height(theme::BUTTON_HEIGHT);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add(theme::button_danger(format!("{}  Delete", icons::TRASH)))
                        .clicked()
                    {
                        confirmed = true;
                    }
                    ui.add_space(theme::SPACING_MD);
                    if ui.add(theme::button(format!("{}  Cancel", icons::X))).clicked() {
                        cancelled = true;
                    }
                });
            });
        });

        if confirmed {
            self.confirm_delete(ctx);
        } else if cancelled || modal_response.should_close() {
            self.saved.cancel_delete();
        }
    }

    /// Bottom-right of the central panel; visible 3s then fades, paused while hovered
    pub(crate) fn render_toast(&mut self, ctx: &egui::Context) {
        let (Some(toast), Some(panel_rect)) = (self.toast.clone(), self.central_panel_rect) else {
            return;
        };
        let total = TOAST_VISIBLE_SECS + TOAST_FADE_SECS;
        let margin = 12.0;
        let toast_pos = egui::pos2(panel_rect.right() - margin, panel_rect.bottom() - margin);

        let (accent, icon) = match toast.kind {
            ToastKind::Success => (theme::STATUS_SUCCESS, icons::CHECK_CIRCLE),
            ToastKind::Error => (theme::STATUS_ERROR, icons::WARNING),
        };

        let response = egui::Area::new(egui::Id::new("toast"))
            .fixed_pos(toast_pos)
            .pivot(egui::Align2::RIGHT_BOTTOM)
            .show(ctx, |ui| {
                let elapsed = toast.start.elapsed().as_secs_f32();
                let alpha = if elapsed > TOAST_VISIBLE_SECS {
                    ((total - elapsed) / TOAST_FADE_SECS).clamp(0.0, 1.0)
                } else {
                    1.0
                };

                egui::Frame::new()
                    .fill(egui::Color32::from_rgba_unmultiplied(0x1a, 0x1a, 0x1e, (230.0 * alpha) as u8))
                    .stroke(egui::Stroke::new(
                        1.0,
                        egui::Color32::from_rgba_unmultiplied(accent.r(), accent.g(), accent.b(), (160.0 * alpha) as u8),
                    ))
                    .corner_radius(6.0)
                    .inner_margin(egui::Margin::symmetric(16, 10))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(format!("{}  {}", icon, toast.message)).color(
                            egui::Color32::from_rgba_unmultiplied(255, 255, 255, (255.0 * alpha) as u8),
                        ));
                    });
            });

        if response.response.hovered() {
            if let Some(t) = self.toast.as_mut() {
                t.start = std::time::Instant::now();
            }
        }

        let elapsed = self
            .toast
            .as_ref()
            .map(|t| t.start.elapsed().as_secs_f32())
            .unwrap_or(total);
        if elapsed >= total {
            self.toast = None;
        } else {
            ctx.request_repaint();
        }
    }
}
