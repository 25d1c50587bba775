//! Reusable UI components
//!
//! Standalone widgets shared by the generator and saved-ideas views.

use crate::theme;
use crate::types::Idea;
use crate::utils::format_hashtags;
use eframe::egui;
use egui::RichText;

/// Small rounded label, used for hooks and niche badges
pub fn chip(ui: &mut egui::Ui, text: &str, bg: egui::Color32, fg: egui::Color32) {
    egui::Frame::new()
        .fill(bg)
        .corner_radius(theme::RADIUS_DEFAULT)
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(text).size(theme::FONT_SMALL).color(fg));
        });
}

fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.add_space(theme::SPACING_SM);
    ui.label(
        RichText::new(text)
            .size(theme::FONT_LABEL)
            .strong()
            .color(theme::TEXT_SECONDARY),
    );
}

fn wrapped(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    ui.add(egui::Label::new(RichText::new(text).size(theme::FONT_BODY).color(color)).wrap());
}

/// One idea: title, optional niche badge and timestamp, hooks, captions, hashtags.
/// `actions` renders the card's buttons at the bottom.
pub fn idea_card(
    ui: &mut egui::Ui,
    idea: &Idea,
    created: Option<&str>,
    actions: impl FnOnce(&mut egui::Ui),
) {
    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.add(
            egui::Label::new(
                RichText::new(&idea.idea)
                    .size(theme::FONT_HEADING)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            )
            .wrap(),
        );

        let niche = idea.niche.as_deref().filter(|n| !n.is_empty());
        if niche.is_some() || created.is_some() {
            ui.horizontal(|ui| {
                if let Some(niche) = niche {
                    chip(ui, niche, theme::CHIP_NICHE_BG, theme::CHIP_NICHE_TEXT);
                }
                if let Some(created) = created {
                    ui.label(
                        RichText::new(format!("{}  {}", egui_phosphor::regular::CLOCK, created))
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_DIM),
                    );
                }
            });
        }

        if !idea.hooks.is_empty() {
            section_heading(ui, "Hooks:");
            ui.horizontal_wrapped(|ui| {
                for hook in &idea.hooks {
                    chip(ui, hook, theme::CHIP_HOOK_BG, theme::CHIP_HOOK_TEXT);
                }
            });
        }

        section_heading(ui, "Short Caption:");
        wrapped(ui, &idea.caption_short, theme::TEXT_MUTED);

        section_heading(ui, "Long Caption:");
        wrapped(ui, &idea.caption_long, theme::TEXT_MUTED);

        section_heading(ui, "Hashtags:");
        wrapped(ui, &format_hashtags(&idea.hashtags), theme::ACCENT);

        ui.add_space(theme::SPACING_MD);
        actions(ui);
    });
    ui.add_space(theme::SPACING_LG);
}

/// Inline red error panel
pub fn error_panel(ui: &mut egui::Ui, message: &str) {
    ui.scope(|ui| {
        ui.style_mut().spacing.item_spacing.x = 0.0;
        theme::error_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            let text = format!("{}  {}", egui_phosphor::regular::WARNING, message);
            ui.add(egui::Label::new(RichText::new(text).color(theme::ERROR_TEXT)).wrap());
        });
    });
}

/// Centered spinner with a caption
pub fn loading(ui: &mut egui::Ui, caption: &str) {
    ui.add_space(theme::SPACING_XL * 3.0);
    ui.vertical_centered(|ui| {
        ui.spinner();
        ui.add_space(theme::SPACING_SM);
        ui.label(RichText::new(caption).color(theme::TEXT_MUTED));
    });
}

/// Centered muted message for empty lists
pub fn empty_state(ui: &mut egui::Ui, message: &str) {
    ui.add_space(theme::SPACING_XL * 3.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(message).size(theme::FONT_BODY).color(theme::TEXT_DIM));
    });
}
