//! Main egui application — owns the session controller and picks the view.

use std::rc::Rc;

use egui::{self, CentralPanel};

use aimpact_core::{Intent, SessionController};
use aimpact_platform::answer::answers_from_config;
use aimpact_platform::spawn::BrowserSpawner;
use aimpact_types::config::AppConfig;
use aimpact_types::suggestion::SuggestionCatalog;
use aimpact_ui::panels::{hero, prompt_bar, transcript};
use aimpact_ui::theme;

/// The main application state
pub struct AimpactApp {
    config: AppConfig,
    controller: SessionController,
    first_frame: bool,
}

impl AimpactApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = AppConfig::from_build_env();
        let answers = answers_from_config(&config);
        let controller = SessionController::new(
            SuggestionCatalog::builtin(),
            answers,
            Rc::new(BrowserSpawner),
        );

        Self {
            config,
            controller,
            first_frame: true,
        }
    }
}

impl eframe::App for AimpactApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Fold in answers that arrived since the last frame
        if self.controller.has_unapplied_settlements() {
            self.controller.apply_settlements();
            ctx.request_repaint();
        }

        // Keep polling while a request is outstanding (typing indicator
        // animates too). The collapsed view's artwork animates every frame.
        let state = self.controller.state();
        if state.is_pending() || !state.is_expanded() {
            ctx.request_repaint();
        }

        let intents: Vec<Intent> = CentralPanel::default()
            .frame(egui::Frame::default().fill(theme::BG_PRIMARY).inner_margin(theme::PANEL_PADDING))
            .show(ctx, |ui| {
                let state = self.controller.state();
                if state.is_expanded() {
                    transcript::transcript_view(ui, state, &self.config.title)
                } else {
                    hero::hero(ui);
                    prompt_bar::prompt_bar(ui, state, self.controller.catalog())
                }
            })
            .inner;

        for intent in intents {
            self.controller.dispatch(intent);
        }
    }
}
