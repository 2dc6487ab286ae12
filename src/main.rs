//! Bezier Editor.
//!
//! Kontrollpunkte per Maus setzen, verschieben und entfernen; die Bézier-Kurve
//! beliebigen Grades wird nach jeder Änderung neu gezeichnet.

use bezier_editor::shared::INFO_MESSAGE;
use bezier_editor::{ui, AppController, AppIntent, AppState, EditorOptions};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Bezier Editor v{} startet...", env!("CARGO_PKG_VERSION"));
        log::info!("{}", INFO_MESSAGE);

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(editor_options.window_size)
                .with_resizable(false)
                .with_title("Bezier interactive example"),
            ..Default::default()
        };

        eframe::run_native(
            "Bezier Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new(editor_options)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
}

impl EditorApp {
    fn new(editor_options: EditorOptions) -> Self {
        Self {
            state: AppState::with_options(editor_options),
            controller: AppController::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click());

                let events = ui::collect_canvas_intents(ui, &response);
                let has_events = !events.is_empty();
                self.process_events(events);

                let scene = self.controller.build_render_scene(&self.state);
                ui::paint_scene(ui.painter(), rect, &scene);

                if has_events {
                    ctx.request_repaint();
                }
            });
    }
}

impl EditorApp {
    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
