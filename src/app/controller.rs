//! Application Controller für zentrale Event-Verarbeitung.

use super::events::input::{intent_for_key, intent_for_pointer_down};
use super::render_scene;
use super::{AppCommand, AppIntent, AppState, PointerButton};
use crate::shared::RenderScene;
use glam::Vec2;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
///
/// Pro Intent werden die zugeordneten Commands vollständig ausgeführt; jede
/// Mutation der Kontrollpunkte hat die Kurve danach bereits neu berechnet.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Zeigerbewegung in Fensterkoordinaten.
    pub fn on_pointer_move(&mut self, state: &mut AppState, x: f32, y: f32) -> anyhow::Result<()> {
        self.handle_intent(
            state,
            AppIntent::PointerMoved {
                pos: Vec2::new(x, y),
            },
        )
    }

    /// Maustaste gedrückt in Fensterkoordinaten.
    pub fn on_pointer_down(
        &mut self,
        state: &mut AppState,
        button: PointerButton,
        x: f32,
        y: f32,
    ) -> anyhow::Result<()> {
        match intent_for_pointer_down(button, Vec2::new(x, y)) {
            Some(intent) => self.handle_intent(state, intent),
            None => Ok(()),
        }
    }

    /// Tastendruck; nicht belegte Tasten werden ignoriert.
    pub fn on_key_down(&mut self, state: &mut AppState, key: char) -> anyhow::Result<()> {
        match intent_for_key(key) {
            Some(intent) => self.handle_intent(state, intent),
            None => Ok(()),
        }
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        use super::handlers;

        match command {
            // === Kontrollpunkte ===
            AppCommand::SelectControlPoint { pos, max_distance } => {
                handlers::editing::select_control_point(state, pos, max_distance)
            }
            AppCommand::CommitMove { index, pos } => {
                handlers::editing::commit_move(state, index, pos)
            }
            AppCommand::AppendControlPoint { pos } => {
                handlers::editing::append_control_point(state, pos)
            }
            AppCommand::RemoveControlPoint { index } => {
                handlers::editing::remove_control_point(state, index)
            }
            AppCommand::CancelDrag => handlers::editing::cancel_drag(state),

            // === Ansicht ===
            AppCommand::SetCursorPosition { pos } => handlers::view::set_cursor_position(state, pos),
            AppCommand::InvertColors => handlers::view::invert_colors(state),
            AppCommand::ToggleInfo => handlers::view::toggle_info(state),

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
