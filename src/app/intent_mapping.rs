//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState, InteractionState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Liest den aktuellen Interaktionszustand und den Pick-Radius aus dem State;
/// mutiert selbst nichts.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerMoved { pos } => vec![AppCommand::SetCursorPosition { pos }],
        AppIntent::PrimaryPressed { pos } => match state.interaction() {
            InteractionState::Idle => vec![AppCommand::SelectControlPoint {
                pos,
                max_distance: state.options.hit_radius,
            }],
            // Zweiter Klick setzt den gewählten Punkt ab, egal wo geklickt wird
            InteractionState::Dragging { index } => vec![AppCommand::CommitMove { index, pos }],
        },
        AppIntent::SecondaryPressed { pos } => {
            let edit = match state.hit_test(pos) {
                Some(index) => AppCommand::RemoveControlPoint { index },
                None => AppCommand::AppendControlPoint { pos },
            };
            // Auswahl zuerst verwerfen: ein Entfernen verschiebt nachfolgende Indizes
            vec![AppCommand::CancelDrag, edit]
        }
        AppIntent::InvertColorsRequested => vec![AppCommand::InvertColors],
        AppIntent::ToggleInfoRequested => vec![AppCommand::ToggleInfo],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
