//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `ui` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::EditorOptions;
pub use options::{DIVISION_COUNT, HIT_RADIUS, INFO_MESSAGE, MAX_CONTROL_POINTS};
pub use render_scene::RenderScene;
