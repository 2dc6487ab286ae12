//! UI-Layer mit egui: Canvas-Input und Zeichnen der Render-Szene.
//!
//! Der Kurvenkern kennt egui nicht; dieses Modul übersetzt egui-Eingaben in
//! `AppIntent`s und zeichnet die vom Controller gebaute `RenderScene`.

pub mod canvas;
pub mod input;
mod keyboard;

pub use canvas::paint_scene;
pub use input::collect_canvas_intents;
