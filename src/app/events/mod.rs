//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

mod command;
pub mod input;
mod intent;

pub use command::AppCommand;
pub use input::PointerButton;
pub use intent::AppIntent;
