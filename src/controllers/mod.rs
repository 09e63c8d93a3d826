pub mod console;
pub mod create;
pub mod detail;
pub mod generation;
pub mod list;
pub mod overlay;
pub mod reveal;
pub mod toast;

pub use console::Console;
