#![deny(missing_docs)]
//! Front end for the eqs solvers: argument parsing, the interactive menu,
//! console rendering and report persistence.

pub mod commands;
pub mod input;
pub mod render;
pub mod report;
pub mod settings;

pub use commands::interactive::Menu;
pub use settings::Settings;
