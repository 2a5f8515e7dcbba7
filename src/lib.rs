pub mod error;
pub mod flags;
pub mod shell;

pub mod core;
pub mod process;
pub mod style;
