pub mod commands;
pub mod paths;
