pub mod commands;
pub mod env;
pub mod state;
pub mod terminal;
