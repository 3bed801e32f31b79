mod commands;
mod render;
mod session;
mod setup;
mod styles;
mod templates;

pub use commands::run;
