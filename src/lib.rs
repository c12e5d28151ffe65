pub mod app;
pub mod board;
pub mod cli;
pub mod config;
pub mod events;
pub mod store;
pub mod tea;
pub mod theme;
pub mod ui;

pub use app::App;
