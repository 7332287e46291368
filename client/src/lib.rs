mod actions;
mod app;
mod dom;
mod persistence;
mod render;
mod settings;
mod sidebar;
mod state;
mod util;

pub use app::run;
