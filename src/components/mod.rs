//! The components module contains all shared components for our app.

mod app;
mod audio_manager;
mod icons;
mod library;
mod player;
mod player_handle;
mod sidebar;
pub mod views;

pub use app::*;
pub use audio_manager::*;
pub use icons::*;
pub use library::*;
pub use player::*;
pub use player_handle::*;
pub use sidebar::*;
