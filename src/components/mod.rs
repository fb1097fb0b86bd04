//! The components module contains the player UI and its controller.

mod app;
mod controller;
mod input;
mod player;
mod schedule;

pub use app::*;
pub use controller::*;
pub use input::*;
pub use player::*;
