//! Pure tiling, focus and placement logic for `wmtile`.
//!
//! Nothing in this crate talks to a window manager. Each module consumes a
//! snapshot of desktops and windows and produces either filtered window
//! lists, target geometries or [`DisplayAction`]s for the boundary to issue.
#![warn(clippy::pedantic)]
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate
)]
pub mod areas;
pub mod config;
pub mod decorations;
mod display_action;
pub mod errors;
pub mod focus;
pub mod layouts;
pub mod models;

pub use config::Config;
pub use display_action::{maximize_all, placement_actions, DisplayAction};
pub use errors::TileError;
pub use layouts::Placement;
pub use models::{Desktop, Geometry, Window, WindowHandle};
