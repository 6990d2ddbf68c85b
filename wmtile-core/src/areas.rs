//! Partitions windows by desktop and by configured tiling area.
//!
//! Area membership is decided by the window's top-left corner alone, so a
//! window may hang out of its area and still belong to it.
use crate::config::Config;
use crate::models::{Desktop, Geometry, Window};

/// Returns the desktop the window manager reports as active.
pub fn active_desktop(desktops: &[Desktop]) -> Option<&Desktop> {
    desktops.iter().find(|d| d.active)
}

/// Filters `windows` to those on `desktop`, preserving input order.
#[must_use]
pub fn windows_in_desktop(windows: &[Window], desktop: &Desktop) -> Vec<Window> {
    windows
        .iter()
        .filter(|w| w.desktop == desktop.id)
        .cloned()
        .collect()
}

/// Returns the first configured tiling area containing the window's top-left
/// corner, or `None` when no area matches. When areas overlap, configured
/// order breaks the tie.
#[must_use]
pub fn tiling_area_for_window(window: &Window, config: &Config) -> Option<Geometry> {
    config
        .tiling_areas
        .iter()
        .copied()
        .find(|area| area.contains_point(window.geometry.x, window.geometry.y))
}

/// Filters `windows` to those whose top-left corner lies inside `area`,
/// preserving input order.
#[must_use]
pub fn windows_in_area(windows: &[Window], area: Geometry) -> Vec<Window> {
    windows
        .iter()
        .filter(|w| area.contains_point(w.geometry.x, w.geometry.y))
        .cloned()
        .collect()
}
