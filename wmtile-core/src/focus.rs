//! Focus cycling within an ordered window list.
use crate::errors::{Result, TileError};
use crate::models::Window;

/// Returns the window after `current`, wrapping around at the end of the
/// list.
///
/// # Errors
///
/// `WindowNotFound` when `current` is not in `windows`. The caller must
/// resolve `current` against a fresh window list first.
pub fn next_focus(windows: &[Window], current: &Window) -> Result<Window> {
    relative_focus(windows, current, 1)
}

/// Returns the window before `current`, wrapping around at the start of the
/// list.
///
/// # Errors
///
/// `WindowNotFound` when `current` is not in `windows`.
pub fn prev_focus(windows: &[Window], current: &Window) -> Result<Window> {
    relative_focus(windows, current, -1)
}

fn relative_focus(windows: &[Window], current: &Window, shift: i32) -> Result<Window> {
    let index = windows
        .iter()
        .position(|w| w.handle == current.handle)
        .ok_or(TileError::WindowNotFound(current.handle))?;
    let target = (index as i32 + shift).rem_euclid(windows.len() as i32) as usize;
    Ok(windows[target].clone())
}
