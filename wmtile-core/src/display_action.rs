use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::decorations::remove_decorations;
use crate::layouts::Placement;
use crate::models::{Geometry, Window, WindowHandle};

/// These are responses from the tiling engine.
/// The window-manager boundary should act on these actions.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayAction {
    /// Drop the maximized state so that a following move/resize is honored.
    Unmaximize(WindowHandle),

    /// Move and resize a window to the given inner geometry.
    MoveAndResize(WindowHandle, Geometry),

    /// Let the window manager give the window its own maximized size.
    Maximize(WindowHandle),

    /// Tell a window that it is to become focused.
    FocusWindow(WindowHandle),
}

/// Expands placements into the unmaximize + move pairs the boundary issues.
/// Maximized windows ignore geometry requests, so the unmaximize always comes
/// first. Decoration insets are removed here; the layout itself stays an
/// outer-geometry computation.
#[must_use]
pub fn placement_actions(placements: &[Placement], config: &Config) -> Vec<DisplayAction> {
    placements
        .iter()
        .flat_map(|p| {
            [
                DisplayAction::Unmaximize(p.handle),
                DisplayAction::MoveAndResize(p.handle, remove_decorations(p.geometry, config)),
            ]
        })
        .collect()
}

/// One maximize per window, input order preserved.
#[must_use]
pub fn maximize_all(windows: &[Window]) -> Vec<DisplayAction> {
    windows
        .iter()
        .map(|w| DisplayAction::Maximize(w.handle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(id: u64) -> Window {
        Window {
            handle: WindowHandle(id),
            desktop: 0,
            name: format!("window {id}"),
            geometry: Geometry::default(),
        }
    }

    #[test]
    fn maximize_all_keeps_input_order() {
        let windows = vec![window(1), window(2)];
        assert_eq!(
            maximize_all(&windows),
            vec![
                DisplayAction::Maximize(WindowHandle(1)),
                DisplayAction::Maximize(WindowHandle(2)),
            ]
        );
    }

    #[test]
    fn placements_expand_to_unmaximize_then_move() {
        let config = Config {
            border: 2,
            titlebar: 20,
            tiling_areas: vec![],
        };
        let placements = vec![Placement {
            handle: WindowHandle(1),
            geometry: Geometry::new(0, 0, 500, 800),
        }];
        assert_eq!(
            placement_actions(&placements, &config),
            vec![
                DisplayAction::Unmaximize(WindowHandle(1)),
                DisplayAction::MoveAndResize(WindowHandle(1), Geometry::new(0, 0, 496, 778)),
            ]
        );
    }
}
