//! Converts a visible outer geometry into the inner geometry the window
//! manager expects when decorations are drawn around the content area.
use std::cmp;

use crate::config::Config;
use crate::models::Geometry;

/// Shrinks `geometry` by the configured decoration insets. The titlebar sits
/// on top only; the border wraps both sides. Sizes clamp at zero so oversized
/// insets never produce a negative request.
#[must_use]
pub fn remove_decorations(geometry: Geometry, config: &Config) -> Geometry {
    let vertical = config.border + config.titlebar;
    let horizontal = config.border * 2;
    Geometry {
        x: geometry.x,
        y: geometry.y,
        w: cmp::max(geometry.w - horizontal, 0),
        h: cmp::max(geometry.h - vertical, 0),
    }
}
