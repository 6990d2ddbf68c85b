//! Window information.
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Geometry;

/// An opaque handle used to identify a window to the window manager.
///
/// `wmctrl -l` reports hex ids (`0x03a00007`) while `xdotool` reports the
/// same id in decimal; both parse into the same value. Handles are only ever
/// compared for equality, never interpreted.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowHandle(pub u64);

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

impl FromStr for WindowHandle {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = match s.strip_prefix("0x") {
            Some(hex) => u64::from_str_radix(hex, 16)?,
            None => s.parse()?,
        };
        Ok(Self(id))
    }
}

/// Store window information.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub handle: WindowHandle,
    /// Id of the desktop this window is on. `-1` for sticky windows.
    pub desktop: i32,
    pub name: String,
    /// The visible outer geometry, decorations included.
    pub geometry: Geometry,
}
