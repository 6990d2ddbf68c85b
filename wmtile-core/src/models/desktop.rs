use serde::{Deserialize, Serialize};

/// A virtual desktop (workspace) as reported by the window manager. Exactly
/// one desktop is active at a time; that is the window manager's invariant,
/// not ours.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Desktop {
    pub id: i32,
    pub active: bool,
    /// Raw `WxH` token from `wmctrl -d`. Kept verbatim, never interpreted.
    pub dimensions: String,
}
