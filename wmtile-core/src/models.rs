//! Objects (such as windows) reported by the window manager.
mod desktop;
mod geometry;
mod window;

pub use desktop::Desktop;
pub use geometry::Geometry;
pub use window::Window;
pub use window::WindowHandle;
