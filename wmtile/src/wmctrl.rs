//! The boundary to the running window manager.
//!
//! State is discovered through `wmctrl` and `xdotool` subprocesses and
//! commands are issued back through `wmctrl`. Output parsing lives in pure
//! per-line functions so it stays testable without an X server. If a window
//! disappears between discovery and dispatch, the corresponding `wmctrl`
//! call fails and the error surfaces; no reconciliation is attempted.
use std::process::Command;
use std::str::FromStr;

use wmtile_core::errors::{Result, TileError};
use wmtile_core::{Desktop, DisplayAction, Geometry, Window, WindowHandle};

/// Lists all desktops known to the window manager.
pub fn list_desktops() -> Result<Vec<Desktop>> {
    let stdout = capture_stdout("wmctrl", &["-d"])?;
    stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_desktop_line)
        .collect()
}

/// Lists all windows with their geometries.
pub fn list_windows() -> Result<Vec<Window>> {
    let stdout = capture_stdout("wmctrl", &["-lG"])?;
    stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_window_line)
        .collect()
}

/// Resolves the focused window against a fresh window list. `xdotool`
/// reports the id in decimal; handles compare numerically so no reformatting
/// is needed.
pub fn active_window(windows: &[Window]) -> Result<Window> {
    let stdout = capture_stdout("xdotool", &["getactivewindow"])?;
    let handle = WindowHandle::from_str(stdout.trim())
        .map_err(|_| TileError::OutputParse("xdotool getactivewindow", stdout.clone()))?;
    windows
        .iter()
        .find(|w| w.handle == handle)
        .cloned()
        .ok_or(TileError::NoActiveWindow)
}

/// The size of the screen. With multiple monitors this is the combined
/// surface of all of them.
pub fn screen_size() -> Result<Geometry> {
    let stdout = capture_stdout("wmctrl", &["-d"])?;
    let line = stdout
        .lines()
        .next()
        .ok_or_else(|| TileError::OutputParse("wmctrl -d", stdout.clone()))?;
    parse_screen_size(line)
}

/// Executes a batch of actions in order, stopping at the first failure.
pub fn dispatch(actions: &[DisplayAction]) -> Result<()> {
    for action in actions {
        execute(action)?;
    }
    Ok(())
}

/// Executes a single action through `wmctrl`.
pub fn execute(action: &DisplayAction) -> Result<()> {
    match action {
        DisplayAction::Unmaximize(handle) => {
            let id = handle.to_string();
            run(
                "wmctrl",
                &["-i", "-r", &id, "-b", "remove,maximized_vert,maximized_horz"],
            )
        }
        DisplayAction::MoveAndResize(handle, g) => {
            let id = handle.to_string();
            let mvarg = format!("0,{},{},{},{}", g.x, g.y, g.w, g.h);
            run("wmctrl", &["-i", "-r", &id, "-e", &mvarg])
        }
        DisplayAction::Maximize(handle) => {
            let id = handle.to_string();
            run(
                "wmctrl",
                &["-i", "-r", &id, "-b", "add,maximized_vert,maximized_horz"],
            )
        }
        DisplayAction::FocusWindow(handle) => {
            let id = handle.to_string();
            run("wmctrl", &["-i", "-a", &id])
        }
    }
}

// Example line: `0  * DG: 1366x768  VP: N/A  WA: 0,31 1366x737  Web`
fn parse_desktop_line(line: &str) -> Result<Desktop> {
    let malformed = || TileError::OutputParse("wmctrl -d", line.to_string());
    let columns: Vec<&str> = line.split_whitespace().collect();
    match columns.as_slice() {
        [id, marker, _dg, dimensions, ..] => Ok(Desktop {
            id: id.parse().map_err(|_| malformed())?,
            active: *marker == "*",
            dimensions: (*dimensions).to_string(),
        }),
        _ => Err(malformed()),
    }
}

// Example line: `0x03a00007  1 12 31 1342 706 myhost Mozilla Firefox`
fn parse_window_line(line: &str) -> Result<Window> {
    let malformed = || TileError::OutputParse("wmctrl -lG", line.to_string());
    let columns: Vec<&str> = line.split_whitespace().collect();
    if columns.len() < 7 {
        return Err(malformed());
    }
    Ok(Window {
        handle: WindowHandle::from_str(columns[0]).map_err(|_| malformed())?,
        desktop: columns[1].parse().map_err(|_| malformed())?,
        geometry: Geometry {
            x: columns[2].parse().map_err(|_| malformed())?,
            y: columns[3].parse().map_err(|_| malformed())?,
            w: columns[4].parse().map_err(|_| malformed())?,
            h: columns[5].parse().map_err(|_| malformed())?,
        },
        name: columns[7..].join(" "),
    })
}

// The `DG:` column of a desktop line holds the combined geometry of all
// monitors, e.g. `1366x768`.
fn parse_screen_size(line: &str) -> Result<Geometry> {
    let malformed = || TileError::OutputParse("wmctrl -d", line.to_string());
    let columns: Vec<&str> = line.split_whitespace().collect();
    let size = columns.get(3).ok_or_else(malformed)?;
    let (w, h) = size.split_once('x').ok_or_else(malformed)?;
    Ok(Geometry {
        x: 0,
        y: 0,
        w: w.parse().map_err(|_| malformed())?,
        h: h.parse().map_err(|_| malformed())?,
    })
}

fn capture_stdout(program: &str, args: &[&str]) -> Result<String> {
    tracing::debug!("running {} {}", program, args.join(" "));
    let output = Command::new(program).args(args).output()?;
    if !output.status.success() {
        return Err(TileError::CommandFailed {
            program: program.to_string(),
            status: output.status,
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn run(program: &str, args: &[&str]) -> Result<()> {
    tracing::debug!("running {} {}", program, args.join(" "));
    let status = Command::new(program).args(args).status()?;
    if status.success() {
        Ok(())
    } else {
        Err(TileError::CommandFailed {
            program: program.to_string(),
            status,
        })
    }
}
