//! A one-shot master/stack window tiler for EWMH window managers.
//!
//! Each invocation snapshots the current desktops and windows through
//! `wmctrl`, computes the requested operation against the active desktop and
//! the tiling area containing the focused window, issues the resulting
//! window-manager commands, and exits. No state is kept between invocations.
mod wmctrl;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wmtile_core::errors::TileError;
use wmtile_core::{areas, focus, layouts, maximize_all, placement_actions, Config, DisplayAction};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: TileCommand,
}

#[derive(Debug, Clone, Copy, Subcommand)]
#[command(rename_all = "snake_case")]
enum TileCommand {
    /// Tile the windows of the active tiling area into a master/stack layout
    Tile,
    /// Maximize every window of the active tiling area
    Fullscreen,
    /// Focus the next window of the active desktop
    FocusNext,
    /// Focus the previous window of the active desktop
    FocusPrev,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    config.ensure_tiling_areas(wmctrl::screen_size()?);

    let desktops = wmctrl::list_desktops()?;
    let windows = wmctrl::list_windows()?;
    let active_desktop = areas::active_desktop(&desktops).ok_or(TileError::NoActiveDesktop)?;
    let desktop_windows = areas::windows_in_desktop(&windows, active_desktop);
    let active_window = wmctrl::active_window(&windows)?;

    match cli.command {
        TileCommand::FocusNext | TileCommand::FocusPrev => {
            let target = match cli.command {
                TileCommand::FocusNext => focus::next_focus(&desktop_windows, &active_window)?,
                _ => focus::prev_focus(&desktop_windows, &active_window)?,
            };
            tracing::info!("focusing {} ({})", target.name, target.handle);
            wmctrl::execute(&DisplayAction::FocusWindow(target.handle))?;
        }
        TileCommand::Tile | TileCommand::Fullscreen => {
            let Some(area) = areas::tiling_area_for_window(&active_window, &config) else {
                println!("No active tiling area found. Check your configuration!");
                return Ok(());
            };
            let affected = areas::windows_in_area(&desktop_windows, area);

            if matches!(cli.command, TileCommand::Tile) {
                let placements = layouts::main_and_vert_stack(area, &active_window, &affected);
                let actions = placement_actions(&placements, &config);
                tracing::info!(
                    "tiling {} windows into {:?}",
                    placements.len(),
                    area
                );
                // Some window managers leave a transient gap after the first
                // pass. Re-issuing the same batch settles the layout.
                wmctrl::dispatch(&actions)?;
                wmctrl::dispatch(&actions)?;
            } else {
                tracing::info!("maximizing {} windows", affected.len());
                wmctrl::dispatch(&maximize_all(&affected))?;
            }
        }
    }

    Ok(())
}
