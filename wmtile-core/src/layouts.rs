//! Master/stack placement computation.
use crate::models::{Geometry, Window, WindowHandle};

/// A computed target geometry for one window. Geometries here are the
/// visible outer size; decoration insets are removed later, when actions are
/// built for the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub handle: WindowHandle,
    pub geometry: Geometry,
}

/// Layout which splits the area into two columns, gives the master window all
/// of the left column, and divides the right column among all the other
/// windows.
///
/// The remainder of the height division goes to the last stacked window, so
/// the column always fills the area exactly. With no windows besides the
/// master, the result is the single master placement.
#[must_use]
pub fn main_and_vert_stack(
    area: Geometry,
    master: &Window,
    windows: &[Window],
) -> Vec<Placement> {
    let half_width = area.w / 2;
    let mut placements = vec![Placement {
        handle: master.handle,
        geometry: Geometry::new(area.x, area.y, half_width, area.h),
    }];

    let slaves: Vec<&Window> = windows
        .iter()
        .filter(|w| w.handle != master.handle)
        .collect();
    if slaves.is_empty() {
        return placements;
    }

    let slave_height = area.h / slaves.len() as i32;
    let mut y = area.y;
    for (i, slave) in slaves.iter().enumerate() {
        let height = if i == slaves.len() - 1 {
            area.y + area.h - y
        } else {
            slave_height
        };
        placements.push(Placement {
            handle: slave.handle,
            geometry: Geometry::new(area.x + half_width, y, half_width, height),
        });
        y += height;
    }
    placements
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
    fn master_takes_the_left_half() {
        let area = Geometry::new(0, 0, 1000, 800);
        let windows = vec![window(1), window(2), window(3), window(4)];
        let placements = main_and_vert_stack(area, &windows[0], &windows);
        assert_eq!(placements[0].handle, WindowHandle(1));
        assert_eq!(placements[0].geometry, Geometry::new(0, 0, 500, 800));
    }

    #[test]
    fn slaves_share_the_right_half_with_the_remainder_on_the_last() {
        let area = Geometry::new(0, 0, 1000, 800);
        let windows = vec![window(1), window(2), window(3), window(4)];
        let placements = main_and_vert_stack(area, &windows[0], &windows);

        let slaves = &placements[1..];
        assert_eq!(slaves.len(), 3);
        assert_eq!(slaves[0].geometry, Geometry::new(500, 0, 500, 266));
        assert_eq!(slaves[1].geometry, Geometry::new(500, 266, 500, 266));
        assert_eq!(slaves[2].geometry, Geometry::new(500, 532, 500, 268));

        let total: i32 = slaves.iter().map(|p| p.geometry.h).sum();
        assert_eq!(total, area.h);
        // Each slot starts exactly where the previous one ended.
        for pair in slaves.windows(2) {
            assert_eq!(pair[0].geometry.y + pair[0].geometry.h, pair[1].geometry.y);
        }
    }

    #[test]
    fn master_keeps_its_list_position_out_of_the_stack() {
        let area = Geometry::new(0, 0, 1000, 800);
        let windows = vec![window(1), window(2), window(3)];
        let placements = main_and_vert_stack(area, &windows[1], &windows);
        let ids: Vec<u64> = placements.iter().map(|p| p.handle.0).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn master_only_yields_a_single_placement() {
        let area = Geometry::new(0, 0, 1000, 800);
        let windows = vec![window(1)];
        let placements = main_and_vert_stack(area, &windows[0], &windows);
        assert_eq!(
            placements,
            vec![Placement {
                handle: WindowHandle(1),
                geometry: Geometry::new(0, 0, 500, 800),
            }]
        );
    }

    #[test]
    fn area_offset_shifts_every_slot() {
        let area = Geometry::new(2560, 100, 1200, 900);
        let windows = vec![window(1), window(2), window(3)];
        let placements = main_and_vert_stack(area, &windows[0], &windows);
        assert_eq!(placements[0].geometry, Geometry::new(2560, 100, 600, 900));
        assert_eq!(placements[1].geometry, Geometry::new(3160, 100, 600, 450));
        assert_eq!(placements[2].geometry, Geometry::new(3160, 550, 600, 450));
    }
}
