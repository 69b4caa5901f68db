use std::cmp::Reverse;
use std::sync::Arc;

use itertools::Itertools;
use log::{debug, info};
use thousands::Separable;

use crate::entities::{BoxType, Container, Layout, Placement};
use crate::geometry::primitives::Point;
use crate::packers::{PackResult, Packer};
use crate::util::assertions;

/// Deterministic greedy heuristic that fills the container row by row (along x),
/// shelf by shelf (along y) and layer by layer (along z).
///
/// Boxes are handled tallest-first. Every box is tried at the cursor in the current row,
/// then at the start of a new shelf, and finally at the start of a new layer.
/// Boxes that fit nowhere are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShelfPacker;

impl ShelfPacker {
    pub fn new() -> Self {
        ShelfPacker
    }

    pub fn solve(&self, boxes: &[Arc<BoxType>], container: &Container) -> PackResult {
        // stable: boxes of equal height keep their relative input order
        let sorted_boxes = boxes
            .iter()
            .sorted_by_key(|bt| Reverse(bt.max_height()))
            .collect_vec();

        let mut layout = Layout::new(*container);
        let mut cursor = ShelfCursor::default();

        for box_type in sorted_boxes {
            let mut placement = cursor.try_place(box_type, container);
            if placement.is_none() {
                cursor.wrap_shelf();
                placement = cursor.try_place(box_type, container);
            }
            if placement.is_none() {
                cursor.wrap_layer();
                placement = cursor.try_place(box_type, container);
            }

            match placement {
                Some(p) => {
                    debug!("[SHELF] placing {p}");
                    layout.place(p);
                }
                None => debug!(
                    "[SHELF] no room for box {} ({}), dropping it",
                    box_type.name, box_type.dims
                ),
            }
        }

        info!(
            "[SHELF] placed {}/{} boxes, {} mm³ ({:.2}% usage)",
            layout.n_placed(),
            boxes.len(),
            layout.placed_volume().separate_with_commas(),
            layout.usage() * 100.0
        );

        let placements = layout.into_placements();
        debug_assert!(assertions::placements_are_valid(&placements, container));

        PackResult {
            placements,
            warnings: vec![],
            n_requested: boxes.len(),
        }
    }
}

impl Packer for ShelfPacker {
    fn pack(&mut self, boxes: &[Arc<BoxType>], container: &Container) -> PackResult {
        self.solve(boxes, container)
    }
}

/// Position of the next candidate corner and the bookkeeping of the current shelf.
/// Owned by a single [`ShelfPacker::solve`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct ShelfCursor {
    x: u32,
    y: u32,
    z: u32,
    /// Tallest z-extent placed since the last layer wrap
    shelf_h: u32,
    /// Largest y-extent placed in the current row
    shelf_w: u32,
}

impl ShelfCursor {
    /// Places the box at the cursor in the first rotation (canonical order) that fits,
    /// then advances along x.
    fn try_place(&mut self, box_type: &Arc<BoxType>, container: &Container) -> Option<Placement> {
        let rotation = *box_type.rotations().iter().find(|r| {
            self.x as u64 + r.x() as u64 <= container.length as u64
                && self.y as u64 + r.y() as u64 <= container.width as u64
                && self.z as u64 + r.z() as u64 <= container.height as u64
        })?;

        let placement = Placement::new(box_type.clone(), Point(self.x, self.y, self.z), rotation);

        self.x += rotation.x();
        self.shelf_h = self.shelf_h.max(rotation.z());
        self.shelf_w = self.shelf_w.max(rotation.y());

        Some(placement)
    }

    /// Starts a new row behind the current one. The height budget is carried over.
    fn wrap_shelf(&mut self) {
        self.x = 0;
        self.y += self.shelf_w;
        self.shelf_w = 0;
    }

    /// Starts a new layer on top of the current one.
    fn wrap_layer(&mut self) {
        self.x = 0;
        self.y = 0;
        self.z += self.shelf_h;
        self.shelf_h = 0;
        self.shelf_w = 0;
    }
}
