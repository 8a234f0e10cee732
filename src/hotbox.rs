//! Hotbox surface: the ordered region collection and its hover selector.
//!
//! The surface owns two representations of the hover state: the per-region
//! selection flag and a single hovered-id reference. The reference is
//! authoritative; the flags are an eagerly synchronized cache that the
//! selector clears over the whole collection on every transition, so a flag
//! corrupted from outside this path cannot survive the next pointer move.

use std::fmt;

use tracing::debug;

use crate::geometry::Point;
use crate::region::Region;

/// Selection change emitted toward the host for one region.
///
/// A single pointer-move event yields the deselects first (in region order),
/// then at most one select, so a host applying changes sequentially never
/// shows two highlights at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChange<Id> {
    pub id: Id,
    pub selected: bool,
}

/// A hotbox surface tracking which of its regions the pointer is over.
///
/// Regions are hit-tested in insertion order; when bounds overlap, the
/// earliest inserted region wins. That order is the only tie-break and does
/// not change for the lifetime of the surface.
#[derive(Debug, Clone)]
pub struct Hotbox<Id> {
    regions: Vec<Region<Id>>,
    hovered: Option<Id>,
}

impl<Id> Default for Hotbox<Id> {
    fn default() -> Self {
        Self {
            regions: Vec::new(),
            hovered: None,
        }
    }
}

impl<Id: Copy + Eq + fmt::Debug> Hotbox<Id> {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
            hovered: None,
        }
    }

    /// Append a region. Insertion order defines hit-test priority.
    pub fn add_region(&mut self, region: Region<Id>) {
        self.regions.push(region);
    }

    /// Regions in hit-test order.
    pub fn regions(&self) -> &[Region<Id>] {
        &self.regions
    }

    pub fn region(&self, id: Id) -> Option<&Region<Id>> {
        self.regions.iter().find(|region| region.id() == id)
    }

    /// The region currently under the pointer, if any.
    pub fn hovered(&self) -> Option<Id> {
        self.hovered
    }

    /// First region in insertion order containing `point`, or `None`.
    pub fn locate_region_at(&self, point: Point) -> Option<Id> {
        self.regions
            .iter()
            .find(|region| region.hit_test(point))
            .map(|region| region.id())
    }

    /// Process one pointer-move event in surface coordinates.
    ///
    /// When the winning region is the one already hovered (including both
    /// being none), this is a no-op and returns no changes. On a transition
    /// it clears every set selection flag, records the winner as hovered,
    /// sets its flag, and returns the emitted changes in order.
    pub fn handle_pointer_move(&mut self, point: Point) -> Vec<SelectionChange<Id>> {
        let winner = self.locate_region_at(point);
        if winner == self.hovered {
            return Vec::new();
        }

        debug!(previous = ?self.hovered, current = ?winner, "hover changed");

        let mut changes = self.clear_selected();
        self.hovered = winner;
        if let Some(id) = winner
            && let Some(region) = self.regions.iter_mut().find(|region| region.id() == id)
        {
            region.set_selection_status(true);
            changes.push(SelectionChange { id, selected: true });
        }
        changes
    }

    /// Clear the hover state entirely, e.g. when the menu closes.
    ///
    /// Returns the deselects for any region that had its flag set.
    pub fn clear_hover(&mut self) -> Vec<SelectionChange<Id>> {
        self.hovered = None;
        self.clear_selected()
    }

    // Clears unconditionally over the full set rather than assuming at most
    // one flag is set; stale flags from outside interference are dropped
    // here instead of accumulating.
    fn clear_selected(&mut self) -> Vec<SelectionChange<Id>> {
        let mut changes = Vec::new();
        for region in &mut self.regions {
            if region.is_selected() {
                region.set_selection_status(false);
                changes.push(SelectionChange {
                    id: region.id(),
                    selected: false,
                });
            }
        }
        changes
    }

    #[cfg(test)]
    fn selected_count(&self) -> usize {
        self.regions
            .iter()
            .filter(|region| region.is_selected())
            .count()
    }
}
