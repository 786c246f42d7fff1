//! Topology module - neighbor rules for both grid layouts
//!
//! The offset layout is the classic staggered bubble arrangement: odd rows
//! shift half a cell right, so the six neighbors of a cell depend on the
//! parity of its row. Getting the parity split backwards silently breaks
//! match detection on alternating rows, which is why the rule lives in one
//! place and both parities are tested explicitly.

use arrayvec::ArrayVec;

use crate::types::{Coord, Topology};

/// Square adjacency: the four axis-aligned neighbors
const SQUARE: [(i16, i16); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Offset adjacency for even rows (shifted toward the left column)
const OFFSET_EVEN: [(i16, i16); 6] = [(-1, -1), (-1, 0), (0, -1), (0, 1), (1, -1), (1, 0)];

/// Offset adjacency for odd rows (shifted toward the right column)
const OFFSET_ODD: [(i16, i16); 6] = [(-1, 0), (-1, 1), (0, -1), (0, 1), (1, 0), (1, 1)];

/// All neighbors of a coordinate under the given topology
///
/// Results may lie outside any particular grid; bounds filtering is the
/// caller's concern (out-of-bounds probes read as empty anyway).
pub fn neighbors(topology: Topology, coord: Coord) -> ArrayVec<Coord, 6> {
    let offsets: &[(i16, i16)] = match topology {
        Topology::Square => &SQUARE,
        Topology::Offset => {
            if coord.row % 2 == 0 {
                &OFFSET_EVEN
            } else {
                &OFFSET_ODD
            }
        }
    };

    offsets
        .iter()
        .map(|&(dr, dc)| Coord::new(coord.row + dr, coord.col + dc))
        .collect()
}
