/*!
Typed access to the Marching Cubes case tables
*/

use super::aux_tables::{CellCornerIndex, CUBE_EDGES};
use super::case_data::{CASE_TRIANGLES, TRIANGLE_COUNTS};

/// Index of one of the 12 cube edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeIndex(pub usize);

/// The classic table, shared by all extractions
pub static CLASSIC_CASE_TABLE: CaseTable =
    CaseTable::new(&TRIANGLE_COUNTS, &CASE_TRIANGLES, &CUBE_EDGES);

/**
Read-only lookup from a cell case (8-bit corner sign mask) to its triangulation.

Triangles are triples of edge indices, and each edge maps to its 2 cell corners.
How ambiguous cases get triangulated is entirely up to the data.
*/
#[derive(Debug)]
pub struct CaseTable {
    triangle_counts: &'static [u8; 256],
    triangles: &'static [[[i8; 3]; 5]; 256],
    edges: &'static [[u8; 2]; 12],
}

impl CaseTable {
    /// Wrap raw tables. Unused triangle slots must hold -1
    pub const fn new(
        triangle_counts: &'static [u8; 256],
        triangles: &'static [[[i8; 3]; 5]; 256],
        edges: &'static [[u8; 2]; 12],
    ) -> Self {
        CaseTable {
            triangle_counts,
            triangles,
            edges,
        }
    }

    /// The classic Marching Cubes table
    pub fn classic() -> &'static CaseTable {
        &CLASSIC_CASE_TABLE
    }

    /// How many triangles a case produces (0 to 5)
    pub fn triangle_count(&self, case: usize) -> usize {
        self.triangle_counts[case & 0xFF] as usize
    }

    /// Edges of the `n`th triangle of a case. `None` for a sentinel (-1) slot
    pub fn triangle(&self, case: usize, n: usize) -> Option<[EdgeIndex; 3]> {
        let slots = self.triangles[case & 0xFF].get(n)?;
        let edge = |slot: i8| -> Option<EdgeIndex> {
            if (0..12).contains(&slot) {
                Some(EdgeIndex(slot as usize))
            } else {
                None
            }
        };
        Some([edge(slots[0])?, edge(slots[1])?, edge(slots[2])?])
    }

    /// The 2 corners an edge joins
    pub fn edge_corners(&self, edge: EdgeIndex) -> (CellCornerIndex, CellCornerIndex) {
        let [a, b] = self.edges[edge.0];
        (CellCornerIndex(a as usize), CellCornerIndex(b as usize))
    }
}
