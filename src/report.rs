/*!
Statistics gathered during one extraction pass
*/

use std::fmt::Display;

/**
What happened during a pass.

Cells with a non-finite corner density are skipped entirely. Triangles with a non-finite
vertex position or normal are skipped too, so the mesh only ever holds finite values.
*/
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtractionReport {
    /// Cells traversed
    pub cells_visited: usize,
    /// Cells whose case produces at least one triangle
    pub active_cells: usize,
    /// Triangles written to the mesh
    pub triangles: usize,
    /// Edges where both densities were equal, and the vertex was put at the edge middle
    pub degenerate_edges: usize,
    /// Cells ignored because of a non-finite corner density
    pub skipped_cells: usize,
    /// Triangles dropped because of a non-finite position or normal
    pub skipped_triangles: usize,
}

impl ExtractionReport {
    /// Whether anything had to be skipped or patched during the pass
    pub fn has_anomalies(&self) -> bool {
        self.degenerate_edges > 0 || self.skipped_cells > 0 || self.skipped_triangles > 0
    }
}

impl Display for ExtractionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Extraction:")?;
        writeln!(
            f,
            "    + {} cells visited, {} active",
            self.cells_visited, self.active_cells
        )?;
        writeln!(f, "    + {} triangles", self.triangles)?;
        if self.has_anomalies() {
            writeln!(
                f,
                "    + {} degenerate edges, {} cells and {} triangles skipped",
                self.degenerate_edges, self.skipped_cells, self.skipped_triangles
            )?;
        }
        Ok(())
    }
}
