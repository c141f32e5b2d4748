/*!
This is the main algorithm implementation.

At it's heart it's simply, for each cell of the grid:
 - get densities for the 8 corners of the cell
 - compute the case from densities (bit i set when corner i is inside)
 - get the triangles of that case from the table, as triples of cell edges
 - output one new vertex per triangle corner, where the surface crosses the edge, with a normal
   estimated by central differences of the field

Cells are visited with x as the outer loop, then y, then z. This only matters for the order of
the output.

Vertices are never shared, not even between triangles of the same cell: the output is a plain triangle soup.

Where the surface crosses an edge between densities `a` and `b` is `|a| / |b - a|` of the way from a to b.
For edges picked by the table `a` and `b` are on both sides of zero, and this is the usual `a / (a - b)`.
Equal densities (or a difference too large for the float type) would make it undefined: the vertex
then goes to the edge middle, and the pass report counts it as a degenerate edge.

Non-finite densities do not stop the pass. A cell with such a corner is skipped, and so is a
triangle with a non-finite vertex or normal (the field can still misbehave between lattice points).
 */

use tracing::{debug, warn};

use super::aux_tables::*;
use super::density_caching::PreCachingField;
use super::tables_wrapper::*;

use super::super::config::ExtractionConfig;
use super::super::density::ScalarField;
use super::super::error::ExtractionError;
use super::super::mesh_builder::MeshBuilder;
use super::super::report::ExtractionReport;
use super::super::structs::Position;
use super::super::traits::Density;

#[derive(Debug, Clone, Copy)]
struct CellIndex {
    x: usize,
    y: usize,
    z: usize,
}

// A vertex about to be output
struct EdgeVertex<F> {
    position: Position<F>,
    normal: [F; 3],
}

/// Runs one extraction pass, writing into a [MeshBuilder]
pub struct Extractor<'a, F, S, B>
where
    F: Density,
    S: ScalarField<F> + ?Sized,
    B: MeshBuilder<F>,
{
    density_source: PreCachingField<'a, F, S>,
    config: &'a ExtractionConfig<F>,
    table: &'a CaseTable,
    builder: &'a mut B,
    cells_per_axis: usize,
    report: ExtractionReport,
}

impl<'a, F, S, B> Extractor<'a, F, S, B>
where
    F: Density,
    S: ScalarField<F> + ?Sized,
    B: MeshBuilder<F>,
{
    /// Prepare a pass using the classic case table. Fails if the configuration is invalid
    pub fn new(
        field: &'a S,
        config: &'a ExtractionConfig<F>,
        builder: &'a mut B,
    ) -> Result<Self, ExtractionError> {
        Self::with_table(field, config, CaseTable::classic(), builder)
    }

    /// Prepare a pass using a custom case table. Fails if the configuration is invalid
    pub fn with_table(
        field: &'a S,
        config: &'a ExtractionConfig<F>,
        table: &'a CaseTable,
        builder: &'a mut B,
    ) -> Result<Self, ExtractionError> {
        let cells_per_axis = config.cells_per_axis()?;
        Ok(Extractor {
            density_source: PreCachingField::new(field, config.bounds, cells_per_axis),
            config,
            table,
            builder,
            cells_per_axis,
            report: ExtractionReport::default(),
        })
    }

    /// Run the pass
    pub fn extract(mut self) -> ExtractionReport {
        self.extract_cells();
        let report = self.report;
        debug!(
            cells_visited = report.cells_visited,
            active_cells = report.active_cells,
            triangles = report.triangles,
            "extraction pass complete"
        );
        if report.has_anomalies() {
            warn!(
                degenerate_edges = report.degenerate_edges,
                skipped_cells = report.skipped_cells,
                skipped_triangles = report.skipped_triangles,
                "extraction met degenerate or non-finite densities"
            );
        }
        report
    }

    fn extract_cells(&mut self) {
        for cell_x in 0..self.cells_per_axis {
            self.density_source.load_slab(cell_x);
            for cell_y in 0..self.cells_per_axis {
                for cell_z in 0..self.cells_per_axis {
                    let cell_index = CellIndex { x: cell_x, y: cell_y, z: cell_z };
                    self.extract_cell(cell_index);
                }
            }
        }
    }

    fn extract_cell(&mut self, cell_index: CellIndex) {
        self.report.cells_visited += 1;
        let densities = self.cell_densities(&cell_index);
        if densities.iter().any(|d| !d.is_finite()) {
            self.report.skipped_cells += 1;
            return;
        }
        let case_number = cell_case(&densities);
        let triangle_count = self.table.triangle_count(case_number);
        if triangle_count == 0 {
            return;
        }
        self.report.active_cells += 1;
        for t in 0..triangle_count {
            match self.table.triangle(case_number, t) {
                Some(edges) => self.extract_triangle(&cell_index, &densities, edges),
                None => break,
            }
        }
    }

    fn cell_densities(&self, cell_index: &CellIndex) -> [F; 8] {
        let mut densities = [F::ZERO; 8];
        for (density, delta) in densities.iter_mut().zip(CELL_CORNERS.iter()) {
            *density = self.density_source.lattice_density(
                delta.x == 1,
                cell_index.y + delta.y,
                cell_index.z + delta.z,
            );
        }
        densities
    }

    fn extract_triangle(
        &mut self,
        cell_index: &CellIndex,
        densities: &[F; 8],
        edges: [EdgeIndex; 3],
    ) {
        let [e1, e2, e3] = edges;
        let v1 = self.edge_vertex(cell_index, densities, e1);
        let v2 = self.edge_vertex(cell_index, densities, e2);
        let v3 = self.edge_vertex(cell_index, densities, e3);
        match (v1, v2, v3) {
            (Some(v1), Some(v2), Some(v3)) => {
                let i1 = self.builder.add_vertex(v1.position, v1.normal);
                let i2 = self.builder.add_vertex(v2.position, v2.normal);
                let i3 = self.builder.add_vertex(v3.position, v3.normal);
                self.builder.add_triangle(i1, i2, i3);
                self.report.triangles += 1;
            }
            _ => self.report.skipped_triangles += 1,
        }
    }

    // The vertex where the surface crosses an edge, or None if it is not finite
    fn edge_vertex(
        &mut self,
        cell_index: &CellIndex,
        densities: &[F; 8],
        edge: EdgeIndex,
    ) -> Option<EdgeVertex<F>> {
        let (corner_a, corner_b) = self.table.edge_corners(edge);
        let density_a = densities[corner_a.0];
        let density_b = densities[corner_b.0];
        let interp_toward_b = match F::interp(density_a, density_b) {
            Some(t) => t,
            None => {
                self.report.degenerate_edges += 1;
                F::HALF
            }
        };
        let point_a = self.corner_position(cell_index, corner_a);
        let point_b = self.corner_position(cell_index, corner_b);
        let position = point_a.interp_toward(&point_b, interp_toward_b);
        let normal = self.normal_at(&position);
        if position.is_finite() && normal.iter().all(|n| n.is_finite()) {
            Some(EdgeVertex { position, normal })
        } else {
            None
        }
    }

    fn corner_position(&self, cell_index: &CellIndex, corner: CellCornerIndex) -> Position<F> {
        let delta = get_corner_delta(corner);
        self.density_source.bounds().lattice_point(
            cell_index.x + delta.x,
            cell_index.y + delta.y,
            cell_index.z + delta.z,
        )
    }

    fn normal_at(&self, position: &Position<F>) -> [F; 3] {
        let step = self.config.normal_step;
        let zero = F::ZERO;
        let x = self.central_difference(position, [step, zero, zero]);
        let y = self.central_difference(position, [zero, step, zero]);
        let z = self.central_difference(position, [zero, zero, step]);
        if self.config.normalize_normals {
            F::to_unit_normal(x, y, z)
        } else {
            [x, y, z]
        }
    }

    // F(p - delta) - F(p + delta): densities grow inward, so this points out of the surface
    fn central_difference(&self, position: &Position<F>, delta: [F; 3]) -> F {
        let backward = [-delta[0], -delta[1], -delta[2]];
        self.density_source.evaluate(&(position + &backward))
            - self.density_source.evaluate(&(position + &delta))
    }
}

/// Case number of a cell: bit i is set when corner i is strictly inside
pub fn cell_case<F: Density>(densities: &[F; 8]) -> usize {
    let mut case: usize = 0;
    for (i, density) in densities.iter().enumerate() {
        if density.inside() {
            case += 1 << i;
        }
    }
    case
}
