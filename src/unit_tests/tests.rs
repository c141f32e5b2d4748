use crate::config::ExtractionConfig;
use crate::density::*;
use crate::error::ExtractionError;
use crate::extraction::{extract, extract_from_fn, extract_into, extract_with_config};
use crate::fields::{Metaball, Metaballs, Sphere};
use crate::generic_mesh::GenericMeshBuilder;
use crate::implementation::algorithm::Extractor;
use crate::implementation::tables_wrapper::CaseTable;
use crate::mesh_builder::{MeshBuilder, VertexIndex};
use crate::structs::*;
use crate::unit_tests::test_utils::*;
use hamcrest::prelude::*;
use hamcrest::*;
use noise::Perlin;
use rand::prelude::*;

// Two cells per axis, lattice coordinates -0.5, 0.5 and 1.5
fn one_cell_bounds() -> GridBounds<f64> {
    GridBounds::new(0.5, 1.0)
}

fn unit_sphere() -> Sphere<f64> {
    Sphere::new(Position::new(0.0, 0.0, 0.0), 1.0)
}

#[test]
fn empty_extraction() {
    let bounds = GridBounds::new(2.0, 0.25);
    let config = ExtractionConfig::new(bounds);
    let (mesh, report) = extract_with_config(&ScalarFieldForFn(|_, _, _| -1.0), &config).unwrap();
    assert_that!(mesh.num_tris(), equal_to(0));
    assert_that!(mesh.vertices.len(), equal_to(0));
    assert_that!(report.active_cells, equal_to(0));
}

#[test]
fn full_extraction_is_empty_too() {
    let bounds = GridBounds::new(2.0, 0.25);
    let mesh = extract_from_fn(|_, _, _| 1.0f64, &bounds).unwrap();
    assert_that!(mesh.num_tris(), equal_to(0));
    assert_that!(mesh.normals.len(), equal_to(0));
}

#[test]
fn one_cube_corner_gives_one_triangle() {
    let mut f = DensityArray::new(one_cell_bounds(), -1.0);
    f.set(0, 0, 0, 1.0);
    let m = extract(&f, &one_cell_bounds()).unwrap();
    assert_that!(
        m.tris(),
        tris!(tri_matcher_vecs(
            (-0.5, 0.0, -0.5),
            (-0.5, -0.5, 0.0),
            (0.0, -0.5, -0.5)
        ))
    );
}

#[test]
fn crossing_follows_absolute_density_ratio() {
    // t = |3| / |-1 - 3| = 0.75 from the inside corner
    let mut f = DensityArray::new(one_cell_bounds(), -1.0);
    f.set(0, 0, 0, 3.0);
    let m = extract(&f, &one_cell_bounds()).unwrap();
    assert_that!(
        m.tris(),
        tris!(tri_matcher_vecs(
            (-0.5, 0.25, -0.5),
            (-0.5, -0.5, 0.25),
            (0.25, -0.5, -0.5)
        ))
    );
}

#[test]
fn zero_density_corner_is_outside() {
    let mut f = DensityArray::new(one_cell_bounds(), -1.0);
    f.set(0, 0, 0, 1.0);
    f.set(1, 0, 0, 0.0);
    let m = extract(&f, &one_cell_bounds()).unwrap();
    // Same case as with a negative corner, but the vertex lands on the zero corner
    assert_that!(
        m.tris(),
        tris!(tri_matcher_vecs(
            (-0.5, 0.0, -0.5),
            (-0.5, -0.5, 0.0),
            (0.5, -0.5, -0.5)
        ))
    );
}

#[test]
fn only_zero_densities_give_nothing() {
    let f = DensityArray::new(one_cell_bounds(), 0.0);
    let m = extract(&f, &one_cell_bounds()).unwrap();
    assert_that!(m.num_tris(), equal_to(0));
}

#[test]
fn vertices_are_not_shared() {
    let mut f = DensityArray::new(one_cell_bounds(), -1.0);
    f.set(0, 0, 0, 1.0);
    f.set(1, 0, 0, 1.0);
    let m = extract(&f, &one_cell_bounds()).unwrap();
    // A quad in the first cell, and a corner of the next one
    assert_that!(m.num_tris(), equal_to(3));
    assert_that!(m.vertices.len(), equal_to(9));
    assert_that!(m.indices.clone(), equal_to((0..9).collect::<Vec<usize>>()));
}

// Only case 0x01 has a triangle. It uses edge 1, whose corners 1 and 2 are both outside
static FLAT_EDGE_COUNTS: [u8; 256] = {
    let mut counts = [0u8; 256];
    counts[0x01] = 1;
    counts
};

static FLAT_EDGE_TRIANGLES: [[[i8; 3]; 5]; 256] = {
    let mut triangles = [[[-1i8; 3]; 5]; 256];
    triangles[0x01][0] = [1, 8, 3];
    triangles
};

#[rustfmt::skip]
static CUBE_EDGES: [[u8; 2]; 12] = [
    [0, 1], [1, 2], [2, 3], [3, 0],
    [4, 5], [5, 6], [6, 7], [7, 4],
    [0, 4], [1, 5], [2, 6], [3, 7],
];

static FLAT_EDGE_TABLE: CaseTable =
    CaseTable::new(&FLAT_EDGE_COUNTS, &FLAT_EDGE_TRIANGLES, &CUBE_EDGES);

#[test]
fn flat_edges_get_a_middle_vertex() {
    let mut f = DensityArray::new(one_cell_bounds(), -1.0);
    f.set(0, 0, 0, 1.0);
    let config = ExtractionConfig::new(one_cell_bounds());
    let mut builder = GenericMeshBuilder::new();
    let report = Extractor::with_table(&f, &config, &FLAT_EDGE_TABLE, &mut builder)
        .unwrap()
        .extract();
    let m = builder.build();
    assert_that!(report.degenerate_edges, equal_to(1));
    assert_that!(report.triangles, equal_to(1));
    assert!(report.has_anomalies());
    assert_valid_mesh(&m);
    assert_that!(
        m.tris(),
        tris!(tri_matcher_vecs(
            (0.0, 0.5, -0.5),
            (-0.5, -0.5, 0.0),
            (0.0, -0.5, -0.5)
        ))
    );
}

#[test]
fn traversal_visits_cells_starting_in_the_zone() {
    let config = ExtractionConfig::new(GridBounds::new(1.0, 0.5));
    let (_, report) = extract_with_config(&unit_sphere(), &config).unwrap();
    assert_that!(report.cells_visited, equal_to(125));
    // A step as large as the zone leaves 2 cells per axis
    let config = ExtractionConfig::new(one_cell_bounds());
    let (_, report) = extract_with_config(&unit_sphere(), &config).unwrap();
    assert_that!(report.cells_visited, equal_to(8));
}

#[test]
fn simple_sphere() {
    let r = 1.0;
    let step = r / 10.0;
    let bounds = GridBounds::new(2.0 * r, step);
    let config = ExtractionConfig::new(bounds);
    let (m, report) = extract_with_config(&unit_sphere(), &config).unwrap();
    assert_valid_mesh(&m);
    assert!(m.num_tris() > 1000);
    assert_that!(report.triangles, equal_to(m.num_tris()));
    assert!(!report.has_anomalies());
    let diagonal = 3f64.sqrt() * step;
    for (position, normal) in m.vertices.iter().zip(m.normals.iter()) {
        let distance = length(position);
        assert!((distance - r).abs() <= diagonal, "vertex {:?} off the sphere", position);
        let cos = dot(position, normal) / (distance * length(normal));
        assert!(cos > 0.99, "normal {:?} at {:?} not pointing out", normal, position);
    }
}

#[test]
fn sphere_triangles_face_outward() {
    let m = extract(&unit_sphere(), &GridBounds::new(2.0, 0.1)).unwrap();
    for t in m.tris() {
        let [a, b, c] = [t.vertices[0].position, t.vertices[1].position, t.vertices[2].position];
        let u = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
        let v = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
        let cross = [
            u[1] * v[2] - u[2] * v[1],
            u[2] * v[0] - u[0] * v[2],
            u[0] * v[1] - u[1] * v[0],
        ];
        let centroid = [
            (a[0] + b[0] + c[0]) / 3.0,
            (a[1] + b[1] + c[1]) / 3.0,
            (a[2] + b[2] + c[2]) / 3.0,
        ];
        assert!(dot(&cross, &centroid) > 0.0, "{}", t);
    }
}

#[test]
fn simple_sphere_f32() {
    let sphere = Sphere::new(Position::new(0.0f32, 0.0, 0.0), 1.0);
    let m = extract(&sphere, &GridBounds::new(2.0, 0.1)).unwrap();
    assert_valid_mesh(&m);
    assert!(m.num_tris() > 1000);
    let diagonal = 3f32.sqrt() * 0.1;
    for (p, n) in m.vertices.iter().zip(m.normals.iter()) {
        let distance = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
        assert!((distance - 1.0).abs() <= diagonal);
        let n_length = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
        let cos = (p[0] * n[0] + p[1] * n[1] + p[2] * n[2]) / (distance * n_length);
        assert!(cos > 0.99);
    }
}

#[test]
fn raw_normals_are_central_differences() {
    // For r² - |p|², F(p - d) - F(p + d) is exactly 4 d p on each axis
    let d = 1e-4;
    let config = ExtractionConfig::new(GridBounds::new(2.0, 0.2)).with_normal_step(d);
    let (m, _) = extract_with_config(&unit_sphere(), &config).unwrap();
    assert!(!m.is_empty());
    for (p, n) in m.vertices.iter().zip(m.normals.iter()) {
        for axis in 0..3 {
            // Absolute error: coordinates near zero give differences that cancel to exactly 0
            let expected = 4.0 * d * p[axis];
            assert!((n[axis] - expected).abs() < 1e-9, "normal {:?} at {:?}", n, p);
        }
    }
}

#[test]
fn normalized_normals() {
    let field = NoiseField { noise: Perlin::new(), frequency: 1.3 };
    let config = ExtractionConfig::new(GridBounds::new(2.0, 0.25)).with_normalized_normals(true);
    let (m, _) = extract_with_config(&field, &config).unwrap();
    assert!(!m.is_empty());
    for n in m.normals.iter() {
        let l = length(n);
        assert!(l == 0.0 || (l - 1.0).abs() < 1e-9, "normal {:?} has length {}", n, l);
    }
}

#[test]
fn noise_meshes_are_valid() {
    let field = NoiseField { noise: Perlin::new(), frequency: 1.3 };
    let config = ExtractionConfig::new(GridBounds::new(2.0, 0.25));
    let (m, report) = extract_with_config(&field, &config).unwrap();
    assert_valid_mesh(&m);
    assert!(m.num_tris() > 0);
    assert_that!(report.triangles, equal_to(m.num_tris()));
    assert_that!(report.cells_visited, equal_to(17 * 17 * 17));
    assert!(report.active_cells <= report.cells_visited);
}

#[test]
fn random_metaballs_meshes_are_valid() {
    let mut rng = StdRng::seed_from_u64(7);
    let balls = (0..5)
        .map(|_| Metaball {
            anchor: Position::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            ),
            radius: rng.gen_range(0.3..0.7),
            amplitude: [rng.gen_range(0.0..0.5), rng.gen_range(0.0..0.5), rng.gen_range(0.0..0.5)],
            frequency: rng.gen_range(0.5..2.0),
            phase: rng.gen_range(0.0..6.0),
        })
        .collect();
    let mut field = Metaballs::new(balls, 0.3);
    let bounds = GridBounds::new(2.5, 0.125);
    for _ in 0..4 {
        field.advance();
        let m = extract(&field, &bounds).unwrap();
        assert_valid_mesh(&m);
        assert!(m.num_tris() > 0);
    }
}

#[test]
fn passes_are_deterministic() {
    let field = NoiseField { noise: Perlin::new(), frequency: 0.9 };
    let bounds = GridBounds::new(1.5, 0.1);
    let first = extract(&field, &bounds).unwrap();
    let second = extract(&field, &bounds).unwrap();
    assert_that!(second, equal_to(first));
}

#[test]
fn non_finite_corners_skip_cells() {
    let sphere = unit_sphere();
    let field = ScalarFieldForFn(|x: f64, y, z| {
        if x > 0.3 {
            f64::NAN
        } else {
            sphere.evaluate(&Position::new(x, y, z))
        }
    });
    let config = ExtractionConfig::new(GridBounds::new(2.0, 0.1));
    let (m, report) = extract_with_config(&field, &config).unwrap();
    assert_valid_mesh(&m);
    assert!(m.num_tris() > 0);
    assert!(report.skipped_cells > 0);
    assert!(report.has_anomalies());
    for p in m.vertices.iter() {
        assert!(p[0] <= 0.3);
    }
}

#[test]
fn infinite_corners_skip_cells() {
    let field = ScalarFieldForFn(|x: f64, y: f64, z: f64| {
        if x < -1.0 {
            f64::INFINITY
        } else {
            1.0 - (x * x + y * y + z * z)
        }
    });
    let config = ExtractionConfig::new(GridBounds::new(2.0, 0.25));
    let (m, report) = extract_with_config(&field, &config).unwrap();
    assert_valid_mesh(&m);
    assert!(report.skipped_cells > 0);
}

#[test]
fn non_finite_normals_skip_triangles() {
    // Lattice points are never between 0.1 and 0.4, but some vertices are
    let sphere = Sphere::new(Position::new(0.0, 0.0, 0.0), 0.75);
    let field = ScalarFieldForFn(|x: f64, y, z| {
        if x > 0.1 && x < 0.4 {
            f64::NAN
        } else {
            sphere.evaluate(&Position::new(x, y, z))
        }
    });
    let config = ExtractionConfig::new(GridBounds::new(1.0, 0.5));
    let (m, report) = extract_with_config(&field, &config).unwrap();
    assert_valid_mesh(&m);
    assert_that!(report.skipped_cells, equal_to(0));
    assert!(report.skipped_triangles > 0);
    assert_that!(report.triangles, equal_to(m.num_tris()));
}

#[test]
fn invalid_bounds_are_rejected() {
    let sphere = unit_sphere();
    assert_that!(
        extract(&sphere, &GridBounds::new(0.0, 0.1)).unwrap_err(),
        equal_to(ExtractionError::InvalidRange(0.0))
    );
    assert_that!(
        extract(&sphere, &GridBounds::new(-1.0, 0.1)).unwrap_err(),
        equal_to(ExtractionError::InvalidRange(-1.0))
    );
    assert_that!(
        extract(&sphere, &GridBounds::new(1.0, -0.1)).unwrap_err(),
        equal_to(ExtractionError::InvalidStep(-0.1))
    );
    assert_that!(
        extract(&sphere, &GridBounds::new(1.0, 3.0)).unwrap_err(),
        equal_to(ExtractionError::StepExceedsSpan { step: 3.0, span: 2.0 })
    );
    assert!(matches!(
        extract(&sphere, &GridBounds::new(1.0, f64::NAN)),
        Err(ExtractionError::InvalidStep(_))
    ));
    assert!(matches!(
        extract(&sphere, &GridBounds::new(f64::INFINITY, 0.1)),
        Err(ExtractionError::InvalidRange(_))
    ));
    assert!(matches!(
        extract(&sphere, &GridBounds::new(1000.0, 0.01)),
        Err(ExtractionError::GridTooLarge { .. })
    ));
}

#[test]
fn invalid_normal_step_is_rejected() {
    let config = ExtractionConfig::new(GridBounds::new(1.0, 0.1)).with_normal_step(0.0);
    assert_that!(
        extract_with_config(&unit_sphere(), &config).unwrap_err(),
        equal_to(ExtractionError::InvalidNormalStep(0.0))
    );
}

#[test]
fn default_config() {
    let config = ExtractionConfig::<f64>::default();
    assert_that!(config.bounds, equal_to(GridBounds::new(4.0, 0.08)));
    assert_that!(config.normal_step, equal_to(1e-4));
    assert!(!config.normalize_normals);
    assert_that!(config.cells_per_axis(), equal_to(Ok(101)));
}

#[test]
fn closures_and_fields_agree() {
    let bounds = GridBounds::new(1.5, 0.2);
    let from_field = extract(&unit_sphere(), &bounds).unwrap();
    let from_fn = extract_from_fn(|x: f64, y, z| 1.0 - (x * x + y * y + z * z), &bounds).unwrap();
    assert_that!(from_fn, equal_to(from_field));
}

#[derive(Default)]
struct CountingBuilder {
    vertices: usize,
    triangles: Vec<[usize; 3]>,
}

impl MeshBuilder<f64> for CountingBuilder {
    fn add_vertex(&mut self, _position: Position<f64>, _normal: [f64; 3]) -> VertexIndex {
        self.vertices += 1;
        VertexIndex(self.vertices - 1)
    }

    fn add_triangle(&mut self, v1: VertexIndex, v2: VertexIndex, v3: VertexIndex) {
        self.triangles.push([v1.0, v2.0, v3.0]);
    }
}

#[test]
fn custom_mesh_builder() {
    let config = ExtractionConfig::new(GridBounds::new(1.5, 0.25));
    let mut builder = CountingBuilder::default();
    let report = extract_into(&unit_sphere(), &config, &mut builder).unwrap();
    let (mesh, _) = extract_with_config(&unit_sphere(), &config).unwrap();
    assert_that!(builder.triangles.len(), equal_to(report.triangles));
    assert_that!(builder.vertices, equal_to(mesh.vertices.len()));
    assert_that!(builder.triangles[0], equal_to([0, 1, 2]));
}

#[test]
fn invalid_config_writes_nothing() {
    let config = ExtractionConfig::new(GridBounds::new(1.0, 5.0));
    let mut builder = CountingBuilder::default();
    assert!(extract_into(&unit_sphere(), &config, &mut builder).is_err());
    assert_that!(builder.vertices, equal_to(0));
}

struct Growing {
    radius: f64,
    advances: usize,
}

impl ScalarField<f64> for Growing {
    fn evaluate(&self, point: &Position<f64>) -> f64 {
        self.radius * self.radius - (point.x * point.x + point.y * point.y + point.z * point.z)
    }

    fn advance(&mut self) {
        self.radius += 0.1;
        self.advances += 1;
    }
}

fn advance_twice<S: ScalarField<f64>>(mut field: S) {
    field.advance();
    field.advance();
}

#[test]
fn references_forward_to_the_field() {
    let mut field = Growing { radius: 1.0, advances: 0 };
    advance_twice(&mut field);
    assert_that!(field.advances, equal_to(2));
    // Shared references cannot advance
    advance_twice(&field);
    assert_that!(field.advances, equal_to(2));
    assert_that!((&field).evaluate(&Position::new(0.0, 0.0, 0.0)), close_to(1.44, 1e-12));
    let mut boxed: Box<dyn ScalarField<f64>> = Box::new(field);
    advance_twice(&mut boxed);
    assert_that!(boxed.evaluate(&Position::new(0.0, 0.0, 0.0)), close_to(1.96, 1e-12));
}
