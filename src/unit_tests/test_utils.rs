use crate::density::ScalarField;
use crate::generic_mesh::{Mesh, Triangle};
use crate::structs::{GridBounds, Position};
use crate::traits::Density;
use hamcrest::core::*;
use ndarray::Array3;
use noise::{NoiseFn, Perlin};
use std::fmt::Debug;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
pub struct TriMatcher {
    positions: [[f64; 3]; 3],
}

impl Display for TriMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Triangle like:")?;
        for p in self.positions.iter() {
            writeln!(f, "    + Pos [{:?}, {:?}, {:?}]", p[0], p[1], p[2])?;
        }
        Ok(())
    }
}

impl Matcher<Triangle<f64>> for TriMatcher {
    fn matches(&self, actual: Triangle<f64>) -> MatchResult {
        let actual_positions = [
            actual.vertices[0].position,
            actual.vertices[1].position,
            actual.vertices[2].position,
        ];
        // Same triangle, starting from any of its vertices (winding must be kept)
        let same = (0..3).any(|shift| {
            (0..3).all(|i| actual_positions[(i + shift) % 3] == self.positions[i])
        });
        if same {
            success()
        } else {
            Err(format!("{:?} not the same tri as {:?}", &actual, &self))
        }
    }
}

pub fn tri_matcher_vecs(
    v1: (f64, f64, f64),
    v2: (f64, f64, f64),
    v3: (f64, f64, f64),
) -> TriMatcher {
    TriMatcher {
        positions: [[v1.0, v1.1, v1.2], [v2.0, v2.1, v2.2], [v3.0, v3.1, v3.2]],
    }
}

#[derive(Debug)]
pub struct TrianglesMatcher {
    pub items: Vec<TriMatcher>,
}

impl Display for TrianglesMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Triangles: ")?;
        for item in self.items.iter() {
            writeln!(f, " - {}", item)?;
        }
        Ok(())
    }
}

impl Matcher<Vec<Triangle<f64>>> for TrianglesMatcher {
    fn matches(&self, actual: Vec<Triangle<f64>>) -> MatchResult {
        let mut rem = actual.clone();

        for item in self.items.iter() {
            match rem.iter().position(|a| item.matches(*a) == Ok(())) {
                Some(idx) => {
                    rem.remove(idx);
                }
                None => {
                    let formatted_actual = format_list(actual);
                    return Err(format!("was:\n{}", &formatted_actual));
                }
            }
        }

        if !rem.is_empty() {
            let formatted_remaining = format_list(rem);
            return Err(format!("also had {}\n", formatted_remaining));
        }

        success()
    }
}

fn format_list<T: Display>(list: Vec<T>) -> String {
    let mut res = String::from("");
    for item in list.iter() {
        res += " - ";
        res += &format!("{}", item);
    }
    res
}

macro_rules! tris {
    () => (
        $crate::unit_tests::test_utils::TrianglesMatcher {items: vec!()}
    );
    ($($x:expr),*) => (
        $crate::unit_tests::test_utils::TrianglesMatcher {items: vec!($($x),*)}
    );
}

/*
Densities set by hand on the lattice of some bounds. Points off the lattice get the density of the
nearest lattice point, and points out of the array get `outside`.
*/
pub struct DensityArray {
    data: Array3<f64>,
    bounds: GridBounds<f64>,
    outside: f64,
}

impl DensityArray {
    pub fn new(bounds: GridBounds<f64>, initial: f64) -> Self {
        let points = bounds.cells_per_axis().unwrap() + 1;
        DensityArray {
            data: Array3::from_elem((points, points, points), initial),
            bounds,
            outside: initial,
        }
    }

    pub fn set(&mut self, x: usize, y: usize, z: usize, value: f64) {
        self.data[[x, y, z]] = value;
    }

    fn lattice_index(&self, coordinate: f64, axis: usize) -> Option<usize> {
        let index = ((coordinate + self.bounds.range) / self.bounds.step).round();
        if index >= 0.0 && (index as usize) < self.data.shape()[axis] {
            Some(index as usize)
        } else {
            None
        }
    }
}

impl ScalarField<f64> for DensityArray {
    fn evaluate(&self, point: &Position<f64>) -> f64 {
        let index = (
            self.lattice_index(point.x, 0),
            self.lattice_index(point.y, 1),
            self.lattice_index(point.z, 2),
        );
        match index {
            (Some(x), Some(y), Some(z)) => self.data[[x, y, z]],
            _ => self.outside,
        }
    }
}

// Perlin noise: plenty of cells of every kind, saddles included
pub struct NoiseField {
    pub noise: Perlin,
    pub frequency: f64,
}

impl ScalarField<f64> for NoiseField {
    fn evaluate(&self, point: &Position<f64>) -> f64 {
        let f = self.frequency;
        self.noise.get([point.x * f, point.y * f, point.z * f])
    }
}

// Structural properties any extracted mesh must have
pub fn assert_valid_mesh<F: Density + Debug>(mesh: &Mesh<F>) {
    assert_eq!(mesh.indices.len() % 3, 0, "indices do not form triangles");
    assert_eq!(mesh.normals.len(), mesh.vertices.len(), "normals not aligned with vertices");
    for index in mesh.indices.iter() {
        let vertices = mesh.vertices.len();
        assert!(*index < vertices, "index {} out of {} vertices", index, vertices);
    }
    for (position, normal) in mesh.vertices.iter().zip(mesh.normals.iter()) {
        assert!(position.iter().all(|c| c.is_finite()), "non-finite vertex {:?}", position);
        assert!(normal.iter().all(|c| c.is_finite()), "non-finite normal {:?}", normal);
    }
}

pub fn length(v: &[f64; 3]) -> f64 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

pub fn dot(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}
