/*!
Marching Cubes extraction of the zero level set of a scalar field, over a uniform grid.

A field gives a density for any point in space, positive inside the surface. The extraction walks
every cell of a grid covering `[-range, range]` on each axis, finds where the surface crosses
cell edges, and outputs a triangle soup: one fresh vertex (with a normal estimated from the field)
per triangle corner.

```
use marching_field::prelude::*;

// A sphere of radius 1, extracted with cells of 0.1
let sphere = Sphere::new(Position::new(0.0, 0.0, 0.0), 1.0);
let bounds = GridBounds::new(2.0, 0.1);
let mesh = extract(&sphere, &bounds).unwrap();
assert_eq!(mesh.indices.len() % 3, 0);
assert_eq!(mesh.normals.len(), mesh.vertices.len());

// Closures work too
let mesh_from_fn = extract_from_fn(|x: f64, y, z| 1.0 - (x * x + y * y + z * z), &bounds).unwrap();
assert_eq!(mesh, mesh_from_fn);
```

Fields that animate are advanced by their owner between passes, see [generator::MeshGenerator].
*/
#![warn(missing_docs)]

pub mod config;
pub mod density;
pub mod error;
pub mod extraction;
pub mod fields;
pub mod generator;
pub mod generic_mesh;
pub mod implementation;
pub mod mesh_builder;
pub mod prelude;
pub mod report;
pub mod structs;
pub mod traits;

#[cfg(test)]
mod unit_tests;
