/*!
Main mesh extraction methods
*/

use crate::config::ExtractionConfig;
use crate::density::{ScalarField, ScalarFieldForFn};
use crate::error::ExtractionError;
use crate::generic_mesh::{GenericMeshBuilder, Mesh};
use crate::implementation::algorithm::Extractor;
use crate::mesh_builder::MeshBuilder;
use crate::report::ExtractionReport;
use crate::structs::GridBounds;
use crate::traits::Density;

/**
Extracts an iso-surface [Mesh] for a [ScalarField], with default normal estimation

Arguments:
 * `field`: the density field. It is only read: call [ScalarField::advance] yourself between passes if it animates
 * `bounds`: the world zone for which to extract, and its cell size

```
# use marching_field::{extraction::extract, fields::Sphere, structs::*};
let sphere = Sphere::new(Position::new(0.0, 0.0, 0.0), 1.0);
let mesh = extract(&sphere, &GridBounds::new(2.0, 0.25)).unwrap();
assert!(mesh.num_tris() > 0);
assert_eq!(mesh.normals.len(), mesh.vertices.len());
```
*/
pub fn extract<F, S>(field: &S, bounds: &GridBounds<F>) -> Result<Mesh<F>, ExtractionError>
where
    F: Density,
    S: ScalarField<F> + ?Sized,
{
    let config = ExtractionConfig::new(*bounds);
    extract_with_config(field, &config).map(|(mesh, _)| mesh)
}

/**
Extracts an iso-surface [Mesh] for a [ScalarField], also returning what happened during the pass

Arguments:
 * `field`: the density field
 * `config`: the world zone, cell size and normal estimation parameters
*/
pub fn extract_with_config<F, S>(
    field: &S,
    config: &ExtractionConfig<F>,
) -> Result<(Mesh<F>, ExtractionReport), ExtractionError>
where
    F: Density,
    S: ScalarField<F> + ?Sized,
{
    let mut builder = GenericMeshBuilder::new();
    let report = extract_into(field, config, &mut builder)?;
    Ok((builder.build(), report))
}

/**
Extracts an iso-surface into a custom [MeshBuilder]

Arguments:
 * `field`: the density field
 * `config`: the world zone, cell size and normal estimation parameters
 * `builder`: receives vertices and triangles as they are generated. Nothing is written if the configuration is invalid
*/
pub fn extract_into<F, S, B>(
    field: &S,
    config: &ExtractionConfig<F>,
    builder: &mut B,
) -> Result<ExtractionReport, ExtractionError>
where
    F: Density,
    S: ScalarField<F> + ?Sized,
    B: MeshBuilder<F>,
{
    Ok(Extractor::new(field, config, builder)?.extract())
}

/**
Extracts an iso-surface [Mesh] for a [ScalarField]-compatible closure

Arguments:
 * `f`: the closure providing world densities
 * `bounds`: the world zone for which to extract, and its cell size
*/
pub fn extract_from_fn<F, FUN>(f: FUN, bounds: &GridBounds<F>) -> Result<Mesh<F>, ExtractionError>
where
    F: Density,
    FUN: Fn(F, F, F) -> F,
{
    let field = ScalarFieldForFn(f);
    extract(&field, bounds)
}
