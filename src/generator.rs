/*!
Per-frame mesh regeneration for animated fields
*/

use std::mem;

use tracing::debug;

use crate::config::ExtractionConfig;
use crate::density::ScalarField;
use crate::error::ExtractionError;
use crate::extraction::extract_into;
use crate::generic_mesh::{GenericMeshBuilder, Mesh};
use crate::report::ExtractionReport;
use crate::traits::Density;

/**
Owns a field and the mesh extracted from it, and rebuilds that mesh on demand.

Meant to be driven from the host loop (game loop, batch script...): each
[update](MeshGenerator::update) advances the field once, then re-extracts the whole mesh from
scratch, reusing the previous buffers.
```
# use marching_field::prelude::*;
let balls = vec![Metaball::fixed(Position::new(0.0f32, 0.0, 0.0), 1.0)];
let config = ExtractionConfig::new(GridBounds::new(2.0f32, 0.2));
let mut generator = MeshGenerator::new(Metaballs::new(balls, 0.1), config).unwrap();
for _frame in 0..3 {
    let mesh = generator.update().unwrap();
    assert!(mesh.num_tris() > 0);
}
```
*/
pub struct MeshGenerator<F, S> {
    field: S,
    config: ExtractionConfig<F>,
    mesh: Mesh<F>,
    last_report: Option<ExtractionReport>,
}

impl<F, S> MeshGenerator<F, S>
where
    F: Density,
    S: ScalarField<F>,
{
    /// Fails if the configuration is invalid. No extraction happens until the first update
    pub fn new(field: S, config: ExtractionConfig<F>) -> Result<Self, ExtractionError> {
        config.cells_per_axis()?;
        Ok(MeshGenerator {
            field,
            config,
            mesh: Mesh::default(),
            last_report: None,
        })
    }

    /// Advance the field, then rebuild the mesh
    pub fn update(&mut self) -> Result<&Mesh<F>, ExtractionError> {
        self.field.advance();
        self.regenerate()
    }

    /// Rebuild the mesh without advancing the field
    pub fn regenerate(&mut self) -> Result<&Mesh<F>, ExtractionError> {
        let mut builder = GenericMeshBuilder::from_mesh(mem::take(&mut self.mesh));
        let result = extract_into(&self.field, &self.config, &mut builder);
        self.mesh = builder.build();
        let report = result?;
        debug!(
            vertices = self.mesh.vertices.len(),
            triangles = report.triangles,
            "mesh regenerated"
        );
        self.last_report = Some(report);
        Ok(&self.mesh)
    }

    /// The mesh from the last update (empty before the first one)
    pub fn mesh(&self) -> &Mesh<F> {
        &self.mesh
    }

    /// Report of the last successful update
    pub fn last_report(&self) -> Option<&ExtractionReport> {
        self.last_report.as_ref()
    }

    /// The field
    pub fn field(&self) -> &S {
        &self.field
    }

    /// The field, for changes between updates
    pub fn field_mut(&mut self) -> &mut S {
        &mut self.field
    }

    /// Current configuration
    pub fn config(&self) -> &ExtractionConfig<F> {
        &self.config
    }

    /// Replace the configuration, used from the next update. An invalid one is rejected and the current one kept
    pub fn set_config(&mut self, config: ExtractionConfig<F>) -> Result<(), ExtractionError> {
        config.cells_per_axis()?;
        self.config = config;
        Ok(())
    }

    /// Give back the field and the last mesh
    pub fn into_parts(self) -> (S, Mesh<F>) {
        (self.field, self.mesh)
    }
}
