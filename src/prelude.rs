/*!
   Common convenient re-exports
*/

pub use crate::config::ExtractionConfig;
pub use crate::density::{ScalarField, ScalarFieldForFn};
pub use crate::error::ExtractionError;
pub use crate::extraction::{extract, extract_from_fn, extract_into, extract_with_config};
pub use crate::fields::{Metaball, Metaballs, Sphere};
pub use crate::generator::MeshGenerator;
pub use crate::generic_mesh::{GenericMeshBuilder, Mesh};
pub use crate::mesh_builder::{MeshBuilder, VertexIndex};
pub use crate::report::ExtractionReport;
pub use crate::structs::{GridBounds, Position};
