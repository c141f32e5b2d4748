use marching_field::prelude::*;

struct Ellipsoid;
impl ScalarField<f32> for Ellipsoid {
    fn evaluate(&self, point: &Position<f32>) -> f32 {
        ellipsoid_density(point.x, point.y, point.z)
    }
}

fn ellipsoid_density(x: f32, y: f32, z: f32) -> f32 {
    1f32 - (x * x / 4f32 + y * y + z * z)
}

fn main() {
    // Extraction parameters: world zone and cell size
    let bounds = GridBounds::new(2.5f32, 0.5);

    // Extract from a [ScalarField]
    let mesh = extract(&Ellipsoid {}, &bounds).unwrap();
    println!("Extracted mesh: {:#?}", mesh);

    // Extract from a ready-made field, with unit normals and a report
    let sphere = Sphere::new(Position::new(0.0, 0.0, 0.0), 2.0);
    let config = ExtractionConfig::new(bounds).with_normalized_normals(true);
    let (mesh, report) = extract_with_config(&sphere, &config).unwrap();
    println!("Sphere: {} triangles, {}", mesh.num_tris(), report);

    // Extract from a simple field function
    let mesh = extract_from_fn(ellipsoid_density, &bounds).unwrap();
    println!("Extracted mesh: {} vertices", mesh.vertices.len());

    // Extract from a simple field closure
    let mesh = extract_from_fn(
        |x: f32, y: f32, z: f32| 1f32 - (x * x + y * y + z * z).sqrt() / 2f32,
        &bounds,
    )
    .unwrap();
    println!("Extracted mesh: {} vertices", mesh.vertices.len());

    // Configuration errors are reported, not panicked on
    match extract(&Ellipsoid {}, &GridBounds::new(1.0, 0.0)) {
        Ok(_) => println!("Unexpected success"),
        Err(e) => println!("Rejected: {}", e),
    }
}
