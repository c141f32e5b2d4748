use marching_field::prelude::*;

fn main() {
    // Two balls swinging around a fixed one
    let balls = vec![
        Metaball {
            anchor: Position::new(-1.5, 0.0, 0.0),
            radius: 0.8,
            amplitude: [1.2, 0.3, 0.0],
            frequency: 1.0,
            phase: 0.0,
        },
        Metaball {
            anchor: Position::new(0.0, 1.5, 0.0),
            radius: 0.6,
            amplitude: [0.0, 1.0, 0.5],
            frequency: 1.5,
            phase: 1.0,
        },
        Metaball::fixed(Position::new(1.0, -0.5, 0.0), 1.0),
    ];
    let field = Metaballs::new(balls, 0.1f32);
    let mut generator = MeshGenerator::new(field, ExtractionConfig::default()).unwrap();

    for frame in 0..20 {
        let mesh = generator.update().unwrap();
        println!("Frame {}: {} vertices", frame, mesh.vertices.len());
        if let Some(report) = generator.last_report() {
            if report.has_anomalies() {
                println!("    {}", report);
            }
        }
    }
}
