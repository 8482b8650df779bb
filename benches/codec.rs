use criterion::{criterion_group, criterion_main, Criterion};
use geoarrow_geometry::array::GeometryBuilder;
use geoarrow_geometry::scalar::{LineString, Polygon};
use geoarrow_geometry::{deserialize, serialize, Geometry, SerializedGeometry};

fn create_data() -> Vec<Geometry> {
    // An L shape
    let poly = Polygon::try_from_rings(vec![
        LineString::try_from_xy([
            (0.0, 0.0),
            (4.0, 0.0),
            (4.0, 1.0),
            (1.0, 1.0),
            (1.0, 4.0),
            (0.0, 4.0),
            (0.0, 0.0),
        ])
        .unwrap(),
    ])
    .unwrap();
    vec![Geometry::Polygon(poly); 1000]
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let data = create_data();
    let serialized: Vec<SerializedGeometry> = data.iter().map(serialize).collect();

    c.bench_function("serialize 1000 polygons", |b| {
        b.iter(|| {
            for geom in &data {
                criterion::black_box(serialize(geom));
            }
        })
    });

    c.bench_function("deserialize 1000 polygons", |b| {
        b.iter(|| {
            for buf in &serialized {
                criterion::black_box(deserialize(buf.as_bytes()).unwrap());
            }
        })
    });

    c.bench_function("build GeometryArray of 1000 polygons", |b| {
        b.iter(|| {
            let mut builder = GeometryBuilder::with_capacity(data.len(), 0);
            for geom in &data {
                builder.push_geometry(Some(geom)).unwrap();
            }
            builder.finish()
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
