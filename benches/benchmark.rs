use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use solenopsis_metadata::component::{Component, ComponentType};
use solenopsis_metadata::metadata::MetadataType;
use solenopsis_metadata::org::Org;

const TYPES: usize = 200;
const MEMBERS: usize = 20;

fn catalog() -> Vec<ComponentType> {
    (0..TYPES)
        .map(|i| ComponentType::new(format!("Type{i:04}"), format!("dir{i:04}")))
        .collect()
}

fn populated() -> Org<ComponentType> {
    let types = catalog();
    let mut org = Org::new(&types).unwrap();
    for t in &types {
        for m in 0..MEMBERS {
            let name = format!("{}-{m}", t.directory_name().unwrap_or_default());
            org.add_member(Component::new(name.clone(), format!("{name}.txt"), t)).unwrap();
        }
    }
    org
}

fn seed(c: &mut Criterion) {
    let types = catalog();
    c.bench_function("seed org", |b| b.iter(|| Org::new(black_box(&types)).unwrap()));
}

fn copy(c: &mut Criterion) {
    let org = populated();
    c.bench_function("copy org", |b| b.iter(|| Org::from_org(black_box(&org)).unwrap()));
}

fn file_name_scan(c: &mut Criterion) {
    let org = populated();
    c.bench_function("file name hit (last type)", |b| {
        b.iter(|| org.get_by_file_name(black_box("dir0199-19.txt")))
    });
    c.bench_function("file name miss", |b| {
        b.iter(|| org.get_by_file_name(black_box("absent.txt")))
    });
}

criterion_group!(benches, seed, copy, file_name_scan);
criterion_main!(benches);
