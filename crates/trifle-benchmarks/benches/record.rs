//! Record access, validation and merge benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::{json, Value};
use trifle_benchmarks::criterion_config;
use trifle_core::types::{fields, DynRecord};
use trifle_core::{
    get_property, get_property_dyn, merge_records, update_profile, validate_keys,
    validate_keys_dyn, Profile, ProfileKey, ProfileUpdate,
};

fn as_object(value: Value) -> DynRecord {
    match value {
        Value::Object(map) => map,
        _ => DynRecord::new(),
    }
}

fn bench_typed(c: &mut Criterion) {
    let profile = Profile::new("Ada", 36, "ada@example.com");
    let update = ProfileUpdate::default().with_age(37);
    let keys = [ProfileKey::Name, ProfileKey::Age, ProfileKey::Email];

    c.bench_function("typed_get_property", |b| {
        b.iter(|| black_box(get_property(black_box(&profile), fields::Email)).len());
    });
    c.bench_function("typed_validate_keys", |b| {
        b.iter(|| validate_keys(black_box(&profile), &keys));
    });
    c.bench_function("update_profile", |b| {
        b.iter(|| update_profile(black_box(&profile), black_box(&update)));
    });
}

fn bench_dynamic(c: &mut Criterion) {
    let base = as_object(json!({"name": "Ada", "age": 36, "email": "ada@example.com"}));
    let overlay = as_object(json!({"age": 37, "team": "engines"}));

    c.bench_function("dyn_get_property", |b| {
        b.iter(|| get_property_dyn(black_box(&base), "email").is_ok());
    });
    c.bench_function("dyn_validate_keys", |b| {
        b.iter(|| validate_keys_dyn(black_box(&base), &["name", "age", "email"]));
    });
    c.bench_function("merge_records", |b| {
        b.iter(|| merge_records(black_box(&base), black_box(&overlay)));
    });
}

criterion_group! {
    name = benches;
    config = criterion_config();
    targets = bench_typed, bench_dynamic
}
criterion_main!(benches);
