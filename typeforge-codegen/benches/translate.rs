//! Translation benchmarks.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use typeforge_codegen::{Generator, TranslateConfig, translate};
use typeforge_core::LiteralType;
use typeforge_schema::{Schema, parse_schema};

fn user_schema() -> Schema {
    let role = Schema::native_enum([
        ("Admin", LiteralType::from("admin")),
        ("Member", LiteralType::from("member")),
    ]);
    Schema::object([
        ("username", Schema::string()),
        ("age", Schema::number().optional()),
        ("role", role),
        (
            "inventory",
            Schema::object([("name", Schema::string()), ("itemId", Schema::number())]).array(),
        ),
        ("friends", Schema::lazy_ref("User").array()),
        ("tags", Schema::record(Schema::string(), Schema::string().nullable())),
    ])
}

fn wide_schema(fields: usize) -> Schema {
    Schema::object((0..fields).map(|i| (format!("field{i}"), Schema::string().optional())))
}

fn benchmark_translate(c: &mut Criterion) {
    let schema = user_schema();
    let config = TranslateConfig::new()
        .with_root_identifier("User")
        .with_resolve_native_enums(true);

    c.bench_function("translate_user", |b| {
        b.iter(|| translate(black_box(&schema), &config))
    });

    let wide = wide_schema(256);
    c.bench_function("translate_wide_object", |b| {
        b.iter(|| translate(black_box(&wide), &config))
    });
}

fn benchmark_generate(c: &mut Criterion) {
    let schema = user_schema();
    let config = TranslateConfig::new()
        .with_root_identifier("User")
        .with_resolve_native_enums(true);
    let generator = Generator::new(&config);

    c.bench_function("generate_user", |b| {
        b.iter(|| generator.generate(black_box(&schema)))
    });
}

fn benchmark_parse(c: &mut Criterion) {
    let json = r#"{
        "kind": "object",
        "shape": {
            "username": { "kind": "string" },
            "tags": { "kind": "array", "element": { "kind": "string" } },
            "friends": { "kind": "array", "element": { "kind": "lazy", "ref": "User" } }
        }
    }"#;

    c.bench_function("parse_schema", |b| b.iter(|| parse_schema(black_box(json))));
}

criterion_group!(
    benches,
    benchmark_translate,
    benchmark_generate,
    benchmark_parse,
);
criterion_main!(benches);
