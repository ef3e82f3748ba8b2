use api_account::{copy, Account};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::fs;

fn benchmark_user_json(c: &mut Criterion) {
    let user_json =
        fs::read_to_string("tests/fixtures/user.json").expect("Failed to read fixture");
    let account = Account::with_credentials("tok", "bearer", "public", Some(user_json))
        .expect("Failed to build account");
    let user = account.user().cloned();

    let mut group = c.benchmark_group("user_json");

    group.bench_function("cached_read", |b| {
        b.iter(|| black_box(&account).user_json().map(str::len))
    });

    group.bench_function("set_user_recompute", |b| {
        let mut account = account.clone();
        b.iter(|| account.set_user(black_box(user.clone())))
    });

    group.bench_function("copy_full_account", |b| {
        b.iter(|| copy(black_box(&account)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_user_json);
criterion_main!(benches);
