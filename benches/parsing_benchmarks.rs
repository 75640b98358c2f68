use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use us_address_rs::AddressValidator;

fn bench_address_parsing(c: &mut Criterion) {
    let validator = AddressValidator::new();

    c.bench_function("validate_comma_address", |b| {
        b.iter(|| validator.validate(black_box("123 Main St, New York, NY 10001")))
    });

    c.bench_function("validate_space_separated_address", |b| {
        b.iter(|| validator.validate(black_box("456 oak ave  los angeles ca 90012-1234")))
    });

    c.bench_function("reject_gibberish", |b| {
        b.iter(|| validator.validate(black_box("gibberish")))
    });
}

criterion_group!(benches, bench_address_parsing);
criterion_main!(benches);
