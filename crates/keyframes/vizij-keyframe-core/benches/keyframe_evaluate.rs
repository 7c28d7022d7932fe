use std::hint::black_box;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};
use vizij_keyframe_core::{easing_fn, FloatEvaluator, Keyframe, KeyframeInterpolator};

fn many_keys(n: usize) -> KeyframeInterpolator {
    let values: Vec<f32> = (0..n).map(|i| (i as f32 * 0.37).sin()).collect();
    KeyframeInterpolator::from_values(&values).expect("keyframes")
}

fn bench_evaluate(c: &mut Criterion) {
    let pair = KeyframeInterpolator::new(vec![Keyframe::new(0.0, 0.0), Keyframe::new(1.0, 1.0)])
        .expect("keyframes")
        .with_easing(easing_fn(|f| f * f));
    c.bench_function("pair_eased", |b| {
        b.iter(|| pair.evaluate(black_box(0.42)))
    });

    let pair_eval = pair.clone().with_evaluator(Arc::new(FloatEvaluator));
    c.bench_function("pair_evaluator", |b| {
        b.iter(|| pair_eval.evaluate(black_box(0.42)))
    });

    for n in [3usize, 16, 128] {
        let interp = many_keys(n);
        c.bench_function(&format!("scan_{n}_keys"), |b| {
            b.iter(|| interp.evaluate(black_box(0.97)))
        });
    }
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
