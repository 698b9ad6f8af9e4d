use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_spring::core::Body;
use tui_spring::term::FrameView;
use tui_spring::types::SpringParams;

fn bench_step(c: &mut Criterion) {
    let params = SpringParams::default();
    let mut body = Body::new();

    c.bench_function("body_step", |b| {
        b.iter(|| {
            body = black_box(body).stepped(&params);
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let params = SpringParams::default();
    let view = FrameView::default();
    let body = Body::new().stepped(&params);

    c.bench_function("render_frame", |b| {
        b.iter(|| view.render(black_box(&body)))
    });
}

criterion_group!(benches, bench_step, bench_render);
criterion_main!(benches);
