use criterion::{black_box, criterion_group, criterion_main, Criterion};
use theia_core::TitleClassifier;

fn bench_classify(c: &mut Criterion) {
    let classifier = TitleClassifier::new().unwrap();

    let inputs = vec![
        "something.with.dots.s03e02.hdtv.x264-foo.mkv",
        "some.name.with-dash.319.htdv.x264-foo",
        "some.movie.2016.720p.x264",
        "some movie (2016) x264",
        "holiday video from the beach.mkv",
    ];

    c.bench_function("classify_single", |b| {
        b.iter(|| classifier.classify(black_box(inputs[0])));
    });

    c.bench_function("classify_batch_5", |b| {
        b.iter(|| {
            for input in &inputs {
                let _ = classifier.classify(black_box(input));
            }
        });
    });

    c.bench_function("matches_tv_episode_miss", |b| {
        b.iter(|| classifier.matches_tv_episode(black_box(inputs[4])));
    });
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
