use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rayon::prelude::*;
use scinorm::normalizer::{Normalizer, NormalizerConfig};

const PARAGRAPH: &str = "Severe acute respiratory syndrome coronavirus 2 (SARS-CoV-2) was first \
reported in Wuhan. Among 1,099 patients, the median age was 47.0 years; 41.9% were female. \
Correspondence to: Zhong.NS@gird.cn. The basic reproduction number (R0) was estimated at 2.2 \
[95% CI, 1.4 to 3.9], and the cost was $12,500.75 per case — “preliminary” data.";

pub fn normalize(c: &mut Criterion) {
    let n = Normalizer::default();
    c.bench_function("normalize_paragraph", |b| {
        b.iter(|| n.normalize_str(black_box(PARAGRAPH)))
    });

    let legacy = Normalizer::new(NormalizerConfig::legacy());
    c.bench_function("normalize_paragraph_legacy", |b| {
        b.iter(|| legacy.normalize_str(black_box(PARAGRAPH)))
    });

    let ascii = "plain ascii text without anything to protect ".repeat(20);
    c.bench_function("normalize_ascii", |b| {
        b.iter(|| n.normalize_str(black_box(&ascii)))
    });
}

pub fn normalize_rayon(c: &mut Criterion) {
    let n = Normalizer::default();
    let paragraphs: Vec<String> = (0..1000).map(|_| PARAGRAPH.to_string()).collect();
    c.bench_function("normalize_1000_paragraphs_rayon", |b| {
        b.iter(|| {
            paragraphs
                .par_iter()
                .map(|p| n.normalize_str(black_box(p)))
                .collect::<Vec<String>>()
        })
    });
}

criterion_group!(benches, normalize, normalize_rayon);
criterion_main!(benches);
