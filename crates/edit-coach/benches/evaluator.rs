use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use edit_coach::{
    BuiltinCatalog, Coach, CoachConfig, EditEvaluator, EvaluatorRegistry, PatternEvaluator,
    RecordingSink, RopeBuffer, SystemClock,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

fn large_text(line_count: usize) -> String {
    let mut out = String::with_capacity(line_count * 48);
    for i in 0..line_count {
        out.push_str(&format!("    let value_{i:06} = compute({i}); // edit-coach\n"));
    }
    out.pop();
    out
}

fn bench_comment_random_lines(c: &mut Criterion) {
    let text = large_text(50_000);
    c.bench_function("pattern_evaluator/comment_100_random_lines", |b| {
        b.iter_batched(
            || {
                (
                    RopeBuffer::from_text(&text),
                    PatternEvaluator::block_comment(Arc::new(SystemClock)),
                    StdRng::seed_from_u64(7),
                )
            },
            |(mut buffer, mut evaluator, mut rng)| {
                let mut fired = 0;
                for _ in 0..100 {
                    let line = rng.gen_range(0..buffer.line_count());
                    let event = buffer.insert_at(line, 4, "//").unwrap();
                    fired += usize::from(evaluator.on_edit(&buffer, &event));
                }
                black_box(fired);
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_typing_inside_comment(c: &mut Criterion) {
    let text = large_text(50_000);
    c.bench_function("coach/typing_100_chars_in_comment", |b| {
        b.iter_batched(
            || {
                let coach = Coach::from_config(
                    &CoachConfig::default(),
                    &EvaluatorRegistry::with_defaults(),
                    Arc::new(SystemClock),
                    BuiltinCatalog::new(),
                    RecordingSink::new(),
                )
                .unwrap();
                let mut buffer = RopeBuffer::from_text(&text);
                buffer.insert_at(25_000, 4, "// ").unwrap();
                (buffer, coach)
            },
            |(mut buffer, mut coach)| {
                let line = 25_000;
                let mut column = buffer.line_text(line).map_or(0, |t| t.len());
                for _ in 0..100 {
                    let event = buffer.insert_at(line, column, "x").unwrap();
                    black_box(coach.on_edit(&buffer, &event));
                    column += 1;
                }
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(
    benches,
    bench_comment_random_lines,
    bench_typing_inside_comment
);
criterion_main!(benches);
