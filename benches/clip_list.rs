use criterion::{Criterion, criterion_group, criterion_main};
use quickclip::models::{Clip, ClipList, DragState};
use quickclip::ui::{CopyFeedback, build_rows};
use std::hint::black_box;

fn create_clips(count: usize) -> ClipList {
    ClipList::from_clips(
        (0..count)
            .map(|i| Clip {
                value: format!("snippet number {} with some text to copy", i),
                alias: if i % 3 == 0 {
                    Some(format!("alias{}", i))
                } else {
                    None
                },
            })
            .collect(),
    )
}

fn benchmark_move_clip(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_clip");

    for count in [100, 1_000] {
        group.bench_function(format!("{}_clips_first_to_last", count), |b| {
            let mut clips = create_clips(count);
            b.iter(|| {
                let moved = clips.move_clip(black_box(0), black_box(count - 1));
                assert!(matches!(moved, Ok(true)));
            });
        });
    }

    group.finish();
}

fn benchmark_build_rows(c: &mut Criterion) {
    let clips = create_clips(1_000);
    let feedback = CopyFeedback::default();
    let drag = DragState::Dragging {
        source: 10,
        over: Some(500),
    };

    c.bench_function("build_rows_1k", |b| {
        b.iter(|| build_rows(black_box(&clips), black_box(&drag), &feedback));
    });
}

criterion_group!(benches, benchmark_move_clip, benchmark_build_rows);
criterion_main!(benches);
