//! Frame-analysis throughput benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fitform_core::{landmark, Point2, PoseFrame, ThresholdTable};
use fitform_engine::ExerciseAnalyzer;

fn squat_frame(knee_angle_deg: f32) -> PoseFrame {
    let mut points = vec![Point2::default(); 33];
    points[landmark::LEFT_HIP] = Point2::new(318.0, 200.0);
    points[landmark::RIGHT_HIP] = Point2::new(320.0, 200.0);
    points[landmark::RIGHT_KNEE] = Point2::new(320.0, 300.0);
    let theta = knee_angle_deg.to_radians();
    points[landmark::RIGHT_ANKLE] =
        Point2::new(320.0 + 100.0 * theta.sin(), 300.0 - 100.0 * theta.cos());
    PoseFrame::new(points)
}

/// One synthetic squat cycle, stand to depth and back.
fn squat_cycle() -> Vec<PoseFrame> {
    let mut angles: Vec<f32> = (4..=17).rev().map(|i| i as f32 * 10.0).collect();
    angles.extend((5..=17).map(|i| i as f32 * 10.0));
    angles.into_iter().map(squat_frame).collect()
}

fn bench_analyze(c: &mut Criterion) {
    let thresholds =
        ThresholdTable::from_json_str(r#"{"squat": {"medium": [{"knee_angle_min": 30.0}]}}"#)
            .unwrap();
    let frames = squat_cycle();

    c.bench_function("analyze_squat_cycle", |b| {
        let mut analyzer = ExerciseAnalyzer::new();
        analyzer.set_exercise("squat");
        analyzer.load_thresholds(thresholds.clone());
        b.iter(|| {
            for frame in &frames {
                black_box(analyzer.analyze(black_box(frame)));
            }
        });
    });

    c.bench_function("analyze_single_frame", |b| {
        let mut analyzer = ExerciseAnalyzer::new();
        analyzer.set_exercise("squat");
        analyzer.load_thresholds(thresholds.clone());
        let frame = squat_frame(120.0);
        b.iter(|| black_box(analyzer.analyze(black_box(&frame))));
    });
}

criterion_group!(benches, bench_analyze);
criterion_main!(benches);
