use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gcode_analyzer::estimate::{simulate, EstimatorConfig};
use gcode_analyzer::GcodeDocument;
use std::hint::black_box;

fn generate_gcode_content(size_mb: usize) -> String {
    let target_bytes = size_mb * 1024 * 1024;
    let mut content = String::with_capacity(target_bytes + 1000);

    // Generate realistic G-code patterns
    let patterns = [
        "G28 ; home all axes\n",
        "M104 S210 ; set hotend temperature\n",
        "M190 S60 ; wait for bed temperature\n",
        "G1 X10.0 Y10.0 Z0.3 F1500 ; move to position\n",
        "G1 X20.0 Y20.0 E0.1 F3000 ; extrude\n",
        "G1 X30.0 Y30.0 E0.2 ; continue extrusion\n",
        "; layer change\n",
        ";LAYER:1\n",
        "G0 Z0.6 ; lift Z\n",
        "(temperature check)\n",
        "M105 ; report temperatures\n",
    ];

    let mut pattern_index = 0;
    while content.len() < target_bytes {
        content.push_str(patterns[pattern_index % patterns.len()]);
        pattern_index += 1;
    }

    content
}

fn bench_simulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation");
    let config = EstimatorConfig::default();

    for size_mb in [1, 5, 20].iter() {
        let content = generate_gcode_content(*size_mb);
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("size_mb", size_mb),
            &content,
            |b, content| b.iter(|| black_box(simulate(black_box(content), &config))),
        );
    }
    group.finish();
}

fn bench_full_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_report");

    for size_mb in [1, 5].iter() {
        let content = generate_gcode_content(*size_mb);
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("size_mb", size_mb),
            &content,
            |b, content| {
                b.iter(|| {
                    let document = GcodeDocument::new(content.as_str());
                    black_box(document.report())
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_simulation, bench_full_report);
criterion_main!(benches);
