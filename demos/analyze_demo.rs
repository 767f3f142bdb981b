use gcode_analyzer::{parse_line, GcodeDocument};

fn main() {
    println!("=== Line Parsing ===");

    let test_lines = [
        "G1 X10 Y20.5 Z0.2 F1500 ; linear move",
        "G1X5Y5E0.4",
        "M104 S200 ; set temperature",
        ";LAYER:0",
        "",
    ];

    for line in test_lines {
        println!("\nInput: '{}'", line);
        println!("Parsed: {:?}", parse_line(line));
    }

    println!("\n=== Document Analysis ===");

    let sliced = ";FLAVOR:Marlin\n;TIME:754\n;Layer height: 0.2\n;LAYER:0\nG1 X10 F1200\n";
    let hand_written = "G28\nG1 Z0.3 F600\n; layer change\nG1 X30 Y40 F3000\nG1 X0 Y0\n";

    for (name, text) in [("sliced", sliced), ("hand-written", hand_written)] {
        let document = GcodeDocument::new(text);
        let report = document.report();
        println!("\n{}:", name);
        println!("  metadata:   {:?}", report.metadata);
        println!("  layers:     {}", report.layer_count);
        println!(
            "  print time: {} s (from {})",
            report.estimated_seconds, report.time_source
        );
    }
}
