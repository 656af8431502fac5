mod common;
use common::{builder_with, init_logging};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let merger = builder_with(&["UNALIGNED_A", "UNALIGNED_B", "PARALLEL_LOW_A"])
        .min_revision(10)
        .build()?;

    // Eager merge with spans of native coverage per source.
    let report = merger.merge()?;

    println!("## Merged ({} points):", report.points.len());
    for (rev, point) in &report.points {
        println!(" - r{rev}: avg={:.2}", point.avg);
    }

    println!("\n## Attribution:");
    for (label, span) in &report.attribution.spans {
        println!(
            " - '{}' supplied native points from r{} to r{}.",
            label, span.start, span.end
        );
    }

    Ok(())
}
