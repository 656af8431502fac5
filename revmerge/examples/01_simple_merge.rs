mod common;
use common::{builder_with, init_logging};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // 1. Two series sampled at different revisions.
    let merger = builder_with(&["UNALIGNED_A", "UNALIGNED_B"]).build()?;

    // 2. Pull merged points lazily.
    println!("## Merged ({} series):", merger.labels().count());
    for (rev, point) in merger.iter()? {
        println!(" - r{rev}: avg={:.1} count={}", point.avg, point.count);
    }

    Ok(())
}
