mod common;
use common::{builder_with, init_logging};
use revmerge::Merger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // 1. Merge per-platform series first.
    let linux = builder_with(&["BOTS_LINUX"]).build()?.merged_series()?;
    let mac = builder_with(&["BOTS_MAC"]).build()?.merged_series()?;

    // 2. Feed the merged series into a second merge.
    let merger = Merger::builder()
        .with_series("linux", linux)
        .with_series("mac", mac)
        .build()?;

    for (rev, point) in merger.iter()? {
        let tags = point
            .diagnostics
            .as_ref()
            .map(|d| d.keys().cloned().collect::<Vec<_>>().join(","))
            .unwrap_or_default();
        println!(" - r{rev}: avg={:.1} count={} diagnostics=[{tags}]", point.avg, point.count);
    }

    Ok(())
}
