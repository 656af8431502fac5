mod common;
use common::{builder_with, init_logging};
use revmerge::{DataPoint, StdPolicy};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // FULL_STATS carries std at r100 and r110; a second series with its own
    // spread shows how the two policies diverge.
    let extra = vec![
        DataPoint::new(100, 7.0).with_count(3).with_std(2.0),
        DataPoint::new(110, 1.0).with_count(3).with_std(0.5),
    ];

    for policy in [StdPolicy::Legacy, StdPolicy::Pooled] {
        let merger = builder_with(&["FULL_STATS"])
            .with_series("extra", extra.clone())
            .std_policy(policy)
            .build()?;
        for (rev, p) in merger.iter()? {
            println!(
                "{policy:?} r{rev}: avg={:.2} std={:.4}",
                p.avg,
                p.std.unwrap_or(f64::NAN)
            );
        }
    }

    Ok(())
}
