//! Bootstrap a 95% percentile interval for the mean monthly rent of a
//! small sample of apartment listings.
//!
//! Run with `RUST_LOG=debug` to see the engine's progress lines.

use resample_confidence::{Bootstrap, PercentileInterval, DEFAULT_RESAMPLES};
use resample_core::{sequential, NumericSample};
use resample_statistic::{Mean, Median};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let rents = NumericSample::numeric(vec![
        1190.0, 1400.0, 1560.0, 1740.0, 1890.0, 2050.0, 2200.0, 2320.0, 2450.0, 2550.0,
        2680.0, 2800.0, 2930.0, 3090.0, 3200.0, 3380.0, 3550.0, 3720.0, 3900.0, 4160.0,
    ])?;

    let bootstrap = Bootstrap::new(sequential(), PercentileInterval)
        .with_resamples(DEFAULT_RESAMPLES)
        .with_confidence_level(0.95)
        .with_seed(42);

    let mean_report = bootstrap.confidence_interval(&rents, &Mean)?;
    println!("mean rent:   {}", mean_report.interval);
    println!(
        "             bootstrap SE {:.2} over {} replicates",
        mean_report.distribution.standard_error(),
        mean_report.n_resamples
    );

    let median_report = bootstrap.confidence_interval(&rents, &Median)?;
    println!("median rent: {}", median_report.interval);

    Ok(())
}
