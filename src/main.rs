//! cohort — cluster a student roster from a CSV file.

use clap::Parser;
use cohort::{metrics, read_path, IncrementalClustering};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cohort", version, about = "Incremental two-seed clustering of student records")]
struct Args {
    /// CSV file: id,age,average,absences[,category] with a header line
    #[arg(env = "COHORT_INPUT")]
    input: PathBuf,

    /// Pick the two seed records at random with this seed (default: first two rows)
    #[arg(short, long, env = "COHORT_SEED")]
    seed: Option<u64>,

    /// Skip the outlier-pair split
    #[arg(long, env = "COHORT_NO_SPLIT")]
    no_split: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    let mut engine = IncrementalClustering::new().with_split(!args.no_split);
    if let Some(seed) = args.seed {
        engine = engine.with_seed(seed);
    }

    let records = read_path(&args.input)?;
    info!(path = %args.input.display(), records = records.len(), "input loaded");

    let set = engine.run(records)?;

    println!("{set}");
    println!("sizes:   {:?}", set.sizes());
    println!("inertia: {:.3}", metrics::total_inertia(&set)?);
    println!("purity:  {:.3}", metrics::purity(&set));
    Ok(())
}
