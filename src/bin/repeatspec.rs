//! A binary to locate the reference repeat track for a motif within a region
//! and write a repeat-specification file for it.
//!
//! ```shell
//! cargo run --release --bin=repeatspec --features=binaries -- \
//!     --reference hs37d5.fa --region 8:100651852-100652541 --motif AAG
//! ```
//!
//! It achieves this by carrying out the following:
//!
//! * Retrieving the reference sequence for the region (optionally padded on
//!   either side).
//! * Scanning the sequence for every tandem repeat track and matching each
//!   track against the motif.
//! * Choosing a track, either automatically (the longest exact match, falling
//!   back to the longest approximate match) or by asking the operator.
//! * Writing `<output-directory>/<RepeatId>.json` for the chosen track, or
//!   appending the region and motif to `<output-directory>/STRs_not_found.txt`
//!   if no track was chosen.

#[path = "repeatspec/interactive.rs"]
mod interactive;

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use repeatspec::output;
use repeatspec::reference;
use repeatspec::selection::Automatic;
use repeatspec::selection::Selector as _;
use repeatspec::Annotator;
use repeatspec::Motif;
use repeatspec::Region;
use repeatspec::RepeatSpecification;
use tracing::info;
use tracing::warn;
use tracing_log::AsTrace as _;
use tracing_subscriber::EnvFilter;

use crate::interactive::Interactive;

////////////////////////////////////////////////////////////////////////////////////////
// Main
////////////////////////////////////////////////////////////////////////////////////////

/// Identifies the reference STR track for a motif within a region and writes a
/// repeat-specification file for it.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// The region to search (e.g., `8:100651852-100652541`).
    #[arg(short, long)]
    region: String,

    /// The repeat motif of interest (e.g., `AAG`).
    #[arg(short, long)]
    motif: String,

    /// The reference FASTA. If `<reference>.fai` exists, it is used to seek
    /// directly to the region.
    #[arg(short = 'f', long)]
    reference: PathBuf,

    /// The directory within which repeat-specification files (and the log of
    /// regions with no track) are written.
    #[arg(short, long, default_value = "repeat-specs")]
    output_directory: PathBuf,

    /// The number of bases by which to widen the region on either side before
    /// searching.
    #[arg(short, long, default_value_t = 0)]
    padding: usize,

    /// Whether to ask the operator to choose the track rather than choosing it
    /// automatically.
    #[arg(short, long, default_value_t = false)]
    interactive: bool,

    #[command(flatten)]
    verbose: Verbosity,
}

fn run(args: &Args) -> Result<()> {
    let region = args
        .region
        .parse::<Region>()
        .with_context(|| format!("parsing region: {}", args.region))?;
    let motif = args
        .motif
        .parse::<Motif>()
        .with_context(|| format!("parsing motif: {}", args.motif))?;

    let search = region.pad(args.padding);
    info!("reference: fetching {search} from {}", args.reference.display());

    let sequence = reference::open(&args.reference)
        .fetch(&search)
        .with_context(|| format!("fetching the reference sequence for {search}"))?;

    let annotator = Annotator::new(search, sequence, motif);
    let survey = annotator.survey();

    let mut operator = Interactive::new(io::stdin().lock(), io::stdout());
    let selection = if args.interactive {
        operator.select(&survey).context("selecting a repeat track")?
    } else {
        Automatic.select(&survey).unwrap_or_else(|never| match never {})
    };

    let resolution = annotator
        .annotate(&selection)
        .context("resolving the selected repeat track")?;

    let resolution = match resolution {
        Some(resolution) if args.interactive => {
            operator
                .show(&resolution.highlight(annotator.sequence()))
                .context("showing the selected repeat track")?;

            if operator
                .confirm("Proceed with creating the repeat-specification file?")
                .context("confirming the selected repeat track")?
            {
                Some(resolution)
            } else {
                None
            }
        }
        resolution => resolution,
    };

    match resolution {
        Some(resolution) => {
            let record = RepeatSpecification::from(&resolution);
            let path = output::write_specification(&args.output_directory, &record)
                .context("writing the repeat-specification file")?;

            info!("wrote {} for track ({})", path.display(), resolution.track());
        }
        None => {
            let path =
                output::append_not_found(&args.output_directory, &region, annotator.motif())
                    .context("logging the region as having no repeat track")?;

            warn!(
                "no repeat track found for {} in {region}: logged to {}",
                annotator.motif(),
                path.display()
            );
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    match std::env::var("RUST_LOG") {
        Ok(_) => tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init(),
        Err(_) => tracing_subscriber::fmt()
            .with_max_level(args.verbose.log_level_filter().as_trace())
            .with_writer(io::stderr)
            .init(),
    };

    run(&args)
}
