use clap::Parser;
use indicatif::ProgressBar;
use log::info;
use pmfseek::digest::cleavage::Enzyme;
use pmfseek::digest::fragmenter::PmfFragmenter;
use pmfseek::digest::modifiers::{
    LengthRangeModifier, ModifierChain, PeakListModifier, SortModifier, UnificationModifier,
};
use pmfseek::errors::PmfSeekError;
use pmfseek::export::{write_peaks_csv, write_peaks_ndjson};
use pmfseek::mass::alphabet::ResidueMasses;
use pmfseek::models::PeakList;
use pmfseek::protein::fasta::ProteinSequenceCollection;
use rayon::prelude::*;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum MassScale {
    Monoisotopic,
    Average,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Csv,
    Ndjson,
}

/// Predicts peptide mass fingerprints for every protein in a fasta file.
#[derive(Debug, Parser)]
#[command(name = "pmfseek", version)]
struct Args {
    /// Fasta file with the protein sequences to digest.
    fasta: PathBuf,

    /// Cleavage scheme.
    #[arg(long, default_value = "trypsin")]
    enzyme: Enzyme,

    /// Maximum number of miscleavages per fragment.
    #[arg(long, default_value_t = 0)]
    max_miscleavages: usize,

    /// Drop the terminal cleavage residue from each fragment instead of
    /// keeping it.
    #[arg(long)]
    discard_cleavage_residue: bool,

    /// Residue mass table.
    #[arg(long, value_enum, default_value_t = MassScale::Monoisotopic)]
    scale: MassScale,

    /// Sort peaks by mass before writing.
    #[arg(long)]
    sort: bool,

    /// Collapse equal-mass peaks (implies sorting).
    #[arg(long)]
    unique: bool,

    /// Keep only fragments with at least this many residues.
    #[arg(long)]
    min_length: Option<usize>,

    /// Keep only fragments with at most this many residues.
    #[arg(long)]
    max_length: Option<usize>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Output file. Writes to stdout when omitted.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn build_modifier(args: &Args) -> Option<Arc<dyn PeakListModifier<f64> + Send + Sync>> {
    let mut chain: Vec<Arc<dyn PeakListModifier<f64> + Send + Sync>> = Vec::new();
    if args.min_length.is_some() || args.max_length.is_some() {
        chain.push(Arc::new(LengthRangeModifier {
            min: args.min_length.unwrap_or(0),
            max: args.max_length.unwrap_or(usize::MAX),
        }));
    }
    if args.unique {
        chain.push(Arc::new(UnificationModifier));
    } else if args.sort {
        chain.push(Arc::new(SortModifier));
    }
    match chain.len() {
        0 => None,
        1 => chain.pop(),
        _ => Some(Arc::new(ModifierChain::new(chain))),
    }
}

fn main() -> Result<(), PmfSeekError> {
    env_logger::init();
    let args = Args::parse();

    let proteins = ProteinSequenceCollection::from_fasta_file(&args.fasta)?;
    info!(
        "Read {} protein sequences from {:?}",
        proteins.sequences.len(),
        args.fasta
    );

    let mut rule = args.enzyme.rule();
    rule.keep_cleavage_residue = !args.discard_cleavage_residue;
    let masses = match args.scale {
        MassScale::Monoisotopic => ResidueMasses::monoisotopic(),
        MassScale::Average => ResidueMasses::average(),
    };
    let mut fragmenter = PmfFragmenter::new(masses, rule);
    fragmenter.set_max_miscleavages(args.max_miscleavages);
    let fragmenter = match build_modifier(&args) {
        Some(modifier) => fragmenter.with_modifier(modifier),
        None => fragmenter,
    };

    let sequences: Vec<Arc<str>> = proteins
        .sequences
        .iter()
        .map(|p| p.sequence.clone())
        .collect();

    let start = Instant::now();
    let bar = ProgressBar::new(sequences.len() as u64);
    let peaklists: Vec<PeakList<f64>> = sequences
        .par_iter()
        .map(|seq| {
            let peaks = fragmenter.predict(seq.as_ref());
            bar.inc(1);
            peaks
        })
        .collect::<Result<_, PmfSeekError>>()?;
    bar.finish_and_clear();

    let elapsed = start.elapsed();
    info!("Digestion took {:?}", elapsed);
    if !sequences.is_empty() {
        info!(
            "Sequences per second: {:?}",
            sequences.len() as f32 / elapsed.as_secs_f32()
        );
    }
    let num_peaks: usize = peaklists.iter().map(|p| p.len()).sum();
    info!("Predicted {} peaks", num_peaks);

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(std::fs::File::create(path)?),
        None => Box::new(std::io::stdout().lock()),
    };
    match args.format {
        OutputFormat::Csv => write_peaks_csv(writer, &proteins.sequences, &peaklists)?,
        OutputFormat::Ndjson => write_peaks_ndjson(writer, &proteins.sequences, &peaklists)?,
    }

    Ok(())
}
