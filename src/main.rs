use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

use corpack::{
    AssembleConfig, CorpusLayout, DistLayout, ExportConfig, FfmpegTranscoder, assemble_dataset,
    export_audio, scan_corpus,
};

#[derive(Parser)]
#[command(name = "corpack")]
#[command(author, version, about = "Speech corpus to SQL dataset packaging pipeline", long_about = None)]
struct Cli {
    /// Output directory for SQL scripts and transcoded audio
    #[arg(default_value = "dist")]
    output_dir: PathBuf,

    /// Staging directory holding the source corpus
    #[arg(default_value = "tmp")]
    staging_dir: PathBuf,

    /// Maximum transcript rows per insert chunk
    #[arg(long, default_value = "1500")]
    chunk_size: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let corpus = CorpusLayout::new(&cli.staging_dir);
    let dist = DistLayout::new(&cli.output_dir);
    std::fs::create_dir_all(dist.root())
        .with_context(|| format!("Failed to create output directory: {:?}", dist.root()))?;

    info!("Scanning corpus under {:?}", cli.staging_dir);
    let scan = scan_corpus(&corpus)?;

    info!("Assembling SQL dataset in {:?}", cli.output_dir);
    let assemble_config = AssembleConfig {
        chunk_size: cli.chunk_size,
    };
    let assembled = assemble_dataset(&scan.speakers, &scan.transcripts, &dist, &assemble_config)?;
    info!(
        "Dataset: {} speaker rows, {} transcript rows in {} chunks",
        assembled.speaker_rows,
        assembled.transcript_rows,
        assembled.chunk_files.len()
    );

    info!("Exporting audio for {} utterances", scan.transcripts.len());
    let transcoder = FfmpegTranscoder::default();
    let export = export_audio(
        &scan.transcripts,
        &corpus,
        &dist,
        &transcoder,
        &ExportConfig::default(),
    )?;

    if let Some(report_file) = &export.report_file {
        info!("Export report written to {:?}", report_file);
    }
    if !export.report.is_clean() {
        warn!(
            "{} of {} utterances produced no audio artifact",
            export.report.failures.len(),
            export.report.total()
        );
    }

    Ok(())
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}
