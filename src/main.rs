use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use uuid_replacer::pipeline::{self, GlossaryFormat, InputSource, OutputSink, PipelineConfig};
use uuid_replacer::template::{PlaceholderTemplate, DEFAULT_TEMPLATE};

#[derive(Parser, Debug)]
#[command(name = "uuid-replacer")]
#[command(about = "Replace UUIDs in a file with easier to read placeholders")]
#[command(version)]
struct Args {
    /// Input file to scan; reads stdin when omitted or `-`
    input: Option<PathBuf>,

    /// Destination for the rewritten text; writes stdout when omitted or `-`
    output: Option<PathBuf>,

    /// UUID replacement template with one `{}` slot for the counter
    #[arg(long, short = 't', env = "UUID_TEMPLATE", default_value = DEFAULT_TEMPLATE)]
    template: String,

    /// Glossary destination (defaults to `<output stem>_glossary.txt`)
    #[arg(long)]
    glossary_out: Option<PathBuf>,

    /// Glossary rendering format
    #[arg(long, value_enum, default_value = "text")]
    glossary_format: GlossaryFormat,

    /// Append the glossary to the rewritten document instead of writing a
    /// second file
    #[arg(long)]
    append_glossary: bool,

    /// Rewrite the input file in place
    #[arg(long, conflicts_with = "output")]
    in_place: bool,

    /// Run stats JSON output file path
    #[arg(long)]
    stats_out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // WHY: logs go to stderr as JSON so the rewritten document can own stdout
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    let input = match &args.input {
        Some(path) if path.as_os_str() != "-" => InputSource::File(path.clone()),
        _ => InputSource::Stdin,
    };

    let output = if args.in_place {
        match &input {
            InputSource::File(path) => OutputSink::File(path.clone()),
            InputSource::Stdin => anyhow::bail!("--in-place requires a file input"),
        }
    } else {
        match &args.output {
            Some(path) if path.as_os_str() != "-" => OutputSink::File(path.clone()),
            _ => OutputSink::Stdout,
        }
    };

    let template = PlaceholderTemplate::parse(&args.template)?;

    let config = PipelineConfig {
        template,
        glossary_out: args.glossary_out,
        glossary_format: args.glossary_format,
        append_glossary: args.append_glossary,
    };

    let stats = pipeline::run(input, output, &config).await?;

    info!(
        occurrences = stats.occurrences_replaced,
        distinct = stats.distinct_uuids,
        elapsed_ms = stats.processing_time_ms,
        "Replacement run completed"
    );

    if let Some(stats_path) = &args.stats_out {
        pipeline::write_stats(stats_path, &stats).await?;
    }

    Ok(())
}
