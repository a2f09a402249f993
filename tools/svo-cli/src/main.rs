mod report;

use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use rayon::prelude::*;
use rkyv::ser::{serializers::AllocSerializer, Serializer};
use rkyv::AlignedVec;
use std::fs;
use std::path::{Path, PathBuf};
use svo_extract::{ExtractConfig, Extractor, DEFAULT_MAX_DEPTH};
use svo_protocol::Corpus;
use tracing::{info, Level};

use crate::report::{analyze, SentenceReport};

const CORPUS_VERSION: u32 = 1;

#[derive(Parser)]
#[command(author, version, about = "Extracts subject-verb-object triples from dependency parses")]
struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace); logs go to stderr
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compiles a parsed corpus (CoNLL-U or JSON) to an rkyv archive
    Compile {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        #[arg(long, value_enum, default_value_t = Format::Auto)]
        format: Format,
    },
    /// Prints object phrases, verb phrases and triples for every sentence as JSON
    Extract {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Write the report here instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = Format::Auto)]
        format: Format,

        /// Drop leading determiners from object phrases
        #[arg(long)]
        skip_determiner: bool,

        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,

        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Pick from the file extension
    Auto,
    Conllu,
    Json,
    Archive,
}

/// A concrete input format, after `Format::Auto` has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Conllu,
    Json,
    Archive,
}

fn resolve_format(path: &Path, format: Format) -> anyhow::Result<Source> {
    let source = match format {
        Format::Conllu => Source::Conllu,
        Format::Json => Source::Json,
        Format::Archive => Source::Archive,
        Format::Auto => match path.extension().and_then(|e| e.to_str()) {
            Some("conllu" | "conll") => Source::Conllu,
            Some("json") => Source::Json,
            Some("rkyv") => Source::Archive,
            _ => bail!("cannot tell the format of {:?}; pass --format", path),
        },
    };
    Ok(source)
}

fn load_corpus(path: &Path, format: Format) -> anyhow::Result<Corpus> {
    info!(path = ?path, "reading corpus");

    let corpus = match resolve_format(path, format)? {
        Source::Conllu => {
            let text = fs::read_to_string(path).with_context(|| format!("reading {:?}", path))?;
            let sentences = svo_parser::parse_conllu(&text)?;
            Corpus { version: CORPUS_VERSION, sentences }
        }
        Source::Json => {
            let text = fs::read_to_string(path).with_context(|| format!("reading {:?}", path))?;
            serde_json::from_str(&text)?
        }
        Source::Archive => {
            let bytes = fs::read(path).with_context(|| format!("reading {:?}", path))?;

            // The archive root must be aligned before validation
            let mut aligned = AlignedVec::with_capacity(bytes.len());
            aligned.extend_from_slice(&bytes);

            rkyv::from_bytes::<Corpus>(&aligned)
                .map_err(|e| anyhow!("{:?} is not a valid corpus archive: {:?}", path, e))?
        }
    };

    info!(version = corpus.version, sentences = corpus.sentences.len(), "corpus loaded");
    Ok(corpus)
}

fn compile(input: &Path, output: &Path, format: Format) -> anyhow::Result<()> {
    let corpus = load_corpus(input, format)?;

    let mut serializer = AllocSerializer::<4096>::default();
    serializer
        .serialize_value(&corpus)
        .map_err(|e| anyhow!("failed to archive corpus: {:?}", e))?;
    let bytes = serializer.into_serializer().into_inner();

    fs::write(output, &bytes).with_context(|| format!("writing {:?}", output))?;

    info!(path = ?output, bytes = bytes.len(), "archive written");
    Ok(())
}

fn extract(
    input: &Path,
    output: Option<&Path>,
    format: Format,
    config: ExtractConfig,
    pretty: bool,
) -> anyhow::Result<()> {
    let corpus = load_corpus(input, format)?;
    let extractor = Extractor::with_config(config);

    // Sentences are independent, so they are analysed in parallel
    let reports: Vec<SentenceReport> = corpus
        .sentences
        .into_par_iter()
        .map(|sentence| analyze(sentence, &extractor))
        .collect();

    let failed = reports.iter().filter(|r| r.error.is_some()).count();
    info!(sentences = reports.len(), failed, "extraction finished");

    let json = if pretty {
        serde_json::to_string_pretty(&reports)?
    } else {
        serde_json::to_string(&reports)?
    };

    match output {
        Some(path) => fs::write(path, json).with_context(|| format!("writing {:?}", path))?,
        None => println!("{}", json),
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Compile { input, output, format } => compile(&input, &output, format),
        Command::Extract {
            input,
            output,
            format,
            skip_determiner,
            max_depth,
            pretty,
        } => {
            let config = ExtractConfig::default()
                .with_skip_determiner(skip_determiner)
                .with_max_depth(max_depth);
            extract(&input, output.as_deref(), format, config, pretty)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(resolve_format(Path::new("a.conllu"), Format::Auto).unwrap(), Source::Conllu);
        assert_eq!(resolve_format(Path::new("a.json"), Format::Auto).unwrap(), Source::Json);
        assert_eq!(resolve_format(Path::new("a.rkyv"), Format::Auto).unwrap(), Source::Archive);
        assert_eq!(resolve_format(Path::new("a.txt"), Format::Json).unwrap(), Source::Json);
        assert!(resolve_format(Path::new("a.txt"), Format::Auto).is_err());
    }

    #[test]
    fn test_extract_arguments() {
        let cli = Cli::try_parse_from(["svo", "-vv", "extract", "-i", "caps.conllu", "--skip-determiner"]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Extract { input, skip_determiner, max_depth, .. } => {
                assert_eq!(input, PathBuf::from("caps.conllu"));
                assert!(skip_determiner);
                assert_eq!(max_depth, DEFAULT_MAX_DEPTH);
            }
            Command::Compile { .. } => panic!("expected extract"),
        }
    }
}
