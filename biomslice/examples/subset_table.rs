#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
use biomslice::{
    locate, parse_index_list, Axis, DocumentSource, SubsetConfig, SubsetRequest, TableDocument,
    TableHeader, TableSubsetter,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Subset JSON BIOM tables without decoding their data section")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Write a table holding only the selected observations or samples
    Subset {
        /// Input BIOM table (JSON)
        #[arg(long)]
        input: String,

        /// Axis to slice: observation or sample
        #[arg(long)]
        axis: Axis,

        /// Comma-separated ids to keep
        #[arg(long, value_delimiter = ',', conflicts_with = "indices")]
        ids: Vec<String>,

        /// Indices to keep (format: 0,3,5:8)
        #[arg(long)]
        indices: Option<String>,

        /// Output file (stdout if omitted)
        #[arg(long)]
        output: Option<String>,

        /// Refuse input documents larger than this many bytes
        #[arg(long)]
        max_bytes: Option<usize>,
    },
    /// Print the raw value of a top-level key
    Locate {
        /// Input BIOM table (JSON)
        #[arg(long)]
        input: String,

        /// Key to locate, e.g. shape or columns
        #[arg(long)]
        key: String,
    },
    /// Show table info
    Info {
        /// Input BIOM table (JSON)
        #[arg(long)]
        input: String,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let start_time = std::time::Instant::now();

    match &cli.command {
        Commands::Subset {
            input,
            axis,
            ids,
            indices,
            output,
            max_bytes,
        } => {
            let mut config = SubsetConfig::default();
            if let Some(limit) = max_bytes {
                config = config.with_max_document_bytes(*limit);
            }
            handle_subset(input, *axis, ids, indices.as_deref(), output.as_deref(), config)?
        }
        Commands::Locate { input, key } => handle_locate(input, key)?,
        Commands::Info { input } => handle_info(input)?,
    }

    tracing::info!(elapsed = ?start_time.elapsed(), "done");
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("This example requires the 'cli' feature to be enabled.");
    eprintln!("Run with: cargo run --example subset_table --features cli -- --help");
    std::process::exit(1);
}

#[cfg(feature = "cli")]
fn handle_subset(
    input: &str,
    axis: Axis,
    ids: &[String],
    indices: Option<&str>,
    output: Option<&str>,
    config: SubsetConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = match indices {
        Some(list) => SubsetRequest::index_items(axis, parse_index_list(list)?),
        None if !ids.is_empty() => SubsetRequest::ids(axis, ids.iter().cloned()),
        None => return Err("one of --ids or --indices is required".into()),
    };

    let document = TableDocument::open_with_config(input, &config)?;
    let subset = TableSubsetter::new(config).subset(&document, &request)?;

    match output {
        Some(path) => {
            std::fs::write(path, &subset.document)?;
            eprintln!(
                "Wrote {path}: shape {}, {} of {} stored values kept",
                subset.shape, subset.triples_out, subset.triples_in
            );
        }
        None => println!("{}", subset.document),
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn handle_locate(input: &str, key: &str) -> Result<(), Box<dyn std::error::Error>> {
    let document = TableDocument::open(input)?;
    match locate(document.document_text(), key)? {
        Some(fragment) => {
            println!("{}", fragment.value());
            let span = fragment.span();
            eprintln!("bytes {}..{}", span.start, span.end);
        }
        None => return Err(format!("key `{key}` not found").into()),
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn handle_info(input: &str) -> Result<(), Box<dyn std::error::Error>> {
    let document = TableDocument::open(input)?;
    let header = TableHeader::read(document.document_text())?;

    println!("Table Info:");
    println!("  File: {input}");
    println!("  Size: {} bytes", document.size());
    println!("  Shape: {}", header.shape);
    println!("  Observations: {}", header.shape.n_rows);
    println!("  Samples: {}", header.shape.n_cols);
    println!("  Format: {} ({})", header.matrix_type, header.element_type);

    Ok(())
}
