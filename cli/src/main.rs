//! pdfstrings CLI - lightweight PDF text extraction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;

use pdfstrings::{
    CommandExtractor, ExtractOptions, JsonFormat, PdfReader, ScanExtractor, TextExtractor,
};

#[derive(Parser)]
#[command(name = "pdfstrings")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Extract plain text from PDF content streams", long_about = None)]
struct Cli {
    /// Input PDF file (shorthand for `pdfstrings text FILE`)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Narrate progress on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract plain text
    Text {
        /// Input PDF file or bare document name
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Extraction strategy
        #[arg(long, value_enum, default_value = "scan")]
        strategy: Strategy,

        /// Program used by the command strategy
        #[arg(long, default_value = "python3", env = "PDFSTRINGS_COMMAND")]
        command: String,

        /// Arguments passed to the program before the file path
        #[arg(long = "arg", value_name = "ARG", default_value = "extract.py")]
        args: Vec<String>,

        #[command(flatten)]
        scan: ScanArgs,
    },

    /// Extract text and statistics as JSON
    Json {
        /// Input PDF file or bare document name
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        scan: ScanArgs,
    },

    /// Extract several files, one after another in the output
    Batch {
        /// Input PDF files or bare document names
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Process files one at a time
        #[arg(long)]
        sequential: bool,

        #[command(flatten)]
        scan: ScanArgs,
    },

    /// Show scan statistics for a document
    Info {
        /// Input PDF file or bare document name
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        scan: ScanArgs,
    },

    /// Show version information
    Version,
}

/// Options shared by every scanning subcommand.
#[derive(Args, Clone, Default)]
struct ScanArgs {
    /// Directory bare document names are resolved against
    #[arg(long, value_name = "DIR", env = "PDFSTRINGS_BASE_DIR")]
    base_dir: Option<PathBuf>,

    /// Fail when a document holds more streams than this
    #[arg(long, value_name = "N")]
    max_streams: Option<usize>,

    /// Fail when inflated stream data exceeds this many bytes
    #[arg(long, value_name = "BYTES")]
    max_inflated_bytes: Option<u64>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Strategy {
    /// Built-in stream scanner
    Scan,
    /// External program (e.g. a pdfminer script)
    Command,
}

impl ScanArgs {
    fn reader(&self, verbose: bool) -> PdfReader {
        let mut options = ExtractOptions::new().with_verbose(verbose);
        if let Some(max) = self.max_streams {
            options = options.with_max_streams(max);
        }
        if let Some(max) = self.max_inflated_bytes {
            options = options.with_max_inflated_bytes(max);
        }

        let reader = PdfReader::new().with_options(options);
        match &self.base_dir {
            Some(dir) => reader.with_base_dir(dir),
            None => reader,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let verbose = cli.verbose;
    let result = match cli.command {
        Some(Commands::Text {
            input,
            output,
            strategy,
            command,
            args,
            scan,
        }) => {
            let reader = scan.reader(verbose);
            let extractor: Box<dyn TextExtractor> = match strategy {
                Strategy::Scan => Box::new(ScanExtractor::with_options(reader.options().clone())),
                Strategy::Command => Box::new(
                    args.into_iter()
                        .fold(CommandExtractor::new(command), |extractor, arg| {
                            extractor.with_arg(arg)
                        }),
                ),
            };
            cmd_text(&reader, extractor.as_ref(), &input, output.as_deref())
        }
        Some(Commands::Json {
            input,
            output,
            compact,
            scan,
        }) => cmd_json(&scan.reader(verbose), &input, output.as_deref(), compact),
        Some(Commands::Batch {
            inputs,
            sequential,
            scan,
        }) => {
            let mut reader = scan.reader(verbose);
            if sequential {
                let options = reader.options().clone().sequential();
                reader = reader.with_options(options);
            }
            cmd_batch(&reader, &inputs)
        }
        Some(Commands::Info { input, scan }) => cmd_info(&scan.reader(verbose), &input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            if let Some(input) = cli.input {
                let reader = ScanArgs::default().reader(verbose);
                let extractor = ScanExtractor::with_options(reader.options().clone());
                cmd_text(&reader, &extractor, &input, None)
            } else {
                println!("{}", "Usage: pdfstrings <FILE>".yellow());
                println!("       pdfstrings --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_text(
    reader: &PdfReader,
    extractor: &dyn TextExtractor,
    input: &Path,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = reader.resolve_path(input);
    log::info!("Extracting {} with the {} strategy", path.display(), extractor.name());
    let text = extractor.extract_path(&path)?;
    write_or_print(&text, output)
}

fn cmd_json(
    reader: &PdfReader,
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let extraction = reader.read(input)?;
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = extraction.to_json(format)?;
    write_or_print(&json, output)
}

fn cmd_batch(reader: &PdfReader, inputs: &[PathBuf]) -> Result<(), Box<dyn std::error::Error>> {
    let mut failures = 0usize;

    for (path, result) in reader.read_many(inputs) {
        println!("{}", format!("==> {} <==", path.display()).cyan().bold());
        match result {
            Ok(text) => println!("{}", text),
            Err(e) => {
                failures += 1;
                eprintln!("{}: {}", "Error".red().bold(), e);
            }
        }
    }

    if failures > 0 {
        return Err(format!("{} of {} files failed", failures, inputs.len()).into());
    }
    Ok(())
}

fn cmd_info(reader: &PdfReader, input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let path = reader.resolve_path(input);
    let extraction = reader.read(&path)?;
    let stats = &extraction.stats;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), path.display());
    println!(
        "{}: {}",
        "Format".bold(),
        stats
            .pdf_version
            .as_deref()
            .map(|v| format!("PDF {}", v))
            .unwrap_or_else(|| "PDF (unknown version)".to_string())
    );
    println!("{}: {} bytes", "Size".bold(), stats.input_bytes);

    println!();
    println!("{}", "Stream Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Streams".bold(), stats.stream_count);
    println!("{}: {}", "Inflated".bold(), stats.inflated_stream_count);
    println!("{}: {}", "Raw".bold(), stats.raw_stream_count);
    println!("{}: {} bytes", "Inflated data".bold(), stats.inflated_bytes);

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Literal strings".bold(), stats.tokens.literal);
    println!("{}: {}", "Hex strings".bold(), stats.tokens.hex);
    println!("{}: {}", "Shown strings".bold(), stats.tokens.shown);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pdfstrings".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Lightweight PDF text extraction tool");
}

fn write_or_print(content: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}
