//! `yamlmerge` command-line entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use yamlmerge::{list_roots, merge_roles, Document, Format};

const SINGLE_LINE_HELP: &str = "Simple tool that recursively merges YAML files";

/// Input format, overriding detection from the file extension.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliFormat {
    Yaml,
    Toml,
}

impl From<CliFormat> for Format {
    fn from(fmt: CliFormat) -> Self {
        match fmt {
            CliFormat::Yaml => Self::Yaml,
            CliFormat::Toml => Self::Toml,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "yamlmerge", version, about = "YAML Merge")]
struct Cli {
    /// The input file
    input: PathBuf,

    /// The name of the base node whose values you'll be overriding
    #[arg(required_unless_present = "get_roots")]
    base: Option<String>,

    /// The root node containing values that will override those of the base node
    #[arg(value_name = "OVERRIDE", required_unless_present = "get_roots")]
    role: Option<String>,

    /// Print all available root-level nodes, one per line, and exit
    #[arg(long, conflicts_with_all = ["base", "role"])]
    get_roots: bool,

    /// Input and output format (defaults to TOML for .toml files, YAML otherwise)
    #[arg(long, value_enum)]
    format: Option<CliFormat>,

    /// Increase log verbosity on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    if std::env::var_os("AV_SINGLE_LINE_HELP").is_some_and(|v| !v.is_empty()) {
        println!("{SINGLE_LINE_HELP}");
        return ExitCode::SUCCESS;
    }

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), yamlmerge::Error> {
    let format = cli
        .format
        .map(Format::from)
        .unwrap_or_else(|| Format::from_path(&cli.input));
    let document = Document::load(&cli.input, format)?;

    match (cli.base.as_deref(), cli.role.as_deref()) {
        (Some(base), Some(role)) => {
            let merged = merge_roles(&document, base, role)?;
            print!("{}", format.render(&merged)?);
        }
        // clap only lets the names be absent together with --get-roots
        _ => {
            for name in list_roots(&document)? {
                println!("{name}");
            }
        }
    }
    Ok(())
}

/// `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
