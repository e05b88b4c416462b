use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use uidump::search::criterion::BOUNDS;
use uidump::{AttributeFilter, SearchOptions};

const EXAMPLES: &str = "\
Examples:
  uidump-parser --file dump.xml --resource-id com.example --print-only bounds --debug
  uidump-parser --file dump.xml --resource-id com.example --filter-attribute text=Grindr --print-only bounds
  uidump-parser --file dump.xml --class android.widget.TextView --filter-attribute enabled=true
  uidump-parser --file dump.xml --text Instagram --filter-attribute package=com.example --bounds";

#[derive(Debug, Parser)]
#[command(
    name = "uidump-parser",
    version,
    about = "Search Android UI dump XML files for matching nodes",
    after_help = EXAMPLES,
    args_override_self = true
)]
struct Args {
    /// Path to the XML file to parse (required)
    #[arg(short, long, value_name = "XML_FILE", allow_hyphen_values = true)]
    file: Option<String>,
    /// Search for nodes with the given resource-id
    #[arg(short, long, value_name = "ID", allow_hyphen_values = true)]
    resource_id: Option<String>,
    /// Search for nodes with the given class name
    #[arg(short, long, value_name = "CLASS_NAME", allow_hyphen_values = true)]
    class: Option<String>,
    /// Search for nodes with the given text value
    #[arg(short, long, value_name = "TEXT_VALUE", allow_hyphen_values = true)]
    text: Option<String>,
    /// Filter by any attribute (e.g. package=com.example, content-desc=Back)
    #[arg(short = 'F', long, value_name = "ATTR=VAL", allow_hyphen_values = true)]
    filter_attribute: Option<String>,
    /// Print only the given attribute for matched nodes
    #[arg(short, long, value_name = "ATTRIBUTE", allow_hyphen_values = true)]
    print_only: Option<String>,
    /// Print bounds for matched nodes (same as --print-only bounds)
    #[arg(short, long, conflicts_with = "print_only")]
    bounds: bool,
    /// Enable debug mode for verbose output
    #[arg(short, long)]
    debug: bool,
}

impl Args {
    fn search_options(&self) -> SearchOptions {
        let filter = self.filter_attribute.as_deref().and_then(|raw| {
            let filter = AttributeFilter::parse(raw);
            if filter.is_none() {
                debug!("ignoring filter without '=': {raw}");
            }
            filter
        });

        let print_only = if self.bounds {
            Some(BOUNDS.to_string())
        } else {
            self.print_only.clone()
        };

        SearchOptions {
            resource_id: self.resource_id.clone(),
            class_name: self.class.clone(),
            text: self.text.clone(),
            filter,
            print_only,
        }
    }
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help and --version also land here, on stdout
            err.print().ok();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing(args.debug);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_ansi(io::stdout().is_terminal())
        .with_writer(io::stdout)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let path = match args.file.as_deref() {
        Some(path) if !path.is_empty() => path,
        _ => bail!("XML file is required. Use --file <xml_file>"),
    };

    let doc = uidump::load_file(path)
        .with_context(|| format!("could not parse file {path}"))?;

    let options = args.search_options();
    // --debug traces share this stream, so writes stay unbuffered
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    uidump::run(doc.root(), &options, &mut out, &mut err).context("failed to write output")?;
    out.flush().context("failed to write output")?;
    Ok(())
}
