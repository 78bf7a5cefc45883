//! mdfence - escape angle brackets inside Markdown code fences

use std::fs::File;
use std::io::{self, Read};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mdfence::io::{escape_file, escape_reader, lookup_encoding};
use mdfence::{Error, FenceEscaper, Options, Result, ScanReport};

#[derive(Parser)]
#[command(name = "mdfence")]
#[command(version, about = "Escape < and > inside Markdown code fences", long_about = None)]
#[command(after_help = "EXAMPLES:
    mdfence README.md                 Print the escaped document
    mdfence README.md -o out.md       Write the escaped document to out.md
    mdfence --in-place README.md      Rewrite README.md
    cat doc.md | mdfence              Read from stdin
    mdfence --check docs/guide.md     Exit 1 if escaping would change the file")]
struct Cli {
    /// Input Markdown file (reads stdin when absent or `-`)
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Output file (writes stdout when absent)
    #[arg(short, long, value_name = "FILE", conflicts_with = "in_place")]
    output: Option<String>,

    /// Rewrite INPUT with the escaped document
    #[arg(long, requires = "input")]
    in_place: bool,

    /// Pipeline options as JSON (accepted and ignored)
    #[arg(long, value_name = "JSON")]
    options: Option<String>,

    /// Encoding to try when the input is not valid UTF-8
    #[arg(long, value_name = "LABEL")]
    encoding: Option<String>,

    /// Write nothing; exit 1 if escaping would change the input
    #[arg(long, conflicts_with_all = ["output", "in_place"])]
    check: bool,

    /// Suppress warning messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let options = match cli.options.as_deref() {
        Some(json) => parse_options(json)?,
        None => Options::default(),
    };
    let hint = cli.encoding.as_deref().map(lookup_encoding).transpose()?;
    let escaper = FenceEscaper::with_options(options);

    let input = cli.input.as_deref().filter(|path| *path != "-");
    let source = input.unwrap_or("<stdin>");

    let report = if cli.check {
        escape_reader(open_input(input)?, io::sink(), &escaper, hint)?
    } else {
        let target = if cli.in_place { input } else { cli.output.as_deref() };
        match (input, target) {
            (Some(path), Some(out)) => escape_file(path, out, &escaper, hint)?,
            (None, Some(out)) => {
                escape_reader(open_input(None)?, File::create(out)?, &escaper, hint)?
            }
            (_, None) => {
                escape_reader(open_input(input)?, io::stdout().lock(), &escaper, hint)?
            }
        }
    };
    report_unclosed(source, &report, cli.quiet);

    if cli.check && report.changed() {
        if !cli.quiet {
            eprintln!("{source}: {} line(s) would be escaped", report.escaped_lines);
        }
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

/// Open INPUT, or stdin when absent.
fn open_input(input: Option<&str>) -> Result<Box<dyn Read>> {
    Ok(match input {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin().lock()),
    })
}

/// Validate `--options` as JSON. Any JSON value is accepted; none carry settings.
fn parse_options(json: &str) -> Result<Options> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| Error::InvalidOptions(e.to_string()))?;
    tracing::debug!(%value, "ignoring pipeline options");
    Ok(Options::default())
}

fn report_unclosed(source: &str, report: &ScanReport, quiet: bool) {
    if report.unclosed && !quiet {
        tracing::warn!(
            source,
            fences = report.fences,
            "document ends inside a code fence"
        );
    }
}
