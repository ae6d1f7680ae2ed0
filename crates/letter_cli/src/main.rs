//! letter: The Letter parser CLI.
//!
//! Usage:
//!   letter [options] [file...]
//!
//! Parses each file (or stdin) and writes the AST as JSON, the token stream,
//! or the reprinted program to stdout.

use bumpalo::Bump;
use clap::Parser as ClapParser;
use letter_core::text::LineMap;
use letter_diagnostics::{DiagnosticCollection, ParseError, SyntaxError};
use letter_options::{ConfigError, LetterConfig, ParserOptions};
use letter_parser::Parser;
use log::{debug, info, LevelFilter};
use miette::{LabeledSpan, MietteDiagnostic, NamedSource, Report, Severity};
use rayon::prelude::*;
use std::io;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

#[derive(ClapParser, Debug)]
#[command(name = "letter", version, about = "letter - parse Letter source into a JSON AST")]
struct Cli {
    /// Letter files to parse. Reads stdin when none are given.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Dump the token stream instead of parsing.
    #[arg(long)]
    tokens: bool,

    /// Reprint the parsed program as Letter source instead of JSON.
    #[arg(long)]
    print: bool,

    /// Emit single-line JSON.
    #[arg(long)]
    compact: bool,

    /// Path to letter.json.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Maximum nesting depth; overrides the config file.
    #[arg(long = "max-depth", value_name = "N")]
    max_depth: Option<u32>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("cannot read {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("cannot serialize AST: {0}")]
    Json(#[from] serde_json::Error),
}

/// What to write for each parsed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Tokens,
    Source,
    Json { pretty: bool },
}

/// One named source text.
struct SourceInput {
    name: String,
    text: String,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    process::exit(run(&cli));
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: &Cli) -> i32 {
    let start = Instant::now();

    let config = match load_config(cli) {
        Ok(config) => config,
        Err(e) => {
            print_error(&e.to_string());
            return 1;
        }
    };
    let options = parser_options(cli, &config);
    let mode = output_mode(cli, &config);
    debug!("options: {:?}, output: {:?}", options, mode);

    let inputs = match read_inputs(&cli.files) {
        Ok(inputs) => inputs,
        Err(e) => {
            print_error(&e.to_string());
            return 1;
        }
    };

    // Each input gets its own arena and parser.
    let results: Vec<Result<String, CliError>> = inputs
        .par_iter()
        .map(|input| render_output(input, options, mode))
        .collect();

    let use_color = atty_is_terminal();
    let mut diagnostics = DiagnosticCollection::new();
    let mut failed_output = false;
    for (input, result) in inputs.iter().zip(results) {
        match result {
            Ok(output) => print!("{}", output),
            Err(CliError::Parse(err)) => {
                diagnostics.add(err.to_diagnostic(Some(input.name.as_str())));
                print_parse_error(input, &err, use_color);
            }
            Err(e) => {
                print_error(&format!("{}: {}", input.name, e));
                failed_output = true;
            }
        }
    }

    info!(
        "processed {} input(s) in {:.2}ms",
        inputs.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    if diagnostics.has_errors() {
        let count = diagnostics.error_count();
        let plural = if count == 1 { "" } else { "s" };
        if use_color {
            eprintln!("\n{}Found {} error{}.{}", RED, count, plural, RESET);
        } else {
            eprintln!("\nFound {} error{}.", count, plural);
        }
        return 2;
    }
    if failed_output {
        return 1;
    }
    0
}

fn load_config(cli: &Cli) -> Result<LetterConfig, CliError> {
    match &cli.config {
        Some(path) => {
            let config = letter_options::parse_config_file(path)?;
            info!("loaded config from {}", path.display());
            Ok(config)
        }
        None => Ok(LetterConfig::default()),
    }
}

/// Command-line flags override the config file.
fn parser_options(cli: &Cli, config: &LetterConfig) -> ParserOptions {
    let mut options = config.parser;
    if let Some(max_depth) = cli.max_depth {
        options.max_depth = max_depth;
    }
    options
}

fn output_mode(cli: &Cli, config: &LetterConfig) -> OutputMode {
    if cli.tokens {
        OutputMode::Tokens
    } else if cli.print {
        OutputMode::Source
    } else {
        OutputMode::Json {
            pretty: !cli.compact && config.pretty(),
        }
    }
}

fn read_inputs(files: &[PathBuf]) -> Result<Vec<SourceInput>, CliError> {
    if files.is_empty() {
        let name = "<stdin>".to_string();
        let text = io::read_to_string(io::stdin()).map_err(|source| CliError::Read {
            name: name.clone(),
            source,
        })?;
        return Ok(vec![SourceInput { name, text }]);
    }

    files
        .iter()
        .map(|path| {
            let name = path.display().to_string();
            match std::fs::read_to_string(path) {
                Ok(text) => Ok(SourceInput { name, text }),
                Err(source) => Err(CliError::Read { name, source }),
            }
        })
        .collect()
}

fn render_output(
    input: &SourceInput,
    options: ParserOptions,
    mode: OutputMode,
) -> Result<String, CliError> {
    if mode == OutputMode::Tokens {
        return render_tokens(input);
    }

    let arena = Bump::new();
    let program = Parser::with_options(&arena, &input.text, options).parse()?;
    debug!("{}: {} statement(s)", input.name, program.body.len());

    let out = match mode {
        OutputMode::Json { pretty: true } => serde_json::to_string_pretty(&program)? + "\n",
        OutputMode::Json { pretty: false } => serde_json::to_string(&program)? + "\n",
        OutputMode::Source | OutputMode::Tokens => letter_printer::print_program(&program),
    };
    Ok(out)
}

/// One token per line: `KIND "text" @start..end`.
fn render_tokens(input: &SourceInput) -> Result<String, CliError> {
    let tokens = letter_scanner::tokenize(&input.text).map_err(ParseError::from)?;
    let mut out = String::new();
    for token in &tokens {
        out.push_str(&token.to_string());
        out.push('\n');
    }
    Ok(out)
}

fn print_parse_error(input: &SourceInput, err: &ParseError, use_color: bool) {
    if !use_color {
        let diag = err.to_diagnostic(Some(input.name.as_str()));
        eprintln!("{}", diag.render_with_lines(&LineMap::new(&input.text)));
        return;
    }

    let label = match err {
        ParseError::Syntax(SyntaxError::UnexpectedToken { expected, .. })
        | ParseError::Syntax(SyntaxError::UnexpectedEndOfInput { expected, .. }) => {
            format!("expected {}", expected)
        }
        ParseError::Syntax(SyntaxError::InvalidAssignmentTarget { .. }) => {
            "assignment operator here".to_string()
        }
        _ => "here".to_string(),
    };
    let diagnostic = MietteDiagnostic::new(err.to_string())
        .with_code(format!("L{}", err.code()))
        .with_severity(Severity::Error)
        .with_label(LabeledSpan::at(err.span().to_range(), label));
    let report = Report::new(diagnostic)
        .with_source_code(NamedSource::new(&input.name, input.text.clone()));
    eprintln!("{:?}", report);
}

fn print_error(msg: &str) {
    if atty_is_terminal() {
        eprintln!("{}{}error{}: {}", BOLD, RED, RESET, msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

fn atty_is_terminal() -> bool {
    // On Unix, check whether stderr is a terminal
    #[cfg(unix)]
    {
        unsafe { libc::isatty(2) != 0 }
    }
    #[cfg(not(unix))]
    {
        true
    }
}
