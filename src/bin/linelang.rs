//! Command-line interface for linelang
//!
//! Usage:
//!   linelang parse --grammar `<grammar>` `<input>` [--partial] [--format `<format>`]  - Parse a file and print its AST
//!   linelang check `<grammar>`                                                   - Compile a grammar and report its size

use clap::{Arg, ArgAction, ArgMatches, Command};
use config::ConfigError;
use linelang::linelang::config::{LinelangConfig, Loader, OutputFormat};
use linelang::linelang::{Flatten, LineParser, RuleDescriptor};
use std::path::Path;
use std::process;

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Input was rejected by the grammar.
const EXIT_REJECTED: i32 = 1;
/// Bad invocation, unreadable file, broken grammar or configuration.
const EXIT_SETUP: i32 = 2;

fn main() {
    let matches = Command::new("linelang")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse line-oriented text with a declarative grammar")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("TOML configuration layered over the built-in defaults"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .value_parser(LOG_LEVELS)
                .help("Log level for diagnostics written to stderr"),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse an input file and print the result")
                .arg(
                    Arg::new("grammar")
                        .long("grammar")
                        .short('g')
                        .required(true)
                        .help("Grammar description (.json, .yaml or .yml)"),
                )
                .arg(
                    Arg::new("input")
                        .help("Path to the text file to parse")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("partial")
                        .long("partial")
                        .action(ArgAction::SetTrue)
                        .help("Print the best-effort tree when input is not fully consumed"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .value_parser(OutputFormat::NAMES)
                        .help("Output format"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Compile a grammar without parsing anything")
                .arg(
                    Arg::new("grammar")
                        .help("Grammar description (.json, .yaml or .yml)")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    let config = load_config(&matches);
    init_logging(&config);

    match matches.subcommand() {
        Some(("parse", parse_matches)) => handle_parse_command(parse_matches, &config),
        Some(("check", check_matches)) => {
            let grammar = check_matches.get_one::<String>("grammar").unwrap();
            handle_check_command(grammar);
        }
        _ => unreachable!(),
    }
}

fn fail(code: i32, message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    process::exit(code);
}

fn load_config(matches: &ArgMatches) -> LinelangConfig {
    let sub = matches.subcommand().map(|(_, m)| m);
    let global = |name: &str| {
        matches
            .get_one::<String>(name)
            .or_else(|| sub.and_then(|m| m.get_one::<String>(name)))
    };

    let mut loader = Loader::new();
    if let Some(path) = global("config") {
        loader = loader.with_file(path);
    }
    let format = sub.and_then(|m| m.try_get_one::<String>("format").ok().flatten());
    let partial = sub
        .and_then(|m| m.try_get_one::<bool>("partial").ok().flatten())
        .copied()
        .unwrap_or(false);

    layer_overrides(loader, global("log-level"), format, partial)
        .unwrap_or_else(|e| fail(EXIT_SETUP, format!("invalid configuration: {}", e)))
}

fn layer_overrides(
    mut loader: Loader,
    log_level: Option<&String>,
    format: Option<&String>,
    partial: bool,
) -> Result<LinelangConfig, ConfigError> {
    if let Some(level) = log_level {
        loader = loader.log_level(level)?;
    }
    if let Some(format) = format {
        loader = loader.output_format(format)?;
    }
    if partial {
        loader = loader.allow_partial(true)?;
    }
    loader.build()
}

fn init_logging(config: &LinelangConfig) {
    let result = simplelog::TermLogger::init(
        config.log.level.into(),
        simplelog::ConfigBuilder::new()
            .set_time_format_custom(&[])
            .build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Never,
    );
    if let Err(e) = result {
        eprintln!("Warning: logging disabled: {}", e);
    }
}

fn load_grammar(path: &str) -> RuleDescriptor {
    let text = std::fs::read_to_string(path)
        .unwrap_or_else(|e| fail(EXIT_SETUP, format!("reading grammar {}: {}", path, e)));
    let format = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("json");
    RuleDescriptor::from_str_with_format(&text, format)
        .unwrap_or_else(|e| fail(EXIT_SETUP, format!("{}: {}", path, e)))
}

fn build_parser(grammar_path: &str) -> LineParser {
    let descriptor = load_grammar(grammar_path);
    LineParser::new(&descriptor)
        .unwrap_or_else(|e| fail(EXIT_SETUP, format!("{}: {}", grammar_path, e)))
}

/// Handle the parse command
fn handle_parse_command(matches: &ArgMatches, config: &LinelangConfig) {
    let grammar_path = matches.get_one::<String>("grammar").unwrap();
    let input_path = matches.get_one::<String>("input").unwrap();

    let parser = build_parser(grammar_path);
    let source = std::fs::read_to_string(input_path)
        .unwrap_or_else(|e| fail(EXIT_SETUP, format!("reading input {}: {}", input_path, e)));

    let mut ast = parser
        .parse_str(&source, config.parser.allow_partial)
        .unwrap_or_else(|e| fail(EXIT_REJECTED, format!("{}: {}", input_path, e)));

    match config.output.format {
        OutputFormat::Pretty => println!("{}", ast.pretty_with_indent(&config.output.indent)),
        OutputFormat::Json => match serde_json::to_string_pretty(&ast) {
            Ok(json) => println!("{}", json),
            Err(e) => fail(EXIT_SETUP, format!("serializing AST: {}", e)),
        },
        OutputFormat::Flatten => print!("{}", Flatten::run(&mut ast).to_text()),
    }
}

/// Handle the check command
fn handle_check_command(grammar_path: &str) {
    let parser = build_parser(grammar_path);
    println!("{}: ok ({} rules)", grammar_path, parser.grammar().len());
}
