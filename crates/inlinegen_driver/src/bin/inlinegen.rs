//! inlinegen CLI entry point.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use inlinegen_driver::{Generator, GeneratorConfig, Snapshot};
use inlinegen_foundation::CancellationToken;
use inlinegen_model::DelegatePolicy;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "INLINEGEN_LOG";

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    snapshot: Option<PathBuf>,
    out_dir: Option<PathBuf>,
    show_help: bool,
    show_version: bool,
    diagnose_delegate: bool,
    parallel: bool,
    no_support: bool,
    indent: Option<usize>,
}

fn main() -> ExitCode {
    init_logging();
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::from(2)
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--diagnose-delegate" => config.diagnose_delegate = true,
            "--parallel" => config.parallel = true,
            "--no-support" => config.no_support = true,
            "--out" | "-o" => {
                i += 1;
                if i >= args.len() {
                    return Err("--out requires a directory".into());
                }
                config.out_dir = Some(PathBuf::from(&args[i]));
            }
            "--indent" => {
                i += 1;
                if i >= args.len() {
                    return Err("--indent requires a value".into());
                }
                config.indent = Some(
                    args[i]
                        .parse()
                        .map_err(|_| format!("invalid --indent value: {}", args[i]))?,
                );
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => {
                if config.snapshot.is_some() {
                    return Err(format!("unexpected argument: {path}").into());
                }
                config.snapshot = Some(PathBuf::from(path));
            }
        }
        i += 1;
    }

    Ok(config)
}

/// Returns `Ok(false)` when the pass reported errors.
fn run(args: Vec<String>) -> Result<bool, Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(true);
    }

    if cli.show_version {
        println!("inlinegen {}", env!("CARGO_PKG_VERSION"));
        return Ok(true);
    }

    let Some(path) = cli.snapshot else {
        return Err("missing snapshot path (see --help)".into());
    };

    let mut config = GeneratorConfig::default()
        .with_parallel(cli.parallel)
        .with_support_unit(!cli.no_support)
        .with_cache(false);
    if cli.diagnose_delegate {
        config = config.with_delegate_policy(DelegatePolicy::Diagnose);
    }
    if let Some(indent) = cli.indent {
        config = config.with_indent_width(indent);
    }

    let snapshot = Snapshot::load_from_file(&path)?;
    let output = Generator::new(config).run(&snapshot, &CancellationToken::new())?;

    for diagnostic in &output.diagnostics {
        eprintln!("{diagnostic}");
    }

    match &cli.out_dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            for unit in &output.units {
                fs::write(dir.join(&unit.hint_name), &unit.text)?;
            }
        }
        None => {
            for unit in &output.units {
                println!("// ---- {} ----", unit.hint_name);
                print!("{}", unit.text);
            }
        }
    }

    Ok(!output.has_errors())
}

fn print_help() {
    println!(
        "\x1b[1minlinegen\x1b[0m - Inline collection source generator

\x1b[1mUSAGE:\x1b[0m
    inlinegen [OPTIONS] <SNAPSHOT>

\x1b[1mARGUMENTS:\x1b[0m
    <SNAPSHOT>    MessagePack snapshot of declarations and construction sites

\x1b[1mOPTIONS:\x1b[0m
    -h, --help             Print help information
    -V, --version          Print version information
    -o, --out DIR          Write each unit to DIR instead of stdout
    --diagnose-delegate    Report delegated interfaces without interfaces as an error
    --parallel             Process declarations in parallel
    --indent N             Spaces per indentation level (default 4)
    --no-support           Do not emit the shared support unit

\x1b[1mENVIRONMENT:\x1b[0m
    {LOG_ENV}          Log filter, e.g. `debug` or `inlinegen_driver=trace` (default `warn`)

\x1b[1mEXIT STATUS:\x1b[0m
    0    No error diagnostics
    1    At least one error diagnostic
    2    The snapshot could not be processed"
    );
}
