//! CLI entry point for gosig.
//!
//! Lists the exported function and method signatures of the Go packages in a
//! directory, one `func ...` line per declaration.

use clap::{
    Parser,
    builder::styling::{AnsiColor, Effects, Styles},
};
use gosig::io::{ExitCode, OutputManager};
use gosig::{LoadError, LoadResult, PackageLoader, Settings, collect_signatures, logging};
use std::path::PathBuf;
use std::time::Instant;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// List exported Go function and method signatures
#[derive(Parser, Debug)]
#[command(
    name = "gosig",
    version = env!("CARGO_PKG_VERSION"),
    about = "List exported Go function and method signatures",
    long_about = "Parse every .go file in a directory and print one line per exported \
                  function or method, without type-checking the code.",
    after_help = "Examples:\n  gosig\n  gosig ./pkg/server\n  gosig -r --no-tests .\n  gosig --print-config",
    next_line_help = true,
    styles = clap_cargo_style()
)]
struct Cli {
    /// Directory containing the Go package(s)
    #[arg(default_value = ".")]
    dir: PathBuf,

    /// Path to custom settings.toml file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also list packages in subdirectories
    #[arg(short, long)]
    recursive: bool,

    /// Skip _test.go files
    #[arg(long)]
    no_tests: bool,

    /// Number of parser threads (overrides config)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,
}

impl Cli {
    /// Apply CLI overrides on top of file and environment settings
    fn apply(&self, settings: &mut Settings) {
        if self.recursive {
            settings.walk.recursive = true;
        }
        if self.no_tests {
            settings.walk.include_tests = false;
        }
        if let Some(threads) = self.threads {
            settings.walk.parallel_threads = threads;
        }
    }
}

fn load_settings(cli: &Cli) -> LoadResult<Settings> {
    let loaded = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };

    let mut settings = loaded.map_err(|e| LoadError::Config {
        reason: e.to_string(),
    })?;
    cli.apply(&mut settings);
    Ok(settings)
}

fn run(cli: &Cli, settings: &Settings, output: &mut OutputManager) -> LoadResult<ExitCode> {
    if cli.print_config {
        let text = settings.to_toml().map_err(|e| LoadError::Config {
            reason: e.to_string(),
        })?;
        return output
            .text(&text)
            .map_err(|e| LoadError::General(e.to_string()));
    }

    let start = Instant::now();
    let packages = PackageLoader::new(settings.walk.clone()).load(&cli.dir)?;
    let lines = collect_signatures(&packages);

    tracing::info!(
        "{} exported signatures from {} packages in {:.2?}",
        lines.len(),
        packages.len(),
        start.elapsed()
    );

    output
        .lines(&lines)
        .map_err(|e| LoadError::General(e.to_string()))
}

fn main() {
    let cli = Cli::parse();
    let mut output = OutputManager::new();

    let exit_code = match load_settings(&cli) {
        Ok(settings) => {
            logging::init(logging::level_for_verbosity(
                cli.verbose,
                settings.effective_log_level(),
            ));
            tracing::debug!("settings: {settings:?}");

            run(&cli, &settings, &mut output)
                .unwrap_or_else(|e| output.error(&e).unwrap_or(ExitCode::GeneralError))
        }
        Err(e) => output.error(&e).unwrap_or(ExitCode::ConfigError),
    };

    std::process::exit(exit_code.into());
}
