use clap::Parser;
use env_logger::Env;
use log::info;
use logdig::{print_report, CommentMode, DebugLogScanner, ReadErrorPolicy};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "logdig")]
#[command(about = "Dig up forgotten console debug statements")]
#[command(version)]
struct Cli {
    /// Directory to scan
    #[arg(default_value = ".")]
    path: PathBuf,

    /// File-name suffix of files to scan
    #[arg(short, long, default_value = ".js")]
    extension: String,

    /// Directory name never descended into
    #[arg(short = 'x', long, default_value = "node_modules")]
    exclude_dir: String,

    /// Also honor .gitignore and .ignore files
    #[arg(long)]
    gitignore: bool,

    /// Skip files that cannot be read instead of aborting
    #[arg(long)]
    skip_unreadable: bool,

    /// Track /* */ comments across lines
    #[arg(long)]
    block_comments: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let scanner = DebugLogScanner::new()
        .with_extension(cli.extension)
        .with_excluded_dir(cli.exclude_dir)
        .with_gitignore(cli.gitignore)
        .with_comment_mode(if cli.block_comments {
            CommentMode::BlockAware
        } else {
            CommentMode::Lexical
        })
        .with_read_error_policy(if cli.skip_unreadable {
            ReadErrorPolicy::Skip
        } else {
            ReadErrorPolicy::Abort
        });

    info!("Scanning {} for console.log fossils...", cli.path.display());

    let start = std::time::Instant::now();
    let report = scanner.scan(&cli.path)?;
    let duration = start.elapsed();

    print_report(&report.findings)?;

    info!("Scanned in {:.2}ms", duration.as_secs_f64() * 1000.0);
    Ok(())
}
