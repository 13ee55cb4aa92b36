use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::debug;

use vfs_shell::fs::{load_snapshot, TreeSource};
use vfs_shell::repl::{run_interactive, run_script_file, ScriptOutcome};
use vfs_shell::{Shell, ShellOptions};

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum LogLevel {
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    Silent,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<tracing::Level> {
        match self {
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Silent => None,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "vfs-shell")]
#[command(about = "A shell over an in-memory virtual file system")]
#[command(version)]
struct Cli {
    /// JSON snapshot to load (defaults to the built-in tree)
    #[arg(long = "vfs-path")]
    vfs_path: Option<PathBuf>,

    /// Script to run before the interactive loop; stops at the first error
    #[arg(long = "startup-script")]
    startup_script: Option<PathBuf>,

    /// Name shown in the prompt
    #[arg(long)]
    name: Option<String>,

    /// User reported by whoami
    #[arg(long)]
    user: Option<String>,

    /// Do not enter the interactive loop after the startup script
    #[arg(long = "no-interactive")]
    no_interactive: bool,

    #[arg(long, short, default_value = "warn", value_enum)]
    log_level: LogLevel,
}

impl Cli {
    /// Explicit `--name`, else the snapshot's file stem.
    fn display_name(&self) -> Option<String> {
        self.name.clone().or_else(|| {
            self.vfs_path
                .as_ref()
                .and_then(|p| p.file_stem())
                .map(|s| s.to_string_lossy().into_owned())
        })
    }
}

fn setup_tracing(cli: &Cli) {
    if let Some(level) = cli.log_level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(io::stderr)
            .without_time()
            .compact()
            .init();
    }
}

fn main() {
    let cli = Cli::parse();
    setup_tracing(&cli);
    debug!(
        vfs_path = ?cli.vfs_path,
        startup_script = ?cli.startup_script,
        name = ?cli.name,
        no_interactive = cli.no_interactive,
        "startup parameters"
    );

    let tree: Option<TreeSource> = match &cli.vfs_path {
        Some(path) => match load_snapshot(path) {
            Ok(tree) => Some(tree),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => None,
    };

    let mut shell = Shell::new(ShellOptions {
        tree,
        name: cli.display_name(),
        user: cli.user.clone(),
    });

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(script) = &cli.startup_script {
        match run_script_file(&mut shell, script, &mut out) {
            Ok(ScriptOutcome::Exited) => std::process::exit(0),
            Ok(ScriptOutcome::Completed) => {}
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    if cli.no_interactive {
        return;
    }

    if io::stdin().is_terminal() {
        println!("Welcome to {}! Type 'exit' to quit.", shell.state().vfs_name);
    }
    if let Err(e) = run_interactive(&mut shell, io::stdin().lock(), &mut out) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
