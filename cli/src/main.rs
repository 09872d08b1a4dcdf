//! # cmake-creator Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Parses the command line, sets up logging from the `-v` count, and routes to the
//! handlers in `cmake_creator::commands`. All errors propagate here and are
//! printed once.
//!
//! ```bash
//! cmake-creator init
//! cmake-creator node add-folder root --name src
//! cmake-creator -vv render
//! ```
//!
//! `--project <PATH>` (or `CMAKE_CREATOR_PROJECT`) points every command at a
//! specific project file instead of the one in the platform data directory.
//!
use clap::Parser;
use cmake_creator::commands;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "cmake-creator",
    about = "Build a tree of CMake configuration nodes and generate CMakeLists.txt files",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Project file to operate on.
    #[arg(long, global = true, env = "CMAKE_CREATOR_PROJECT")]
    project: Option<PathBuf>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Create a new, empty project.
    Init(commands::project::InitArgs),
    /// Discard the current project and start from an empty root.
    Reset(commands::project::ResetArgs),
    /// Print the project tree.
    #[command(alias = "ls")]
    Show(commands::show::ShowArgs),
    /// Add, rename, remove, or select nodes.
    #[command(alias = "n")]
    Node(commands::node::NodeArgs),
    /// Set or show a configuration node's settings.
    #[command(alias = "s")]
    Settings(commands::settings::SettingsArgs),
    /// Print the CMakeLists.txt generated for a configuration node.
    #[command(alias = "r")]
    Render(commands::render::RenderArgs),
    /// Print where a node lives in the project.
    Path(commands::render::PathArgs),
    /// Check every node of the project.
    Validate(commands::validate::ValidateArgs),
    /// Package the project as a .tar.gz archive.
    Export(commands::export::ExportArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let project = cli.project.as_deref();
    let command_result = match cli.command {
        Commands::Init(args) => commands::project::handle_init(args, project).await,
        Commands::Reset(args) => commands::project::handle_reset(args, project).await,
        Commands::Show(args) => commands::show::handle_show(args, project).await,
        Commands::Node(args) => commands::node::handle_node(args, project).await,
        Commands::Settings(args) => commands::settings::handle_settings(args, project).await,
        Commands::Render(args) => commands::render::handle_render(args, project).await,
        Commands::Path(args) => commands::render::handle_path(args, project).await,
        Commands::Validate(args) => commands::validate::handle_validate(args, project).await,
        Commands::Export(args) => commands::export::handle_export(args, project).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
