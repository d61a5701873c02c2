use clap::{Args, Parser, Subcommand};
use fencecopy::clipboard::{ClipboardAccess, MemoryClipboard, SystemClipboard};
use fencecopy::config::Config;
use fencecopy::copy::{BasicClipboardCopier, ClipboardCopier, OperationResult};
use fencecopy::files::LocalFiles;
use fencecopy::interactive::run_interactive;
use fencecopy::logger::initialize_logger;
use fencecopy::reporting::print_stats;
use fencecopy::resolver::resolve_reference;
use fencecopy::session::{CopySession, SessionHandle};
use fencecopy::utils::expand_references;
use fencecopy::{copy_files_to_clipboard, ClipboardCopierConfig, ClipboardError};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::io::AsyncReadExt;
use tracing::{error, info};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    #[command(subcommand)]
    cmd: SubCommands,
    #[command(flatten)]
    options: GlobalArgs,
}

#[derive(Args, Debug, Clone)]
struct GlobalArgs {
    #[arg(long, global = true, env = "FENCECOPY_CONFIG", help = "Path to a config file")]
    config: Option<PathBuf>,
    #[arg(
        short = 'e',
        long,
        global = true,
        help = "Tag code blocks with the file extension instead of the full path"
    )]
    extension_only: bool,
    #[arg(short = 'a', long, global = true, help = "Append to the existing clipboard text")]
    append: bool,
    #[arg(long, global = true, help = "Print the payload instead of touching the clipboard")]
    dry_run: bool,
    #[arg(long, global = true, help = "Print the result as JSON")]
    json: bool,
    #[arg(short = 's', long, global = true, help = "Don't log the copied-file tree")]
    no_stats: bool,
}

#[derive(Subcommand, Debug, Clone)]
enum SubCommands {
    /// Copy files, directories, globs or file: URIs
    Copy(CopyArgs),
    /// Copy every file listed in a manifest
    Manifest(ManifestArgs),
    /// Start an interactive session with a recent-file list
    Session,
}

#[derive(Parser, Debug, Clone)]
struct CopyArgs {
    #[arg(required = true)]
    files: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
struct ManifestArgs {
    #[arg(help = "Manifest file; reads stdin when omitted or '-'")]
    path: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli_args = CliArgs::parse();
    initialize_logger();

    match run(cli_args).await {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli_args: CliArgs) -> Result<ExitCode, ClipboardError> {
    let options = cli_args.options;
    let config = copier_config(&options)?;

    match cli_args.cmd {
        SubCommands::Copy(args) => {
            let result = if options.dry_run {
                let files = expand_references(&args.files)?;
                let copier = BasicClipboardCopier::new(MemoryClipboard::new(), LocalFiles);
                copier.copy_files(&files, config).await
            } else {
                copy_files_to_clipboard(config, args.files).await?
            };
            report(&result, &options)
        }
        SubCommands::Manifest(args) => {
            let manifest = read_manifest(args.path.as_deref()).await?;
            let result = if options.dry_run {
                let copier = BasicClipboardCopier::new(MemoryClipboard::new(), LocalFiles);
                copier.copy_manifest(&manifest, config).await
            } else {
                let copier = BasicClipboardCopier::new(SystemClipboard::new()?, LocalFiles);
                copier.copy_manifest(&manifest, config).await
            };
            report(&result, &options)
        }
        SubCommands::Session => {
            info!("Starting interactive session");
            if options.dry_run {
                run_session(MemoryClipboard::new(), config).await?;
            } else {
                run_session(SystemClipboard::new()?, config).await?;
            }
            info!("Session has ended.");
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn copier_config(options: &GlobalArgs) -> Result<ClipboardCopierConfig, ClipboardError> {
    let mut config = Config::load(options.config.as_deref())?.copy;
    if options.extension_only {
        config.include_full_path = false;
    }
    if options.append {
        config.append_to_clipboard = true;
    }
    Ok(config)
}

async fn read_manifest(path: Option<&str>) -> Result<String, ClipboardError> {
    match path {
        None | Some("-") => {
            let mut manifest = String::new();
            tokio::io::stdin().read_to_string(&mut manifest).await?;
            Ok(manifest)
        }
        Some(reference) => {
            let path = resolve_reference(reference)?;
            tokio::fs::read_to_string(&path).await.map_err(|e| {
                ClipboardError::ReadFailure {
                    path,
                    reason: e.to_string(),
                }
            })
        }
    }
}

async fn run_session<C: ClipboardAccess + 'static>(
    clipboard: C,
    config: ClipboardCopierConfig,
) -> Result<(), ClipboardError> {
    let copier = BasicClipboardCopier::new(clipboard, LocalFiles);
    let handle = SessionHandle::new(CopySession::new(copier, config));
    run_interactive(handle).await
}

fn report(result: &OperationResult, options: &GlobalArgs) -> Result<ExitCode, ClipboardError> {
    if options.json {
        let json = serde_json::to_string_pretty(result)
            .map_err(|e| ClipboardError::IoError(e.to_string()))?;
        println!("{json}");
    } else {
        if options.dry_run {
            if let Some(payload) = &result.payload {
                print!("{payload}");
            }
        }
        if !options.no_stats {
            print_stats(result);
        }
        info!("{}", result.status);
    }

    Ok(if result.is_copied() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
