//! Line-oriented session that keeps the recent-file list between copies.

use crate::clipboard::ClipboardAccess;
use crate::errors::ClipboardError;
use crate::files::FileSource;
use crate::resolver::resolve_reference;
use crate::session::{BatchRequest, SessionHandle};
use crate::utils::expand_references;
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

pub const HELP: &str = "\
Commands:
  copy <ref>...            copy files straight to the clipboard
  add <ref>...             add files to the file list (.fl files replace it)
  list                     show the file list
  process                  copy every file in the file list
  clear-list               empty the file list
  recent                   show recently copied files
  recopy <n>               copy entry <n> of the recent list again
  clear-recent             empty the recent list
  set full-path|append on|off
  status                   show the last status message
  help                     show this help
  quit                     wait for running copies and exit
References are separated by whitespace; use file: URIs with %20 for spaces.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    FullPath,
    Append,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Copy(Vec<String>),
    Add(Vec<String>),
    List,
    Process,
    ClearList,
    Recent,
    Recopy(usize),
    ClearRecent,
    Set(Toggle, bool),
    Status,
    Help,
    Quit,
}

/// Parses one input line; blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<SessionCommand>, ClipboardError> {
    let mut words = line.split_whitespace();
    let Some(name) = words.next() else {
        return Ok(None);
    };
    let args: Vec<String> = words.map(str::to_owned).collect();

    let command = match name {
        "copy" | "add" if args.is_empty() => {
            return Err(ClipboardError::InvalidCommand(format!(
                "{name} needs at least one file reference"
            )))
        }
        "copy" => SessionCommand::Copy(args),
        "add" => SessionCommand::Add(args),
        "list" => SessionCommand::List,
        "process" => SessionCommand::Process,
        "clear-list" => SessionCommand::ClearList,
        "recent" => SessionCommand::Recent,
        "recopy" => {
            let index = args
                .first()
                .and_then(|n| n.parse::<usize>().ok())
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    ClipboardError::InvalidCommand("recopy needs a position from 1".to_owned())
                })?;
            SessionCommand::Recopy(index)
        }
        "clear-recent" => SessionCommand::ClearRecent,
        "set" => parse_toggle(&args)?,
        "status" => SessionCommand::Status,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        other => return Err(ClipboardError::InvalidCommand(other.to_owned())),
    };
    Ok(Some(command))
}

fn parse_toggle(args: &[String]) -> Result<SessionCommand, ClipboardError> {
    let usage = || ClipboardError::InvalidCommand("usage: set full-path|append on|off".to_owned());
    let toggle = match args.first().map(String::as_str) {
        Some("full-path") => Toggle::FullPath,
        Some("append") => Toggle::Append,
        _ => return Err(usage()),
    };
    let enabled = match args.get(1).map(String::as_str) {
        Some("on") | Some("true") => true,
        Some("off") | Some("false") => false,
        _ => return Err(usage()),
    };
    Ok(SessionCommand::Set(toggle, enabled))
}

/// Reads commands from stdin until `quit` or end of input.
pub async fn run_interactive<C, F>(handle: SessionHandle<C, F>) -> Result<(), ClipboardError>
where
    C: ClipboardAccess + 'static,
    F: FileSource + 'static,
{
    println!("{HELP}");
    let mut lines = BufReader::new(io::stdin()).lines();
    let mut batches: Vec<JoinHandle<()>> = Vec::new();

    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };
        debug!("Session command: {:?}", command);
        batches.retain(|batch| !batch.is_finished());

        match command {
            SessionCommand::Copy(references) => match expand_references(&references) {
                Ok(files) => batches.push(spawn_batch(&handle, BatchRequest::CopyFiles(files))),
                Err(e) => println!("{e}"),
            },
            SessionCommand::Add(references) => {
                let items: Result<Vec<_>, _> =
                    references.iter().map(|r| resolve_reference(r)).collect();
                match items {
                    Ok(items) => {
                        batches.push(spawn_batch(&handle, BatchRequest::StageItems(items)))
                    }
                    Err(e) => println!("{e}"),
                }
            }
            SessionCommand::Process => {
                batches.push(spawn_batch(&handle, BatchRequest::ProcessManifest))
            }
            SessionCommand::Recopy(position) => {
                let path = handle
                    .lock()
                    .await
                    .recent()
                    .get(position - 1)
                    .map(|p| p.to_path_buf());
                match path {
                    Some(path) => {
                        batches.push(spawn_batch(&handle, BatchRequest::CopyRecent(path)))
                    }
                    None => println!("No recent file at position {position}"),
                }
            }
            SessionCommand::List => {
                let session = handle.lock().await;
                if session.manifest().is_blank() {
                    println!("(file list is empty)");
                } else {
                    println!("{}", session.manifest().text());
                }
            }
            SessionCommand::ClearList => {
                let mut session = handle.lock().await;
                session.clear_manifest();
                println!("{}", session.status());
            }
            SessionCommand::Recent => {
                let session = handle.lock().await;
                if session.recent().is_empty() {
                    println!("(no recent files)");
                }
                for (i, path) in session.recent().iter().enumerate() {
                    println!("{:>2}. {}", i + 1, path.display());
                }
            }
            SessionCommand::ClearRecent => {
                let mut session = handle.lock().await;
                session.clear_recent();
                println!("{}", session.status());
            }
            SessionCommand::Set(toggle, enabled) => {
                let mut session = handle.lock().await;
                match toggle {
                    Toggle::FullPath => session.set_include_full_path(enabled),
                    Toggle::Append => session.set_append_to_clipboard(enabled),
                }
                println!("{:?}", session.config());
            }
            SessionCommand::Status => {
                let session = handle.lock().await;
                println!(
                    "{} ({:?}, {} file(s) copied)",
                    session.status(),
                    handle.phase(),
                    session.files_copied()
                );
            }
            SessionCommand::Help => println!("{HELP}"),
            SessionCommand::Quit => break,
        }
    }

    for batch in batches {
        if let Err(e) = batch.await {
            warn!("Copy task ended abnormally: {}", e);
        }
    }
    Ok(())
}

fn spawn_batch<C, F>(handle: &SessionHandle<C, F>, request: BatchRequest) -> JoinHandle<()>
where
    C: ClipboardAccess + 'static,
    F: FileSource + 'static,
{
    let handle = handle.clone();
    tokio::spawn(async move {
        match handle.submit(request).await {
            Some(result) => println!("{}", result.status),
            None => println!("Busy with another copy, request ignored"),
        }
    })
}
