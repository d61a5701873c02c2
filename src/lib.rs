pub mod assembler;
pub mod clipboard;
pub mod config;
pub mod copy;
pub mod errors;
pub mod files;
pub mod formatter;
pub mod interactive;
pub mod logger;
pub mod manifest;
pub mod recent;
pub mod reporting;
pub mod resolver;
pub mod session;
pub mod trie;
pub mod utils;

pub use config::ClipboardCopierConfig;
pub use copy::copy_files_to_clipboard;
pub use errors::ClipboardError;
