//! Tracing with file-based OTLP export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → FileSpanExporter → zbooks-otlp.json
//! ```
//!
//! The trace file lives in `~/.local/share/zellij/zbooks/`, rotates at
//! 10 MiB and keeps three numbered backups. The level comes from the
//! `trace_level` plugin option and defaults to `"info"`.
//!
//! # Modules
//!
//! - [`init`]: subscriber setup
//! - `exporter`: span exporter and OTLP JSON encoding
//! - `file_writer`: size-rotated line writer

mod exporter;
mod file_writer;
pub mod init;

pub use init::init_tracing;
