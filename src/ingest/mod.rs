//! Paste ingestion and clipboard export.
//!
//! This module is the boundary between raw clipboard text and the
//! calculation engine: it splits pasted rows into per-employee time
//! entries, attaches derived summaries, and renders the tab-separated
//! payload pasted back into a spreadsheet.

mod export;
mod paste;

pub use export::{clipboard_payload, format_summary_value};
pub use paste::{process_pasted_data, process_pasted_data_with_policy};
