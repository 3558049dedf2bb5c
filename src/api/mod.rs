//! HTTP API module for the attendance engine.
//!
//! This module provides the REST endpoints for computing attendance
//! summaries from pasted timecard text and rendering the clipboard export.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{HolidaysRequest, PeriodRequest, SummaryRequest};
pub use response::{ApiError, SummaryResponse};
pub use state::AppState;
