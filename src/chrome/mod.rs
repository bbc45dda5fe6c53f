//! Header chrome renderers.
//!
//! The presenter only produces a [`RunHeaderViewModel`]; a chrome renderer
//! paints the surrounding shell (breadcrumbs, tab strip) and places the title
//! content inside it. Two renderers ship with the crate:
//!
//! - [`text`] - plain or ANSI-colored lines for a terminal or a pipe
//! - [`tui`] - a ratatui widget

pub mod text;
pub mod tui;

use crate::error::Result;
use crate::header::RunHeaderViewModel;
use chrono::{DateTime, Utc};

pub use text::TextChrome;
pub use tui::{RunHeaderWidget, TuiChrome, HEADER_HEIGHT};

/// Placeholder painted while a run is loading.
pub const SKELETON: &str = "░░░░░░░░░░░░";

/// Separator between breadcrumb segments.
pub const BREADCRUMB_SEPARATOR: &str = " / ";

/// A shell that can paint a run header.
pub trait HeaderChrome {
    fn paint(&mut self, view: &RunHeaderViewModel) -> Result<()>;
}

/// Relative hint for an RFC 3339 timestamp, e.g. "3d ago".
///
/// Returns `None` when the timestamp does not parse; the caller still shows
/// the raw value.
pub fn relative_time_hint(timestamp: &str, now: DateTime<Utc>) -> Option<String> {
    let at = DateTime::parse_from_rfc3339(timestamp).ok()?;
    let secs = now.signed_duration_since(at.with_timezone(&Utc)).num_seconds();
    Some(format_relative_time_secs(secs.max(0) as u64))
}

/// Format a relative time from seconds ago.
pub fn format_relative_time_secs(total_secs: u64) -> String {
    let minutes = total_secs / 60;
    let hours = total_secs / 3600;
    let days = total_secs / 86400;

    if days > 0 {
        format!("{}d ago", days)
    } else if hours > 0 {
        format!("{}h ago", hours)
    } else if minutes > 0 {
        format!("{}m ago", minutes)
    } else {
        "just now".to_string()
    }
}
