//! Run status interpretation.
//!
//! Maps the `(reason, status)` condition pair reported for a pipeline run to
//! a symbolic icon. This is the single place status strings are interpreted;
//! the run header and any list view showing run conditions share it.

use serde::{Deserialize, Serialize};

/// Condition status reported for a successful run.
pub const STATUS_TRUE: &str = "True";
/// Condition status reported for a failed run.
pub const STATUS_FALSE: &str = "False";
/// Condition status reported while a run is still in progress.
pub const STATUS_UNKNOWN: &str = "Unknown";

/// Reasons that mark a run as cancelled regardless of its status.
const CANCELLED_REASONS: &[&str] = &["Cancelled", "PipelineRunCancelled", "TaskRunCancelled"];

/// Reasons reported before a run has a final outcome.
const IN_PROGRESS_REASONS: &[&str] = &["Running", "Started", "Pending"];

/// Symbolic icon painted next to a run's name.
///
/// The chrome renderer decides how each symbol looks; [`IconSymbol::glyph`]
/// and [`IconSymbol::tone`] are the defaults used by the bundled renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconSymbol {
    Succeeded,
    Failed,
    Running,
    Cancelled,
    Unknown,
}

/// Semantic color group for an icon, shared by the text and TUI renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Green.
    Success,
    /// Red.
    Error,
    /// Blue.
    Active,
    /// Yellow.
    Warning,
    /// Gray.
    Muted,
}

impl IconSymbol {
    /// Stable lowercase identifier, matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            IconSymbol::Succeeded => "succeeded",
            IconSymbol::Failed => "failed",
            IconSymbol::Running => "running",
            IconSymbol::Cancelled => "cancelled",
            IconSymbol::Unknown => "unknown",
        }
    }

    /// Single-character glyph for terminal output.
    pub fn glyph(self) -> &'static str {
        match self {
            IconSymbol::Succeeded => "✔",
            IconSymbol::Failed => "✖",
            IconSymbol::Running => "●",
            IconSymbol::Cancelled => "⊘",
            IconSymbol::Unknown => "?",
        }
    }

    /// Color group used when painting this icon.
    pub fn tone(self) -> Tone {
        match self {
            IconSymbol::Succeeded => Tone::Success,
            IconSymbol::Failed => Tone::Error,
            IconSymbol::Running => Tone::Active,
            IconSymbol::Cancelled => Tone::Warning,
            IconSymbol::Unknown => Tone::Muted,
        }
    }
}

/// Resolve the icon for a run condition.
///
/// First match wins:
/// - a cancellation reason gives `Cancelled` whatever the status
/// - status `"True"` gives `Succeeded`, `"False"` gives `Failed`
/// - with status absent or `"Unknown"`, an absent or in-progress reason gives
///   `Running`; `"Succeeded"`/`"Failed"` reasons give the matching icon
/// - everything else gives `Unknown`
///
/// Strings are compared exactly. This never fails.
pub fn resolve(reason: Option<&str>, status: Option<&str>) -> IconSymbol {
    if reason.is_some_and(|r| CANCELLED_REASONS.contains(&r)) {
        return IconSymbol::Cancelled;
    }

    match status {
        Some(STATUS_TRUE) => IconSymbol::Succeeded,
        Some(STATUS_FALSE) => IconSymbol::Failed,
        None | Some(STATUS_UNKNOWN) => match reason {
            None => IconSymbol::Running,
            Some(r) if IN_PROGRESS_REASONS.contains(&r) => IconSymbol::Running,
            Some("Succeeded") => IconSymbol::Succeeded,
            Some("Failed") => IconSymbol::Failed,
            Some(_) => IconSymbol::Unknown,
        },
        Some(_) => IconSymbol::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_true_status_is_succeeded() {
        assert_eq!(resolve(Some("Succeeded"), Some("True")), IconSymbol::Succeeded);
        assert_eq!(resolve(None, Some("True")), IconSymbol::Succeeded);
        assert_eq!(resolve(Some("Completed"), Some("True")), IconSymbol::Succeeded);
    }

    #[test]
    fn test_resolve_false_status_is_failed() {
        assert_eq!(resolve(Some("Failed"), Some("False")), IconSymbol::Failed);
        assert_eq!(resolve(None, Some("False")), IconSymbol::Failed);
        assert_eq!(
            resolve(Some("PipelineRunTimeout"), Some("False")),
            IconSymbol::Failed
        );
    }

    #[test]
    fn test_resolve_cancelled_reasons_win_over_status() {
        for reason in ["Cancelled", "PipelineRunCancelled", "TaskRunCancelled"] {
            assert_eq!(resolve(Some(reason), Some("False")), IconSymbol::Cancelled);
            assert_eq!(resolve(Some(reason), Some("True")), IconSymbol::Cancelled);
            assert_eq!(resolve(Some(reason), None), IconSymbol::Cancelled);
        }
    }

    #[test]
    fn test_resolve_absent_inputs_is_running() {
        assert_eq!(resolve(None, None), IconSymbol::Running);
        assert_eq!(resolve(None, Some("Unknown")), IconSymbol::Running);
    }

    #[test]
    fn test_resolve_in_progress_reasons() {
        for reason in ["Running", "Started", "Pending"] {
            assert_eq!(resolve(Some(reason), None), IconSymbol::Running);
            assert_eq!(resolve(Some(reason), Some("Unknown")), IconSymbol::Running);
        }
    }

    #[test]
    fn test_resolve_reason_only_outcomes() {
        assert_eq!(resolve(Some("Succeeded"), None), IconSymbol::Succeeded);
        assert_eq!(resolve(Some("Failed"), Some("Unknown")), IconSymbol::Failed);
    }

    #[test]
    fn test_resolve_unmapped_combinations_are_unknown() {
        assert_eq!(resolve(Some("Mystery"), None), IconSymbol::Unknown);
        assert_eq!(resolve(None, Some("true")), IconSymbol::Unknown);
        assert_eq!(resolve(Some("Succeeded"), Some("")), IconSymbol::Unknown);
        assert_eq!(resolve(Some(""), None), IconSymbol::Unknown);
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        assert_eq!(resolve(Some("cancelled"), Some("False")), IconSymbol::Failed);
        assert_eq!(resolve(Some("running"), None), IconSymbol::Unknown);
    }

    #[test]
    fn test_icon_symbol_name_matches_serde() {
        for icon in [
            IconSymbol::Succeeded,
            IconSymbol::Failed,
            IconSymbol::Running,
            IconSymbol::Cancelled,
            IconSymbol::Unknown,
        ] {
            let json = serde_json::to_string(&icon).unwrap();
            assert_eq!(json, format!("\"{}\"", icon.name()));
        }
    }

    #[test]
    fn test_icon_symbol_tones() {
        assert_eq!(IconSymbol::Succeeded.tone(), Tone::Success);
        assert_eq!(IconSymbol::Failed.tone(), Tone::Error);
        assert_eq!(IconSymbol::Running.tone(), Tone::Active);
        assert_eq!(IconSymbol::Cancelled.tone(), Tone::Warning);
        assert_eq!(IconSymbol::Unknown.tone(), Tone::Muted);
    }

    #[test]
    fn test_icon_symbol_glyphs_are_distinct() {
        let glyphs = [
            IconSymbol::Succeeded.glyph(),
            IconSymbol::Failed.glyph(),
            IconSymbol::Running.glyph(),
            IconSymbol::Cancelled.glyph(),
            IconSymbol::Unknown.glyph(),
        ];
        for (i, a) in glyphs.iter().enumerate() {
            for b in &glyphs[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
