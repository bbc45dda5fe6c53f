//! Run header presentation.
//!
//! Turns the lifecycle signals of a pipeline run into a [`RunHeaderViewModel`]:
//! the breadcrumb trail, the title region and the tab strip. Everything here
//! is a pure function of [`RunHeaderInput`]; painting the result is left to a
//! [`HeaderChrome`](crate::chrome::HeaderChrome) implementation.

use crate::config::Routes;
use crate::status::{resolve, IconSymbol};
use serde::{Deserialize, Serialize};

/// Label of the root breadcrumb segment.
pub const PIPELINES_LABEL: &str = "Pipelines";

/// Label of the only tab in the header.
pub const TASKS_TAB_LABEL: &str = "Tasks";

/// Style hook attribute carrying the raw status.
pub const DATA_SUCCEEDED: &str = "data-succeeded";

/// Style hook attribute carrying the raw reason.
pub const DATA_REASON: &str = "data-reason";

// ============================================================================
// Input
// ============================================================================

/// Everything the header needs to know about a run, as supplied by whoever
/// fetched it.
///
/// Absent and empty-string values are kept apart: `None` and `Some("")` are
/// different inputs and are passed through as such.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunHeaderInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_run_name: Option<String>,
    /// True while the run is being fetched.
    #[serde(default)]
    pub loading: bool,
    /// Message of a failed fetch. Empty means no error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Coarse condition status: "True", "False" or "Unknown".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Fine-grained condition reason, e.g. "Succeeded" or "Cancelled".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<String>,
}

impl RunHeaderInput {
    fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }

    fn pipeline(&self) -> Option<&str> {
        self.pipeline_name.as_deref().filter(|p| !p.is_empty())
    }

    fn run_name(&self) -> Option<&str> {
        self.pipeline_run_name.as_deref().filter(|n| !n.is_empty())
    }
}

// ============================================================================
// Presentation State
// ============================================================================

/// Which of the four title presentations applies to an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PresentationState {
    Error,
    Loading,
    Content,
    Empty,
}

impl PresentationState {
    /// Select the presentation for `input`.
    ///
    /// Precedence is fixed: a non-empty error beats loading, loading beats a
    /// non-empty run name, and with none of them the title is empty.
    pub fn select(input: &RunHeaderInput) -> Self {
        if input.error_message().is_some() {
            PresentationState::Error
        } else if input.loading {
            PresentationState::Loading
        } else if input.run_name().is_some() {
            PresentationState::Content
        } else {
            PresentationState::Empty
        }
    }
}

// ============================================================================
// View Model
// ============================================================================

/// One segment of the breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub label: String,
    pub link: Option<String>,
}

/// Content of the title region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum TitleContent {
    /// The error message as plain heading text, with nothing beside it.
    Error { message: String },
    /// A skeleton placeholder.
    Loading,
    /// Icon, run name, reason label and transition time, in that order.
    Content {
        icon: IconSymbol,
        name: String,
        reason_label: String,
        timestamp: String,
    },
    /// Nothing is rendered.
    Empty,
}

impl TitleContent {
    /// The presentation this title belongs to.
    pub fn state(&self) -> PresentationState {
        match self {
            TitleContent::Error { .. } => PresentationState::Error,
            TitleContent::Loading => PresentationState::Loading,
            TitleContent::Content { .. } => PresentationState::Content,
            TitleContent::Empty => PresentationState::Empty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tab {
    pub label: String,
}

/// Raw status and reason, passed through for external styling and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StyleHooks {
    pub status: Option<String>,
    pub reason: Option<String>,
}

/// Everything a chrome renderer needs to paint the run header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunHeaderViewModel {
    pub breadcrumbs: Vec<Breadcrumb>,
    pub title: TitleContent,
    pub tabs: Vec<Tab>,
    pub style_hooks: StyleHooks,
}

impl RunHeaderViewModel {
    /// The presentation selected for this header.
    pub fn state(&self) -> PresentationState {
        self.title.state()
    }

    /// Style hooks under their attribute names. Absent values stay `None`.
    pub fn data_attributes(&self) -> [(&'static str, Option<&str>); 2] {
        [
            (DATA_SUCCEEDED, self.style_hooks.status.as_deref()),
            (DATA_REASON, self.style_hooks.reason.as_deref()),
        ]
    }
}

// ============================================================================
// Presenter
// ============================================================================

/// Builds run header view models.
#[derive(Debug, Clone, Default)]
pub struct RunHeaderPresenter {
    routes: Routes,
}

impl RunHeaderPresenter {
    pub fn new(routes: Routes) -> Self {
        Self { routes }
    }

    /// Build the view model for `input`. Total and side-effect free.
    pub fn present(&self, input: &RunHeaderInput) -> RunHeaderViewModel {
        RunHeaderViewModel {
            breadcrumbs: self.breadcrumbs(input),
            title: title_content(input),
            tabs: vec![Tab {
                label: TASKS_TAB_LABEL.to_string(),
            }],
            style_hooks: StyleHooks {
                status: input.status.clone(),
                reason: input.reason.clone(),
            },
        }
    }

    fn breadcrumbs(&self, input: &RunHeaderInput) -> Vec<Breadcrumb> {
        let mut trail = vec![Breadcrumb {
            label: PIPELINES_LABEL.to_string(),
            link: Some(self.routes.pipelines()),
        }];
        if let Some(pipeline) = input.pipeline() {
            trail.push(Breadcrumb {
                label: pipeline.to_string(),
                link: Some(self.routes.pipeline(pipeline)),
            });
        }
        trail
    }
}

fn title_content(input: &RunHeaderInput) -> TitleContent {
    match PresentationState::select(input) {
        PresentationState::Error => TitleContent::Error {
            message: input.error_message().unwrap_or_default().to_string(),
        },
        PresentationState::Loading => TitleContent::Loading,
        PresentationState::Content => TitleContent::Content {
            icon: resolve(input.reason.as_deref(), input.status.as_deref()),
            name: input.run_name().unwrap_or_default().to_string(),
            reason_label: input.reason.clone().unwrap_or_default(),
            timestamp: input.last_transition_time.clone().unwrap_or_default(),
        },
        PresentationState::Empty => TitleContent::Empty,
    }
}

/// Build the view model for `input` with the default routes.
pub fn present(input: &RunHeaderInput) -> RunHeaderViewModel {
    RunHeaderPresenter::default().present(input)
}
