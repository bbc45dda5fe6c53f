//! Test utilities shared across modules.

use crate::header::RunHeaderInput;

/// Build an input from the fields most tests vary.
pub fn input(
    pipeline_name: Option<&str>,
    pipeline_run_name: Option<&str>,
    status: Option<&str>,
    reason: Option<&str>,
) -> RunHeaderInput {
    RunHeaderInput {
        pipeline_name: pipeline_name.map(str::to_string),
        pipeline_run_name: pipeline_run_name.map(str::to_string),
        status: status.map(str::to_string),
        reason: reason.map(str::to_string),
        ..Default::default()
    }
}

/// A finished, successful run of the `build` pipeline.
pub fn succeeded_run() -> RunHeaderInput {
    RunHeaderInput {
        last_transition_time: Some("2019-01-01T00:00:00Z".to_string()),
        ..input(
            Some("build"),
            Some("build-run-1"),
            Some("True"),
            Some("Succeeded"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_succeeded_run_fixture() {
        let run = succeeded_run();
        assert_eq!(run.pipeline_name.as_deref(), Some("build"));
        assert!(!run.loading);
        assert!(run.error.is_none());
    }
}
