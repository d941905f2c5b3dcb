use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// Outcome reported for a load test run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunStatus {
    Passed,
    Failed,
    Stopped,
    SystemError,
}

impl RunStatus {
    pub const ALL: [RunStatus; 4] = [
        RunStatus::Passed,
        RunStatus::Failed,
        RunStatus::Stopped,
        RunStatus::SystemError,
    ];

    /// Style token the renderer attaches to run items.
    pub fn class_name(self) -> &'static str {
        match self {
            RunStatus::Passed => "passed",
            RunStatus::Failed => "failed",
            RunStatus::Stopped => "stopped",
            RunStatus::SystemError => "system_error",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RunStatus::Passed => "Passed",
            RunStatus::Failed => "Failed",
            RunStatus::Stopped => "Stopped",
            RunStatus::SystemError => "System Error",
        }
    }

    /// Legend color, as used by the timeline stylesheet.
    pub fn color(self) -> &'static str {
        match self {
            RunStatus::Passed => "#22c55e",
            RunStatus::Failed => "#ef4444",
            RunStatus::Stopped => "#eab308",
            RunStatus::SystemError => "#a855f7",
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            RunStatus::Passed => "PASSED",
            RunStatus::Failed => "FAILED",
            RunStatus::Stopped => "STOPPED",
            RunStatus::SystemError => "SYSTEM_ERROR",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::RunStatus;

    #[test]
    fn test_status_reads_screaming_case() {
        let result: Result<Vec<RunStatus>, _> =
            serde_json::from_str(r#"["PASSED", "FAILED", "STOPPED", "SYSTEM_ERROR"]"#);
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), RunStatus::ALL.to_vec());
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result: Result<RunStatus, _> = serde_json::from_str(r#""BROKEN""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_display_matches_wire_name() {
        for status in RunStatus::ALL.iter() {
            let wire = serde_json::to_string(status).unwrap();
            assert_eq!(wire, format!("\"{}\"", status));
        }
    }
}
