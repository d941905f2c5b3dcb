use crate::model::status::RunStatus;
use crate::time::epoch::parse_epoch_millis;
use crate::time::Instant;
use serde_derive::{Deserialize, Serialize};

/// One recorded execution of a load test, as exported by the test runner.
///
/// Begin and end times arrive as decimal epoch-millisecond strings and are
/// only interpreted on demand, so a malformed value never prevents the data
/// set from loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestRun {
    pub run_id: i64,
    pub name: String,
    #[serde(rename = "ui_status")]
    pub status: RunStatus,
    pub duration: f64,
    #[serde(rename = "test_run_user")]
    pub user: String,
    #[serde(rename = "api_vusers_num")]
    pub virtual_users: u32,
    #[serde(rename = "loadtestbegintime")]
    pub begin_time: String,
    #[serde(rename = "loadtestendtime")]
    pub end_time: String,
}

impl TestRun {
    /// Begin instant, `None` when the stored value is not a timestamp.
    pub fn begin(&self) -> Option<Instant> {
        parse_epoch_millis(self.begin_time.as_str())
    }

    pub fn end(&self) -> Option<Instant> {
        parse_epoch_millis(self.end_time.as_str())
    }

    pub fn tooltip(&self) -> String {
        format!(
            "{}\nStatus: {}\nUser: {}\nDuration: {}\nVirtual users: {}",
            self.name,
            self.status.label(),
            self.user,
            self.duration,
            self.virtual_users
        )
    }
}
