//! Calendar entries shared within a workspace.

use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::user::User;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
  pub id:           i64,
  pub workspace_id: i64,
  pub title:        String,
  pub description:  Option<String>,
  pub starts_at:    DateTime<Utc>,
  pub ends_at:      DateTime<Utc>,
  #[serde(default)]
  pub all_day:      bool,
  #[serde(default)]
  pub participants: Vec<User>,
}

/// Body of the create and update calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDraft {
  pub title:           String,
  pub description:     Option<String>,
  pub starts_at:       DateTime<Utc>,
  pub ends_at:         DateTime<Utc>,
  #[serde(default)]
  pub all_day:         bool,
  #[serde(default)]
  pub participant_ids: Vec<i64>,
}

/// Inclusive day range used to query schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleRange {
  pub start: NaiveDate,
  pub end:   NaiveDate,
}

impl ScheduleRange {
  /// The calendar month containing `day`.
  pub fn month_of(day: NaiveDate) -> Self {
    let start = day.with_day(1).unwrap_or(day);
    let end = start
      .checked_add_months(Months::new(1))
      .and_then(|next| next.pred_opt())
      .unwrap_or(start);
    Self { start, end }
  }

  pub fn contains(&self, day: NaiveDate) -> bool {
    self.start <= day && day <= self.end
  }
}
