//! Backend join records as read from and written to the API.

use serde::{Deserialize, Serialize};

use crate::occurrence::TimeWindow;
use crate::types::Quantity;

/// A join as returned by the read API.
///
/// Sub-joins are nested under `joins`. The record does not carry its own
/// parent's name; the caller supplies it while walking the tree. Every field
/// is optional on input and falls back to `null`, `false` or `0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiJoin {
    #[serde(default)]
    pub parent_field: Option<String>,
    #[serde(default, alias = "child")]
    pub logrepo_name: Option<String>,
    #[serde(default)]
    pub child_field: Option<String>,
    #[serde(default)]
    pub one_to_one: bool,
    #[serde(default)]
    pub time_range_start_before_hours: Quantity,
    #[serde(default)]
    pub time_range_end_after_hours: Quantity,
    #[serde(default)]
    pub joins: Vec<Self>,
}

impl ApiJoin {
    /// The record's time window.
    #[must_use]
    pub const fn window(&self) -> TimeWindow {
        TimeWindow {
            start_before_hours: self.time_range_start_before_hours,
            end_after_hours: self.time_range_end_after_hours,
        }
    }
}

/// A join as sent to the write API: flat, with an explicit parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiJoinRecord {
    pub parent: Option<String>,
    pub logrepo_name: Option<String>,
    pub parent_field: Option<String>,
    pub child_field: Option<String>,
    pub one_to_one: bool,
    pub time_range_start_before_hours: Quantity,
    pub time_range_end_after_hours: Quantity,
}

impl ApiJoinRecord {
    /// The record's time window.
    #[must_use]
    pub const fn window(&self) -> TimeWindow {
        TimeWindow {
            start_before_hours: self.time_range_start_before_hours,
            end_after_hours: self.time_range_end_after_hours,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_record_parses_nested_joins() {
        let json = r#"{
            "parentField": "ParentLogrepoField",
            "logrepoName": "ChildLogrepo",
            "childField": "ChildLogrepoField",
            "oneToOne": true,
            "timeRangeStartBeforeHours": 5,
            "timeRangeEndAfterHours": 0,
            "joins": [{"logrepoName": "GrandChild"}]
        }"#;
        let join: ApiJoin = serde_json::from_str(json).unwrap();

        assert_eq!(join.logrepo_name.as_deref(), Some("ChildLogrepo"));
        assert_eq!(join.window(), TimeWindow::new(5.0, 0.0));
        assert_eq!(join.joins.len(), 1);
        assert_eq!(join.joins[0].logrepo_name.as_deref(), Some("GrandChild"));
        assert!(!join.joins[0].one_to_one);
    }

    #[test]
    fn read_record_accepts_fractional_hours() {
        let json = r#"{
            "logrepoName": "LogB",
            "timeRangeStartBeforeHours": 1.5,
            "timeRangeEndAfterHours": 0.25
        }"#;
        let join: ApiJoin = serde_json::from_str(json).unwrap();
        assert_eq!(join.window(), TimeWindow::new(1.5, 0.25));
    }

    #[test]
    fn read_record_accepts_child_alias() {
        let join: ApiJoin = serde_json::from_str(r#"{"child": "LogB"}"#).unwrap();
        assert_eq!(join.logrepo_name.as_deref(), Some("LogB"));
    }

    #[test]
    fn read_record_defaults_missing_fields() {
        let join: ApiJoin = serde_json::from_str("{}").unwrap();
        assert_eq!(join, ApiJoin::default());
    }

    #[test]
    fn write_record_omits_nested_joins() {
        let record = ApiJoinRecord {
            parent: Some("LogA".to_string()),
            logrepo_name: Some("LogB".to_string()),
            parent_field: Some("LogA@Field".to_string()),
            child_field: None,
            one_to_one: false,
            time_range_start_before_hours: Quantity::ZERO,
            time_range_end_after_hours: Quantity::from(12),
        };

        insta::assert_snapshot!(serde_json::to_string_pretty(&record).unwrap(), @r#"
        {
          "parent": "LogA",
          "logrepoName": "LogB",
          "parentField": "LogA@Field",
          "childField": null,
          "oneToOne": false,
          "timeRangeStartBeforeHours": 0,
          "timeRangeEndAfterHours": 12
        }
        "#);
    }
}
