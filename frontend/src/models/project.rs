use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{push_opt, push_text, ActivityFilter, ListFilter, SortKey, SortOrder};
use crate::utils::time::{self, date_format, option_date_format};

pub const PROJECT_TYPES: &[&str] = &["Development", "Research", "Marketing", "Design", "Consulting"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub project_type: String,
    #[serde(with = "date_format")]
    pub start_date: NaiveDate,
    #[serde(default, with = "option_date_format")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub project_manager_id: Option<i64>,
    #[serde(default)]
    pub project_manager_name: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub status: bool,
}

impl Project {
    pub fn status_label(&self) -> &'static str {
        if self.status {
            "Active"
        } else {
            "Inactive"
        }
    }

    pub fn manager_label(&self) -> String {
        match (&self.project_manager_name, self.project_manager_id) {
            (Some(name), _) if !name.trim().is_empty() => name.clone(),
            (_, Some(id)) => format!("#{}", id),
            _ => "—".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub project_type: String,
    #[serde(with = "date_format")]
    pub start_date: NaiveDate,
    #[serde(with = "option_date_format")]
    pub end_date: Option<NaiveDate>,
    pub project_manager_id: i64,
    pub comment: Option<String>,
    pub status: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectSortKey {
    Id,
    ProjectType,
    StartDate,
    EndDate,
    ProjectManager,
    Status,
}

impl SortKey for ProjectSortKey {
    fn field_name(self) -> &'static str {
        match self {
            ProjectSortKey::Id => "id",
            ProjectSortKey::ProjectType => "projectType",
            ProjectSortKey::StartDate => "startDate",
            ProjectSortKey::EndDate => "endDate",
            ProjectSortKey::ProjectManager => "projectManagerName",
            ProjectSortKey::Status => "status",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectFilter {
    pub sort: SortOrder<ProjectSortKey>,
    pub project_type: String,
    pub start_date_from: Option<NaiveDate>,
    pub start_date_to: Option<NaiveDate>,
    pub activity: ActivityFilter,
    pub project_number: Option<i64>,
    pub assigned_employee_id: Option<i64>,
}

impl ProjectFilter {
    /// Window of eleven months back to nine months ahead, active projects only.
    pub fn starting(today: NaiveDate) -> Self {
        Self {
            sort: SortOrder::ascending(ProjectSortKey::StartDate),
            project_type: String::new(),
            start_date_from: Some(time::months_before(today, 11)),
            start_date_to: Some(time::months_after(today, 9)),
            activity: ActivityFilter::Active,
            project_number: None,
            assigned_employee_id: None,
        }
    }

    pub fn assigned_to(mut self, employee_id: Option<i64>) -> Self {
        self.assigned_employee_id = employee_id;
        self
    }
}

impl Default for ProjectFilter {
    fn default() -> Self {
        Self::starting(time::today())
    }
}

impl ListFilter for ProjectFilter {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        self.sort.push_query(&mut pairs);
        push_text(&mut pairs, "projectType", &self.project_type);
        push_opt(&mut pairs, "startDateFrom", self.start_date_from.map(time::format_date));
        push_opt(&mut pairs, "startDateTo", self.start_date_to.map(time::format_date));
        push_opt(&mut pairs, "status", self.activity.as_flag());
        push_opt(&mut pairs, "projectNumber", self.project_number);
        push_opt(&mut pairs, "assignedEmployeeId", self.assigned_employee_id);
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn project_deserializes_with_datetime_dates() {
        let project: Project = serde_json::from_value(json!({
            "id": 12,
            "projectType": "Research",
            "startDate": "2024-02-01T00:00:00",
            "endDate": null,
            "projectManagerId": 3,
            "projectManagerName": "Taras Melnyk",
            "comment": null,
            "status": true
        }))
        .unwrap();
        assert_eq!(project.start_date, date(2024, 2, 1));
        assert!(project.end_date.is_none());
        assert_eq!(project.manager_label(), "Taras Melnyk");
        assert_eq!(project.status_label(), "Active");
    }

    #[test]
    fn manager_label_falls_back_to_id() {
        let project: Project = serde_json::from_value(json!({
            "id": 1, "projectType": "Design", "startDate": "2024-01-01", "projectManagerId": 9
        }))
        .unwrap();
        assert_eq!(project.manager_label(), "#9");
    }

    #[test]
    fn starting_filter_uses_rolling_window() {
        let filter = ProjectFilter::starting(date(2024, 6, 15));
        assert_eq!(filter.start_date_from, Some(date(2023, 7, 15)));
        assert_eq!(filter.start_date_to, Some(date(2025, 3, 15)));
        let pairs = filter.query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("sortBy", "startDate".to_string()),
                ("sortAscending", "true".to_string()),
                ("startDateFrom", "2023-07-15".to_string()),
                ("startDateTo", "2025-03-15".to_string()),
                ("status", "true".to_string()),
            ]
        );
    }

    #[test]
    fn assigned_filter_scopes_to_employee() {
        let filter = ProjectFilter::starting(date(2024, 6, 15)).assigned_to(Some(7));
        assert!(filter
            .query_pairs()
            .contains(&("assignedEmployeeId", "7".to_string())));
    }

    #[test]
    fn project_input_serializes_plain_dates() {
        let input = ProjectInput {
            id: Some(5),
            project_type: "Design".into(),
            start_date: date(2024, 1, 10),
            end_date: None,
            project_manager_id: 3,
            comment: Some("Rebrand".into()),
            status: true,
        };
        let value = serde_json::to_value(input).unwrap();
        assert_eq!(value["startDate"], "2024-01-10");
        assert!(value["endDate"].is_null());
        assert_eq!(value["projectManagerId"], 3);
    }
}
