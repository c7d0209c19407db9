use serde::{Deserialize, Serialize};

use super::{push_opt, push_text, ListFilter, SortKey, SortOrder};

pub const SUBDIVISIONS: &[&str] = &["HR", "Engineering"];
pub const POSITIONS: &[&str] = &["Employee", "HR Manager", "Project Manager", "Admin"];
pub const MAX_OUT_OF_OFFICE_BALANCE: i32 = 365;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub full_name: String,
    #[serde(default)]
    pub subdivision: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub people_partner_id: Option<i64>,
    #[serde(default)]
    pub photo: Option<Photo>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub out_of_office_balance: f64,
}

impl Employee {
    pub fn status_label(&self) -> &'static str {
        if self.is_active {
            "Active"
        } else {
            "Inactive"
        }
    }

    pub fn balance_label(&self) -> String {
        if self.out_of_office_balance.fract() == 0.0 {
            format!("{:.0}", self.out_of_office_balance)
        } else {
            format!("{:.1}", self.out_of_office_balance)
        }
    }
}

/// Photo as returned by the backend: raw bytes (number array or base64 string)
/// or an absolute URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub data: PhotoData,
    #[serde(default)]
    pub file_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PhotoData {
    Bytes(Vec<u8>),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub full_name: String,
    pub subdivision: String,
    pub position: String,
    pub people_partner_id: Option<i64>,
    pub is_active: bool,
    pub out_of_office_balance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAssignment {
    pub employee_id: i64,
    pub project_id: i64,
}

/// Answer of `GET /Employee/get-user-role`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRoleResponse {
    pub id: i64,
    pub full_name: String,
    pub position: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeSortKey {
    FullName,
    Subdivision,
    Position,
    IsActive,
    OutOfOfficeBalance,
}

impl SortKey for EmployeeSortKey {
    fn field_name(self) -> &'static str {
        match self {
            EmployeeSortKey::FullName => "fullName",
            EmployeeSortKey::Subdivision => "subdivision",
            EmployeeSortKey::Position => "position",
            EmployeeSortKey::IsActive => "isActive",
            EmployeeSortKey::OutOfOfficeBalance => "outOfOfficeBalance",
        }
    }
}

/// Tri-state select shared by the employee and project status filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActivityFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl ActivityFilter {
    pub const ALL: [ActivityFilter; 3] = [
        ActivityFilter::All,
        ActivityFilter::Active,
        ActivityFilter::Inactive,
    ];

    pub fn as_flag(self) -> Option<bool> {
        match self {
            ActivityFilter::All => None,
            ActivityFilter::Active => Some(true),
            ActivityFilter::Inactive => Some(false),
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            ActivityFilter::All => "all",
            ActivityFilter::Active => "active",
            ActivityFilter::Inactive => "inactive",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActivityFilter::All => "All",
            ActivityFilter::Active => "Active",
            ActivityFilter::Inactive => "Inactive",
        }
    }

    pub fn from_value(raw: &str) -> Self {
        match raw {
            "active" => ActivityFilter::Active,
            "inactive" => ActivityFilter::Inactive,
            _ => ActivityFilter::All,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeFilter {
    pub sort: SortOrder<EmployeeSortKey>,
    pub subdivision: String,
    pub activity: ActivityFilter,
    pub balance_min: i32,
    pub balance_max: i32,
    pub search_by_name: String,
}

impl Default for EmployeeFilter {
    fn default() -> Self {
        Self {
            sort: SortOrder::ascending(EmployeeSortKey::FullName),
            subdivision: String::new(),
            activity: ActivityFilter::All,
            balance_min: 0,
            balance_max: MAX_OUT_OF_OFFICE_BALANCE,
            search_by_name: String::new(),
        }
    }
}

impl ListFilter for EmployeeFilter {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        self.sort.push_query(&mut pairs);
        push_text(&mut pairs, "subdivision", &self.subdivision);
        push_opt(&mut pairs, "isActive", self.activity.as_flag());
        pairs.push(("outOfOfficeBalanceLeft", self.balance_min.to_string()));
        pairs.push(("outOfOfficeBalanceRight", self.balance_max.to_string()));
        push_text(&mut pairs, "searchByName", &self.search_by_name);
        pairs
    }
}
