use serde::{Deserialize, Serialize};
use std::fmt;

use super::{push_opt, push_text, ListFilter, SortKey, SortOrder};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ApprovalStatus {
    New,
    Approved,
    Rejected,
    Canceled,
    Other(String),
}

impl ApprovalStatus {
    pub const KNOWN: [ApprovalStatus; 4] = [
        ApprovalStatus::New,
        ApprovalStatus::Approved,
        ApprovalStatus::Rejected,
        ApprovalStatus::Canceled,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ApprovalStatus::New => "New",
            ApprovalStatus::Approved => "Approved",
            ApprovalStatus::Rejected => "Rejected",
            ApprovalStatus::Canceled => "Canceled",
            ApprovalStatus::Other(raw) => raw,
        }
    }

    pub fn is_pending(&self) -> bool {
        *self == ApprovalStatus::New
    }
}

impl From<String> for ApprovalStatus {
    fn from(raw: String) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "new" | "pending" => ApprovalStatus::New,
            "approved" => ApprovalStatus::Approved,
            "rejected" => ApprovalStatus::Rejected,
            "canceled" | "cancelled" => ApprovalStatus::Canceled,
            _ => ApprovalStatus::Other(raw),
        }
    }
}

impl From<ApprovalStatus> for String {
    fn from(status: ApprovalStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalRequest {
    pub id: i64,
    #[serde(default)]
    pub approver_id: Option<i64>,
    #[serde(default)]
    pub approver_name: Option<String>,
    pub leave_request_id: i64,
    #[serde(default)]
    pub leave_request_details: Option<String>,
    pub status: ApprovalStatus,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub employee_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalRequestSortKey {
    Id,
    LeaveRequestId,
    EmployeeName,
    ApproverName,
    Status,
    Comment,
}

impl SortKey for ApprovalRequestSortKey {
    fn field_name(self) -> &'static str {
        match self {
            ApprovalRequestSortKey::Id => "id",
            ApprovalRequestSortKey::LeaveRequestId => "leaveRequestId",
            ApprovalRequestSortKey::EmployeeName => "employeeName",
            ApprovalRequestSortKey::ApproverName => "approverName",
            ApprovalRequestSortKey::Status => "status",
            ApprovalRequestSortKey::Comment => "comment",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApprovalRequestFilter {
    pub sort: SortOrder<ApprovalRequestSortKey>,
    pub status: Option<ApprovalStatus>,
    pub request_number: Option<i64>,
    pub search_by_full_name: String,
}

impl Default for ApprovalRequestFilter {
    fn default() -> Self {
        Self {
            sort: SortOrder::ascending(ApprovalRequestSortKey::LeaveRequestId),
            status: None,
            request_number: None,
            search_by_full_name: String::new(),
        }
    }
}

impl ListFilter for ApprovalRequestFilter {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        self.sort.push_query(&mut pairs);
        push_opt(&mut pairs, "status", self.status.as_ref());
        push_opt(&mut pairs, "requestNumber", self.request_number);
        push_text(&mut pairs, "searchByFullName", &self.search_by_full_name);
        pairs
    }
}
