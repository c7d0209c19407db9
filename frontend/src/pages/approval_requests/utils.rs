use crate::models::{
    ApprovalRequest, ApprovalRequestFilter, ApprovalRequestSortKey, ApprovalStatus, Capability,
    Role,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ApprovalModal {
    #[default]
    Closed,
    Details(ApprovalRequest),
    Reject(ApprovalRequest),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalAction {
    Approve,
    Reject,
}

impl ApprovalAction {
    pub fn label(self) -> &'static str {
        match self {
            ApprovalAction::Approve => "Approve",
            ApprovalAction::Reject => "Reject",
        }
    }
}

/// Decisions are only possible while the request is still New.
pub fn row_actions(role: Role, request: &ApprovalRequest) -> Vec<ApprovalAction> {
    if role.can(Capability::DecideApprovalRequest) && request.status.is_pending() {
        vec![ApprovalAction::Approve, ApprovalAction::Reject]
    } else {
        Vec::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApprovalFilterMsg {
    Sort(ApprovalRequestSortKey),
    Status(String),
    RequestNumber(String),
    Search(String),
    Reset,
}

pub fn apply_filter(filter: &mut ApprovalRequestFilter, msg: ApprovalFilterMsg) {
    match msg {
        ApprovalFilterMsg::Sort(column) => filter.sort = filter.sort.toggled(column),
        ApprovalFilterMsg::Status(raw) => {
            filter.status = match raw.trim() {
                "" => None,
                value => Some(ApprovalStatus::from(value.to_string())),
            }
        }
        ApprovalFilterMsg::RequestNumber(raw) => match raw.trim() {
            "" => filter.request_number = None,
            number => {
                if let Ok(value) = number.parse() {
                    filter.request_number = Some(value);
                }
            }
        },
        ApprovalFilterMsg::Search(value) => filter.search_by_full_name = value,
        ApprovalFilterMsg::Reset => *filter = ApprovalRequestFilter::default(),
    }
}
