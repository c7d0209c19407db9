use crate::models::{Role, Screen};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
}

fn describe(screen: Screen, role: Role) -> &'static str {
    match (screen, role.is_self_scoped()) {
        (Screen::Employees, _) => "Browse staff, balances and people partners",
        (Screen::Projects, true) => "Projects you are assigned to",
        (Screen::Projects, false) => "Project types, dates and managers",
        (Screen::LeaveRequests, true) => "Create and track your absences",
        (Screen::LeaveRequests, false) => "Leave filed across the company",
        (Screen::ApprovalRequests, _) => "Approve or reject submitted leave",
    }
}

/// One tile per screen the role may open, in navigation order.
pub fn tiles_for(role: Role) -> Vec<Tile> {
    role.screens()
        .iter()
        .map(|&screen| Tile {
            title: screen.title_for(role),
            description: describe(screen, role),
            href: screen.path(),
        })
        .collect()
}

pub fn dashboard_title(role: Role) -> String {
    format!("{} Dashboard", role)
}
