use crate::models::Role;
use crate::state::session::RoleSelection;

pub fn validate_selection(full_name: &str, role: &str) -> Result<RoleSelection, String> {
    let full_name = full_name.trim();
    if full_name.is_empty() {
        return Err("Enter your full name".into());
    }
    let role = Role::parse(role).ok_or_else(|| "Choose a role".to_string())?;
    Ok(RoleSelection {
        full_name: full_name.to_string(),
        role,
    })
}
