pub mod approval_request;
pub mod employee;
pub mod leave_request;
pub mod project;
pub mod role;
pub mod sort;

pub use approval_request::*;
pub use employee::*;
pub use leave_request::*;
pub use project::*;
pub use role::*;
pub use sort::*;

/// A list filter mirrored one-to-one into the query string of a list request.
pub trait ListFilter: Clone + PartialEq + 'static {
    fn query_pairs(&self) -> Vec<(&'static str, String)>;
}

pub(crate) fn push_text(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
        pairs.push((key, value.to_string()));
    }
}

pub(crate) fn push_opt<T: ToString>(
    pairs: &mut Vec<(&'static str, String)>,
    key: &'static str,
    value: Option<T>,
) {
    if let Some(value) = value {
        pairs.push((key, value.to_string()));
    }
}
