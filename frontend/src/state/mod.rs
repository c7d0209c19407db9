pub mod list;
pub mod mutation;
pub mod session;
pub mod toast;
