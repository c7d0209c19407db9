pub mod details_modal;
pub mod filter;
pub mod table;
