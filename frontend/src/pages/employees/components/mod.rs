pub mod assign_modal;
pub mod details_modal;
pub mod filter;
pub mod form_modal;
pub mod photo_modal;
pub mod table;
