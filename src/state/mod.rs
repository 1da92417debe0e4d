pub mod dates;
pub mod highlight;
pub mod i18n;
pub mod patient;
pub mod projection;
pub mod query;
pub mod selection;
pub mod sort_state;
pub mod table_controller;
