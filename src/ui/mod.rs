pub mod actions;
pub mod app;
pub mod modals;
pub mod table;
pub mod toolbar;
