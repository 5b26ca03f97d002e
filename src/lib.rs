pub mod error;
pub mod event;
pub mod setup;
pub mod ui;
pub mod vim;
