pub mod api;
pub mod download;
pub mod format;
pub mod logging;
pub mod notice;
pub mod store;
pub mod workflows;
