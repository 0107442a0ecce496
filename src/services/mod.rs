//! Services which correspond to routes and define core business logic.
pub mod app_url;
