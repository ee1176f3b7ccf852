pub mod auth_session;
pub mod backend;
pub mod config;
pub mod dashboard_sync;
pub mod error;
pub mod lead_detail;
pub mod model;
pub mod present;
pub mod schedule;
pub mod timestamp;
pub mod view;
