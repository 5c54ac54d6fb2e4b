pub mod capabilities;
pub mod capture_request;
pub mod config;
pub mod error;
pub mod orientation;
pub mod state;
pub mod surface;
