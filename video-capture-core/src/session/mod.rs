pub mod host;
pub mod recording;
