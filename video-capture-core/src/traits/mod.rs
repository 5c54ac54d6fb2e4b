pub mod capture_pipeline;
pub mod encoder;
pub mod input_surface;
pub mod session_delegate;
