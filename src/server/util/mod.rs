//! Small helpers shared by services and middleware.

pub mod code;
pub mod token;
