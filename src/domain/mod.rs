//! Domain layer - models and errors for cut scheduling

pub mod errors;
pub mod model;
