//! Row models and input DTOs.

pub mod movie;
