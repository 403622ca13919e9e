//! Application Layer

pub mod load;
pub mod resolve;
