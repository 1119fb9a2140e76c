//! Generated person records.

pub mod func;

pub mod models;

pub use models::Person;
