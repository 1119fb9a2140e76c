//! Vocabulary lists the record generator draws from.

pub mod func;

pub mod models;

pub use models::Vocabulary;
