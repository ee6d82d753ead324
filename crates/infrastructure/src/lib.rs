//! Ferrous NS Infrastructure Layer
pub mod dns;
