//! Lead pre-qualification core for a mortgage brokerage CRM: a branching
//! questionnaire wizard, a deterministic qualification scorer, and the client
//! directory that stores finished runs.

pub mod clients;
pub mod config;
pub mod error;
pub mod telemetry;
pub mod wizard;
