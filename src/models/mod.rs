//! Data models for Revize

pub mod configuration;
pub mod customer;
pub mod defect;
pub mod enums;
pub mod equipment;
pub mod inspection;
pub mod location;
pub mod logbook;
pub mod operator;
pub mod revision;
pub mod service_visit;

// Re-export commonly used types
pub use customer::Customer;
pub use defect::{Defect, DefectItem};
pub use enums::{Evaluation, ProcedureType, Severity};
pub use equipment::Equipment;
pub use revision::Revision;
