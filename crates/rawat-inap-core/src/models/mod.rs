//! Domain models for the inpatient admission module.

mod module;
mod patient;
mod reference;

pub use module::*;
pub use patient::*;
pub use reference::*;
