//! # smartcity-domain
//!
//! Pure domain model for the smartcity simulation.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **device families** (`basic` / `advanced`) used by the lighting subsystem
//! - Define **vehicles** and the factory method that turns a label into one
//! - Define **roles** and the fixed allow-set guarding sensitive energy data
//! - Define **infrastructure** projects, their builder and director
//! - Define **reports**, the narration every operation returns
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! Device behaviour is expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod device;
pub mod infrastructure;
pub mod report;
pub mod role;
pub mod vehicle;
