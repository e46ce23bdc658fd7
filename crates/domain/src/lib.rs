//! # personnel-domain
//!
//! Pure domain model for the personnel management backend.
//!
//! ## Responsibilities
//! - Foundational types: the numeric [`EmployeeId`](id::EmployeeId) and the
//!   error conventions shared by every layer
//! - Define the **Employee** record and its JSON contract
//! - Define the **merge patch** applied by the update use-case
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod employee;
