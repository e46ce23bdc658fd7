//! # personnel-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **employee JSON API**
//!   (`/employee`, `/employee/{id}`, `/employees`)
//! - Serve the **staff dashboard**, server-side rendered HTML pages for
//!   browsing and editing employees (`/`, `/dashboard/employees`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses, turning a missing record
//!   into an empty `404` and hiding storage failures behind a generic `500`
//!
//! ## Dependency rule
//! Depends on `personnel-app` (for port traits and services) and
//! `personnel-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;
