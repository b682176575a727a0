//! Service layer
//!
//! # Services
//!
//! - [`provision`] - database seeding and admin account management

pub mod provision;
