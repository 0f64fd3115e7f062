//! # Comercia App Library
//!
//! Exposes the application modules for integration testing: the domain
//! model, the typed collection clients, the order-composition engine
//! and the panels around it.

pub mod clients;
pub mod composer;
pub mod confirm;
pub mod ids;
pub mod lifecycle;
pub mod model;
pub mod shell;
pub mod state;
