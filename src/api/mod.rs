//! API handlers for Revize REST endpoints

pub mod configurations;
pub mod customers;
pub mod equipment;
pub mod health;
pub mod inspections;
pub mod locations;
pub mod logbook;
pub mod openapi;
pub mod operators;
pub mod revisions;
pub mod service_visits;
pub mod stats;
