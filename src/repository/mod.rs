//! Repository layer for database operations

pub mod configurations;
pub mod customers;
pub mod equipment;
pub mod inspections;
pub mod locations;
pub mod logbook;
pub mod operators;
pub mod revisions;
pub mod service_visits;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub customers: customers::CustomersRepository,
    pub equipment: equipment::EquipmentRepository,
    pub configurations: configurations::ConfigurationsRepository,
    pub locations: locations::LocationsRepository,
    pub operators: operators::OperatorsRepository,
    pub revisions: revisions::RevisionsRepository,
    pub inspections: inspections::InspectionsRepository,
    pub service_visits: service_visits::ServiceVisitsRepository,
    pub logbook: logbook::LogbookRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            customers: customers::CustomersRepository::new(pool.clone()),
            equipment: equipment::EquipmentRepository::new(pool.clone()),
            configurations: configurations::ConfigurationsRepository::new(pool.clone()),
            locations: locations::LocationsRepository::new(pool.clone()),
            operators: operators::OperatorsRepository::new(pool.clone()),
            revisions: revisions::RevisionsRepository::new(pool.clone()),
            inspections: inspections::InspectionsRepository::new(pool.clone()),
            service_visits: service_visits::ServiceVisitsRepository::new(pool.clone()),
            logbook: logbook::LogbookRepository::new(pool.clone()),
            pool,
        }
    }
}
