//! Business logic services

pub mod configurations;
pub mod customers;
pub mod equipment;
pub mod inspections;
pub mod locations;
pub mod logbook;
pub mod operators;
pub mod reports;
pub mod revisions;
pub mod service_visits;
pub mod stats;

use crate::{config::AppConfig, error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub customers: customers::CustomersService,
    pub equipment: equipment::EquipmentService,
    pub configurations: configurations::ConfigurationsService,
    pub locations: locations::LocationsService,
    pub operators: operators::OperatorsService,
    pub revisions: revisions::RevisionsService,
    pub inspections: inspections::InspectionsService,
    pub service_visits: service_visits::ServiceVisitsService,
    pub logbook: logbook::LogbookService,
    pub reports: reports::ReportsService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, config: &AppConfig) -> AppResult<Self> {
        Ok(Self {
            customers: customers::CustomersService::new(repository.clone()),
            equipment: equipment::EquipmentService::new(repository.clone()),
            configurations: configurations::ConfigurationsService::new(repository.clone()),
            locations: locations::LocationsService::new(repository.clone()),
            operators: operators::OperatorsService::new(repository.clone()),
            revisions: revisions::RevisionsService::new(repository.clone()),
            inspections: inspections::InspectionsService::new(repository.clone()),
            service_visits: service_visits::ServiceVisitsService::new(
                repository.clone(),
                config.storage.clone(),
            ),
            logbook: logbook::LogbookService::new(repository.clone()),
            reports: reports::ReportsService::new(repository.clone(), &config.pdf)?,
            stats: stats::StatsService::new(repository),
        })
    }
}
