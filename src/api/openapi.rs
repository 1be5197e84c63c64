//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{
    configurations, customers, equipment, health, inspections, locations, logbook, operators,
    revisions, service_visits, stats,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Revize API",
        version = "1.0.0",
        description = "Lifting-equipment inspection management REST API (NV 193/2022 Sb.)",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Customers
        customers::list_customers,
        customers::get_customer,
        customers::create_customer,
        customers::update_customer,
        customers::delete_customer,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        equipment::location_history,
        equipment::assign_location,
        equipment::list_equipment_operators,
        equipment::assign_operator,
        equipment::unassign_operator,
        equipment::list_equipment_revisions,
        equipment::list_equipment_inspections,
        equipment::list_equipment_service_visits,
        equipment::list_equipment_configurations,
        // Configurations
        configurations::list_configurations,
        configurations::get_configuration,
        configurations::create_configuration,
        configurations::update_configuration,
        configurations::delete_configuration,
        // Locations
        locations::list_locations,
        locations::get_location,
        locations::create_location,
        locations::update_location,
        locations::delete_location,
        // Operators
        operators::list_operators,
        operators::get_operator,
        operators::create_operator,
        operators::update_operator,
        operators::delete_operator,
        // Revisions
        revisions::list_revisions,
        revisions::get_revision,
        revisions::create_revision,
        revisions::update_revision,
        revisions::delete_revision,
        revisions::list_revision_defects,
        revisions::list_defects,
        revisions::revision_pdf,
        // Inspections
        inspections::list_inspections,
        inspections::get_inspection,
        inspections::create_inspection,
        inspections::update_inspection,
        inspections::delete_inspection,
        // Service visits
        service_visits::list_service_visits,
        service_visits::get_service_visit,
        service_visits::create_service_visit,
        service_visits::update_service_visit,
        service_visits::delete_service_visit,
        service_visits::list_service_files,
        service_visits::upload_service_file,
        service_visits::download_service_file,
        service_visits::delete_service_file,
        // Logbook
        logbook::list_entries,
        logbook::equipment_entries,
        logbook::create_entry,
        logbook::delete_entry,
        // Stats
        stats::get_stats,
    ),
    components(
        schemas(
            health::HealthResponse,
            stats::StatsResponse,
            crate::error::ErrorResponse,
            // Customers
            crate::models::customer::Customer,
            crate::models::customer::CreateCustomer,
            // Equipment
            crate::models::equipment::Equipment,
            crate::models::equipment::CreateEquipment,
            crate::models::enums::EquipmentCategory,
            crate::models::enums::EquipmentStatus,
            // Configurations
            crate::models::configuration::EquipmentConfiguration,
            crate::models::configuration::CreateConfiguration,
            // Locations
            crate::models::location::Location,
            crate::models::location::CreateLocation,
            crate::models::location::EquipmentLocation,
            crate::models::location::AssignLocation,
            // Operators
            crate::models::operator::Operator,
            crate::models::operator::CreateOperator,
            // Revisions
            crate::models::revision::Revision,
            crate::models::revision::CreateRevision,
            crate::models::revision::MeasuringInstrument,
            crate::models::revision::TechnicalAssessment,
            crate::models::revision::Danger,
            crate::models::revision::LoadTestValue,
            crate::models::defect::Defect,
            crate::models::defect::DefectItem,
            crate::models::enums::Severity,
            crate::models::enums::Evaluation,
            crate::models::enums::ProcedureType,
            crate::checklist::ChecklistSection,
            crate::checklist::Checklists,
            // Inspections
            crate::models::inspection::Inspection,
            crate::models::inspection::CreateInspection,
            // Service visits
            crate::models::service_visit::ServiceVisit,
            crate::models::service_visit::CreateServiceVisit,
            crate::models::service_visit::ServiceFile,
            // Logbook
            crate::models::logbook::LogbookEntry,
            crate::models::logbook::CreateLogbookEntry,
            crate::models::enums::LogbookEntryType,
        )
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "customers", description = "Customer management"),
        (name = "equipment", description = "Equipment management"),
        (name = "configurations", description = "Equipment configurations"),
        (name = "locations", description = "Project sites and assignments"),
        (name = "operators", description = "Certified operators"),
        (name = "revisions", description = "Revision records and PDF reports"),
        (name = "inspections", description = "Periodic inspections"),
        (name = "service", description = "Service visits and attachments"),
        (name = "logbook", description = "Equipment logbook"),
        (name = "stats", description = "Dashboard statistics")
    )
)]
pub struct ApiDoc;

/// Router serving the Swagger UI and the raw OpenAPI document
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
