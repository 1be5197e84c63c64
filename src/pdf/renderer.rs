//! Headless-browser PDF rendering pipeline
//!
//! The report model is rendered through a Handlebars HTML template, written
//! to a scratch directory and printed with `--headless --print-to-pdf`.
//! Pagination is left entirely to the browser's CSS print engine. Each render
//! runs under a hard timeout and the number of concurrent browser processes
//! is capped; a failed render discards all partial output.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use handlebars::Handlebars;
use thiserror::Error;
use tokio::process::Command;
use tokio::sync::Semaphore;

use super::model::ReportModel;
use crate::config::PdfConfig;

const REPORT_TEMPLATE: &str = include_str!("../../templates/revision_report.hbs");

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("no usable Chromium/Chrome binary found")]
    BrowserNotFound,

    #[error("failed to compile report template: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),

    #[error("failed to render report template: {0}")]
    TemplateRender(#[from] handlebars::RenderError),

    #[error("report scratch file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("browser exited with status {status}: {stderr}")]
    BrowserExit { status: i32, stderr: String },

    #[error("browser render timed out after {0} seconds")]
    Timeout(u64),

    #[error("render slot unavailable")]
    Unavailable,
}

/// Revision report renderer
pub struct PdfRenderer {
    registry: Handlebars<'static>,
    chromium: Option<PathBuf>,
    timeout: Duration,
    permits: Arc<Semaphore>,
}

impl PdfRenderer {
    /// Compile the report template and probe for a browser binary.
    ///
    /// A missing browser does not fail construction: the server stays up and
    /// the render call reports `BrowserNotFound` instead.
    pub fn new(config: &PdfConfig) -> Result<Self, RenderError> {
        let mut registry = Handlebars::new();
        registry
            .register_template_string("revision_report", REPORT_TEMPLATE)
            .map_err(Box::new)?;

        let chromium = super::chromium::discover(config.chromium_path.as_deref());
        match &chromium {
            Some(path) => tracing::info!("Using browser binary {}", path.display()),
            None => tracing::warn!(
                "No Chromium/Chrome binary found; PDF report generation is unavailable"
            ),
        }

        Ok(Self {
            registry,
            chromium,
            timeout: Duration::from_secs(config.render_timeout_secs),
            permits: Arc::new(Semaphore::new(config.max_concurrent.max(1))),
        })
    }

    /// Render a report model to PDF bytes
    pub async fn render(&self, report: &ReportModel) -> Result<Vec<u8>, RenderError> {
        let chromium = self.chromium.clone().ok_or(RenderError::BrowserNotFound)?;

        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|_| RenderError::Unavailable)?;

        let html = self.registry.render("revision_report", report)?;

        let scratch = tempfile::tempdir()?;
        let html_path = scratch.path().join("report.html");
        let pdf_path = scratch.path().join("report.pdf");
        tokio::fs::write(&html_path, html).await?;

        let mut command = Command::new(&chromium);
        command
            .arg("--headless")
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .arg("--no-pdf-header-footer")
            .arg(format!("--print-to-pdf={}", pdf_path.display()))
            .arg(&html_path)
            .kill_on_drop(true);

        let timeout_secs = self.timeout.as_secs();
        let output = tokio::time::timeout(self.timeout, command.output())
            .await
            .map_err(|_| RenderError::Timeout(timeout_secs))??;

        if !output.status.success() {
            return Err(RenderError::BrowserExit {
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let bytes = tokio::fs::read(&pdf_path).await?;
        tracing::debug!("Rendered revision report ({} bytes)", bytes.len());
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_template_compiles() {
        let mut registry = Handlebars::new();
        assert!(registry
            .register_template_string("revision_report", REPORT_TEMPLATE)
            .is_ok());
    }

    #[tokio::test]
    async fn test_render_without_browser_fails_fast() {
        let renderer = PdfRenderer::new(&PdfConfig {
            chromium_path: Some("/nonexistent/chromium".to_string()),
            render_timeout_secs: 1,
            max_concurrent: 1,
        })
        .expect("template must compile");

        let revision = crate::models::revision::Revision {
            id: 1,
            equipment_id: 1,
            configuration_id: None,
            location_id: None,
            location: None,
            revision_number: "RE000001".to_string(),
            technician_name: "Jan Novák".to_string(),
            certification_number: None,
            procedure_type: crate::models::ProcedureType::Zkouska,
            revision_date: chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            test_start_date: None,
            test_end_date: None,
            report_date: None,
            handover_date: None,
            next_revision_date: None,
            next_inspection_date: None,
            documentation_check: sqlx::types::Json(Default::default()),
            equipment_check: sqlx::types::Json(Default::default()),
            functional_test: sqlx::types::Json(Default::default()),
            load_test: sqlx::types::Json(Default::default()),
            load_test_loads: sqlx::types::Json(Default::default()),
            measuring_instruments: sqlx::types::Json(Vec::new()),
            technical_assessment: sqlx::types::Json(Default::default()),
            dangers: sqlx::types::Json(Vec::new()),
            previous_controls_ok: None,
            technical_trend: None,
            evaluation: crate::models::Evaluation::Vyhovuje,
            conclusion: None,
            created_at: None,
            updated_at: None,
            defects: Vec::new(),
        };
        let equipment = crate::models::Equipment {
            id: 1,
            customer_id: 1,
            name: "Mostový jeřáb".to_string(),
            category: crate::models::enums::EquipmentCategory::Crane,
            manufacturer: None,
            model: None,
            serial_number: None,
            year_of_manufacture: None,
            capacity_kg: Some(5000),
            status: crate::models::enums::EquipmentStatus::Active,
            notes: None,
            created_at: None,
            updated_at: None,
        };
        let customer = crate::models::Customer {
            id: 1,
            company_name: "Stavby a.s.".to_string(),
            ico: None,
            dic: None,
            street: None,
            city: None,
            postal_code: None,
            contact_person: None,
            email: None,
            phone: None,
            notes: None,
            created_at: None,
            updated_at: None,
        };

        let report = super::super::model::build_report(&revision, &equipment, &customer, None);
        let result = renderer.render(&report).await;
        assert!(matches!(result, Err(RenderError::BrowserNotFound)));
    }
}
