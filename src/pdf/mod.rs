//! Revision report PDF generation

pub mod chromium;
pub mod model;
pub mod renderer;

pub use model::{build_report, ReportModel};
pub use renderer::{PdfRenderer, RenderError};
