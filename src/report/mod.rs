//! Weekly report rendering

pub mod template;

pub use template::{ReportGenerator, TemplateError};
