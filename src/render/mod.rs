//! Output artifacts: annotation reports and their JSON form.

mod json;
mod report;

pub use json::{from_json, to_json, JsonFormat};
pub use report::AnnotationReport;
