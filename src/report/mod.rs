pub mod builder;
pub mod pdf;

pub use builder::{Master, Report, ReportBody, Status, build_master, render};
pub use pdf::ReportPdf;
