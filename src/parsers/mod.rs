//! Readers that rebuild an [`AttendanceBook`](crate::models::AttendanceBook)
//! from either persisted form.

pub mod section_text;
pub mod structured;

pub use section_text::{ArchivedSection, RawBlock, parse_archive, parse_sections, split_blocks};
pub use structured::{parse_structured, read_structured};
