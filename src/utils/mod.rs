pub mod colors;
pub mod date;
pub mod formatting;
pub mod fs_utils;
pub mod path;
pub mod range;
pub mod table;
pub mod time;

pub use formatting::{pad_right, title_case};
