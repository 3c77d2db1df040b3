pub mod date;
pub mod formatting;
pub mod path;

pub use date::format_date;
