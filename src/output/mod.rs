//! Report formatting and export

pub mod export;
pub mod formatter;

pub use export::RankedCandidate;
pub use formatter::ReportGenerator;
