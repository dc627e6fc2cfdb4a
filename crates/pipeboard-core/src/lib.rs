pub mod filter;
pub mod model;
pub mod report;
pub mod source;
