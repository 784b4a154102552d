pub mod cache;
pub mod checks;
pub mod error;
pub mod exec;
pub mod query;
pub mod report;
pub mod styling;
pub mod validate;

// Re-export the check record for convenience
pub use checks::Check;
