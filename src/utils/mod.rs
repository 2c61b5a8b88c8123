pub mod config;
pub mod gpa;
pub mod insights;
pub mod session;
