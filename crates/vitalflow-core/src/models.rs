pub mod log;
pub mod triage;
pub mod vitals;
