pub mod audit_log;
pub mod health;
pub mod revocations;
