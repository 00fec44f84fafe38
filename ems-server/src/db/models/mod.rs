//! Database Models

// Serde helpers
pub mod serde_helpers;

// Auth
pub mod user;

// Employee Domain
pub mod employee;

pub use employee::{Employee, EmployeeCreate, EmployeeId, EmployeeUpdate};
pub use user::{User, UserCreate, UserId};
