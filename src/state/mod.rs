//! State Management
//!
//! Global application state and the dream journal data model.

pub mod global;

pub use global::{provide_global_state, DashboardTab, DreamRecord, GlobalState, SummaryStats};
