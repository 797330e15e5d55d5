//! State Management
//!
//! Global state plus the browser capabilities the shop list depends on.

pub mod geolocation;
pub mod global;
pub mod storage;

pub use global::{provide_global_state, GlobalState};
pub use storage::LocalStorage;
