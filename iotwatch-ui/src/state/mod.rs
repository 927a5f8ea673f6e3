//! State Management
//!
//! Global application state and the poll loop that drives the tick counter.

pub mod global;
pub mod poller;

pub use global::{provide_global_state, Channel, GlobalState, Reading, RunState};
pub use poller::start_polling;
