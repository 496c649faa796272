pub mod edit;
pub mod layout;
pub mod log;
pub mod planner;
pub mod projector;
pub mod state;
pub mod store;
pub mod ticker;
