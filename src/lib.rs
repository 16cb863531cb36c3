pub mod config;
pub mod database;
pub mod error;
pub mod export;
pub mod import;
pub mod logging;
pub mod models;

pub use database::ReviewStore;
pub use error::{Error, Result};
pub use models::{Item, ItemOverview, Rating, ReviewSession, ReviewState, ScheduleEntry};
