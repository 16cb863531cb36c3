pub mod item;
pub mod item_set;
pub mod review_session;
pub mod review_state;
pub mod schedule_entry;
pub mod scheduler;

pub use item::{Item, ItemOverview};
pub use item_set::{ItemRecord, ItemSet};
pub use review_session::ReviewSession;
pub use review_state::ReviewState;
pub use schedule_entry::ScheduleEntry;
pub use scheduler::Rating;
