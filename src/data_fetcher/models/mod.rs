pub mod fields;
pub mod page;
pub mod schedule;
pub mod team;

pub use page::{PageDocument, Record};
pub use schedule::{Match, ScheduledMatch};
pub use team::Team;
