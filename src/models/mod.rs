pub mod event;
pub mod habit;
pub mod plan;
pub mod task;

pub use event::CalendarEvent;
pub use habit::Habit;
pub use plan::{AIPlanResponse, DayScheduleItem};
pub use task::{Progress, Task, TaskCategory};
