//! Calendar scheduling module
//!
//! This module turns parsed schedule entries into dated tasks:
//! - Relative date resolution ("Today", "Day 7", "In 3 days")
//! - Time slot allocation for same-day tasks
//! - Follow-up reminders

pub mod allocator;
pub mod clock;
pub mod follow_up;
pub mod model;
pub mod relative_date;

pub use allocator::SlotAllocator;
pub use clock::{Clock, FixedClock, SystemClock};
pub use follow_up::follow_up_task;
pub use model::{DiagnosisId, ResolvedTask, TaskOwner, UserId};
pub use relative_date::{midnight, resolve};
