//! Dashboard widgets.
//!
//! Everything the signed-in view is built from: the icon rail, the task
//! list, the skills panel, the weekly activity placeholder, the calendar,
//! and the profile card. The task/skill content is fixture data for now —
//! only the profile card and the header draw on the loaded user record.

mod sidebar;
pub use sidebar::{DashboardSidebar, DashboardTab};

mod tasks;
pub use tasks::TaskList;

mod skills;
pub use skills::SkillsPanel;

mod activity;
pub use activity::WeeklyActivity;

mod calendar;
pub use calendar::CalendarCard;

mod profile;
pub use profile::ProfileCard;
