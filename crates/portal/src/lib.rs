pub mod aggregate;
pub mod compliance;
pub mod config;
pub mod engineer;
pub mod filter;
pub mod inbox;
pub mod session;
pub mod store;
pub mod supervisor;
pub mod telemetry;

pub use compliance::{ComplianceDesk, ResultPage};
pub use engineer::EngineerDesk;
pub use filter::{filter_logs, FilterContext};
pub use inbox::NotificationInbox;
pub use session::{nav_links, NavLink, Route, Session};
pub use store::{LogStore, MutationOutcome};
pub use supervisor::SupervisorDesk;
