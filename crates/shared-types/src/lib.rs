pub mod config;
pub mod criteria;
pub mod error;
pub mod log;
pub mod models;
pub mod notification;
pub mod report;
pub mod requests;
pub mod stats;

pub use config::*;
pub use criteria::*;
pub use error::*;
pub use log::*;
pub use models::*;
pub use notification::*;
pub use report::*;
pub use requests::*;
pub use stats::*;
