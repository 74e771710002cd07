//! QuickSight operation output types.

mod dashboard;
mod data_set;
mod data_source;
mod tagging;
mod user;

pub use dashboard::*;
pub use data_set::*;
pub use data_source::*;
pub use tagging::*;
pub use user::*;
