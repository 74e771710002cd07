//! QuickSight model types for RustStack.
//!
//! Request and response shapes, the nested structures they are built from,
//! closed-set enums, and the service error carrier. Nothing here talks to the
//! network: a transport layer serializes these values and builds
//! [`QuickSightError`]s from failure responses.
//!
//! Every shape field is an `Option`, and absence is preserved through
//! serialization. Shapes come with a builder:
//!
//! ```
//! use rustack_quicksight_model::types::{AdHocFilteringOption, DashboardBehavior};
//!
//! let option = AdHocFilteringOption::builder()
//!     .availability_status(DashboardBehavior::Enabled)
//!     .build();
//! assert_eq!(option.to_string(), "{AvailabilityStatus: ENABLED}");
//! ```
// "QuickSight" appears in virtually every doc comment in this crate.
#![allow(clippy::doc_markdown)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::module_name_repetitions)]
#![allow(missing_docs)]

mod display;
mod timestamp;

pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod types;

pub use error::{ParseEnumError, QuickSightError, QuickSightErrorCode};
pub use operations::QuickSightOperation;
pub use types::ClosedEnum;
