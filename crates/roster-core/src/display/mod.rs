//! Display formatting for records, pages and operation results.
//!
//! Everything here renders markdown, which the terminal console shows either
//! rich (headings coloured) or as plain text.
//!
//! - [`models`]: `Display` for [`Employee`](crate::models::Employee)
//! - [`collections`]: pages of records and search results
//! - [`menu`]: the command loop menu
//! - [`status`]: one-line success and failure messages

pub mod collections;
pub mod menu;
pub mod models;
pub mod status;

pub use collections::{EmployeePage, SearchResults};
pub use menu::Menu;
pub use status::OperationStatus;
