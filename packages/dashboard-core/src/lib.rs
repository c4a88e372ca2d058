//! UI-independent logic for the Octo profiles dashboard.
//!
//! The web frontend keeps a [`ProfileTable`] in a signal and renders whatever
//! [`ProfileTable::view`] derives from it. Nothing in here touches the DOM or
//! the network, so it is tested with plain unit tests.

pub mod cookies;
pub mod display;
pub mod sort;
pub mod table;

pub use cookies::{count_cookies, cookie_summary};
pub use display::{format_proxy, format_timestamp, status_label, ProfileRow};
pub use sort::{SortDirection, SortField, SortSpec};
pub use table::{PageSize, ProfileTable, TableBranch, TableView};

pub use octo_client::{Profile, ProfileProxy};
