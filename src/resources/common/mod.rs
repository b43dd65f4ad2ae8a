//! Common types shared by resource query parameters and records.
//!
//! These types are not resources themselves (they don't implement
//! [`Resource`](crate::resources::Resource)), but are embedded in the
//! parameter structs and records of every resource.
//!
//! # Example
//!
//! ```rust
//! use zabbix_api::resources::common::{GetParameters, SelectQuery, SortOrder};
//!
//! let common = GetParameters {
//!     output: Some(SelectQuery::fields(["hostid", "name"])),
//!     sort_field: vec!["name".to_string()],
//!     sort_order: Some(SortOrder::Descending),
//!     limit: Some(10),
//!     ..Default::default()
//! };
//!
//! let json = serde_json::to_value(&common).unwrap();
//! assert_eq!(json["output"], serde_json::json!(["hostid", "name"]));
//! assert_eq!(json["sortorder"], "DESC");
//! ```

mod params;
mod related;
mod select;
mod tag;

pub use params::{GetParameters, SortOrder};
pub use related::Related;
pub use select::SelectQuery;
pub use tag::{Tag, TagFilter, TagOperator};

#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) const fn is_false(value: &bool) -> bool {
    !*value
}
