//! Typed query wrappers for Zabbix API resources.
//!
//! Every resource is a record type implementing [`Resource`], paired with a
//! `<Name>GetParams` struct that embeds the common [`GetParameters`] plus
//! the resource's own filters and `select*` flags. Each also has a
//! convenience method on [`Session`], e.g. [`Session::get_hosts`].
//!
//! # Empty Results
//!
//! A query that succeeds but matches nothing returns
//! [`RpcError::NotFound`], never an empty `Vec`. Every other failure is
//! returned unchanged.
//!
//! # Example
//!
//! ```rust,ignore
//! use zabbix_api::resources::{Host, HostGetParams, Resource};
//! use zabbix_api::resources::common::SelectQuery;
//!
//! let params = HostGetParams {
//!     select_interfaces: Some(SelectQuery::Extend),
//!     ..Default::default()
//! };
//!
//! match Host::get(&session, &params).await {
//!     Ok(hosts) => println!("{} hosts", hosts.len()),
//!     Err(e) if e.is_not_found() => println!("no hosts"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

pub mod common;

mod action;
mod alert;
mod event;
mod history;
mod host;
mod host_group;
mod host_interface;
mod item;
mod maintenance;
mod media_type;
mod proxy;
mod trigger;
mod user;
mod user_macro;

pub use action::{
    Action, ActionCondition, ActionFilter, ActionGetParams, ActionOperation, EventSource,
};
pub use alert::{Alert, AlertGetParams};
pub use event::{Event, EventGetParams};
pub use history::{History, HistoryGetParams, HistoryValueType};
pub use host::{Host, HostGetParams, HostTemplate};
pub use host_group::{HostGroup, HostGroupGetParams};
pub use host_interface::{HostInterface, HostInterfaceGetParams, InterfaceType};
pub use item::{Item, ItemGetParams};
pub use maintenance::{Maintenance, MaintenanceGetParams, TimePeriod};
pub use media_type::{
    Media, MediaType, MediaTypeGetParams, MediaTypeMessageTemplate, MediaTypeParameter,
};
pub use proxy::{Proxy, ProxyGetParams};
pub use trigger::{Trigger, TriggerGetParams, TriggerSeverity};
pub use user::{User, UserGetParams};
pub use user_macro::{UserMacro, UserMacroGetParams};

pub use common::{GetParameters, Related};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::Session;
use crate::clients::{NotFoundError, RpcError};

/// A Zabbix API object that can be queried with `<resource>.get`.
///
/// Implementors declare the query parameter type and the method name; the
/// trait provides [`get`](Resource::get).
#[allow(async_fn_in_trait)]
pub trait Resource: DeserializeOwned + Send + Sized {
    /// Query parameters for the `get` method.
    type Params: Serialize + Default + Send + Sync;

    /// Human readable name used in logs (e.g., "Host").
    const NAME: &'static str;

    /// The JSON-RPC method (e.g., "host.get").
    const METHOD: &'static str;

    /// Queries records matching `params`.
    ///
    /// # Errors
    ///
    /// Returns [`RpcError::NotFound`] if the query matches nothing, and any
    /// error of [`Session::get`] unchanged.
    async fn get(session: &Session, params: &Self::Params) -> Result<Vec<Self>, RpcError> {
        let records: Vec<Self> = session.get(Self::METHOD, params).await?;

        if records.is_empty() {
            tracing::debug!(resource = Self::NAME, method = Self::METHOD, "Query matched no records");
            return Err(NotFoundError.into());
        }

        Ok(records)
    }
}
