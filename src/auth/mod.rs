//! Authentication and session handling for the Zabbix API.
//!
//! # Overview
//!
//! - [`Session`]: an authenticated connection; every call goes through it
//! - [`AuthMode`]: whether a call carries credentials
//! - [`SessionRecord`]: the persisted form of a session
//! - [`SessionCache`] / [`SessionFileCache`]: session persistence
//! - [`SessionBuilder`]: restores a cached session or logs in
//!
//! # Protocol Versions
//!
//! The login and token transport changed across Zabbix releases. A session
//! discovers the server version once with `apiinfo.version` and adapts:
//!
//! | Server        | Login name key | Token in body `auth` | Bearer header |
//! |---------------|----------------|----------------------|---------------|
//! | below 6.0     | `user`         | yes                  | yes           |
//! | 6.0 to 6.2    | `username`     | yes                  | yes           |
//! | 6.4 and later | `username`     | no                   | yes           |
//!
//! Neither the body field nor the header is sent before a token is set.
//!
//! # Example
//!
//! ```rust,ignore
//! use zabbix_api::auth::SessionFileCache;
//! use zabbix_api::{Endpoint, Password, Session};
//!
//! let session = Session::builder(Endpoint::new("http://localhost/api_jsonrpc.php")?)
//!     .cache(SessionFileCache::new())
//!     .credentials("Admin", Password::new("zabbix"))
//!     .connect()
//!     .await?;
//!
//! println!("Zabbix {}", session.get_version().await?);
//! ```

mod builder;
mod cache;
mod session;

pub use builder::SessionBuilder;
pub use cache::{
    CacheError, SessionCache, SessionFileCache, DEFAULT_SESSION_FILE, DEFAULT_SESSION_LIFETIME,
};
pub use session::{AuthMode, Session, SessionRecord};
