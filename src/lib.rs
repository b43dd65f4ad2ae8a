//! # Zabbix API Rust Client
//!
//! A typed, async client for the Zabbix JSON-RPC API.
//!
//! ## Overview
//!
//! This crate provides:
//! - Transport configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - A [`Session`] that discovers the server version and adapts its login
//!   and token handling to it (Zabbix 5.x through 7.x)
//! - The JSON-RPC envelope in [`clients`], with a typed error taxonomy
//!   rooted at [`RpcError`]
//! - Codecs for the scalars Zabbix encodes as strings in [`types`]
//! - Query wrappers for common resources in [`resources`]
//! - Optional on-disk session caching via [`auth::SessionFileCache`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use zabbix_api::{Endpoint, Session};
//! use zabbix_api::resources::HostGetParams;
//!
//! let endpoint = Endpoint::new("https://zabbix.example.com/api_jsonrpc.php")?;
//! let session = Session::connect(endpoint, None, "Admin", "zabbix").await?;
//!
//! let hosts = session.get_hosts(&HostGetParams::default()).await?;
//! for host in &hosts {
//!     println!("{} ({})", host.name, host.host_id);
//! }
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use zabbix_api::{ClientConfig, Endpoint, Session};
//!
//! let config = ClientConfig::builder()
//!     .user_agent_prefix("inventory-sync/2.1")
//!     .build()
//!     .unwrap();
//!
//! let endpoint = Endpoint::new("https://zabbix.example.com/api_jsonrpc.php").unwrap();
//! let session = Session::new(endpoint, Some(&config));
//!
//! assert!(session.auth_token().is_empty());
//! assert!(session.api_version().is_none());
//! ```
//!
//! ## Session Persistence
//!
//! A [`SessionRecord`] captures the endpoint, token and discovered version,
//! and restores a session without another login:
//!
//! ```rust
//! use zabbix_api::{Endpoint, Session, SessionRecord};
//!
//! let json = r#"{"url":"https://zabbix.example.com/api_jsonrpc.php","token":"0424bd59b807674191e7d77572075f33","apiVersion":"6.4.8"}"#;
//! let record: SessionRecord = serde_json::from_str(json).unwrap();
//! let session = Session::from_record(record, None);
//!
//! assert_eq!(session.api_version().unwrap().to_string(), "6.4.8");
//! ```
//!
//! [`SessionBuilder`] combines this with a [`auth::SessionCache`] so that
//! repeated runs reuse a token until it expires.
//!
//! ## Errors
//!
//! Every network call returns `Result<_, RpcError>`. Queries that succeed
//! but match nothing return [`RpcError::NotFound`]:
//!
//! ```rust,ignore
//! use zabbix_api::resources::TriggerGetParams;
//!
//! match session.get_triggers(&TriggerGetParams::default()).await {
//!     Ok(triggers) => println!("{} triggers", triggers.len()),
//!     Err(e) if e.is_not_found() => println!("no triggers"),
//!     Err(e) => eprintln!("query failed: {e}"),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: the HTTP client and logging switches are carried by
//!   [`ClientConfig`] and injected per session
//! - **Thread-safe**: [`Session`] is `Send + Sync` and can be shared across tasks
//! - **Async-first**: designed for use with the Tokio runtime
//! - **No hidden retries**: the first error is returned to the caller

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;
pub mod types;

// Re-export public types at crate root for convenience
pub use auth::{AuthMode, Session, SessionBuilder, SessionRecord};
pub use config::{ClientConfig, ClientConfigBuilder, Endpoint, Password};
pub use error::{ConfigError, ParseError};

// Re-export the error taxonomy
pub use clients::{ApiError, DecodeError, NotFoundError, RpcError, TransportError};

// Re-export scalar codecs
pub use types::{ApiBool, ApiDuration, UnixTimestamp, Version};

pub use resources::Resource;
