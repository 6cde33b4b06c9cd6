//! Poll-based resource fetching with bounded in-flight requests.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Immutable request state, snapshots and configuration
//! - [`core`] - Content classification, text termination and admission control
//! - [`effects`] - Host fetch primitive abstraction and the request lifecycle
//!
//! # Key Features
//!
//! - **Non-blocking**: Callers create a request and poll it; nothing waits
//! - **Bounded**: At most [`MAX_IN_FLIGHT`] fetches are dispatched at once
//! - **Host-agnostic**: Any event loop can drive requests through [`HostFetch`]
//! - **Text-safe**: Text payloads always end with a NUL terminator past `size`
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use orrery_request::{FetchRuntime, ScriptedHost};
//!
//! let host = Rc::new(ScriptedHost::new());
//! let runtime = FetchRuntime::init(host.clone(), "/tmp/unused");
//!
//! let request = runtime.create("https://example.test/stars.txt");
//! let _ = runtime.get_data(&request);
//!
//! let handle = request.dispatch_handle().unwrap();
//! host.succeed(handle, b"vega".to_vec());
//!
//! let snapshot = runtime.get_data(&request);
//! assert!(runtime.is_finished(&request));
//! assert_eq!(snapshot.status_code, 200);
//! assert_eq!(snapshot.text(), Some("vega"));
//! ```

pub mod core;
pub mod data;
pub mod effects;
mod error;

pub use crate::core::{AdmissionController, ContentKind, MAX_IN_FLIGHT, classify, null_terminate};
pub use crate::data::{ClientConfig, RequestState, STATUS_OK, STATUS_UNKNOWN_NETWORK_ERROR, Snapshot};
pub use crate::effects::{
    Continuation, DispatchHandle, FetchCall, FetchRuntime, HostFetch, Method, Request,
    ScriptedHost,
};

#[cfg(feature = "reqwest")]
pub use crate::effects::ReqwestHost;

pub use crate::error::{Error, FetchFailure, Result};
