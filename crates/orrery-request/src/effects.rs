//! Host-facing side of the crate: dispatch, continuations and the request
//! lifecycle.
//!
//! Everything here is single-threaded. Requests, continuations and the
//! admission controller share state through `Rc`, and the host primitive is
//! expected to deliver continuations on the thread that owns the requests.

mod continuation;
mod host;
mod request;
mod runtime;
mod scripted;

#[cfg(feature = "reqwest")]
mod reqwest_host;

pub use continuation::Continuation;
pub use host::{DispatchHandle, FetchCall, HostFetch, Method};
pub use request::Request;
pub use runtime::FetchRuntime;
pub use scripted::ScriptedHost;

#[cfg(feature = "reqwest")]
pub use reqwest_host::ReqwestHost;
