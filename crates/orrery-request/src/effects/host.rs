use super::Continuation;

/// Opaque token identifying one dispatched fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DispatchHandle(u64);

impl DispatchHandle {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for DispatchHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// HTTP method of a dispatched fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
        }
    }
}

/// Everything the host needs to start one fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCall {
    pub url: String,
    pub method: Method,
    pub headers: Vec<(String, String)>,
    /// Whether the host may block until the transfer completes.
    pub blocking: bool,
}

impl FetchCall {
    /// A non-blocking GET without custom headers.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: Method::Get,
            headers: Vec::new(),
            blocking: false,
        }
    }
}

/// The host runtime's asynchronous fetch primitive.
///
/// # Contract
///
/// - `dispatch` starts the transfer and returns immediately with a handle.
/// - Exactly one of [`Continuation::succeed`] or [`Continuation::fail`] is
///   invoked later for each dispatch, on the thread that owns the request,
///   unless the handle was aborted first.
/// - After `abort(handle)` returns, the continuation for that handle must
///   never be invoked.
///
/// # Implementations
///
/// - [`ReqwestHost`](crate::ReqwestHost): native transfers using `reqwest`
/// - [`ScriptedHost`](crate::ScriptedHost): deterministic double for tests
pub trait HostFetch {
    fn dispatch(&self, call: FetchCall, continuation: Continuation) -> DispatchHandle;

    fn abort(&self, handle: DispatchHandle);
}
