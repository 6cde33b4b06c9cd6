use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::time::Duration;

use tokio::runtime::Runtime;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use super::{Continuation, DispatchHandle, FetchCall, HostFetch};
use crate::data::ClientConfig;
use crate::error::{Error, Result};

/// Outcome of one transfer, sent from the runtime back to the owning thread.
#[derive(Debug)]
enum Delivery {
    Loaded(Vec<u8>),
    Failed { status: Option<i32>, message: String },
}

struct Pending {
    continuation: Continuation,
    task: JoinHandle<()>,
}

/// Native host primitive backed by `reqwest`.
///
/// Transfers run on a private tokio runtime. Their outcomes are queued and
/// continuations fire only when the owning thread calls
/// [`pump`](Self::pump) or [`wait`](Self::wait), which plays the role of the
/// host event loop.
///
/// `wait` blocks on the private runtime and must not be called from inside
/// another tokio runtime.
pub struct ReqwestHost {
    client: reqwest::Client,
    runtime: Runtime,
    next_handle: Cell<u64>,
    pending: RefCell<HashMap<DispatchHandle, Pending>>,
    sender: UnboundedSender<(DispatchHandle, Delivery)>,
    receiver: RefCell<UnboundedReceiver<(DispatchHandle, Delivery)>>,
}

impl ReqwestHost {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        if let Some(timeout) = config.connect_timeout() {
            builder = builder.connect_timeout(timeout);
        }
        if !config.system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(config.worker_threads.max(1))
            .thread_name("orrery-fetch")
            .enable_all()
            .build()
            .map_err(Error::Runtime)?;

        let (sender, receiver) = mpsc::unbounded_channel();
        Ok(Self {
            client,
            runtime,
            next_handle: Cell::new(1),
            pending: RefCell::new(HashMap::new()),
            sender,
            receiver: RefCell::new(receiver),
        })
    }

    /// Fetches dispatched but not yet delivered.
    pub fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Fire the continuations of every transfer that has finished.
    ///
    /// Never blocks. Returns the number of continuations fired.
    pub fn pump(&self) -> usize {
        let mut fired = 0;
        loop {
            let next = self.receiver.borrow_mut().try_recv();
            match next {
                Ok((handle, delivery)) => fired += usize::from(self.deliver(handle, delivery)),
                Err(_) => return fired,
            }
        }
    }

    /// Block until one transfer finishes or `timeout` elapses, then pump.
    ///
    /// Returns the number of continuations fired.
    pub fn wait(&self, timeout: Duration) -> usize {
        if self.pending_count() == 0 {
            return self.pump();
        }

        let next = {
            let mut receiver = self.receiver.borrow_mut();
            self.runtime
                .block_on(async { tokio::time::timeout(timeout, receiver.recv()).await })
        };

        let fired = match next {
            Ok(Some((handle, delivery))) => usize::from(self.deliver(handle, delivery)),
            _ => 0,
        };
        fired + self.pump()
    }

    fn deliver(&self, handle: DispatchHandle, delivery: Delivery) -> bool {
        let Some(pending) = self.pending.borrow_mut().remove(&handle) else {
            trace!(%handle, "delivery for aborted fetch dropped");
            return false;
        };

        match delivery {
            Delivery::Loaded(buffer) => {
                let size = buffer.len();
                pending.continuation.succeed(buffer, size);
            }
            Delivery::Failed { status, message } => pending.continuation.fail(status, &message),
        }
        true
    }
}

async fn transfer(client: reqwest::Client, call: FetchCall) -> Delivery {
    let mut request = client.get(&call.url);
    for (key, value) in &call.headers {
        request = request.header(key.as_str(), value.as_str());
    }

    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => return failed(e),
    };

    let status = response.status();
    if !status.is_success() {
        return Delivery::Failed {
            status: Some(i32::from(status.as_u16())),
            message: status.to_string(),
        };
    }

    match response.bytes().await {
        Ok(body) => Delivery::Loaded(body.to_vec()),
        Err(e) => failed(e),
    }
}

fn failed(e: reqwest::Error) -> Delivery {
    Delivery::Failed {
        status: e.status().map(|status| i32::from(status.as_u16())),
        message: e.to_string(),
    }
}

impl HostFetch for ReqwestHost {
    fn dispatch(&self, call: FetchCall, continuation: Continuation) -> DispatchHandle {
        let handle = DispatchHandle::new(self.next_handle.get());
        self.next_handle.set(handle.raw() + 1);

        debug!(%handle, url = %call.url, method = call.method.as_str(), "starting transfer");
        let client = self.client.clone();
        let sender = self.sender.clone();
        let task = self.runtime.spawn(async move {
            let delivery = transfer(client, call).await;
            // The receiver lives as long as the host; a closed channel means it is gone.
            let _ = sender.send((handle, delivery));
        });

        self.pending
            .borrow_mut()
            .insert(handle, Pending { continuation, task });
        handle
    }

    fn abort(&self, handle: DispatchHandle) {
        if let Some(pending) = self.pending.borrow_mut().remove(&handle) {
            pending.task.abort();
            debug!(%handle, "transfer aborted");
        }
    }
}

impl std::fmt::Debug for ReqwestHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestHost")
            .field("next_handle", &self.next_handle.get())
            .field("pending", &self.pending_count())
            .finish_non_exhaustive()
    }
}
