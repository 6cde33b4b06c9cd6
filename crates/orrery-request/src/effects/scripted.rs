use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use super::{Continuation, DispatchHandle, FetchCall, HostFetch};

/// Deterministic host primitive driven by hand.
///
/// Dispatches are recorded and held until the caller delivers an outcome
/// with [`succeed`](Self::succeed) or [`fail`](Self::fail). Aborted
/// continuations are kept aside so a misbehaving host can be simulated
/// with [`replay_aborted`](Self::replay_aborted).
#[derive(Debug, Default)]
pub struct ScriptedHost {
    next_handle: Cell<u64>,
    calls: RefCell<Vec<(DispatchHandle, FetchCall)>>,
    pending: RefCell<BTreeMap<DispatchHandle, Continuation>>,
    aborted: RefCell<BTreeMap<DispatchHandle, Continuation>>,
}

impl ScriptedHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every dispatch seen so far, in order.
    pub fn calls(&self) -> Vec<(DispatchHandle, FetchCall)> {
        self.calls.borrow().clone()
    }

    /// Handles still waiting for an outcome.
    pub fn pending(&self) -> Vec<DispatchHandle> {
        self.pending.borrow().keys().copied().collect()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Handles that were aborted before an outcome was delivered.
    pub fn aborted(&self) -> Vec<DispatchHandle> {
        self.aborted.borrow().keys().copied().collect()
    }

    /// Whether the request behind an aborted handle still exists.
    ///
    /// `None` if `handle` was never aborted or has been replayed.
    pub fn aborted_is_live(&self, handle: DispatchHandle) -> Option<bool> {
        self.aborted.borrow().get(&handle).map(Continuation::is_live)
    }

    /// The pending handle dispatched for `url`, if any.
    pub fn handle_for(&self, url: &str) -> Option<DispatchHandle> {
        let pending = self.pending.borrow();
        self.calls
            .borrow()
            .iter()
            .find(|(handle, call)| call.url == url && pending.contains_key(handle))
            .map(|(handle, _)| *handle)
    }

    /// Deliver `buffer` as the whole payload.
    pub fn succeed(&self, handle: DispatchHandle, buffer: Vec<u8>) -> bool {
        let size = buffer.len();
        self.succeed_with_size(handle, buffer, size)
    }

    /// Deliver a payload of `size` bytes held in a possibly larger buffer.
    pub fn succeed_with_size(&self, handle: DispatchHandle, buffer: Vec<u8>, size: usize) -> bool {
        match self.take_pending(handle) {
            Some(continuation) => {
                continuation.succeed(buffer, size);
                true
            }
            None => false,
        }
    }

    pub fn fail(&self, handle: DispatchHandle, code: Option<i32>, message: &str) -> bool {
        match self.take_pending(handle) {
            Some(continuation) => {
                continuation.fail(code, message);
                true
            }
            None => false,
        }
    }

    /// Fire the success continuation of an aborted fetch anyway.
    ///
    /// Returns whether an aborted continuation existed for `handle`.
    pub fn replay_aborted(&self, handle: DispatchHandle, buffer: Vec<u8>) -> bool {
        let continuation = self.aborted.borrow_mut().remove(&handle);
        match continuation {
            Some(continuation) => {
                let size = buffer.len();
                continuation.succeed(buffer, size);
                true
            }
            None => false,
        }
    }

    fn take_pending(&self, handle: DispatchHandle) -> Option<Continuation> {
        self.pending.borrow_mut().remove(&handle)
    }
}

impl HostFetch for ScriptedHost {
    fn dispatch(&self, call: FetchCall, continuation: Continuation) -> DispatchHandle {
        let handle = DispatchHandle::new(self.next_handle.get());
        self.next_handle.set(handle.raw() + 1);

        self.calls.borrow_mut().push((handle, call));
        self.pending.borrow_mut().insert(handle, continuation);
        handle
    }

    fn abort(&self, handle: DispatchHandle) {
        if let Some(continuation) = self.take_pending(handle) {
            self.aborted.borrow_mut().insert(handle, continuation);
        }
    }
}
