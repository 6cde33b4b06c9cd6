use std::cell::RefCell;
use std::rc::Rc;

use bytes::Bytes;
use tracing::{debug, trace};

use super::{Continuation, DispatchHandle, FetchCall, HostFetch};
use crate::core::AdmissionController;
use crate::data::{RequestState, Snapshot};
use crate::error::FetchFailure;

pub(crate) type SharedSlot = RefCell<Slot>;

/// Mutable state of one request, shared with its continuation.
#[derive(Debug)]
pub(crate) struct Slot {
    pub(crate) url: Rc<str>,
    /// Present exactly while the request is in flight.
    pub(crate) dispatch: Option<DispatchHandle>,
    pub(crate) done: bool,
    pub(crate) status_code: i32,
    pub(crate) data: Option<Bytes>,
    pub(crate) size: usize,
    pub(crate) failure: Option<FetchFailure>,
}

impl Slot {
    fn new(url: Rc<str>) -> Self {
        Self {
            url,
            dispatch: None,
            done: false,
            status_code: 0,
            data: None,
            size: 0,
            failure: None,
        }
    }

    fn state(&self) -> RequestState {
        if self.done {
            RequestState::Done
        } else if self.dispatch.is_some() {
            RequestState::InFlight
        } else {
            RequestState::Unstarted
        }
    }
}

/// One remote resource, fetched lazily on the first poll that finds budget.
///
/// Dropping a request deletes it: an in-flight fetch is aborted and its
/// admission slot released, and its continuation will never run.
pub struct Request {
    url: Rc<str>,
    slot: Rc<SharedSlot>,
    host: Rc<dyn HostFetch>,
    admission: Rc<AdmissionController>,
}

impl Request {
    pub(crate) fn new(
        url: String,
        host: Rc<dyn HostFetch>,
        admission: Rc<AdmissionController>,
    ) -> Self {
        let url: Rc<str> = url.into();
        debug!(url = %url, "request created");
        Self {
            slot: Rc::new(RefCell::new(Slot::new(Rc::clone(&url)))),
            url,
            host,
            admission,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn state(&self) -> RequestState {
        self.slot.borrow().state()
    }

    pub fn is_finished(&self) -> bool {
        self.slot.borrow().done
    }

    /// The host handle while the fetch is in flight.
    pub fn dispatch_handle(&self) -> Option<DispatchHandle> {
        self.slot.borrow().dispatch
    }

    /// Why the fetch failed, once it has.
    pub fn failure(&self) -> Option<FetchFailure> {
        self.slot.borrow().failure
    }

    /// Poll the request.
    ///
    /// An unstarted request is dispatched if the admission controller has a
    /// free slot. The returned snapshot is only meaningful once
    /// [`is_finished`](Self::is_finished) is true.
    pub fn get_data(&self) -> Snapshot {
        self.try_dispatch();

        let slot = self.slot.borrow();
        Snapshot {
            data: slot.data.clone(),
            size: slot.size,
            status_code: slot.status_code,
        }
    }

    /// Cache-bypass hint. This backend has no cache, so it does nothing.
    pub fn make_fresh(&self) {}

    /// Delete the request, aborting it if in flight.
    pub fn delete(self) {
        drop(self);
    }

    fn try_dispatch(&self) {
        if self.state() != RequestState::Unstarted {
            return;
        }
        if !self.admission.try_acquire() {
            trace!(url = %self.url, in_flight = self.admission.in_flight(), "no budget, staying unstarted");
            return;
        }

        let continuation = Continuation::new(Rc::downgrade(&self.slot), Rc::clone(&self.admission));
        let handle = self.host.dispatch(FetchCall::get(self.url.to_string()), continuation);

        // The host may already have delivered; only a pending fetch keeps its handle.
        let mut slot = self.slot.borrow_mut();
        if !slot.done {
            slot.dispatch = Some(handle);
        }
        debug!(url = %self.url, %handle, in_flight = self.admission.in_flight(), "request dispatched");
    }
}

impl Drop for Request {
    fn drop(&mut self) {
        let handle = {
            let mut slot = self.slot.borrow_mut();
            // Any late delivery from here on sees a finished request.
            slot.done = true;
            slot.dispatch.take()
        };

        if let Some(handle) = handle {
            self.host.abort(handle);
            self.admission.release();
            debug!(url = %self.url, %handle, "in-flight request aborted");
        }
    }
}

impl std::fmt::Debug for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let slot = self.slot.borrow();
        f.debug_struct("Request")
            .field("url", &self.url)
            .field("state", &slot.state())
            .field("dispatch", &slot.dispatch)
            .field("status_code", &slot.status_code)
            .field("size", &slot.size)
            .finish()
    }
}
