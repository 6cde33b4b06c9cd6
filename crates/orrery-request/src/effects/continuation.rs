use std::rc::{Rc, Weak};

use bytes::Bytes;
use tracing::{debug, warn};

use super::request::SharedSlot;
use crate::core::{AdmissionController, ContentKind, classify, null_terminate};
use crate::data::STATUS_OK;
use crate::error::FetchFailure;

/// Completion callback handed to the host with each dispatch.
///
/// Both entry points consume the continuation, so at most one of them can
/// run per dispatch. A continuation whose request has been deleted does
/// nothing.
#[derive(Debug)]
pub struct Continuation {
    slot: Weak<SharedSlot>,
    admission: Rc<AdmissionController>,
}

impl Continuation {
    pub(crate) fn new(slot: Weak<SharedSlot>, admission: Rc<AdmissionController>) -> Self {
        Self { slot, admission }
    }

    /// Whether the request this continuation completes still exists.
    pub fn is_live(&self) -> bool {
        self.slot.strong_count() > 0
    }

    /// Deliver a fetched payload.
    ///
    /// `size` is the payload length; `buffer` may extend past it. Text
    /// resources get a NUL terminator at `buffer[size]` if it is missing.
    pub fn succeed(self, buffer: Vec<u8>, size: usize) {
        let Some(shared) = self.slot.upgrade() else {
            debug!(size, "success delivered to a deleted request, ignoring");
            return;
        };
        let mut slot = shared.borrow_mut();
        if slot.done {
            warn!(url = %slot.url, "success delivered to a finished request, ignoring");
            return;
        }

        let size = if size > buffer.len() {
            warn!(url = %slot.url, size, len = buffer.len(), "host size exceeds buffer, truncating");
            buffer.len()
        } else {
            size
        };
        let buffer = match classify(&slot.url) {
            ContentKind::Text => null_terminate(buffer, size),
            ContentKind::Binary => buffer,
        };

        slot.dispatch = None;
        slot.status_code = STATUS_OK;
        slot.data = Some(Bytes::from(buffer));
        slot.size = size;
        slot.done = true;
        debug!(url = %slot.url, size, "request loaded");
        drop(slot);

        self.admission.release();
    }

    /// Report a failed fetch.
    ///
    /// `code` is surfaced verbatim as the status code; a missing or zero
    /// code becomes 499.
    pub fn fail(self, code: Option<i32>, message: &str) {
        let Some(shared) = self.slot.upgrade() else {
            debug!(?code, reason = message, "error delivered to a deleted request, ignoring");
            return;
        };
        let mut slot = shared.borrow_mut();
        if slot.done {
            warn!(url = %slot.url, ?code, "error delivered to a finished request, ignoring");
            return;
        }

        let failure = FetchFailure::from_host_code(code);
        slot.dispatch = None;
        slot.status_code = failure.status_code();
        slot.failure = Some(failure);
        slot.done = true;
        debug!(url = %slot.url, status = slot.status_code, reason = message, "request failed");
        drop(slot);

        self.admission.release();
    }
}
