use std::path::Path;
use std::rc::Rc;

use tracing::debug;

use super::{HostFetch, Request};
use crate::core::AdmissionController;
use crate::data::Snapshot;

/// Owner of the admission controller and the host primitive.
///
/// Every request created through a runtime shares its in-flight budget.
pub struct FetchRuntime {
    host: Rc<dyn HostFetch>,
    admission: Rc<AdmissionController>,
}

impl FetchRuntime {
    /// Set up the runtime.
    ///
    /// This backend keeps nothing on disk, so `cache_dir` is ignored.
    pub fn init<H: HostFetch + 'static>(host: Rc<H>, cache_dir: impl AsRef<Path>) -> Self {
        debug!(cache_dir = %cache_dir.as_ref().display(), "cache directory ignored");
        Self::new(host)
    }

    pub fn new(host: Rc<dyn HostFetch>) -> Self {
        Self {
            host,
            admission: Rc::new(AdmissionController::new()),
        }
    }

    /// Allocate an unstarted request. No I/O happens until it is polled.
    pub fn create(&self, url: impl Into<String>) -> Request {
        Request::new(url.into(), Rc::clone(&self.host), Rc::clone(&self.admission))
    }

    pub fn is_finished(&self, request: &Request) -> bool {
        request.is_finished()
    }

    /// See [`Request::get_data`].
    pub fn get_data(&self, request: &Request) -> Snapshot {
        request.get_data()
    }

    /// Delete a request. `None` is a no-op.
    pub fn delete(&self, request: Option<Request>) {
        if let Some(request) = request {
            request.delete();
        }
    }

    pub fn make_fresh(&self, request: &Request) {
        request.make_fresh();
    }

    /// Number of requests currently dispatched to the host.
    pub fn in_flight(&self) -> usize {
        self.admission.in_flight()
    }

    pub fn capacity(&self) -> usize {
        self.admission.capacity()
    }
}

impl std::fmt::Debug for FetchRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchRuntime")
            .field("admission", &self.admission)
            .finish_non_exhaustive()
    }
}
