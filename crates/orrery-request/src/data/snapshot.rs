use bytes::Bytes;

/// Point-in-time view of a request's payload and status.
///
/// `data` and `status_code` are only meaningful once the request is done.
/// For text resources `data` is one byte longer than `size` and ends with
/// a NUL terminator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub data: Option<Bytes>,
    pub size: usize,
    pub status_code: i32,
}

impl Snapshot {
    /// The payload without any terminator.
    ///
    /// `None` when there is no payload or `size` runs past the buffer.
    pub fn bytes(&self) -> Option<&[u8]> {
        self.data.as_ref().and_then(|data| data.get(..self.size))
    }

    /// The payload as UTF-8, if present and valid.
    pub fn text(&self) -> Option<&str> {
        self.bytes().and_then(|bytes| std::str::from_utf8(bytes).ok())
    }

    /// Whether the byte just past `size` is a NUL terminator.
    pub fn is_terminated(&self) -> bool {
        self.data
            .as_ref()
            .is_some_and(|data| data.get(self.size) == Some(&0))
    }
}
