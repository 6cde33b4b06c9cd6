/// Ensure the byte just past `size` is a NUL terminator.
///
/// A buffer that already carries the terminator is returned as is.
/// Otherwise the first `size` bytes are copied into a buffer one byte
/// larger and the original is dropped.
///
/// `size` must not exceed `buffer.len()`.
pub fn null_terminate(buffer: Vec<u8>, size: usize) -> Vec<u8> {
    if buffer.get(size) == Some(&0) {
        return buffer;
    }

    let mut terminated = Vec::with_capacity(size + 1);
    terminated.extend_from_slice(&buffer[..size]);
    terminated.push(0);
    terminated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_terminator_when_missing() {
        let out = null_terminate(b"0123456789".to_vec(), 10);
        assert_eq!(out.len(), 11);
        assert_eq!(&out[..10], b"0123456789");
        assert_eq!(out[10], 0);
    }

    #[test]
    fn keeps_existing_terminator() {
        let buffer = b"abc\0".to_vec();
        let ptr = buffer.as_ptr();
        let out = null_terminate(buffer, 3);
        assert_eq!(out.as_ptr(), ptr);
        assert_eq!(out, b"abc\0");
    }

    #[test]
    fn trailing_garbage_is_replaced() {
        let out = null_terminate(b"abcXYZ".to_vec(), 3);
        assert_eq!(out, b"abc\0");
    }

    #[test]
    fn empty_payload_becomes_single_terminator() {
        assert_eq!(null_terminate(Vec::new(), 0), vec![0]);
    }
}
