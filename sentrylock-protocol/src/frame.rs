//! Sentinel framing for password payloads
//!
//! Frame format:
//! - CHARS (1-6 bytes): the password characters
//! - SENTINEL (1 byte): `#` terminator
//!
//! There is no length prefix and no checksum; the receiver accumulates
//! bytes until it sees the sentinel.

use heapless::Vec;

/// End-of-password sentinel byte
pub const SENTINEL: u8 = b'#';

/// Maximum password length in characters
pub const MAX_PASSWORD_LEN: usize = 6;

/// Maximum framed payload size (password + sentinel)
pub const FRAMED_MAX: usize = MAX_PASSWORD_LEN + 1;

/// Errors that can occur during framing or deframing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Password exceeds the maximum length
    TooLong,
    /// Password has no characters before the sentinel
    Empty,
    /// Received more characters than a password can hold
    Overflow,
}

/// Frame a password for transmission
///
/// Returns the password bytes with the sentinel appended.
pub fn frame_password(password: &[u8]) -> Result<Vec<u8, FRAMED_MAX>, FrameError> {
    if password.is_empty() {
        return Err(FrameError::Empty);
    }
    if password.len() > MAX_PASSWORD_LEN {
        return Err(FrameError::TooLong);
    }

    let mut framed = Vec::new();
    framed
        .extend_from_slice(password)
        .map_err(|_| FrameError::TooLong)?;
    framed.push(SENTINEL).map_err(|_| FrameError::TooLong)?;
    Ok(framed)
}

/// State machine for deframing incoming password bytes
///
/// Feed bytes as they arrive; a complete password is returned when the
/// sentinel is seen. The deframer resets itself after every complete
/// password and after every error.
#[derive(Debug, Clone, Default)]
pub struct PasswordDeframer {
    buffer: Vec<u8, MAX_PASSWORD_LEN>,
}

impl PasswordDeframer {
    /// Create a new deframer
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Reset the deframer state
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Feed a single byte to the deframer
    ///
    /// Returns `Ok(Some(password))` when the sentinel completes a password,
    /// `Ok(None)` when more bytes are needed, or `Err` on a malformed
    /// payload.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Vec<u8, MAX_PASSWORD_LEN>>, FrameError> {
        if byte == SENTINEL {
            if self.buffer.is_empty() {
                return Err(FrameError::Empty);
            }
            let password = self.buffer.clone();
            self.reset();
            return Ok(Some(password));
        }

        if self.buffer.push(byte).is_err() {
            self.reset();
            return Err(FrameError::Overflow);
        }
        Ok(None)
    }

    /// Feed multiple bytes to the deframer
    ///
    /// Returns the first complete password found, if any. Remaining bytes
    /// after a complete password are not consumed.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Result<Option<Vec<u8, MAX_PASSWORD_LEN>>, FrameError> {
        for &byte in bytes {
            if let Some(password) = self.feed(byte)? {
                return Ok(Some(password));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_frame_appends_sentinel() {
        let framed = frame_password(b"1234").unwrap();
        assert_eq!(framed.as_slice(), b"1234#");
    }

    #[test]
    fn test_frame_rejects_empty() {
        assert_eq!(frame_password(b""), Err(FrameError::Empty));
    }

    #[test]
    fn test_frame_rejects_too_long() {
        assert_eq!(frame_password(b"1234567"), Err(FrameError::TooLong));
    }

    #[test]
    fn test_deframe_roundtrip() {
        let framed = frame_password(b"123456").unwrap();

        let mut deframer = PasswordDeframer::new();
        let password = deframer.feed_bytes(&framed).unwrap().unwrap();
        assert_eq!(password.as_slice(), b"123456");
    }

    #[test]
    fn test_deframe_waits_for_sentinel() {
        let mut deframer = PasswordDeframer::new();
        assert_eq!(deframer.feed(b'1').unwrap(), None);
        assert_eq!(deframer.feed(b'2').unwrap(), None);
        let password = deframer.feed(SENTINEL).unwrap().unwrap();
        assert_eq!(password.as_slice(), b"12");
    }

    #[test]
    fn test_deframe_overflow_resets() {
        let mut deframer = PasswordDeframer::new();
        let result = deframer.feed_bytes(b"1234567");
        assert_eq!(result, Err(FrameError::Overflow));

        // Deframer is usable again after the error
        let password = deframer.feed_bytes(b"99#").unwrap().unwrap();
        assert_eq!(password.as_slice(), b"99");
    }

    #[test]
    fn test_deframe_bare_sentinel_is_error() {
        let mut deframer = PasswordDeframer::new();
        assert_eq!(deframer.feed(SENTINEL), Err(FrameError::Empty));
    }

    #[test]
    fn test_deframe_back_to_back_passwords() {
        let mut deframer = PasswordDeframer::new();
        let first = deframer.feed_bytes(b"1234#").unwrap().unwrap();
        assert_eq!(first.as_slice(), b"1234");

        let second = deframer.feed_bytes(b"4321#").unwrap().unwrap();
        assert_eq!(second.as_slice(), b"4321");
    }

    proptest! {
        #[test]
        fn prop_wire_roundtrip(password in proptest::collection::vec(0x20u8..0x7F, 1..=6)) {
            // '#' inside a password would terminate the frame early
            prop_assume!(!password.contains(&SENTINEL));

            let framed = frame_password(&password).unwrap();
            let mut deframer = PasswordDeframer::new();
            let decoded = deframer.feed_bytes(&framed).unwrap().unwrap();
            prop_assert_eq!(decoded.as_slice(), password.as_slice());
        }
    }
}
