use heapless::Vec;

/// Usable bytes of the default response buffer.
pub const RESPONSE_CAPACITY: usize = 255;

/// Bounded accumulation buffer for one transaction's response.
///
/// Only printable ASCII and whitespace is ever stored, so the contents are
/// always valid UTF-8.
#[derive(Debug, Default)]
pub struct ResponseBuffer<const N: usize = RESPONSE_CAPACITY> {
    data: Vec<u8, N>,
    overflowed: bool,
}

impl<const N: usize> ResponseBuffer<N> {
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            overflowed: false,
        }
    }

    pub fn clear(&mut self) {
        self.data.clear();
        self.overflowed = false;
    }

    /// Store `byte` if it belongs in a response. Returns `false` for
    /// filtered bytes, which leave the buffer untouched.
    ///
    /// Pushing into a full buffer marks it overflowed.
    pub fn push(&mut self, byte: u8) -> bool {
        if !is_response_byte(byte) {
            return false;
        }
        if self.data.push(byte).is_err() {
            self.overflowed = true;
            return false;
        }
        true
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.data.is_full()
    }

    pub fn overflowed(&self) -> bool {
        self.overflowed
    }

    pub fn ends_with(&self, token: &str) -> bool {
        self.data.ends_with(token.as_bytes())
    }

    /// Strip leading and trailing whitespace in place.
    pub fn trim(&mut self) {
        let start = self
            .data
            .iter()
            .position(|b| !b.is_ascii_whitespace())
            .unwrap_or(self.data.len());
        let end = self
            .data
            .iter()
            .rposition(|b| !b.is_ascii_whitespace())
            .map_or(start, |i| i + 1);

        self.data.copy_within(start..end, 0);
        self.data.truncate(end - start);
    }

    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.data).unwrap_or_default()
    }
}

fn is_response_byte(byte: u8) -> bool {
    byte.is_ascii_graphic() || byte.is_ascii_whitespace()
}
