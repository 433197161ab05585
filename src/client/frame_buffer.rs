//! Reassembly of fragmented text frames.

use super::ClientError;

/// Accumulates frame fragments until the final one arrives.
///
/// A frame that grows past `max_bytes` is discarded as a whole: its
/// remaining fragments are skipped and the final fragment reports
/// [`ClientError::FrameTooLarge`]. The buffer is then ready for the next
/// frame.
#[derive(Debug)]
pub struct FrameBuffer {
    pending: String,
    received: usize,
    max_bytes: usize,
    overflowed: bool,
}

impl FrameBuffer {
    pub fn new(max_bytes: usize) -> Self {
        Self {
            pending: String::new(),
            received: 0,
            max_bytes,
            overflowed: false,
        }
    }

    /// Feed one fragment. Returns the complete frame once `is_final` is set.
    pub fn push(&mut self, chunk: &str, is_final: bool) -> Result<Option<String>, ClientError> {
        self.received += chunk.len();

        if !self.overflowed {
            if self.received > self.max_bytes {
                self.overflowed = true;
                self.pending = String::new();
            } else {
                self.pending.push_str(chunk);
            }
        }

        if !is_final {
            return Ok(None);
        }

        let size = self.received;
        let overflowed = self.overflowed;
        let frame = std::mem::take(&mut self.pending);
        self.received = 0;
        self.overflowed = false;

        if overflowed {
            return Err(ClientError::FrameTooLarge {
                size,
                max: self.max_bytes,
            });
        }
        Ok(Some(frame))
    }
}
