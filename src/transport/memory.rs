//! # In-Memory Transport
//!
//! Records every write as a separate chunk and answers reads from a queue of
//! scripted reply bytes. Used by the tests and by the CLI's `--dry-run`.

use std::collections::VecDeque;

use super::Transport;
use crate::error::HoinError;

#[derive(Debug, Default, Clone)]
pub struct MemoryTransport {
    writes: Vec<Vec<u8>>,
    replies: VecDeque<u8>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport that will answer reads with `replies`, in order.
    pub fn with_replies(replies: impl IntoIterator<Item = u8>) -> Self {
        Self {
            writes: Vec::new(),
            replies: replies.into_iter().collect(),
        }
    }

    /// Queue another reply byte.
    pub fn push_reply(&mut self, b: u8) {
        self.replies.push_back(b);
    }

    /// Each `write_all` call, in order.
    pub fn writes(&self) -> &[Vec<u8>] {
        &self.writes
    }

    /// Everything written, concatenated.
    pub fn bytes(&self) -> Vec<u8> {
        self.writes.concat()
    }

    pub fn clear(&mut self) {
        self.writes.clear();
    }
}

impl Transport for MemoryTransport {
    fn write_all(&mut self, data: &[u8]) -> Result<(), HoinError> {
        self.writes.push(data.to_vec());
        Ok(())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, HoinError> {
        let n = buf.len().min(self.replies.len());
        for (slot, b) in buf.iter_mut().zip(self.replies.drain(..n)) {
            *slot = b;
        }
        Ok(n)
    }
}
