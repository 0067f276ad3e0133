//! src/encryptor/frame.rs
//! Note-prefix framing for cipher output
//!
//! Two phases, one flag: before the first chunk the note is emitted, after it
//! chunks pass through unchanged. The note is emitted even when the first
//! chunk is empty, so an empty plaintext still produces a 16-byte payload.

use crate::aliases::Note16;
use crate::consts::NOTE_SIZE;
use crate::error::Result;
use std::io::Write;
use secure_gate::RevealSecret;

/// Pure chunk-sequence adapter: note once, then pass-through.
#[derive(Debug)]
pub struct NoteFramer {
    note: [u8; NOTE_SIZE],
    header_emitted: bool,
}

impl NoteFramer {
    pub fn new(note: &Note16) -> Self {
        Self {
            note: *note.expose_secret(),
            header_emitted: false,
        }
    }

    /// The note bytes the first time this is called, `None` afterwards.
    #[inline]
    pub fn take_header(&mut self) -> Option<[u8; NOTE_SIZE]> {
        if self.header_emitted {
            None
        } else {
            self.header_emitted = true;
            Some(self.note)
        }
    }

    /// Frame one chunk: note + chunk on the first call, chunk alone afterwards.
    pub fn frame(&mut self, chunk: &[u8]) -> Vec<u8> {
        match self.take_header() {
            Some(header) => {
                let mut out = Vec::with_capacity(NOTE_SIZE + chunk.len());
                out.extend_from_slice(&header);
                out.extend_from_slice(chunk);
                out
            }
            None => chunk.to_vec(),
        }
    }

    #[inline]
    pub const fn header_emitted(&self) -> bool {
        self.header_emitted
    }
}

/// [`NoteFramer`] writing straight into a sink.
pub struct FramedWriter<W> {
    inner: W,
    framer: NoteFramer,
}

impl<W: Write> FramedWriter<W> {
    pub fn new(inner: W, note: &Note16) -> Self {
        Self {
            inner,
            framer: NoteFramer::new(note),
        }
    }

    /// Write one cipher chunk, preceded by the note if this is the first.
    pub fn write_chunk(&mut self, chunk: &[u8]) -> Result<()> {
        if let Some(header) = self.framer.take_header() {
            self.inner.write_all(&header)?;
        }
        if !chunk.is_empty() {
            self.inner.write_all(chunk)?;
        }
        Ok(())
    }

    /// Make sure the note went out, flush, and hand back the sink.
    pub fn finish(mut self) -> Result<W> {
        self.write_chunk(&[])?;
        self.inner.flush()?;
        Ok(self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note() -> Note16 {
        Note16::new([0xEE; 16])
    }

    #[test]
    fn header_only_once() {
        let mut framer = NoteFramer::new(&note());
        let first = framer.frame(b"abc");
        assert_eq!(&first[..16], &[0xEE; 16]);
        assert_eq!(&first[16..], b"abc");
        assert!(framer.header_emitted());
        assert_eq!(framer.frame(b"def"), b"def");
    }

    #[test]
    fn empty_first_chunk_still_emits_header() {
        let mut framer = NoteFramer::new(&note());
        assert_eq!(framer.frame(&[]), vec![0xEE; 16]);
        assert!(framer.frame(&[]).is_empty());
    }

    #[test]
    fn writer_with_no_chunks_emits_header_on_finish() {
        let out = FramedWriter::new(Vec::new(), &note()).finish().unwrap();
        assert_eq!(out, vec![0xEE; 16]);
    }

    #[test]
    fn writer_concatenates() {
        let mut w = FramedWriter::new(Vec::new(), &note());
        w.write_chunk(b"12").unwrap();
        w.write_chunk(b"34").unwrap();
        let out = w.finish().unwrap();
        assert_eq!(out.len(), 20);
        assert_eq!(&out[16..], b"1234");
    }
}
