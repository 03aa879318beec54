//! Traced item writer

use crate::error::SecsResult;
use crate::tracer::SecsTracer;
use secs_codec::ItemEncoder;
use secs_core::Item;
use std::io::Write;

/// Writes encoded item trees to a sink and reports each one to a tracer
pub struct TraceWriter<W: Write, T: SecsTracer> {
    writer: W,
    tracer: T,
    encoder: ItemEncoder,
}

impl<W: Write, T: SecsTracer> TraceWriter<W, T> {
    /// Create a new traced writer
    pub fn new(writer: W, tracer: T) -> Self {
        Self {
            writer,
            tracer,
            encoder: ItemEncoder::new(),
        }
    }

    /// Encode `item` with all of its children and write it to the sink
    ///
    /// # Returns
    ///
    /// Number of bytes written
    pub fn write_item(&mut self, item: &Item, tag: u32) -> SecsResult<usize> {
        self.encoder.clear();
        if let Err(e) = self.encoder.encode_item(item) {
            self.tracer.trace_error(&format!("Failed to encode item: {}", e));
            return Err(e);
        }

        if let Err(e) = self.writer.write_all(self.encoder.as_bytes()) {
            self.tracer.trace_error(&format!("Failed to write item: {}", e));
            return Err(e.into());
        }

        self.tracer.trace_item_out(item, tag);
        Ok(self.encoder.len())
    }

    /// Decode exactly one item tree from `bytes` and report it as received
    ///
    /// Bytes left over after the item are rejected, as in
    /// [`secs_codec::decode`].
    pub fn read_item(&self, bytes: &[u8], tag: u32) -> SecsResult<Item> {
        match secs_codec::decode(bytes) {
            Ok(item) => {
                self.tracer.trace_item_in(&item, tag);
                Ok(item)
            }
            Err(e) => {
                self.tracer.trace_error(&format!("Failed to decode item: {}", e));
                Err(e)
            }
        }
    }

    /// Flush the sink
    pub fn flush(&mut self) -> SecsResult<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn tracer(&self) -> &T {
        &self.tracer
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
