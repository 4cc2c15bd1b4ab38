//! `std::io` adapters, so an encoder can sit between a reader and a writer.

use std::io;

use super::Encoder;

impl io::Write for Encoder {
    /// Never fails; every byte is accepted.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(Encoder::write(self, buf))
    }

    /// Ends the current segment, see [`Encoder::flush`].
    fn flush(&mut self) -> io::Result<()> {
        Encoder::flush(self);
        Ok(())
    }
}

impl io::Read for Encoder {
    /// Drains encoded bytes. Returns `Ok(0)` when nothing is buffered, which
    /// is indistinguishable from end of stream.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(self.read_into(buf))
    }
}
