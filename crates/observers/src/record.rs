use std::io::{self, Write};

use compphys_core::Observer;
use compphys_kmc::{Action, Event, Step};

/// Writes one textual record per replayed event.
///
/// Each line has the form `"<queue_time> <execution_time> <process_id>"`,
/// optionally with a fixed number of decimals for the two times.
///
/// As an observer, a write failure stops the replay early; the error is kept
/// and can be retrieved with [`RecordWriter::take_error`].
#[derive(Debug)]
pub struct RecordWriter<W: Write> {
    writer: W,
    precision: Option<usize>,
    written: usize,
    error: Option<io::Error>,
}

impl<W: Write> RecordWriter<W> {
    /// Creates a writer that formats times with full precision.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            precision: None,
            written: 0,
            error: None,
        }
    }

    /// Formats both times with `digits` decimals.
    #[must_use]
    pub fn with_precision(mut self, digits: usize) -> Self {
        self.precision = Some(digits);
        self
    }

    /// Writes a single record line.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn write_event(&mut self, event: &Event) -> io::Result<()> {
        match self.precision {
            Some(p) => writeln!(self.writer, "{event:.p$}")?,
            None => writeln!(self.writer, "{event}")?,
        }
        self.written += 1;
        Ok(())
    }

    /// Writes a record for every event, in iteration order.
    ///
    /// Returns the number of records written by this call.
    ///
    /// # Errors
    ///
    /// Returns the first error from the underlying writer.
    pub fn write_all<I>(&mut self, events: I) -> io::Result<usize>
    where
        I: IntoIterator<Item = Event>,
    {
        let start = self.written;
        for event in events {
            self.write_event(&event)?;
        }
        Ok(self.written - start)
    }

    /// Returns the number of records written so far.
    #[must_use]
    pub fn written(&self) -> usize {
        self.written
    }

    /// Takes the error that stopped an observed replay, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Flushes and returns the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing fails.
    pub fn into_inner(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> Observer<Step, Action> for RecordWriter<W> {
    fn observe(&mut self, step: &Step) -> Option<Action> {
        match self.write_event(&step.event) {
            Ok(()) => None,
            Err(error) => {
                self.error = Some(error);
                Some(Action::StopEarly)
            }
        }
    }
}

/// Allows `&mut RecordWriter` to be passed to [`compphys_kmc::simulate`], so
/// the writer and any error stay available after the replay.
impl<W: Write> Observer<Step, Action> for &mut RecordWriter<W> {
    fn observe(&mut self, step: &Step) -> Option<Action> {
        (**self).observe(step)
    }
}
