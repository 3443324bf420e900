use std::io::{self, ErrorKind, Write};

/// Destination for finished report lines.
pub trait LineSink {
    fn emit(&mut self, line: &str) -> io::Result<()>;
}

/// Collects lines in memory; used by tests and by callers that post-process.
impl LineSink for Vec<String> {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

/// Writes to stdout. Logging goes to stderr, so stdout stays pipeable.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl LineSink for StdoutSink {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        write_line(&mut io::stdout().lock(), line)
    }
}

/// A reader that hung up (`| head`) ends output quietly; other failures surface.
pub(crate) fn write_line<W: Write>(out: &mut W, line: &str) -> io::Result<()> {
    match writeln!(out, "{}", line) {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
