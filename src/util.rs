// util.rs

use std::io::{ErrorKind, Result, Write};

pub fn writeln_ignore_broken_pipe<W: Write, S: AsRef<str>>(mut w: W, s: S) -> Result<()> {
    match writeln!(w, "{}", s.as_ref()) {
        Err(ref e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

pub fn flush_ignore_broken_pipe<W: Write>(mut w: W) -> Result<()> {
    match w.flush() {
        Err(ref e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(ErrorKind::BrokenPipe, "closed"))
        }
    }

    struct Full;

    impl Write for Full {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(ErrorKind::Other, "disk full"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn appends_newline() {
        let mut out = Vec::new();
        writeln_ignore_broken_pipe(&mut out, "ls -la").unwrap();
        assert_eq!(out, b"ls -la\n");
    }

    #[test]
    fn broken_pipe_is_not_an_error() {
        assert!(writeln_ignore_broken_pipe(ClosedPipe, "x").is_ok());
        assert!(flush_ignore_broken_pipe(ClosedPipe).is_ok());
    }

    #[test]
    fn other_errors_propagate() {
        let err = writeln_ignore_broken_pipe(Full, "x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other);
    }
}
