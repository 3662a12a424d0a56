//! Line reader
//!
//! `BufRead::read_until` would do the job, but it grows its buffer infallibly - on allocation
//! failure the whole process aborts. Here every growth goes through `try_reserve`, so running out
//! of memory on absurdly long line is just an error which can be reported.

use crate::error::{Error, Result};
use std::io::{BufRead, ErrorKind};

/// Capacity of fresh line buffer; it is doubled (at least) any time it is full
const INITIAL_CAPACITY: usize = 16;

/// Iterator over raw input lines, without the `\n` terminator.
///
/// End of input right after terminator (or on empty input) ends iteration, end of input after
/// some characters yields the last, unterminated line.
pub struct Lines<R> {
    input: R,
    done: bool,
}

impl<R: BufRead> Lines<R> {
    pub fn new(input: R) -> Self {
        Self { input, done: false }
    }

    /// Reads single line, `None` if there is nothing more to read
    fn read_line(&mut self) -> Result<Option<Vec<u8>>> {
        let mut line = Vec::new();
        grow(&mut line, INITIAL_CAPACITY)?;

        loop {
            let available = match self.input.fill_buf() {
                Ok(buf) => buf,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            };

            if available.is_empty() {
                self.done = true;
                return Ok(if line.is_empty() { None } else { Some(line) });
            }

            let (chunk, terminated) = match available.iter().position(|&b| b == b'\n') {
                Some(end) => (&available[..end], true),
                None => (available, false),
            };

            if line.capacity() - line.len() < chunk.len() {
                let additional = std::cmp::max(chunk.len(), line.capacity());
                grow(&mut line, additional)?;
            }
            line.extend_from_slice(chunk);

            // Terminator is consumed, but not kept
            let consumed = chunk.len() + terminated as usize;
            self.input.consume(consumed);

            if terminated {
                return Ok(Some(line));
            }
        }
    }
}

fn grow(buf: &mut Vec<u8>, additional: usize) -> Result<()> {
    buf.try_reserve(additional)
        .map_err(|_| Error::Alloc { what: "line buffer" })
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let line = self.read_line();
        if line.is_err() {
            self.done = true;
        }
        line.transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::BufReader;

    fn lines(input: &[u8]) -> Vec<Vec<u8>> {
        Lines::new(input).collect::<Result<_>>().unwrap()
    }

    #[test]
    fn empty_input_has_no_lines() {
        assert!(lines(b"").is_empty());
    }

    #[test]
    fn terminator_is_stripped() {
        assert_eq!(lines(b"101\n10\n"), vec![b"101".to_vec(), b"10".to_vec()]);
    }

    #[test]
    fn unterminated_last_line() {
        assert_eq!(lines(b"101\n10"), vec![b"101".to_vec(), b"10".to_vec()]);
    }

    #[test]
    fn empty_lines_are_kept() {
        assert_eq!(
            lines(b"\n\n1\n"),
            vec![Vec::new(), Vec::new(), b"1".to_vec()]
        );
    }

    #[test]
    fn carriage_return_is_not_terminator() {
        assert_eq!(lines(b"11\r\n"), vec![b"11\r".to_vec()]);
    }

    #[test]
    fn line_longer_than_read_buffer() {
        let long = vec![b'1'; 10_000];
        let mut input = long.clone();
        input.push(b'\n');
        input.extend_from_slice(b"0");

        // Tiny buffer forces line to be assembled from many chunks
        let reader = BufReader::with_capacity(7, input.as_slice());
        let read: Vec<_> = Lines::new(reader).collect::<Result<_>>().unwrap();
        assert_eq!(read, vec![long, b"0".to_vec()]);
    }

    #[test]
    fn growth_failure_is_alloc_error() {
        let error = grow(&mut Vec::new(), usize::MAX).unwrap_err();
        assert!(matches!(error, Error::Alloc { what: "line buffer" }));
        assert_eq!(
            error.to_string(),
            "Unable to allocate memory for line buffer"
        );
    }

    #[test]
    fn read_error_ends_iteration() {
        struct Failing;

        impl std::io::Read for Failing {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(ErrorKind::Other, "broken"))
            }
        }

        let mut lines = Lines::new(BufReader::new(Failing));
        assert!(matches!(lines.next(), Some(Err(Error::Io(_)))));
        assert!(lines.next().is_none());
    }
}
