//! Batch input reader.
//!
//! Reads whitespace-separated integers as `(arrival, burst)` pairs.
//! Reading stops at end of input, at the first token that is not an
//! integer, or at a trailing value without a partner. Input is pulled one
//! line at a time and nothing past the `max_batch`-th pair is consumed
//! except a single look-ahead pair used to report truncation. Values are
//! not validated here.

use std::io::{self, BufRead};

use log::warn;

/// Integer tokens pulled lazily from a reader, one line at a time.
struct Tokens<R> {
    reader: R,
    line: Vec<u8>,
    pending: std::vec::IntoIter<i64>,
    exhausted: bool,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::new(),
            pending: Vec::new().into_iter(),
            exhausted: false,
        }
    }

    /// Next integer, or `None` at end of input or after a non-integer token.
    fn next_value(&mut self) -> io::Result<Option<i64>> {
        loop {
            if let Some(value) = self.pending.next() {
                return Ok(Some(value));
            }
            if self.exhausted {
                return Ok(None);
            }

            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                self.exhausted = true;
                return Ok(None);
            }

            // Invalid UTF-8 is just another token that fails to parse
            let text = String::from_utf8_lossy(&self.line);
            let mut values = Vec::new();
            for token in text.split_whitespace() {
                match token.parse::<i64>() {
                    Ok(value) => values.push(value),
                    Err(_) => {
                        self.exhausted = true;
                        break;
                    }
                }
            }
            self.pending = values.into_iter();
        }
    }

    fn next_pair(&mut self) -> io::Result<Option<(i64, i64)>> {
        let Some(arrival) = self.next_value()? else {
            return Ok(None);
        };
        Ok(self.next_value()?.map(|burst| (arrival, burst)))
    }
}

/// Reads at most `max_batch` pairs from a buffered reader.
///
/// Stops pulling from the reader once the cap is reached, so an endless
/// stream still yields a batch.
///
/// # Errors
/// Propagates I/O errors hit before the batch is complete. Errors while
/// looking past the cap are ignored.
pub fn read_pairs<R: BufRead>(reader: R, max_batch: usize) -> io::Result<Vec<(i64, i64)>> {
    let mut tokens = Tokens::new(reader);
    let mut pairs = Vec::new();
    while pairs.len() < max_batch {
        match tokens.next_pair()? {
            Some(pair) => pairs.push(pair),
            None => return Ok(pairs),
        }
    }

    if let Ok(Some(_)) = tokens.next_pair() {
        warn!("input truncated to {max_batch} processes");
    }
    Ok(pairs)
}

/// Parses pairs from text.
pub fn parse_pairs(text: &str, max_batch: usize) -> Vec<(i64, i64)> {
    // Reading from a byte slice cannot fail
    read_pairs(text.as_bytes(), max_batch).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let pairs = parse_pairs("0 5\n1 3\n2 1\n", 100);
        assert_eq!(pairs, vec![(0, 5), (1, 3), (2, 1)]);
    }

    #[test]
    fn test_parse_any_whitespace() {
        let pairs = parse_pairs("  0\t5 1\n\n3   ", 100);
        assert_eq!(pairs, vec![(0, 5), (1, 3)]);
    }

    #[test]
    fn test_parse_stops_at_garbage() {
        let pairs = parse_pairs("0 5 1 x 2 1", 100);
        assert_eq!(pairs, vec![(0, 5)]);
    }

    #[test]
    fn test_parse_drops_dangling_value() {
        let pairs = parse_pairs("0 5 7", 100);
        assert_eq!(pairs, vec![(0, 5)]);
    }

    #[test]
    fn test_parse_truncates_at_cap() {
        let text: String = (0..150).map(|i| format!("{i} 1\n")).collect();
        let pairs = parse_pairs(&text, 100);
        assert_eq!(pairs.len(), 100);
        assert_eq!(pairs[99], (99, 1));
    }

    #[test]
    fn test_parse_keeps_invalid_values() {
        // Validation happens downstream
        let pairs = parse_pairs("-1 0", 100);
        assert_eq!(pairs, vec![(-1, 0)]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_pairs("", 100).is_empty());
    }

    #[test]
    fn test_read_pairs_from_reader() {
        let input = io::Cursor::new("0 5\n1 3\n");
        let pairs = read_pairs(input, 100).unwrap();
        assert_eq!(pairs, vec![(0, 5), (1, 3)]);
    }

    /// Serves `data`, then fails every later read.
    struct BreaksAfter {
        data: Vec<u8>,
        pos: usize,
    }

    impl BreaksAfter {
        fn lines(line: &str, count: usize) -> Self {
            Self {
                data: line.repeat(count).into_bytes(),
                pos: 0,
            }
        }
    }

    impl io::Read for BreaksAfter {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.pos >= self.data.len() {
                return Err(io::Error::other("stream broke"));
            }
            let n = buf.len().min(self.data.len() - self.pos);
            buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    #[test]
    fn test_read_stops_at_cap_before_broken_stream() {
        let reader = io::BufReader::new(BreaksAfter::lines("0 1\n", 1000));
        let pairs = read_pairs(reader, 100).unwrap();
        assert_eq!(pairs.len(), 100);
    }

    #[test]
    fn test_read_error_after_exact_cap_is_ignored() {
        // The look-ahead hits the error; the batch is already complete
        let reader = io::BufReader::new(BreaksAfter::lines("0 1\n", 100));
        let pairs = read_pairs(reader, 100).unwrap();
        assert_eq!(pairs.len(), 100);
    }

    #[test]
    fn test_read_error_before_cap_propagates() {
        let reader = io::BufReader::new(BreaksAfter::lines("0 1\n", 10));
        let err = read_pairs(reader, 100).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
    }

    #[test]
    fn test_read_invalid_utf8_past_cap() {
        let mut bytes = b"0 5\n1 3\n".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
        let pairs = read_pairs(io::Cursor::new(bytes), 2).unwrap();
        assert_eq!(pairs, vec![(0, 5), (1, 3)]);
    }

    #[test]
    fn test_read_invalid_utf8_stops_like_garbage() {
        let mut bytes = b"0 5\n".to_vec();
        bytes.extend_from_slice(&[0xff, b' ', b'1', b'\n']);
        let pairs = read_pairs(io::Cursor::new(bytes), 100).unwrap();
        assert_eq!(pairs, vec![(0, 5)]);
    }
}
