use crate::source_location::{SourceLocation, SourceSpan};
use nohash_hasher::IntSet;
use serde::Serialize;

/// A place in the source that names a block type, like `Array16<u8>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CapacityUse {
    pub capacity: i64,
    pub span: SourceSpan,
}

/// Walks Rust source text and yields every identifier of the form
/// `<prefix><digits>`. Comments, string literals and char literals are
/// skipped so that text inside them is never mistaken for a type name.
pub struct Scanner<'a> {
    source: &'a str,
    prefix: &'a str,
    loc: SourceLocation,
    last_loc: SourceLocation,
    offset: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str, prefix: &'a str) -> Self {
        Scanner {
            source,
            prefix,
            loc: SourceLocation::start(),
            last_loc: SourceLocation::start(),
            offset: 0,
        }
    }

    fn rest(&self) -> &'a str {
        &self.source[self.offset..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    fn advance(&mut self) -> Option<(usize, SourceLocation, char)> {
        let c = self.peek()?;

        let offset = self.offset;
        let loc = self.loc;

        if c == '\n' {
            self.loc.line += 1;
            self.loc.col = 1;
        } else {
            self.loc.col += 1;
        }

        self.offset += c.len_utf8();
        self.last_loc = loc;

        Some((offset, loc, c))
    }

    // Returns the offset just past the run and the location of the last
    // character consumed so far.
    fn read_while<P: Fn(char) -> bool>(&mut self, predicate: P) -> (usize, SourceLocation) {
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }

            self.advance();
        }

        (self.offset, self.last_loc)
    }

    fn skip_line(&mut self) {
        while let Some((_, _, c)) = self.advance() {
            if c == '\n' {
                break;
            }
        }
    }

    // Block comments nest in Rust.
    fn skip_block_comment(&mut self) {
        let mut depth = 1;

        while depth > 0 {
            match (self.peek(), self.peek_second()) {
                (Some('/'), Some('*')) => {
                    self.advance();
                    self.advance();
                    depth += 1;
                }
                (Some('*'), Some('/')) => {
                    self.advance();
                    self.advance();
                    depth -= 1;
                }
                (Some(_), _) => {
                    self.advance();
                }
                (None, _) => break,
            }
        }
    }

    fn skip_string(&mut self) {
        while let Some((_, _, c)) = self.advance() {
            match c {
                '\\' => {
                    self.advance();
                }
                '"' => break,
                _ => {}
            }
        }
    }

    // Called with the `r` already consumed and the cursor on `#` or `"`.
    fn skip_raw_string(&mut self) {
        let mut hashes = 0;
        while self.peek() == Some('#') {
            self.advance();
            hashes += 1;
        }

        if self.peek() != Some('"') {
            return;
        }
        self.advance();

        let closing = format!("\"{}", "#".repeat(hashes));

        while !self.rest().is_empty() {
            if self.rest().starts_with(&closing) {
                for _ in 0..closing.len() {
                    self.advance();
                }
                return;
            }

            self.advance();
        }
    }

    // Either a char literal (`'a'`, `'\n'`) or a lifetime (`'a`).
    fn skip_quote(&mut self) {
        match (self.peek(), self.peek_second()) {
            (Some('\\'), _) => {
                self.advance();
                self.advance();
                self.read_while(|c| c != '\'');
                self.advance();
            }
            (Some(_), Some('\'')) => {
                self.advance();
                self.advance();
            }
            _ => {
                self.read_while(is_identifier_rest_char);
            }
        }
    }

    fn capacity_of(&self, identifier: &str) -> Option<i64> {
        let digits = identifier.strip_prefix(self.prefix)?;

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        // Suffixes too large for an i64 are not a capacity anyone meant.
        digits.parse().ok()
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = CapacityUse;

    fn next(&mut self) -> Option<CapacityUse> {
        loop {
            let (offset, start, c) = self.advance()?;

            match c {
                _ if is_identifier_start_char(c) => {
                    let (end_offset, end) = self.read_while(is_identifier_rest_char);
                    let identifier = &self.source[offset..end_offset];

                    match (identifier, self.peek()) {
                        ("r" | "br" | "cr", Some('#' | '"')) => self.skip_raw_string(),
                        ("b", Some('"')) => {
                            self.advance();
                            self.skip_string();
                        }
                        _ => {
                            if let Some(capacity) = self.capacity_of(identifier) {
                                return Some(CapacityUse {
                                    capacity,
                                    span: SourceSpan { start, end },
                                });
                            }
                        }
                    }
                }
                // Keeps suffixes such as the `u8` in `3u8` from reading as identifiers.
                '0'..='9' => {
                    self.read_while(is_identifier_rest_char);
                }
                '/' => match self.peek() {
                    Some('/') => self.skip_line(),
                    Some('*') => {
                        self.advance();
                        self.skip_block_comment();
                    }
                    _ => {}
                },
                '"' => self.skip_string(),
                '\'' => self.skip_quote(),
                _ => {}
            }
        }
    }
}

fn is_identifier_start_char(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_identifier_rest_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Distinct capacities named in `source`, in order of first use.
pub fn requested_capacities(source: &str, prefix: &str) -> Vec<i64> {
    let mut seen = IntSet::default();

    Scanner::new(source, prefix)
        .map(|found| found.capacity)
        .filter(|capacity| seen.insert(*capacity))
        .collect()
}
