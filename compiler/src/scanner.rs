use std::{iter::Peekable, str::Chars};

use crate::pos::BytePos;

/// Forward-only cursor over the code points of a source buffer.
pub struct Scanner<'a> {
    pub pos: BytePos,
    pub line: usize,
    pub column: usize,
    buf: Peekable<Chars<'a>>,
}

impl<'a> Scanner<'a> {
    pub fn new(buf: &str) -> Scanner {
        Scanner {
            pos: BytePos::default(),
            line: 1,
            column: 1,
            buf: buf.chars().peekable(),
        }
    }

    pub fn next(&mut self) -> Option<char> {
        let next = self.buf.next();
        if let Some(c) = next {
            self.pos = self.pos.shift(c);

            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }

        next
    }

    pub fn peek(&mut self) -> Option<char> {
        self.buf.peek().copied()
    }

    pub fn consume_if<F>(&mut self, f: F) -> bool
    where
        F: Fn(char) -> bool,
    {
        match self.peek() {
            Some(ch) if f(ch) => {
                self.next();
                true
            }
            _ => false,
        }
    }

    /// Advances past every code point matching `f`, returning how many were
    /// skipped. Callers slice the source by byte position for the text.
    pub fn skip_while<F>(&mut self, f: F) -> usize
    where
        F: Fn(char) -> bool,
    {
        let mut skipped = 0;
        while self.consume_if(&f) {
            skipped += 1;
        }

        skipped
    }

    #[cfg(test)]
    fn assert_next(&mut self, pos: u32, c: Option<char>) {
        assert_eq!(self.pos.0, pos);
        assert_eq!(self.peek(), c);
        assert_eq!(self.next(), c);
    }
}
