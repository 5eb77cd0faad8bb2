use std::fmt::Display;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BytePos(pub u32);

impl BytePos {
    pub fn shift(self, ch: char) -> Self {
        BytePos(self.0 + ch.len_utf8() as u32)
    }
}

/// Where a lexeme sits in the source. Lines and columns are 1-based, columns
/// count code points rather than bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenMetadata {
    pub start_inclusive: BytePos,
    pub end_inclusive: BytePos,
    pub line: usize,
    pub column: usize,
}

impl TokenMetadata {
    pub const fn empty() -> TokenMetadata {
        let zero = BytePos(0);
        TokenMetadata {
            start_inclusive: zero,
            end_inclusive: zero,
            line: 0,
            column: 0,
        }
    }

    pub fn new(
        start_inclusive: BytePos,
        end_inclusive: BytePos,
        line: usize,
        column: usize,
    ) -> TokenMetadata {
        TokenMetadata {
            start_inclusive,
            end_inclusive,
            line,
            column,
        }
    }
}

impl Display for TokenMetadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ln {}, Col {}", self.line, self.column)
    }
}
