use thiserror::Error;

use crate::{pos::TokenMetadata, token::LexemeKind};

#[derive(Debug, Error, PartialEq)]
pub enum CompilerError {
    #[error("Unexpected symbol {found} at {pos}, expected {expected}")]
    UnexpectedSymbol {
        expected: LexemeKind,
        found: LexemeKind,
        text: String,
        pos: TokenMetadata,
    },
    #[error("Unexpected primary {found} `{text}` at {pos}")]
    UnexpectedPrimary {
        found: LexemeKind,
        text: String,
        pos: TokenMetadata,
    },
    #[error("Nesting exceeds {limit} levels at {pos}")]
    NestingTooDeep { limit: usize, pos: TokenMetadata },
}

impl CompilerError {
    pub fn pos(&self) -> TokenMetadata {
        match self {
            CompilerError::UnexpectedSymbol { pos, .. } => *pos,
            CompilerError::UnexpectedPrimary { pos, .. } => *pos,
            CompilerError::NestingTooDeep { pos, .. } => *pos,
        }
    }
}
