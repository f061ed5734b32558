//! Count-prefixed pair stream reader.
//!
//! Wire format: whitespace-separated integer tokens. A count `m`, then `m`
//! pairs of `key value`, then a count `n` and `n` more pairs. Inputs are
//! bounded and in-memory, so the whole stream is read before tokenizing.

use std::io::BufRead;
use std::str::SplitWhitespace;

use tracing::debug;

use keyfold_types::{Pair, SparseVector};

use crate::error::{InputError, InputResult};

/// Read two count-prefixed pair sequences from `reader`.
pub fn read_pair_streams<R: BufRead>(mut reader: R) -> InputResult<(SparseVector, SparseVector)> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut tokens = Tokens::new(&text);
    let a = read_sequence(&mut tokens)?;
    let b = read_sequence(&mut tokens)?;
    tokens.expect_end()?;

    debug!(left = a.len(), right = b.len(), "read pair streams");
    Ok((a, b))
}

fn read_sequence(tokens: &mut Tokens<'_>) -> InputResult<SparseVector> {
    let count = tokens.next_count()?;
    // The count is stream-supplied; clamp the preallocation.
    let mut pairs = Vec::with_capacity(count.min(1 << 16));
    for _ in 0..count {
        let key = tokens.next_integer("pair key")?;
        let value = tokens.next_integer("pair value")?;
        pairs.push(Pair::new(key, value));
    }
    Ok(SparseVector::from_pairs(pairs))
}

/// Cursor over the whitespace-separated tokens of the input text.
struct Tokens<'a> {
    iter: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            iter: text.split_whitespace(),
        }
    }

    fn next_integer(&mut self, expected: &'static str) -> InputResult<i64> {
        let token = self
            .iter
            .next()
            .ok_or(InputError::UnexpectedEof(expected))?;
        token.parse().map_err(|_| InputError::InvalidToken {
            expected,
            token: token.to_string(),
        })
    }

    fn next_count(&mut self) -> InputResult<usize> {
        let count = self.next_integer("sequence count")?;
        usize::try_from(count).map_err(|_| InputError::NegativeCount(count))
    }

    fn expect_end(&mut self) -> InputResult<()> {
        match self.iter.next() {
            Some(token) => Err(InputError::TrailingInput(token.to_string())),
            None => Ok(()),
        }
    }
}
