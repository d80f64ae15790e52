//! Matching of the `true`, `false` and `null` literals.
use super::Parser;
use crate::{CharSource, Value, error::ParseError};

/// What happened after feeding one more character into the literal matcher?
#[derive(Debug, PartialEq)]
enum Step {
    /// Character matched, but the literal is not finished yet.
    NeedMore,
    /// Character matched *and* it was the last character of the literal.
    Done(Value),
    /// Character did **not** match the expected character.
    Reject,
}

/// The characters of a literal still to be matched, and the value it
/// produces.
#[derive(Debug, Clone, Copy)]
struct ExpectedLiteral {
    remaining: &'static str,
    kind: Literal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Literal {
    True,
    False,
    Null,
}

impl ExpectedLiteral {
    /// Start matching after the *first* character (`n`, `t`, or `f`).
    fn new(first: char) -> Option<Self> {
        let (remaining, kind) = match first {
            't' => ("rue", Literal::True),
            'f' => ("alse", Literal::False),
            'n' => ("ull", Literal::Null),
            _ => return None,
        };
        Some(Self { remaining, kind })
    }

    fn step(&mut self, c: char) -> Step {
        let mut rest = self.remaining.chars();
        if rest.next() != Some(c) {
            return Step::Reject;
        }
        self.remaining = rest.as_str();
        if !self.remaining.is_empty() {
            return Step::NeedMore;
        }
        Step::Done(match self.kind {
            Literal::True => Value::True,
            Literal::False => Value::False,
            Literal::Null => Value::Null,
        })
    }
}

impl<S: CharSource> Parser<S> {
    /// Reads the rest of `true`, `false` or `null` after its first letter.
    pub(super) fn parse_literal(&mut self, first: char) -> Result<Value, ParseError> {
        let Some(mut expected) = ExpectedLiteral::new(first) else {
            return Err(self.unexpected(Some(first)));
        };
        loop {
            let next = self.read();
            match next.map(|c| expected.step(c)) {
                Some(Step::Done(value)) => return Ok(value),
                Some(Step::NeedMore) => {}
                Some(Step::Reject) | None => return Err(self.unexpected(next)),
            }
        }
    }
}
