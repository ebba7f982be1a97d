//! Fixed-capacity nesting stack for the fragment scanner

use crate::format::constants::MAX_NESTING_DEPTH;

/// Structural token that opens a nesting level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token {
    Array,
    Object,
    Quote,
}

impl Token {
    /// Token opened by a byte, if it opens anything
    pub(crate) const fn opened_by(byte: u8) -> Option<Self> {
        match byte {
            b'[' => Some(Token::Array),
            b'{' => Some(Token::Object),
            b'"' => Some(Token::Quote),
            _ => None,
        }
    }

    /// Container closed by a byte, if it closes one
    pub(crate) const fn closed_by(byte: u8) -> Option<Self> {
        match byte {
            b']' => Some(Token::Array),
            b'}' => Some(Token::Object),
            _ => None,
        }
    }
}

/// Depth stack bounded by [`MAX_NESTING_DEPTH`]
///
/// Array-backed so the scanner never allocates per level.
pub(crate) struct DepthStack {
    tokens: [Token; MAX_NESTING_DEPTH],
    len: usize,
}

impl DepthStack {
    pub(crate) const fn new() -> Self {
        Self {
            tokens: [Token::Array; MAX_NESTING_DEPTH],
            len: 0,
        }
    }

    /// Push a token, returning `false` when the stack is full
    pub(crate) fn try_push(&mut self, token: Token) -> bool {
        if self.len == MAX_NESTING_DEPTH {
            return false;
        }
        self.tokens[self.len] = token;
        self.len += 1;
        true
    }

    pub(crate) fn pop(&mut self) -> Option<Token> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(self.tokens[self.len])
    }

    pub(crate) fn top(&self) -> Option<Token> {
        self.len.checked_sub(1).map(|i| self.tokens[i])
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop() {
        let mut stack = DepthStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), None);

        assert!(stack.try_push(Token::Array));
        assert!(stack.try_push(Token::Quote));
        assert_eq!(stack.top(), Some(Token::Quote));
        assert_eq!(stack.pop(), Some(Token::Quote));
        assert_eq!(stack.pop(), Some(Token::Array));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_capacity() {
        let mut stack = DepthStack::new();
        for _ in 0..MAX_NESTING_DEPTH {
            assert!(stack.try_push(Token::Object));
        }
        assert!(!stack.try_push(Token::Object));
    }

    #[test]
    fn test_token_bytes() {
        assert_eq!(Token::opened_by(b'['), Some(Token::Array));
        assert_eq!(Token::opened_by(b'"'), Some(Token::Quote));
        assert_eq!(Token::opened_by(b'1'), None);
        assert_eq!(Token::closed_by(b'}'), Some(Token::Object));
        assert_eq!(Token::closed_by(b'"'), None);
    }
}
