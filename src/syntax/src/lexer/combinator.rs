//! The functions in here implement tools used in defining production rules in
//! the lexical grammar.
//!
//! If these can fail, they return an [`Option`] rather than an
//! [`Error`][crate::lexer::Error]. This is so that the user of these _must_
//! craft the appropriate error rather than passing it up.

use crate::lexer::Lexer;

impl<'a> Lexer<'a> {
    /// Get the _n_th character in the remaining input, starting with zero.
    ///
    /// # Notes
    ///
    /// `peek_nth(0)` is always the same as `peek()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use syntax::lexer::Lexer;
    /// let lexer = Lexer::new("0123");
    /// assert_eq!(lexer.peek_nth(3), Some('3'));
    /// assert_eq!(lexer.remaining_input(), "0123");
    /// ```
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.remaining_input().chars().nth(n)
    }

    /// Get the next character in the input.
    ///
    /// # Examples
    ///
    /// ```
    /// # use syntax::lexer::Lexer;
    /// let lexer = Lexer::new("123");
    /// assert_eq!(lexer.peek().unwrap(), '1');
    /// assert_eq!(lexer.remaining_input(), "123");
    /// ```
    pub fn peek(&self) -> Option<char> {
        self.peek_nth(0)
    }

    /// Advance the lexer by a single character.
    ///
    /// # Examples
    ///
    /// ```
    /// # use syntax::lexer::Lexer;
    /// let mut lexer = Lexer::new("123");
    /// assert_eq!(lexer.advance().unwrap(), '1');
    /// assert_eq!(lexer.remaining_input(), "23");
    /// ```
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.location.increment(c);
        Some(c)
    }

    /// Consume a specific expected character in the input.
    ///
    /// # Examples
    ///
    /// ```
    /// # use syntax::lexer::Lexer;
    /// let mut lexer = Lexer::new("123");
    /// assert_eq!(lexer.char('1').unwrap(), '1');
    /// assert!(lexer.char('9').is_none());
    /// ```
    pub fn char(&mut self, expected: char) -> Option<char> {
        match self.peek() {
            Some(found) if expected == found => self.advance(),
            _ => None,
        }
    }

    /// Consume characters in the input while they match a predicate. Might
    /// return an empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// # use syntax::lexer::Lexer;
    /// let mut lexer = Lexer::new("120current");
    /// let consumed = lexer.consume_while(|c| c.is_ascii_digit());
    /// assert_eq!(consumed, "120");
    /// assert_eq!(lexer.remaining_input(), "current");
    /// ```
    pub fn consume_while<F>(&mut self, predicate: F) -> &'a str
    where
        F: Fn(char) -> bool,
    {
        let start = self.location.offset();

        while let Some(c) = self.peek() {
            if predicate(c) {
                self.advance();
            } else {
                break;
            }
        }

        &self.input[start..self.location.offset()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek() {
        let lex = Lexer::new("12");
        assert_eq!(lex.peek(), Some('1'));
        assert_eq!(lex.remaining_input(), "12");
    }

    #[test]
    fn peek_nth() {
        let lex = Lexer::new("12");
        assert_eq!(lex.peek_nth(0), Some('1'));
        assert_eq!(lex.peek_nth(1), Some('2'));
        assert_eq!(lex.peek_nth(2), None);
    }

    #[test]
    fn advance_empty() {
        let mut lex = Lexer::new("");
        assert_eq!(lex.advance(), None);
    }

    #[test]
    fn consume_while_fail() {
        let mut lex = Lexer::new("not a single leading digit");
        let result = lex.consume_while(|c| c.is_ascii_digit());
        assert_eq!(result, "");
    }
}
