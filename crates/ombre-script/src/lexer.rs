use crate::error::ParseError;

// ── Token ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Ident(String),
    Number(f64),
    /// Raw remainder of a line, trimmed. Only produced after `color`.
    Text(String),
    Newline,
    // Sentinel
    Eof,
}

/// A token together with the 1-based position it started at.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenWithPos {
    pub token: Token,
    pub line: usize,
    pub col: usize,
}

// ── Lexer ─────────────────────────────────────────────────────────────────

/// Line-oriented lexer.
///
/// Commands are separated by newlines, `//` starts a comment that runs to
/// the end of the line. After the word `color`, the rest of the line is one
/// [`Token::Text`] so CSS like `rgb(255, 0, 0)` or `#ff0000` needs no quoting.
pub struct Lexer<'s> {
    src: &'s str,
    pos: usize,
    line: usize,
    col: usize,
    rest_of_line: bool,
}

impl<'s> Lexer<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src, pos: 0, line: 1, col: 1, rest_of_line: false }
    }

    pub fn tokenize(mut self) -> Result<Vec<TokenWithPos>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            let tok = self.next_token()?;
            let eof = tok.token == Token::Eof;
            tokens.push(tok);
            if eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.src[self.pos..].chars().next()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    /// Skips spaces and comments, but not newlines: those are tokens.
    fn skip_blanks_and_comments(&mut self) {
        loop {
            while matches!(self.peek(), Some(c) if c.is_whitespace() && c != '\n') {
                self.advance();
            }
            if self.src[self.pos..].starts_with("//") {
                while !matches!(self.peek(), None | Some('\n')) {
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    fn next_token(&mut self) -> Result<TokenWithPos, ParseError> {
        self.skip_blanks_and_comments();
        let (line, col) = (self.line, self.col);
        let at = |token| Ok(TokenWithPos { token, line, col });

        let ch = match self.peek() {
            None => return at(Token::Eof),
            Some(c) => c,
        };

        if ch == '\n' {
            self.advance();
            self.rest_of_line = false;
            return at(Token::Newline);
        }
        if self.rest_of_line {
            self.rest_of_line = false;
            return at(self.lex_text());
        }

        match ch {
            c if c.is_ascii_digit() || c == '-' || c == '.' => at(self.lex_number()?),
            c if c.is_alphabetic() || c == '_' => {
                let word = self.lex_ident();
                self.rest_of_line = word == "color";
                at(Token::Ident(word))
            }
            other => Err(ParseError::new(format!("unexpected character {other:?}"), line, col)),
        }
    }

    fn lex_text(&mut self) -> Token {
        let start = self.pos;
        while !matches!(self.peek(), None | Some('\n')) {
            if self.src[self.pos..].starts_with("//") {
                break;
            }
            self.advance();
        }
        Token::Text(self.src[start..self.pos].trim().to_string())
    }

    fn lex_number(&mut self) -> Result<Token, ParseError> {
        let (line, col) = (self.line, self.col);
        let start = self.pos;
        if self.peek() == Some('-') {
            self.advance();
        }
        while matches!(self.peek(), Some(c) if c.is_ascii_digit() || c == '.') {
            self.advance();
        }
        let text = &self.src[start..self.pos];
        text.parse::<f64>()
            .map(Token::Number)
            .map_err(|_| ParseError::new(format!("invalid number {text:?}"), line, col))
    }

    fn lex_ident(&mut self) -> String {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_') {
            self.advance();
        }
        self.src[start..self.pos].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(src: &str) -> Vec<Token> {
        Lexer::new(src).tokenize().unwrap().into_iter().map(|t| t.token).collect()
    }

    #[test]
    fn words_numbers_and_newlines() {
        assert_eq!(
            tokens("move 10 -2.5\nrelease"),
            vec![
                Token::Ident("move".into()),
                Token::Number(10.0),
                Token::Number(-2.5),
                Token::Newline,
                Token::Ident("release".into()),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn color_takes_rest_of_line() {
        assert_eq!(
            tokens("color rgb(255, 0, 0) // red\nrender"),
            vec![
                Token::Ident("color".into()),
                Token::Text("rgb(255, 0, 0)".into()),
                Token::Newline,
                Token::Ident("render".into()),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn hex_color_is_not_a_comment() {
        assert_eq!(tokens("color #ff0000")[1], Token::Text("#ff0000".into()));
    }

    #[test]
    fn comments_are_skipped() {
        assert_eq!(tokens("// only a comment"), vec![Token::Eof]);
    }

    #[test]
    fn positions_are_one_based() {
        let toks = Lexer::new("release\n  press 1").tokenize().unwrap();
        let press = &toks[2];
        assert_eq!((press.line, press.col), (2, 3));
    }

    #[test]
    fn bad_number_is_an_error() {
        let err = Lexer::new("move 1.2.3 4").tokenize().unwrap_err();
        assert_eq!((err.line, err.col), (1, 6));
    }

    #[test]
    fn stray_symbol_is_an_error() {
        assert!(Lexer::new("press @").tokenize().is_err());
    }
}
