use crate::ast::{AxisName, Command, CommandKind, KindName, Pointer, Script};
use crate::error::ParseError;
use crate::lexer::{Lexer, Token, TokenWithPos};

// ── Parser ────────────────────────────────────────────────────────────────

pub struct Parser {
    tokens: Vec<TokenWithPos>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<TokenWithPos>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn current_pos(&self) -> (usize, usize) {
        self.tokens
            .get(self.pos)
            .map(|t| (t.line, t.col))
            .or_else(|| self.tokens.last().map(|t| (t.line, t.col)))
            .unwrap_or((1, 1))
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens.get(self.pos)
            .map(|t| t.token.clone())
            .unwrap_or(Token::Eof);
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn err(&self, msg: impl Into<String>) -> ParseError {
        let (line, col) = self.current_pos();
        ParseError::new(msg, line, col)
    }

    fn expect_number(&mut self) -> Result<f64, ParseError> {
        let err = self.err("expected number");
        match self.advance() {
            Token::Number(n) => Ok(n),
            tok => Err(ParseError { message: format!("expected number, got {:?}", tok), ..err }),
        }
    }

    fn expect_index(&mut self) -> Result<usize, ParseError> {
        let err = self.err("expected stop index");
        let n = self.expect_number()?;
        if n >= 0.0 && n.fract() == 0.0 && n <= u32::MAX as f64 {
            Ok(n as usize)
        } else {
            Err(ParseError { message: format!("stop index must be a non-negative integer, got {n}"), ..err })
        }
    }

    fn expect_end_of_command(&mut self) -> Result<(), ParseError> {
        match self.peek() {
            Token::Newline => {
                self.advance();
                Ok(())
            }
            Token::Eof => Ok(()),
            tok => Err(self.err(format!("expected end of line, got {:?}", tok))),
        }
    }

    // ── Script ────────────────────────────────────────────────────────────

    pub fn parse_script(&mut self) -> Result<Script, ParseError> {
        let mut commands = Vec::new();
        loop {
            match self.peek() {
                Token::Eof => break,
                Token::Newline => {
                    self.advance();
                }
                _ => {
                    commands.push(self.parse_command()?);
                    self.expect_end_of_command()?;
                }
            }
        }
        Ok(Script { commands })
    }

    fn parse_command(&mut self) -> Result<Command, ParseError> {
        let (line, _) = self.current_pos();
        let name_err = self.err("expected command");
        let name = match self.advance() {
            Token::Ident(name) => name,
            tok => return Err(ParseError { message: format!("expected command, got {:?}", tok), ..name_err }),
        };

        let kind = match name.as_str() {
            "bounds" => CommandKind::Bounds {
                x: self.expect_number()?,
                y: self.expect_number()?,
                w: self.expect_number()?,
                h: self.expect_number()?,
            },
            "axis" => CommandKind::Axis(self.parse_axis()?),
            "kind" => CommandKind::Kind(self.parse_kind()?),
            "press" => {
                if self.peek() == &Token::Ident("none".into()) {
                    self.advance();
                    CommandKind::PressBackground
                } else {
                    CommandKind::Press { stop: self.expect_index()? }
                }
            }
            "move" => CommandKind::Move(self.parse_pointer()?),
            "release" => CommandKind::Release,
            "dblclick" => CommandKind::DoubleClick(self.parse_pointer()?),
            "click" => CommandKind::Click { stop: self.expect_index()? },
            "color" => {
                let err = self.err("color needs a CSS color value");
                match self.advance() {
                    Token::Text(css) if !css.is_empty() => CommandKind::Color(css),
                    _ => return Err(err),
                }
            }
            "render" => CommandKind::Render,
            "stops" => CommandKind::Stops,
            other => return Err(ParseError { message: format!("unknown command {other:?}"), ..name_err }),
        };
        Ok(Command { line, kind })
    }

    fn parse_axis(&mut self) -> Result<AxisName, ParseError> {
        let err = self.err("expected axis");
        match self.advance() {
            Token::Ident(s) if s == "vertical" => Ok(AxisName::Vertical),
            Token::Ident(s) if s == "horizontal" => Ok(AxisName::Horizontal),
            tok => Err(ParseError { message: format!("expected vertical or horizontal, got {:?}", tok), ..err }),
        }
    }

    fn parse_kind(&mut self) -> Result<KindName, ParseError> {
        let err = self.err("expected gradient kind");
        match self.advance() {
            Token::Ident(s) if s == "radial" => Ok(KindName::Radial),
            Token::Ident(s) if s == "linear" => {
                let angle_deg = match self.peek() {
                    Token::Number(_) => self.expect_number()?,
                    _ => 180.0,
                };
                Ok(KindName::Linear { angle_deg })
            }
            tok => Err(ParseError { message: format!("expected linear or radial, got {:?}", tok), ..err }),
        }
    }

    fn parse_pointer(&mut self) -> Result<Pointer, ParseError> {
        match self.peek() {
            Token::Ident(s) if s == "none" => {
                self.advance();
                Ok(Pointer::Empty)
            }
            Token::Ident(s) if s == "touch" => {
                self.advance();
                Ok(Pointer::Touch { x: self.expect_number()?, y: self.expect_number()? })
            }
            _ => Ok(Pointer::Mouse { x: self.expect_number()?, y: self.expect_number()? }),
        }
    }
}

/// Parses a complete script.
pub fn parse_str(src: &str) -> Result<Script, ParseError> {
    let tokens = Lexer::new(src).tokenize()?;
    Parser::new(tokens).parse_script()
}
