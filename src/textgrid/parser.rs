//! TextGrid parsing.
//!
//! Reads the Praat text formats ("long" with `key = value` lines and
//! "short" with bare values). Both carry the same value sequence, so the
//! parser tokenizes the file into numbers, quoted strings and `<flag>`s and
//! ignores keys, brackets and `!` comments.

use std::path::Path;
use std::str::FromStr;

use crate::constants::textgrid::{ABSENT, EXISTS, FILE_TYPE, INTERVAL_TIER, OBJECT_CLASS, TEXT_TIER};
use crate::error::{Error, Result};

use super::{Interval, IntervalTier, Point, PointTier, TextGrid, Tier};

/// A value token of the Praat text format.
#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Text(String),
    Flag(String),
}

impl Token {
    fn describe(&self) -> String {
        match self {
            Self::Number(n) => format!("number {n}"),
            Self::Text(s) => format!("text \"{s}\""),
            Self::Flag(f) => format!("flag {f}"),
        }
    }
}

/// Read and parse a TextGrid file.
///
/// Accepts UTF-8 (with or without BOM) and UTF-16 with BOM.
pub fn read_textgrid(path: &Path) -> Result<TextGrid> {
    let bytes = std::fs::read(path).map_err(|e| Error::AnnotationRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    decode(&bytes)
        .and_then(|content| content.parse())
        .map_err(|e| match e {
            Error::InvalidTextGrid { message } => Error::TextGridParse {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })
}

impl FromStr for TextGrid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let tokens = tokenize(s)?;
        Parser::new(tokens).parse_grid()
    }
}

/// Decode raw file bytes into text, honouring byte order marks.
fn decode(bytes: &[u8]) -> Result<String> {
    match bytes {
        [0xEF, 0xBB, 0xBF, rest @ ..] => utf8(rest),
        [0xFF, 0xFE, rest @ ..] => utf16(rest, u16::from_le_bytes),
        [0xFE, 0xFF, rest @ ..] => utf16(rest, u16::from_be_bytes),
        _ => utf8(bytes),
    }
}

fn utf8(bytes: &[u8]) -> Result<String> {
    String::from_utf8(bytes.to_vec()).map_err(|e| invalid(format!("not valid UTF-8: {e}")))
}

fn utf16(bytes: &[u8], word: fn([u8; 2]) -> u16) -> Result<String> {
    if bytes.len() % 2 != 0 {
        return Err(invalid("truncated UTF-16 content"));
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| word([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).map_err(|e| invalid(format!("not valid UTF-16: {e}")))
}

fn invalid(message: impl Into<String>) -> Error {
    Error::InvalidTextGrid {
        message: message.into(),
    }
}

/// Split content into value tokens.
fn tokenize(content: &str) -> Result<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut chars = content.chars().peekable();
    let mut line = 1;

    while let Some(c) = chars.next() {
        match c {
            '\n' => line += 1,
            c if c.is_whitespace() => {}
            '"' => {
                let start_line = line;
                let mut text = String::new();
                loop {
                    match chars.next() {
                        Some('"') if chars.peek() == Some(&'"') => {
                            chars.next();
                            text.push('"');
                        }
                        Some('"') => break,
                        Some(ch) => {
                            if ch == '\n' {
                                line += 1;
                            }
                            text.push(ch);
                        }
                        None => {
                            return Err(invalid(format!(
                                "line {start_line}: unterminated string"
                            )));
                        }
                    }
                }
                tokens.push((Token::Text(text), start_line));
            }
            '!' => {
                // Comment runs to end of line
                while chars.next_if(|&ch| ch != '\n').is_some() {}
            }
            '[' => {
                for ch in chars.by_ref() {
                    match ch {
                        ']' => break,
                        '\n' => line += 1,
                        _ => {}
                    }
                }
            }
            '<' => {
                let mut flag = String::from('<');
                while let Some(ch) = chars.next_if(|&ch| !ch.is_whitespace()) {
                    flag.push(ch);
                    if ch == '>' {
                        break;
                    }
                }
                tokens.push((Token::Flag(flag), line));
            }
            _ => {
                let mut word = String::from(c);
                while let Some(ch) =
                    chars.next_if(|&ch| !ch.is_whitespace() && !matches!(ch, '"' | '[' | '<' | '!'))
                {
                    word.push(ch);
                }
                if starts_like_number(&word)
                    && let Ok(value) = word.parse::<f64>()
                {
                    tokens.push((Token::Number(value), line));
                }
                // Anything else is a key such as `xmin`, `=` or `intervals:`
            }
        }
    }

    Ok(tokens)
}

fn starts_like_number(word: &str) -> bool {
    word.starts_with(|c: char| c.is_ascii_digit() || matches!(c, '-' | '+' | '.'))
}

struct Parser {
    tokens: std::vec::IntoIter<(Token, usize)>,
    last_line: usize,
}

impl Parser {
    fn new(tokens: Vec<(Token, usize)>) -> Self {
        Self {
            tokens: tokens.into_iter(),
            last_line: 1,
        }
    }

    fn advance(&mut self, what: &str) -> Result<Token> {
        match self.tokens.next() {
            Some((token, line)) => {
                self.last_line = line;
                Ok(token)
            }
            None => Err(invalid(format!(
                "line {}: unexpected end of file, expected {what}",
                self.last_line
            ))),
        }
    }

    fn unexpected(&self, what: &str, found: &Token) -> Error {
        invalid(format!(
            "line {}: expected {what}, found {}",
            self.last_line,
            found.describe()
        ))
    }

    fn text(&mut self, what: &str) -> Result<String> {
        match self.advance(what)? {
            Token::Text(s) => Ok(s),
            other => Err(self.unexpected(what, &other)),
        }
    }

    fn number(&mut self, what: &str) -> Result<f64> {
        match self.advance(what)? {
            Token::Number(n) if n.is_finite() => Ok(n),
            other => Err(self.unexpected(what, &other)),
        }
    }

    fn count(&mut self, what: &str) -> Result<usize> {
        let value = self.number(what)?;
        if value < 0.0 || value.fract() != 0.0 {
            return Err(invalid(format!(
                "line {}: {what} must be a non-negative integer, got {value}",
                self.last_line
            )));
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let count = value as usize;
        Ok(count)
    }

    fn range(&mut self, what: &str) -> Result<(f64, f64)> {
        let xmin = self.number(&format!("{what} xmin"))?;
        let xmax = self.number(&format!("{what} xmax"))?;
        if xmax < xmin {
            return Err(invalid(format!(
                "line {}: {what} ends ({xmax}) before it starts ({xmin})",
                self.last_line
            )));
        }
        Ok((xmin, xmax))
    }

    fn parse_grid(mut self) -> Result<TextGrid> {
        let file_type = self.text("file type")?;
        if file_type != FILE_TYPE {
            return Err(invalid(format!(
                "unsupported file type \"{file_type}\" (binary TextGrids are not supported)"
            )));
        }
        let class = self.text("object class")?;
        if class != OBJECT_CLASS {
            return Err(invalid(format!("object class is \"{class}\", not a TextGrid")));
        }

        let (xmin, xmax) = self.range("grid")?;

        let tier_count = match self.advance("tiers flag")? {
            Token::Flag(flag) if flag == EXISTS => self.count("tier count")?,
            Token::Flag(flag) if flag == ABSENT => 0,
            other => return Err(self.unexpected("tiers flag", &other)),
        };

        let tiers = (0..tier_count)
            .map(|_| self.parse_tier())
            .collect::<Result<Vec<_>>>()?;

        if let Some((token, line)) = self.tokens.next() {
            return Err(invalid(format!(
                "line {line}: unexpected trailing {}",
                token.describe()
            )));
        }

        Ok(TextGrid { xmin, xmax, tiers })
    }

    fn parse_tier(&mut self) -> Result<Tier> {
        let class = self.text("tier class")?;
        let name = self.text("tier name")?;
        let (xmin, xmax) = self.range("tier")?;

        match class.as_str() {
            INTERVAL_TIER => {
                let size = self.count("interval count")?;
                let intervals = (0..size)
                    .map(|_| -> Result<Interval> {
                        let (xmin, xmax) = self.range("interval")?;
                        let text = self.text("interval text")?;
                        Ok(Interval { xmin, xmax, text })
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(Tier::Interval(IntervalTier {
                    name,
                    xmin,
                    xmax,
                    intervals,
                }))
            }
            TEXT_TIER => {
                let size = self.count("point count")?;
                let points = (0..size)
                    .map(|_| -> Result<Point> {
                        let time = self.number("point time")?;
                        let mark = self.text("point mark")?;
                        Ok(Point { time, mark })
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(Tier::Point(PointTier {
                    name,
                    xmin,
                    xmax,
                    points,
                }))
            }
            other => Err(invalid(format!(
                "line {}: unknown tier class \"{other}\"",
                self.last_line
            ))),
        }
    }
}
