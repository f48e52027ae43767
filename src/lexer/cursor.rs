use super::position::SourcePosition;
use std::str::Chars;

/// The C `isspace` set: space, `\t`, `\n`, `\v`, `\f` and `\r`.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

/// Character cursor that keeps track of the line and column of the next
/// character.
#[derive(Clone)]
pub struct Cursor<'a> {
    chars: Chars<'a>,
    position: SourcePosition,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str, start: SourcePosition) -> Self {
        let chars = s.chars();
        Self {
            chars,
            position: start,
        }
    }

    pub fn peek(&self) -> Option<char> {
        // cheap to clone
        self.chars.clone().next()
    }

    #[inline]
    pub fn skip_if(&mut self, p: impl FnOnce(char) -> bool) -> bool {
        let skipped = self.peek().filter(|&c| p(c)).is_some();
        if skipped {
            self.take();
        }
        skipped
    }

    pub fn skip_whitespaces(&mut self) {
        while self.skip_if(is_whitespace) {}
    }

    pub fn take(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.position.advance(c);
        Some(c)
    }

    /// Position of the character [`peek`](Self::peek) would return.
    pub fn position(&self) -> &SourcePosition {
        &self.position
    }

    pub fn as_str(&self) -> &'a str {
        self.chars.as_str()
    }
}
