#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Run of letters, digits and underscores.
    Word,
    /// Double-quoted string literal, quotes included.
    Str,
    Punct(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// Byte offsets into the scanned source.
    pub start: usize,
    pub end: usize,
}

impl Token<'_> {
    pub fn is_word(&self, word: &str) -> bool {
        self.kind == TokenKind::Word && self.text == word
    }

    pub fn is_punct(&self, ch: char) -> bool {
        self.kind == TokenKind::Punct(ch)
    }
}

pub(crate) fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Forward-only scanner over GraphQL source text.
///
/// Usable both as a token iterator and as a cursor for anchored matching.
/// The scanner never fails: unterminated strings run to the end of input and
/// every other character is a punctuation token.
#[derive(Debug, Clone)]
pub struct QueryScanner<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> QueryScanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    /// Consumes `ch` if it is next.
    pub fn eat(&mut self, ch: char) -> bool {
        if self.peek() == Some(ch) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Unconsumed input.
    pub fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    /// Consumes `text` if the remaining input starts with it.
    pub fn eat_str(&mut self, text: &str) -> bool {
        if self.rest().starts_with(text) {
            self.pos += text.len();
            true
        } else {
            false
        }
    }

    /// Consumes characters while `pred` holds and returns them.
    pub fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(&pred) {
            self.bump();
        }
        &self.src[start..self.pos]
    }

    /// Consumes `keyword` if the remaining input starts with it, ignoring
    /// ASCII case. Word boundaries are not checked.
    pub fn eat_keyword_ignore_case(&mut self, keyword: &str) -> bool {
        let matches = self
            .rest()
            .get(..keyword.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(keyword));

        if matches {
            self.pos += keyword.len();
        }
        matches
    }

    /// Consumes a run of word characters, returning `None` when there is none.
    pub fn take_word(&mut self) -> Option<&'a str> {
        let word = self.take_while(is_word_char);
        (!word.is_empty()).then_some(word)
    }

    fn take_string(&mut self) -> &'a str {
        let start = self.pos;
        self.bump();

        let mut escaped = false;
        while let Some(ch) = self.bump() {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => break,
                _ => {}
            }
        }

        &self.src[start..self.pos]
    }
}

impl<'a> Iterator for QueryScanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();
        let start = self.pos;
        let ch = self.peek()?;

        let (kind, text) = if is_word_char(ch) {
            let word = self.take_word().unwrap_or_default();
            (TokenKind::Word, word)
        } else if ch == '"' {
            (TokenKind::Str, self.take_string())
        } else {
            self.bump();
            (TokenKind::Punct(ch), &self.src[start..self.pos])
        };

        Some(Token {
            kind,
            text,
            start,
            end: self.pos,
        })
    }
}
