use crate::keyword;

const BRACKETS: &[(char, char)] = &[('[', ']'), ('(', ')'), ('{', '}'), ('【', '】')];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    /// A lone dash between words, e.g. the one in "Title - 05"
    Separator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    /// Index of the bracket group this token came from; `None` for free text
    pub group: Option<usize>,
    pub identified: bool,
}

impl Token {
    fn word(text: impl Into<String>, group: Option<usize>) -> Self {
        Self {
            text: text.into(),
            kind: TokenKind::Word,
            group,
            identified: false,
        }
    }

    fn separator(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: TokenKind::Separator,
            group: None,
            identified: false,
        }
    }

    pub fn is_enclosed(&self) -> bool {
        self.group.is_some()
    }

    pub fn is_free_word(&self) -> bool {
        self.kind == TokenKind::Word && self.group.is_none()
    }

    /// Free word nobody has claimed yet
    pub fn is_open_word(&self) -> bool {
        self.is_free_word() && !self.identified
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Free(&'a str),
    Enclosed(&'a str),
}

/// Split a filename stem (no directory, no extension) into tokens
pub fn tokenize(stem: &str) -> Vec<Token> {
    let segments = split_segments(stem);
    let delimiter = choose_delimiter(&segments);
    tracing::trace!(?delimiter, segments = segments.len(), "tokenizing");

    let mut tokens = Vec::new();
    let mut group = 0;
    for segment in segments {
        match segment {
            Segment::Free(text) => push_free(text, delimiter, &mut tokens),
            Segment::Enclosed(content) => {
                push_enclosed(content, group, &mut tokens);
                group += 1;
            }
        }
    }
    tokens
}

fn split_segments(stem: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut free_start = 0;
    let mut cursor = 0;

    while let Some(open) = stem[cursor..].chars().next() {
        let close = BRACKETS
            .iter()
            .find(|(o, _)| *o == open)
            .map(|(_, c)| *c);
        let content_start = cursor + open.len_utf8();

        let closing_at = close.and_then(|c| stem[content_start..].find(c).map(|i| (c, i)));
        match closing_at {
            Some((close, offset)) => {
                if free_start < cursor {
                    segments.push(Segment::Free(&stem[free_start..cursor]));
                }
                let content = stem[content_start..content_start + offset].trim();
                if !content.is_empty() {
                    segments.push(Segment::Enclosed(content));
                }
                cursor = content_start + offset + close.len_utf8();
                free_start = cursor;
            }
            None => cursor = content_start,
        }
    }

    if free_start < stem.len() {
        segments.push(Segment::Free(&stem[free_start..]));
    }
    segments
}

/// Free text uses one delimiter per filename: space, else underscore, else dot
fn choose_delimiter(segments: &[Segment<'_>]) -> char {
    let free: Vec<&str> = segments
        .iter()
        .filter_map(|segment| match segment {
            Segment::Free(text) => Some(*text),
            Segment::Enclosed(_) => None,
        })
        .collect();

    [' ', '_', '.']
        .into_iter()
        .find(|delimiter| free.iter().any(|text| text.contains(*delimiter)))
        .unwrap_or(' ')
}

fn is_separator(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| matches!(c, '-' | '~' | '–' | '—' | '+'))
}

fn push_free(text: &str, delimiter: char, tokens: &mut Vec<Token>) {
    let words: Vec<&str> = text
        .split(|c: char| c == delimiter || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .collect();

    let words = if delimiter == '.' {
        rejoin_dotted_keywords(words)
    } else {
        words.into_iter().map(str::to_string).collect()
    };

    for word in words {
        if is_separator(&word) {
            tokens.push(Token::separator(word));
        } else {
            tokens.push(Token::word(word, None));
        }
    }
}

/// Undo dot splitting for keywords that contain a dot themselves ("H.264", "DD5.1")
fn rejoin_dotted_keywords(words: Vec<&str>) -> Vec<String> {
    let mut joined: Vec<String> = Vec::with_capacity(words.len());
    for word in words {
        if let Some(last) = joined.last_mut() {
            let candidate = format!("{last}.{word}");
            let head = candidate.rsplit_once('-').map_or(candidate.as_str(), |(head, _)| head);
            if keyword::lookup(&candidate).is_some() || keyword::lookup(head).is_some() {
                *last = candidate;
                continue;
            }
        }
        joined.push(word.to_string());
    }
    joined
}

fn push_enclosed(content: &str, group: usize, tokens: &mut Vec<Token>) {
    let words: Vec<&str> = content
        .split(|c: char| c.is_whitespace() || c == '_')
        .filter(|word| !word.is_empty())
        .collect();

    if words.len() <= 1 || keyword::lookup(content).is_some() {
        tokens.push(Token::word(content, Some(group)));
        return;
    }

    for word in words {
        if is_separator(word) {
            continue;
        }
        tokens.push(Token::word(word, Some(group)));
    }
}
