use habari_types::Metadata;
use regex::Regex;
use std::sync::LazyLock;

use crate::keyword::{self, KeywordKind};
use crate::tokenizer::{self, Token, TokenKind};

/// "1080p", "720i", "1920x1080", "4K"
static RESOLUTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:\d{3,4}[pi]|\d{3,4}[x×]\d{3,4}[pi]?|[248]k)$").unwrap()
});

/// "v2"
static RELEASE_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^v(\d{1,2})$").unwrap());

/// "S01E05", "S01E05-E06", "S01E05v2", "S2"
static SEASON_EPISODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^s(\d{1,2})(?:[._-]?e(\d{1,4})(?:-e?(\d{1,4}))?)?(?:v(\d{1,2}))?$").unwrap()
});

/// "1x05"
static SEASON_X_EPISODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(\d{1,2})x(\d{2,3})$").unwrap());

/// "E05", "EP05", "Ep.05-06", "E05v2"
static EPISODE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:e|ep|eps)\.?(\d{1,4})(?:-(\d{1,4}))?(?:v(\d{1,2}))?$").unwrap()
});

/// "05v2"
static EPISODE_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(\d{1,4})v(\d{1,2})$").unwrap());

/// "01-12"
static EPISODE_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,4})-(\d{1,4})$").unwrap());

static NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{1,4}$").unwrap());

/// "Vol.3", "Vol3", "Volume3"
static VOLUME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^vol(?:ume)?\.?(\d{1,3})$").unwrap());

/// "2nd" as in "2nd Season"
static ORDINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(\d{1,2})(?:st|nd|rd|th)$").unwrap());

static CHECKSUM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9A-Fa-f]{8}$").unwrap());

static YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(?:19|20)\d{2}$").unwrap());

/// Parse a filename (optionally with a directory) into [`Metadata`].
///
/// Never fails: anything that is not recognised is left empty, so a name with
/// no recognisable parts produces a record with only `file_name` set.
pub fn parse(filename: &str) -> Metadata {
    let base = filename.rsplit(['/', '\\']).next().unwrap_or(filename);

    let mut metadata = Metadata {
        file_name: base.to_string(),
        ..Default::default()
    };

    let stem = match base.rsplit_once('.') {
        Some((stem, extension)) if !stem.is_empty() && keyword::is_file_extension(extension) => {
            metadata.file_extension = extension.to_string();
            stem
        }
        _ => base,
    };

    let tokens = tokenizer::tokenize(stem);
    tracing::debug!(filename, tokens = tokens.len(), "parsing filename");

    let mut parser = Parser::new(tokens, metadata);
    parser.run();
    parser.metadata
}

struct Parser {
    tokens: Vec<Token>,
    metadata: Metadata,
    /// Token holding the episode number, once found
    episode_at: Option<usize>,
    /// Group name taken from a scene-style "x264-GROUP" suffix
    scene_group: Option<String>,
}

impl Parser {
    fn new(tokens: Vec<Token>, metadata: Metadata) -> Self {
        Self {
            tokens,
            metadata,
            episode_at: None,
            scene_group: None,
        }
    }

    fn run(&mut self) {
        self.identify_keywords();
        if self.metadata.episode_number.is_empty() {
            self.find_episode();
        }
        self.find_episode_alt();
        self.identify_trailing_keywords();
        self.find_release_group();
        self.find_title();
        self.find_episode_title();
        self.format_title();
    }

    fn claim(&mut self, index: usize, rule: &'static str) {
        let token = &mut self.tokens[index];
        token.identified = true;
        tracing::trace!(token = %token.text, rule, "identified");
    }

    /// Next token if it is an unclaimed word from the same bracket group (or also free)
    fn next_open(&self, index: usize) -> Option<usize> {
        let current = self.tokens.get(index)?;
        let next = self.tokens.get(index + 1)?;
        (next.kind == TokenKind::Word && !next.identified && next.group == current.group)
            .then_some(index + 1)
    }

    fn identify_keywords(&mut self) {
        let last_free = self.tokens.iter().rposition(Token::is_free_word);

        for index in 0..self.tokens.len() {
            let token = &self.tokens[index];
            if token.identified || token.kind == TokenKind::Separator {
                continue;
            }
            let text = token.text.clone();

            if self.identify_phrase(index, &text) || self.identify_word(index, &text) {
                continue;
            }
            if Some(index) == last_free {
                self.identify_scene_suffix(index, &text);
            }
        }
    }

    /// Two-word forms: "Season 2", "2nd Season", "Part 2", "Vol 3", "Episode 5", "OVA 2"
    fn identify_phrase(&mut self, index: usize, text: &str) -> bool {
        let Some(next) = self.next_open(index) else {
            return false;
        };
        let next_text = self.tokens[next].text.clone();
        let next_is_number = NUMBER.is_match(&next_text);
        let lower = text.to_lowercase();

        if next_is_number {
            let field = match lower.as_str() {
                "season" | "saison" => Some(&mut self.metadata.season_number),
                "part" => Some(&mut self.metadata.part_number),
                "vol" | "vol." | "volume" => Some(&mut self.metadata.volume_number),
                "episode" | "ep" | "ep." | "eps" => {
                    self.episode_at = Some(next);
                    Some(&mut self.metadata.episode_number)
                }
                _ => None,
            };
            if let Some(field) = field {
                field.push(next_text);
                self.claim(index, "phrase");
                self.claim(next, "phrase");
                return true;
            }

            if keyword::lookup(text) == Some(KeywordKind::AnimeType) {
                self.metadata.anime_type.push(text.to_string());
                self.metadata.other_episode_number.push(next_text);
                self.claim(index, "anime type number");
                self.claim(next, "anime type number");
                return true;
            }
        }

        if let Some(captures) = ORDINAL.captures(text) {
            if matches!(next_text.to_lowercase().as_str(), "season" | "saison") {
                self.metadata.season_number.push(captures[1].to_string());
                self.claim(index, "ordinal season");
                self.claim(next, "ordinal season");
                return true;
            }
        }

        false
    }

    fn identify_word(&mut self, index: usize, text: &str) -> bool {
        let enclosed = self.tokens[index].is_enclosed();

        if let Some(kind) = keyword::lookup(text) {
            if !enclosed && keyword::is_ambiguous(text) {
                return false;
            }
            self.push_keyword(kind, text);
            self.claim(index, "keyword");
            return true;
        }

        if RESOLUTION.is_match(text) {
            if self.metadata.video_resolution.is_empty() {
                self.metadata.video_resolution = text.to_string();
            }
            self.claim(index, "resolution");
            return true;
        }

        if let Some(captures) = RELEASE_VERSION.captures(text) {
            self.metadata.release_version.push(captures[1].to_string());
            self.claim(index, "version");
            return true;
        }

        if let Some(captures) = SEASON_EPISODE.captures(text) {
            self.metadata.season_number.push(captures[1].to_string());
            if let Some(episode) = captures.get(2) {
                self.metadata.episode_number.push(episode.as_str().to_string());
                self.episode_at = Some(index);
            }
            if let Some(last) = captures.get(3) {
                self.metadata.episode_number.push(last.as_str().to_string());
            }
            if let Some(version) = captures.get(4) {
                self.metadata.release_version.push(version.as_str().to_string());
            }
            self.claim(index, "season episode");
            return true;
        }

        if let Some(captures) = SEASON_X_EPISODE.captures(text) {
            self.metadata.season_number.push(captures[1].to_string());
            self.metadata.episode_number.push(captures[2].to_string());
            self.episode_at = Some(index);
            self.claim(index, "season x episode");
            return true;
        }

        if let Some(captures) = EPISODE_MARKER.captures(text) {
            self.metadata.episode_number.push(captures[1].to_string());
            if let Some(last) = captures.get(2) {
                self.metadata.episode_number.push(last.as_str().to_string());
            }
            if let Some(version) = captures.get(3) {
                self.metadata.release_version.push(version.as_str().to_string());
            }
            self.episode_at = Some(index);
            self.claim(index, "episode marker");
            return true;
        }

        if let Some(captures) = EPISODE_VERSION.captures(text) {
            self.metadata.episode_number.push(captures[1].to_string());
            self.metadata.release_version.push(captures[2].to_string());
            self.episode_at = Some(index);
            self.claim(index, "episode version");
            return true;
        }

        if let Some(captures) = VOLUME.captures(text) {
            self.metadata.volume_number.push(captures[1].to_string());
            self.claim(index, "volume");
            return true;
        }

        if enclosed {
            if CHECKSUM.is_match(text) && self.metadata.file_checksum.is_empty() {
                self.metadata.file_checksum = text.to_string();
                self.claim(index, "checksum");
                return true;
            }
            if YEAR.is_match(text) && self.metadata.year.is_empty() {
                self.metadata.year = text.to_string();
                self.claim(index, "year");
                return true;
            }
        }

        false
    }

    /// Scene releases end in "<keyword>-<GROUP>", e.g. "x264-GROUP"
    fn identify_scene_suffix(&mut self, index: usize, text: &str) {
        let Some((head, group)) = text.rsplit_once('-') else {
            return;
        };
        if group.is_empty() || !group.chars().all(char::is_alphanumeric) {
            return;
        }

        if let Some(kind) = keyword::lookup(head) {
            self.push_keyword(kind, head);
        } else if RESOLUTION.is_match(head) {
            if self.metadata.video_resolution.is_empty() {
                self.metadata.video_resolution = head.to_string();
            }
        } else {
            return;
        }

        self.scene_group = Some(group.to_string());
        self.claim(index, "scene suffix");
    }

    /// Ambiguous keywords in free text count once something earlier was identified
    fn identify_trailing_keywords(&mut self) {
        let Some(first_identified) = self.tokens.iter().position(|t| t.identified) else {
            return;
        };

        for index in first_identified + 1..self.tokens.len() {
            if !self.tokens[index].is_open_word() {
                continue;
            }
            let text = self.tokens[index].text.clone();
            if let Some(kind) = keyword::lookup(&text) {
                self.push_keyword(kind, &text);
                self.claim(index, "trailing keyword");
            }
        }
    }

    fn push_keyword(&mut self, kind: KeywordKind, text: &str) {
        let field = match kind {
            KeywordKind::AnimeType => &mut self.metadata.anime_type,
            KeywordKind::AudioTerm => &mut self.metadata.audio_term,
            KeywordKind::DeviceCompatibility => &mut self.metadata.device_compatibility,
            KeywordKind::Language => &mut self.metadata.language,
            KeywordKind::ReleaseInformation => &mut self.metadata.release_information,
            KeywordKind::Source => &mut self.metadata.source,
            KeywordKind::Subtitles => &mut self.metadata.subtitles,
            KeywordKind::VideoTerm => &mut self.metadata.video_term,
        };
        field.push(text.to_string());
    }

    fn find_episode(&mut self) {
        let candidate = self
            .number_after_separator()
            .or_else(|| self.last_number_in_title())
            .or_else(|| self.enclosed_number());

        if let Some(index) = candidate {
            let text = self.tokens[index].text.clone();
            match EPISODE_RANGE.captures(&text) {
                Some(captures) => {
                    self.metadata.episode_number.push(captures[1].to_string());
                    self.metadata.episode_number.push(captures[2].to_string());
                }
                None => self.metadata.episode_number.push(text),
            }
            self.episode_at = Some(index);
            self.claim(index, "episode");
        }
    }

    /// "Title - 05"
    fn number_after_separator(&self) -> Option<usize> {
        (1..self.tokens.len()).find(|&index| {
            self.tokens[index - 1].kind == TokenKind::Separator
                && self.tokens[index].is_open_word()
                && is_episode_like(&self.tokens[index].text)
        })
    }

    /// "Title 05 [720p]": the last number before the first identified or
    /// enclosed token, never the first word
    fn last_number_in_title(&self) -> Option<usize> {
        let start = self.tokens.iter().position(Token::is_open_word)?;
        let end = self.tokens[start..]
            .iter()
            .position(|t| t.identified || t.is_enclosed())
            .map_or(self.tokens.len(), |offset| start + offset);

        (start + 1..end).rev().find(|&index| {
            self.tokens[index].is_open_word() && is_episode_like(&self.tokens[index].text)
        })
    }

    /// "[Group][Title][05]": only used when there is no free text at all
    fn enclosed_number(&self) -> Option<usize> {
        if self.tokens.iter().any(Token::is_free_word) {
            return None;
        }
        (0..self.tokens.len()).find(|&index| {
            let token = &self.tokens[index];
            !token.identified && self.group_len(token.group) == 1 && NUMBER.is_match(&token.text)
        })
    }

    fn group_len(&self, group: Option<usize>) -> usize {
        match group {
            Some(_) => self.tokens.iter().filter(|t| t.group == group).count(),
            None => 0,
        }
    }

    /// "Title - 05 (29)": absolute numbering right after the episode
    fn find_episode_alt(&mut self) {
        let Some(at) = self.episode_at else {
            return;
        };
        let index = at + 1;
        let Some(token) = self.tokens.get(index) else {
            return;
        };

        if token.is_enclosed()
            && !token.identified
            && self.group_len(token.group) == 1
            && NUMBER.is_match(&token.text)
        {
            self.metadata.episode_number_alt.push(token.text.clone());
            self.claim(index, "episode alt");
        }
    }

    /// Bracket groups in which nothing has been identified, in order
    fn open_groups(&self) -> Vec<Vec<usize>> {
        let mut groups: Vec<Vec<usize>> = Vec::new();
        let mut current = None;
        for (index, token) in self.tokens.iter().enumerate() {
            let Some(group) = token.group else {
                continue;
            };
            if current == Some(group) {
                if let Some(members) = groups.last_mut() {
                    members.push(index);
                }
            } else {
                groups.push(vec![index]);
                current = Some(group);
            }
        }

        groups
            .into_iter()
            .filter(|members| members.iter().all(|&i| !self.tokens[i].identified))
            .collect()
    }

    fn join_tokens(&self, indices: &[usize]) -> String {
        indices
            .iter()
            .map(|&i| self.tokens[i].text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn find_release_group(&mut self) {
        let title_start = self.tokens.iter().position(Token::is_open_word);
        let groups = self.open_groups();

        let leading = groups
            .iter()
            .find(|members| title_start.is_none_or(|start| members[0] < start));

        let chosen = match (leading, self.scene_group.take()) {
            (Some(members), _) => members.clone(),
            (None, Some(scene_group)) => {
                self.metadata.release_group = scene_group;
                return;
            }
            (None, None) => match groups.first() {
                Some(members) => members.clone(),
                None => return,
            },
        };

        self.metadata.release_group = self.join_tokens(&chosen);
        for index in chosen {
            self.claim(index, "release group");
        }
    }

    fn find_title(&mut self) {
        let words: Vec<usize> = match self.tokens.iter().position(Token::is_open_word) {
            Some(start) => (start..self.tokens.len())
                .take_while(|&i| self.tokens[i].is_open_word())
                .collect(),
            None => self.open_groups().into_iter().next().unwrap_or_default(),
        };
        if words.is_empty() {
            return;
        }

        self.metadata.title = self.join_tokens(&words);
        for index in words {
            self.claim(index, "title");
        }
    }

    /// "Title - 05 - Episode Name [1080p]"
    fn find_episode_title(&mut self) {
        let Some(at) = self.episode_at else {
            return;
        };
        if !self.tokens[at].is_free_word() {
            return;
        }

        let mut start = at + 1;
        if self
            .tokens
            .get(start)
            .is_some_and(|t| t.kind == TokenKind::Separator)
        {
            start += 1;
        }

        let words: Vec<usize> = (start..self.tokens.len())
            .take_while(|&i| self.tokens[i].is_open_word())
            .collect();
        if words.is_empty() {
            return;
        }

        self.metadata.episode_title = self.join_tokens(&words);
        for index in words {
            self.claim(index, "episode title");
        }
    }

    fn format_title(&mut self) {
        if self.metadata.title.is_empty() {
            return;
        }

        let mut formatted = self.metadata.title.clone();
        if let Some(season) = self.metadata.season_number.first() {
            formatted.push_str(&format!(" Season {}", strip_leading_zeros(season)));
        }
        if let Some(part) = self.metadata.part_number.first() {
            formatted.push_str(&format!(" Part {}", strip_leading_zeros(part)));
        }
        self.metadata.formatted_title = formatted;
    }
}

fn is_episode_like(text: &str) -> bool {
    NUMBER.is_match(text) || EPISODE_RANGE.is_match(text)
}

fn strip_leading_zeros(number: &str) -> String {
    number
        .parse::<u32>()
        .map_or_else(|_| number.to_string(), |n| n.to_string())
}
