use std::collections::HashMap;
use std::sync::LazyLock;

/// Category a recognised keyword belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordKind {
    AnimeType,
    AudioTerm,
    DeviceCompatibility,
    Language,
    ReleaseInformation,
    Source,
    Subtitles,
    VideoTerm,
}

const ANIME_TYPE: &[&str] = &[
    "GEKIJOUBAN", "MOVIE", "OAD", "OAV", "ONA", "OVA", "SPECIAL", "SPECIALS", "NCED", "NCOP",
    "OPENING", "ENDING", "PREVIEW", "PV",
];

const AUDIO_TERM: &[&str] = &[
    "2.0CH", "2CH", "5.1", "5.1CH", "7.1", "DTS", "DTS-ES", "DTS5.1", "TRUEHD", "TRUEHD5.1", "AAC",
    "AAC2.0", "AACX2", "AACX3", "AACX4", "AC3", "EAC3", "E-AC-3", "FLAC", "FLACX2", "FLACX3",
    "FLACX4", "LOSSLESS", "MP3", "OGG", "VORBIS", "OPUS", "DD5.1", "DDP", "DDP2.0", "DDP5.1",
    "DUALAUDIO", "DUAL-AUDIO", "DUAL AUDIO", "MULTI-AUDIO", "MULTI AUDIO",
];

const DEVICE_COMPATIBILITY: &[&str] = &[
    "ANDROID", "IPAD3", "IPHONE5", "IPOD", "PS3", "XBOX", "XBOX360",
];

const LANGUAGE: &[&str] = &[
    "ENG", "ENGLISH", "ESPANOL", "FRE", "GER", "ITA", "JAP", "JPN", "PT-BR", "RUS", "SPANISH",
    "VOSTFR",
];

const RELEASE_INFORMATION: &[&str] = &[
    "BATCH", "COMPLETE", "END", "FINAL", "PATCH", "REMASTER", "REMASTERED", "REMUX", "UNCENSORED",
    "UNCUT",
];

const SOURCE: &[&str] = &[
    "BD", "BDRIP", "BLURAY", "BLU-RAY", "DVD", "DVD5", "DVD9", "DVD-R2J", "DVDRIP", "DVD-RIP",
    "R2DVD", "R2J", "R2JDVD", "R2JDVDRIP", "HDTV", "HDTVRIP", "TVRIP", "TV-RIP", "WEBCAST",
    "WEBRIP", "WEB-DL", "WEB-RIP", "WEB",
];

const SUBTITLES: &[&str] = &[
    "ASS", "BIG5", "DUB", "DUBBED", "HARDSUB", "HARDSUBS", "MULTISUB", "MULTI-SUB", "MULTI SUB",
    "RAW", "SOFTSUB", "SOFTSUBS", "SUB", "SUBBED", "SUBTITLED", "SRT",
];

const VIDEO_TERM: &[&str] = &[
    "23.976FPS", "24FPS", "29.97FPS", "30FPS", "60FPS", "120FPS", "8BIT", "8-BIT", "10BIT",
    "10BITS", "10-BIT", "10-BITS", "HI10", "HI10P", "HI444", "HI444P", "HI444PP", "H264", "H265",
    "H.264", "H.265", "X264", "X265", "X.264", "X.265", "AVC", "HEVC", "HEVC2", "DIVX", "DIVX5",
    "DIVX6", "XVID", "AV1", "HDR", "HDR10", "DV", "RMVB", "WMV", "WMV3", "WMV9",
];

/// Extensions stripped from the end of a filename before tokenising
const FILE_EXTENSIONS: &[&str] = &[
    "3GP", "ASS", "AVI", "FLV", "IDX", "M2TS", "M4V", "MKV", "MOV", "MP4", "MPEG", "MPG", "OGM",
    "OGV", "RM", "RMVB", "SRT", "SSA", "SUB", "SUP", "TS", "VTT", "WEBM", "WMV",
];

static KEYWORDS: LazyLock<HashMap<&'static str, KeywordKind>> = LazyLock::new(|| {
    let tables: [(&[&str], KeywordKind); 8] = [
        (ANIME_TYPE, KeywordKind::AnimeType),
        (AUDIO_TERM, KeywordKind::AudioTerm),
        (DEVICE_COMPATIBILITY, KeywordKind::DeviceCompatibility),
        (LANGUAGE, KeywordKind::Language),
        (RELEASE_INFORMATION, KeywordKind::ReleaseInformation),
        (SOURCE, KeywordKind::Source),
        (SUBTITLES, KeywordKind::Subtitles),
        (VIDEO_TERM, KeywordKind::VideoTerm),
    ];

    let mut map = HashMap::new();
    for (words, kind) in tables {
        for word in words {
            map.insert(*word, kind);
        }
    }
    map
});

/// Look up a word (or a whole bracketed phrase) in the keyword tables, ignoring case
pub fn lookup(word: &str) -> Option<KeywordKind> {
    KEYWORDS.get(word.to_uppercase().as_str()).copied()
}

/// Keywords that double as ordinary title words ("The End of Evangelion").
/// In free text they only count once something before them has been identified.
const AMBIGUOUS: &[&str] = &[
    "BATCH", "COMPLETE", "DUB", "DV", "END", "ENDING", "ENGLISH", "FINAL", "MOVIE", "OPENING",
    "PREVIEW", "RAW", "SPANISH", "SPECIAL", "SPECIALS", "SUB", "WEB",
];

pub fn is_ambiguous(word: &str) -> bool {
    let upper = word.to_uppercase();
    AMBIGUOUS.contains(&upper.as_str())
}

pub fn is_file_extension(extension: &str) -> bool {
    let upper = extension.to_uppercase();
    FILE_EXTENSIONS.contains(&upper.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_case() {
        assert_eq!(lookup("bluray"), Some(KeywordKind::Source));
        assert_eq!(lookup("BluRay"), Some(KeywordKind::Source));
        assert_eq!(lookup("x264"), Some(KeywordKind::VideoTerm));
        assert_eq!(lookup("Dual Audio"), Some(KeywordKind::AudioTerm));
    }

    #[test]
    fn test_lookup_unknown_word() {
        assert_eq!(lookup("Bebop"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn test_no_keyword_is_listed_twice() {
        let total = ANIME_TYPE.len()
            + AUDIO_TERM.len()
            + DEVICE_COMPATIBILITY.len()
            + LANGUAGE.len()
            + RELEASE_INFORMATION.len()
            + SOURCE.len()
            + SUBTITLES.len()
            + VIDEO_TERM.len();
        assert_eq!(KEYWORDS.len(), total);
    }

    #[test]
    fn test_ambiguous_keywords_are_keywords() {
        for word in AMBIGUOUS {
            assert!(lookup(word).is_some(), "{word} should be a keyword");
        }
        assert!(is_ambiguous("End"));
        assert!(!is_ambiguous("BluRay"));
    }

    #[test]
    fn test_file_extensions() {
        assert!(is_file_extension("mkv"));
        assert!(is_file_extension("MP4"));
        assert!(!is_file_extension("S01E05"));
        assert!(!is_file_extension(""));
    }
}
