use serde::{Deserialize, Serialize};

use crate::define_record;

define_record! {
    /// Descriptive metadata extracted from a release filename.
    ///
    /// Empty strings and empty lists mean the parser found nothing for that
    /// field. Numbers are kept exactly as written in the filename.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Metadata {
        "Title" => pub title: String,
        /// Title with season and part appended, e.g. "Attack on Titan Season 2"
        "FormattedTitle" => pub formatted_title: String,
        "SeasonNumber" => pub season_number: Vec<String>,
        "PartNumber" => pub part_number: Vec<String>,
        "VolumeNumber" => pub volume_number: Vec<String>,
        "EpisodeNumber" => pub episode_number: Vec<String>,
        /// Secondary numbering, usually absolute episode count in parentheses
        "EpisodeNumberAlt" => pub episode_number_alt: Vec<String>,
        /// Number attached to an anime type, e.g. the 2 in "OVA 2"
        "OtherEpisodeNumber" => pub other_episode_number: Vec<String>,
        "AnimeType" => pub anime_type: Vec<String>,
        "Year" => pub year: String,
        "AudioTerm" => pub audio_term: Vec<String>,
        "DeviceCompatibility" => pub device_compatibility: Vec<String>,
        "EpisodeTitle" => pub episode_title: String,
        "FileChecksum" => pub file_checksum: String,
        "FileExtension" => pub file_extension: String,
        "FileName" => pub file_name: String,
        "Language" => pub language: Vec<String>,
        "ReleaseGroup" => pub release_group: String,
        "ReleaseInformation" => pub release_information: Vec<String>,
        "ReleaseVersion" => pub release_version: Vec<String>,
        "Source" => pub source: Vec<String>,
        "Subtitles" => pub subtitles: Vec<String>,
        "VideoResolution" => pub video_resolution: String,
        "VideoTerm" => pub video_term: Vec<String>,
    }
}
