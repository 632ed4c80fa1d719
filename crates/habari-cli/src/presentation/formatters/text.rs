use habari_types::Record;

const INDENT: &str = "  ";
const GAP: &str = "  ";

/// Render the non-empty fields of a record as aligned `Label:  value` lines.
///
/// Fields whose value is empty, or of a kind that has no text form, are left
/// out. Labels are padded to the longest label that survives, so every value
/// starts in the same column. A record with nothing to show renders as an
/// empty string.
pub fn format_fields<R: Record>(record: &R) -> String {
    let rows: Vec<(&'static str, String)> = record
        .fields()
        .into_iter()
        .filter_map(|field| {
            let value = field.value.display()?;
            (!value.is_empty()).then_some((field.name, value))
        })
        .collect();

    let width = rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0)
        + 1;

    let mut output = String::new();
    for (label, value) in rows {
        let label = format!("{}:", label);
        output.push_str(&format!("{INDENT}{label:<width$}{GAP}{value}\n"));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use habari_types::{Metadata, define_record};

    define_record! {
        #[derive(Debug, Default)]
        struct Showcase {
            "Title" => title: String,
            "Episode" => episode: String,
            "Genres" => genres: Vec<String>,
            "Studio" => studio: String,
            "Rating" => rating: u32,
        }
    }

    fn cowboy_bebop() -> Showcase {
        Showcase {
            title: "Cowboy Bebop".to_string(),
            episode: "5".to_string(),
            genres: vec!["Action".to_string(), "Sci-Fi".to_string()],
            studio: String::new(),
            rating: 9,
        }
    }

    #[test]
    fn test_aligned_output_drops_empty_fields() {
        assert_eq!(
            format_fields(&cowboy_bebop()),
            "  Title:    Cowboy Bebop\n  Episode:  5\n  Genres:   Action, Sci-Fi\n"
        );
    }

    #[test]
    fn test_line_count_matches_non_empty_fields() {
        let output = format_fields(&cowboy_bebop());
        assert_eq!(output.lines().count(), 3);
    }

    #[test]
    fn test_labels_follow_declaration_order() {
        let showcase = Showcase {
            studio: "Sunrise".to_string(),
            title: "Cowboy Bebop".to_string(),
            ..Default::default()
        };
        let rendered = format_fields(&showcase);
        let labels: Vec<&str> = rendered
            .lines()
            .map(|line| line.trim_start().split(':').next().unwrap_or_default())
            .collect();
        assert_eq!(labels, vec!["Title", "Studio"]);
    }

    #[test]
    fn test_values_share_one_column() {
        let output = format_fields(&cowboy_bebop());
        // indent + "Episode" + ":" + gap
        let column = 2 + "Episode".len() + 1 + 2;
        for line in output.lines() {
            let (head, _) = line.split_at(column);
            assert!(head.ends_with("  "), "{line:?}");
            assert_ne!(line.as_bytes()[column], b' ', "{line:?}");
        }
    }

    #[test]
    fn test_dropped_labels_do_not_widen_alignment() {
        let showcase = Showcase {
            title: "Cowboy Bebop".to_string(),
            ..Default::default()
        };
        assert_eq!(format_fields(&showcase), "  Title:  Cowboy Bebop\n");
    }

    #[test]
    fn test_single_element_list_renders_like_text() {
        let as_list = Showcase {
            genres: vec!["x".to_string()],
            ..Default::default()
        };
        let as_text = Showcase {
            studio: "x".to_string(),
            ..Default::default()
        };
        assert_eq!(format_fields(&as_list), "  Genres:  x\n");
        assert_eq!(format_fields(&as_text), "  Studio:  x\n");
    }

    #[test]
    fn test_unrenderable_fields_are_skipped() {
        let showcase = Showcase {
            rating: 10,
            ..Default::default()
        };
        assert_eq!(format_fields(&showcase), "");
    }

    #[test]
    fn test_empty_metadata_renders_nothing() {
        assert_eq!(format_fields(&Metadata::default()), "");
    }

    #[test]
    fn test_metadata_labels_are_used_verbatim() {
        let metadata = Metadata {
            title: "Fate & Destiny".to_string(),
            episode_number: vec!["01".to_string(), "02".to_string()],
            video_resolution: "1080p".to_string(),
            ..Default::default()
        };
        assert_eq!(
            format_fields(&metadata),
            concat!(
                "  Title:            Fate & Destiny\n",
                "  EpisodeNumber:    01, 02\n",
                "  VideoResolution:  1080p\n",
            )
        );
    }
}
