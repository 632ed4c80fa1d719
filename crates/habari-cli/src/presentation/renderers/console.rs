use anyhow::{Context, Result};
use habari_types::Record;
use serde::Serialize;
use std::io::{self, Write};

use super::traits::Renderer;
use crate::presentation::formatters::{format_fields, format_json};
use crate::types::OutputFormat;

pub struct ConsoleRenderer {
    format: OutputFormat,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render into any writer; `render` uses this with stdout
    pub fn render_to<R, W>(&self, record: &R, out: &mut W) -> Result<()>
    where
        R: Record + Serialize,
        W: Write,
    {
        let output = match self.format {
            OutputFormat::Json => format_json(record).context("failed to encode metadata as JSON")?,
            OutputFormat::Plain => format_fields(record),
        };

        out.write_all(output.as_bytes())
            .context("failed to write output")?;
        out.flush().context("failed to write output")?;
        Ok(())
    }
}

impl Renderer for ConsoleRenderer {
    fn render<R>(&self, record: &R) -> Result<()>
    where
        R: Record + Serialize,
    {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.render_to(record, &mut handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use habari_types::{AsFieldValue, FieldValue, Metadata, define_record};
    use serde::ser::Error as _;

    /// Serializes to an error, and has no text form
    struct Unsupported;

    impl Serialize for Unsupported {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("unsupported value"))
        }
    }

    impl AsFieldValue for Unsupported {
        fn as_field_value(&self) -> FieldValue<'_> {
            FieldValue::Other
        }
    }

    define_record! {
        #[derive(Serialize)]
        struct Broken {
            "Title" => title: String,
            "Payload" => payload: Unsupported,
        }
    }

    fn broken() -> Broken {
        Broken {
            title: "x".to_string(),
            payload: Unsupported,
        }
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn sample() -> Metadata {
        Metadata {
            title: "Cowboy Bebop".to_string(),
            episode_number: vec!["05".to_string()],
            ..Default::default()
        }
    }

    fn render(format: OutputFormat, metadata: &Metadata) -> String {
        let mut buffer = Vec::new();
        ConsoleRenderer::new(format)
            .render_to(metadata, &mut buffer)
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_plain_mode_uses_aligned_text() {
        assert_eq!(
            render(OutputFormat::Plain, &sample()),
            "  Title:          Cowboy Bebop\n  EpisodeNumber:  05\n"
        );
    }

    #[test]
    fn test_json_mode_round_trips() {
        let output = render(OutputFormat::Json, &sample());
        let parsed: Metadata = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_json_mode_keeps_empty_fields_plain_mode_drops_them() {
        let json = render(OutputFormat::Json, &sample());
        let plain = render(OutputFormat::Plain, &sample());

        assert!(json.contains("\"release_group\": \"\""));
        assert!(!plain.contains("ReleaseGroup"));
    }

    #[test]
    fn test_blank_record_in_both_modes() {
        let blank = Metadata::default();
        assert_eq!(render(OutputFormat::Plain, &blank), "");

        let json: serde_json::Value =
            serde_json::from_str(&render(OutputFormat::Json, &blank)).unwrap();
        assert_eq!(json.as_object().map(|o| o.len()), Some(24));
    }

    #[test]
    fn test_json_encoding_failure_is_reported_with_context() {
        let mut buffer = Vec::new();
        let err = ConsoleRenderer::new(OutputFormat::Json)
            .render_to(&broken(), &mut buffer)
            .unwrap_err();

        assert_eq!(
            format!("{:#}", err),
            "failed to encode metadata as JSON: unsupported value"
        );
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_plain_mode_skips_fields_without_text_form() {
        let mut buffer = Vec::new();
        ConsoleRenderer::new(OutputFormat::Plain)
            .render_to(&broken(), &mut buffer)
            .unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "  Title:  x\n");
    }

    #[test]
    fn test_write_failure_is_reported_with_context() {
        for format in [OutputFormat::Plain, OutputFormat::Json] {
            let err = ConsoleRenderer::new(format)
                .render_to(&sample(), &mut ClosedPipe)
                .unwrap_err();
            assert_eq!(format!("{:#}", err), "failed to write output: pipe closed");
        }
    }
}
