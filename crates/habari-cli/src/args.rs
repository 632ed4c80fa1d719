use crate::types::OutputFormat;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "habari")]
#[command(about = "Extract metadata from anime release filenames", long_about = None)]
#[command(version)]
#[command(override_usage = "habari [--json] <filename>")]
pub struct Cli {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Filename to parse. Only the text is used; the file does not need to exist
    pub filename: String,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Plain
        }
    }
}
