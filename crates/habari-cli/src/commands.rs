use super::args::Cli;
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::Result;
use habari_types::Record;

pub fn run(cli: Cli) -> Result<()> {
    let metadata = habari_parser::parse(&cli.filename);
    let format = cli.output_format();
    tracing::debug!(%format, blank = metadata.is_blank(), "rendering metadata");

    ConsoleRenderer::new(format).render(&metadata)
}
