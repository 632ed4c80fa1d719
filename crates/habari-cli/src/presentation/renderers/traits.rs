use anyhow::Result;
use habari_types::Record;
use serde::Serialize;

pub trait Renderer {
    fn render<R>(&self, record: &R) -> Result<()>
    where
        R: Record + Serialize;
}
