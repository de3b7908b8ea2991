use crate::io::output::{ManualReport, OutputWriter, VisualReport};
use serde::Serialize;
use std::io::Write;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_json<T: Serialize>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_visual(&mut self, report: &VisualReport) -> anyhow::Result<()> {
        self.write_json(report)
    }

    fn write_manual(&mut self, report: &ManualReport) -> anyhow::Result<()> {
        self.write_json(report)
    }
}
