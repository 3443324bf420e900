mod sink;
mod tables;

pub use self::sink::{LineSink, StdoutSink};
pub use self::tables::stage_summary;

use crate::assembler::MatchReport;
use crate::config::OutputFormat;
use crate::error::{ScResult, StageCardError};

/// Match name, then each stage block separated by a blank line.
pub fn render_text<S: LineSink>(report: &MatchReport, sink: &mut S) -> ScResult<()> {
    if !report.match_name.is_empty() {
        sink.emit(&report.match_name)?;
    }
    for stage in &report.stages {
        sink.emit("")?;
        for line in stage.lines() {
            sink.emit(&line)?;
        }
    }
    Ok(())
}

pub fn render_table<S: LineSink>(report: &MatchReport, sink: &mut S) -> ScResult<()> {
    if !report.match_name.is_empty() {
        sink.emit(&report.match_name)?;
    }
    let table = stage_summary(report);
    for line in table.lines() {
        sink.emit(&line)?;
    }
    Ok(())
}

pub fn render_json<S: LineSink>(report: &MatchReport, sink: &mut S) -> ScResult<()> {
    let body = serde_json::to_string_pretty(report).map_err(|source| StageCardError::Json {
        document: "report".to_string(),
        source,
    })?;
    for line in body.lines() {
        sink.emit(line)?;
    }
    Ok(())
}

pub fn render<S: LineSink>(report: &MatchReport, format: OutputFormat, sink: &mut S) -> ScResult<()> {
    match format {
        OutputFormat::Text => render_text(report, sink),
        OutputFormat::Table => render_table(report, sink),
        OutputFormat::Json => render_json(report, sink),
    }
}
