pub mod json;
pub mod md;

use crate::error::DevMeterError;
use crate::types::report::AnalysisReport;
use crate::types::scoring::ScoreResult;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render_score(result: &ScoreResult, format: OutputFormat) -> Result<String, DevMeterError> {
    match format {
        OutputFormat::Json => json::to_json(result).map_err(DevMeterError::Json),
        OutputFormat::Md => Ok(md::score_markdown(result)),
    }
}

pub fn render_analysis(
    report: &AnalysisReport,
    format: OutputFormat,
) -> Result<String, DevMeterError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(DevMeterError::Json),
        OutputFormat::Md => Ok(md::analysis_markdown(report)),
    }
}
