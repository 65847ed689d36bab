use crate::cli::{BlocksOutput, FileCoverage};
use crate::conf::ConfigError;
use owo_colors::OwoColorize;

pub fn render_file_coverage(coverage: &FileCoverage) -> String {
    let mut out = format!("\nProcessing file: {}\n", coverage.file);

    for summary in &coverage.summaries {
        let cutoff = summary
            .cutoff_seconds
            .map_or_else(|| "all".to_string(), |s| s.to_string());

        out.push_str(&format!(
            "Cutoff Time: {} seconds - Positive Coverage: {:.2}% - Operations with Pass: {}\n",
            cutoff, summary.positive_coverage, summary.operations_with_pass
        ));
        out.push_str(&format!(
            "Cutoff Time: {} seconds - Negative Coverage: {:.2}% - Operations with Fail: {}\n",
            cutoff, summary.negative_coverage, summary.operations_with_fail
        ));
    }

    out
}

pub fn render_blocks(output: &BlocksOutput<'_>) -> Result<String, serde_json::Error> {
    let table = serde_json::to_string_pretty(&output.operations)?;

    Ok(format!(
        "Per-operation stats:\n\
         {table}\n\
         Unique operations with pass responses: {}\n\
         Unique operations with fail responses: {}\n",
        output.operations_with_pass, output.operations_with_fail
    ))
}

/// Formats a fatal error, plus a hint for configuration mistakes.
pub fn render_error(err: &anyhow::Error, plain: bool) -> String {
    let mut out = if plain {
        format!("error: {err}\n")
    } else {
        format!("{} {}\n", "error:".red().bold(), err)
    };

    let hint = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<ConfigError>())
        .and_then(ConfigError::hint);

    if let Some(hint) = hint {
        out.push('\n');
        if plain {
            out.push_str(hint);
        } else {
            out.push_str(&hint.dimmed().to_string());
        }
        out.push('\n');
    }

    out
}
