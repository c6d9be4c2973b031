use crate::types::report::AnalysisReport;
use crate::types::scoring::ScoreResult;

pub fn score_markdown(result: &ScoreResult) -> String {
    let mut output = String::new();
    output.push_str("# DevMeter Report\n\n");
    output.push_str(&format!("Score: {}%\n\n", result.percentage));
    output.push_str(&format!("Rating: {}\n\n", result.rating));
    output.push_str(&format!("Recommendation: {}\n\n", result.recommendation));
    output.push_str("## Category Scores\n\n");
    for (name, value) in result.category_scores.entries() {
        output.push_str(&format!("- {name}: {value:.3}\n"));
    }
    output
}

pub fn analysis_markdown(report: &AnalysisReport) -> String {
    let mut output = score_markdown(&report.devmeter);
    output.push_str("\n## Profile\n\n");
    output.push_str(&format!(
        "- followers: {}\n- following: {}\n- repositories considered: {}\n- total stars: {}\n- recently active repositories: {}\n\n",
        report.account.followers,
        report.account.following,
        report.repositories_considered,
        report.total_stars_received,
        report.recent_activity
    ));

    output.push_str("## Languages\n\n");
    if report.languages.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for usage in &report.languages {
            output.push_str(&format!("- {} ({})\n", usage.name(), usage.count()));
        }
        output.push('\n');
    }

    output.push_str("## Focus Areas\n\n");
    if report.focus_areas.is_empty() {
        output.push_str("- none\n");
    } else {
        for area in &report.focus_areas {
            output.push_str(&format!("- {area}\n"));
        }
    }

    output
}
