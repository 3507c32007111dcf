use crate::models::Report;

/// Render a full analysis report as plain text for terminal output
pub fn format_report(report: &Report) -> String {
    let mut output = String::new();

    output.push_str("Deck Analysis\n");
    output.push_str("=============\n\n");

    if report.violations.is_empty() {
        output.push_str("No constraint violations found.\n\n");
    } else {
        output.push_str(&format!(
            "Constraint violations ({}):\n\n",
            report.violations.len()
        ));
        for violation in &report.violations {
            let issues: Vec<&str> = violation.issue_kinds.iter().map(|i| i.as_str()).collect();
            output.push_str(&format!(
                "{} [{}]\n",
                violation.original_card,
                issues.join(", ")
            ));

            if violation.replacements.is_empty() {
                output.push_str("    No suitable replacements found.\n");
            }
            for suggestion in &violation.replacements {
                output.push_str(&format!(
                    "    [{}] {} - {:.2} GBP\n        {}\n",
                    suggestion.tier, suggestion.card_name, suggestion.price, suggestion.reason
                ));
            }
            output.push('\n');
        }
    }

    output.push_str("Cost to finish by market:\n");
    let max_market_len = report
        .cost_to_finish_by_market
        .iter()
        .map(|e| e.market.as_str().len())
        .max()
        .unwrap_or(0);
    for entry in &report.cost_to_finish_by_market {
        output.push_str(&format!(
            "    {:<width$}  {:>8.2} {}\n",
            entry.market.as_str(),
            entry.total,
            entry.currency,
            width = max_market_len,
        ));
    }

    match &report.best_basket {
        Some(best) => output.push_str(&format!(
            "\nBest basket: {} at {:.2} {}\n",
            best.market.as_str(),
            best.total,
            best.currency
        )),
        None => output.push_str("\nBest basket: no market data available\n"),
    }

    output.push_str(&format!("\nNotes: {}\n", report.notes));
    output
}
