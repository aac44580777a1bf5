//! Analyze command: compliance verdict for a claim period.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::{Context, Result};
use sed_core::{Clock, ComplianceStatus, Entry, RuleResult, Thresholds, Verdict, evaluate};

/// Formats the human-readable verdict.
pub fn format_verdict(verdict: &Verdict) -> String {
    let mut output = String::new();

    writeln!(output, "SED COMPLIANCE: {}", verdict.status.label()).unwrap();
    let length = verdict
        .total_period_days
        .map(|days| format!(" ({days} days)"))
        .unwrap_or_default();
    let defaulted = if verdict.period_defaulted {
        " [defaulted to latest entry]"
    } else {
        ""
    };
    writeln!(
        output,
        "Claim period: {} to {}{length}{defaulted}",
        verdict.period_start, verdict.period_end
    )
    .unwrap();

    let Some(metrics) = &verdict.metrics else {
        writeln!(output).unwrap();
        for reason in &verdict.reasons {
            writeln!(output, "Reason: {reason}").unwrap();
        }
        return output;
    };

    writeln!(output).unwrap();
    writeln!(output, "RULES").unwrap();
    writeln!(output, "─────").unwrap();
    write_rule(&mut output, "Days outside UK", &metrics.days_abroad, "required");
    write_rule(&mut output, "Days in UK", &metrics.days_at_home, "allowed");
    write_rule(&mut output, "Longest UK visit", &metrics.home_visit, "limit");
    write_rule(&mut output, "Longest voyage gap", &metrics.voyage_gap, "limit");

    writeln!(output).unwrap();
    match verdict.status {
        ComplianceStatus::NonCompliant => {
            writeln!(output, "FAILURES").unwrap();
            writeln!(output, "────────").unwrap();
            for reason in &verdict.reasons {
                writeln!(output, "- {reason}").unwrap();
            }
        }
        ComplianceStatus::Compliant | ComplianceStatus::InvalidPeriod => {
            writeln!(output, "Simplified check only; not a legal determination.").unwrap();
        }
    }

    output
}

fn write_rule(output: &mut String, name: &str, rule: &RuleResult, bound: &str) {
    writeln!(
        output,
        "[{}] {name:<18} {:>4} / {} {bound}",
        rule.indicator.label(),
        rule.measured,
        rule.threshold
    )
    .unwrap();
    for detail in &rule.details {
        writeln!(output, "       {detail}").unwrap();
    }
}

/// Formats the verdict as JSON.
pub fn format_verdict_json(verdict: &Verdict) -> Result<String> {
    Ok(serde_json::to_string_pretty(verdict)?)
}

/// Runs the analyze command.
pub fn run<W: Write, C: Clock>(
    writer: &mut W,
    entries: &[Entry],
    start: Option<&str>,
    end: Option<&str>,
    thresholds: &Thresholds,
    clock: &C,
    json: bool,
) -> Result<Verdict> {
    let verdict =
        evaluate(entries, start, end, thresholds, clock).context("cannot evaluate compliance")?;

    if json {
        writeln!(writer, "{}", format_verdict_json(&verdict)?)?;
    } else {
        write!(writer, "{}", format_verdict(&verdict))?;
    }

    Ok(verdict)
}
