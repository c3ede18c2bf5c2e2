use crate::cli::Cli;
use crate::domain::models::CheckReport;
use crate::services::{manifest, output, scan, terms};
use std::path::Path;
use std::process::ExitCode;

pub fn handle_check(
    cli: &Cli,
    inline: Option<&str>,
    terms_file: Option<&Path>,
) -> anyhow::Result<ExitCode> {
    let terms = terms::load_terms(inline, terms_file)?;
    if terms.is_empty() {
        println!("No terms provided.");
        return Ok(ExitCode::FAILURE);
    }

    let manifest = manifest::load_manifest(&cli.manifest)?;
    let disk = scan::build_disk_manifest(&cli.audio_root)?;

    let mut missing_manifest = Vec::new();
    let mut missing_disk = Vec::new();
    for term in &terms {
        if !manifest.contains_key(term) {
            missing_manifest.push(term.clone());
        }
        if !disk.contains_key(term) {
            missing_disk.push(term.clone());
        }
    }

    let report = CheckReport {
        checked: terms.len(),
        missing_manifest,
        missing_disk,
    };
    output::print_report(cli.json, report, render_check)?;

    // Missing terms are reported, not gated on: the exit status stays 0
    // once terms were loaded.
    Ok(ExitCode::SUCCESS)
}

fn render_check(report: &CheckReport) -> String {
    let mut lines = vec![format!("Checked {} term(s).", report.checked)];
    lines.push(format!(
        "Missing from manifest: {}",
        report.missing_manifest.len()
    ));
    for term in &report.missing_manifest {
        lines.push(format!("- {term}"));
    }
    lines.push(format!("Missing from disk: {}", report.missing_disk.len()));
    for term in &report.missing_disk {
        lines.push(format!("- {term}"));
    }
    lines.join("\n")
}
