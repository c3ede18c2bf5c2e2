use crate::cli::Cli;
use crate::domain::models::{CollisionEntry, DuplicateEntry, RebuildReport, RenameReport};
use crate::services::{manifest, output, rename};
use std::process::ExitCode;

pub fn handle_rebuild(cli: &Cli) -> anyhow::Result<ExitCode> {
    let (rebuilt, duplicates) = manifest::rebuild_from_disk(&cli.audio_root)?;
    manifest::save_manifest(&cli.manifest, &rebuilt)?;

    let report = RebuildReport {
        manifest_path: cli.manifest.display().to_string(),
        keys: rebuilt.len(),
        duplicates,
    };
    if !cli.json {
        warn_duplicates("Duplicate key/voice mappings detected:", &report.duplicates);
    }
    output::print_report(cli.json, report, |r| {
        format!("Manifest updated: {}", r.manifest_path)
    })?;
    Ok(ExitCode::SUCCESS)
}

pub fn handle_rename(cli: &Cli) -> anyhow::Result<ExitCode> {
    let outcome = rename::rename_voice_files(&cli.audio_root)?;
    manifest::save_manifest(&cli.manifest, &outcome.manifest)?;

    let report = RenameReport {
        manifest_path: cli.manifest.display().to_string(),
        renamed: outcome.renamed,
        keys: outcome.manifest.len(),
        collisions: outcome.collisions,
        duplicates: outcome.duplicates,
    };
    if !cli.json {
        warn_collisions(&report.collisions);
        warn_duplicates("Duplicate keys detected (keeping first):", &report.duplicates);
    }
    output::print_report(cli.json, report, |r| {
        format!("Manifest updated: {}", r.manifest_path)
    })?;
    Ok(ExitCode::SUCCESS)
}

fn warn_duplicates(heading: &str, duplicates: &[DuplicateEntry]) {
    if duplicates.is_empty() {
        return;
    }
    eprintln!("{heading}");
    for dup in duplicates {
        eprintln!(
            "- {} / {}: kept {}, saw {}",
            dup.key, dup.voice_folder, dup.kept, dup.seen
        );
    }
}

fn warn_collisions(collisions: &[CollisionEntry]) {
    if collisions.is_empty() {
        return;
    }
    eprintln!("Filename collisions detected (suffix added):");
    for collision in collisions {
        eprintln!(
            "- {}: {} -> {}",
            collision.voice_folder, collision.original, collision.renamed
        );
    }
}
