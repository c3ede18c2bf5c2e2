use crate::domain::models::AudioManifest;
use std::ffi::OsStr;
use std::path::Path;
use walkdir::WalkDir;

pub fn slash_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

pub fn is_wav(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .map(|ext| ext.eq_ignore_ascii_case("wav"))
        .unwrap_or(false)
}

/// Term key as the checker derives it from a wav path: file stem, last
/// underscore-separated segment, trimmed.
pub fn disk_key(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    stem.rsplit('_').next().unwrap_or("").trim().to_string()
}

/// Walk the audio root and map each wav file to its voice folder. A missing
/// root is an empty manifest, not an error. Files whose walked path has
/// fewer than 3 slash-separated segments sit outside any voice folder and
/// are skipped.
pub fn build_disk_manifest(audio_root: &Path) -> anyhow::Result<AudioManifest> {
    let mut manifest = AudioManifest::new();
    if !audio_root.exists() {
        return Ok(manifest);
    }

    for entry in WalkDir::new(audio_root).follow_links(false) {
        let entry = entry?;
        if !entry.file_type().is_file() || !is_wav(entry.path()) {
            continue;
        }
        let rel = slash_path(entry.path());
        let segments: Vec<&str> = rel.split('/').collect();
        if segments.len() < 3 {
            continue;
        }
        let voice_folder = segments[1].to_string();
        manifest
            .entry(disk_key(entry.path()))
            .or_default()
            .insert(voice_folder, rel);
    }
    Ok(manifest)
}
