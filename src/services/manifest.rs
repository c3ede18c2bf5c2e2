use crate::domain::models::{AudioManifest, DuplicateEntry};
use crate::services::scan::slash_path;
use percent_encoding::percent_decode_str;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

#[derive(thiserror::Error, Debug)]
pub enum ManifestError {
    #[error("no voice folders found under {0}")]
    NoVoiceFolders(PathBuf),
}

/// Load the persisted manifest. A missing file is an empty mapping;
/// malformed JSON propagates.
pub fn load_manifest(path: &Path) -> anyhow::Result<Map<String, Value>> {
    if !path.exists() {
        return Ok(Map::new());
    }
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

pub fn save_manifest(path: &Path, manifest: &AudioManifest) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut body = serde_json::to_string_pretty(manifest)?;
    body.push('\n');
    fs::write(path, body)?;
    Ok(())
}

/// Junk the archive tooling leaves behind in voice folders.
pub fn is_ignored_entry(name: &str) -> bool {
    name == "__MACOSX" || name == ".DS_Store" || name.starts_with("._")
}

pub fn list_voice_folders(audio_root: &Path) -> anyhow::Result<Vec<String>> {
    let mut folders = Vec::new();
    for entry in fs::read_dir(audio_root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_ignored_entry(&name) {
            continue;
        }
        folders.push(name);
    }
    folders.sort();
    Ok(folders)
}

fn strip_wav_suffix(name: &str) -> &str {
    let len = name.len();
    if len >= 4 && name.is_char_boundary(len - 4) && name[len - 4..].eq_ignore_ascii_case(".wav") {
        &name[..len - 4]
    } else {
        name
    }
}

/// Term key as the manifest builders derive it from a filename: last
/// underscore-separated segment, percent-decoded (raw segment kept when the
/// bytes are not UTF-8), NFC-normalized, trimmed.
pub fn key_from_filename(filename: &str) -> String {
    let base = strip_wav_suffix(filename);
    let raw = base.rsplit('_').next().unwrap_or("");
    let decoded = match percent_decode_str(raw).decode_utf8() {
        Ok(text) => text.into_owned(),
        Err(_) => raw.to_string(),
    };
    decoded.nfc().collect::<String>().trim().to_string()
}

fn preferred_path(existing: &str, candidate: String) -> String {
    if candidate.len() < existing.len() {
        candidate
    } else {
        existing.to_string()
    }
}

fn wav_names_in(dir: &Path) -> anyhow::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_ignored_entry(&name) || !name.to_ascii_lowercase().ends_with(".wav") {
            continue;
        }
        names.push(name);
    }
    names.sort();
    Ok(names)
}

/// Rebuild the manifest from the direct wav files of each voice folder.
/// When the same key/voice pair appears twice, the shorter path wins and the
/// duplicate is reported.
pub fn rebuild_from_disk(
    audio_root: &Path,
) -> anyhow::Result<(AudioManifest, Vec<DuplicateEntry>)> {
    let voice_folders = list_voice_folders(audio_root)?;
    if voice_folders.is_empty() {
        return Err(ManifestError::NoVoiceFolders(audio_root.to_path_buf()).into());
    }

    let mut manifest = AudioManifest::new();
    let mut duplicates = Vec::new();

    for voice in &voice_folders {
        let voice_dir = audio_root.join(voice);
        for name in wav_names_in(&voice_dir)? {
            let key = key_from_filename(&name);
            if key.is_empty() {
                continue;
            }
            let rel = slash_path(&voice_dir.join(&name));
            let voices = manifest.entry(key.clone()).or_default();
            if let Some(existing) = voices.get(voice).cloned() {
                let kept = preferred_path(&existing, rel.clone());
                let seen = if kept == rel { existing } else { rel };
                duplicates.push(DuplicateEntry {
                    key,
                    voice_folder: voice.clone(),
                    kept: kept.clone(),
                    seen,
                });
                voices.insert(voice.clone(), kept);
            } else {
                voices.insert(voice.clone(), rel);
            }
        }
    }

    Ok((manifest, duplicates))
}

#[cfg(test)]
mod tests {
    use super::{is_ignored_entry, key_from_filename};

    #[test]
    fn key_strips_suffix_and_takes_last_segment() {
        assert_eq!(key_from_filename("greet_alpha.wav"), "alpha");
        assert_eq!(key_from_filename("alpha.WAV"), "alpha");
        assert_eq!(key_from_filename("a_b_c.wav"), "c");
    }

    #[test]
    fn key_is_percent_decoded_with_raw_fallback() {
        assert_eq!(key_from_filename("v_%E3%81%82.wav"), "\u{3042}");
        // invalid utf-8 after decoding keeps the raw segment
        assert_eq!(key_from_filename("v_%FF%FE.wav"), "%FF%FE");
    }

    #[test]
    fn key_is_nfc_normalized() {
        // か + combining dakuten composes to が
        assert_eq!(key_from_filename("v_\u{304B}\u{3099}.wav"), "\u{304C}");
    }

    #[test]
    fn archive_junk_is_ignored() {
        assert!(is_ignored_entry("__MACOSX"));
        assert!(is_ignored_entry(".DS_Store"));
        assert!(is_ignored_entry("._resource.wav"));
        assert!(!is_ignored_entry("voiceA"));
    }
}
