use crate::domain::models::{AudioManifest, CollisionEntry, DuplicateEntry};
use crate::services::manifest::{
    is_ignored_entry, key_from_filename, list_voice_folders, ManifestError,
};
use crate::services::scan::{is_wav, slash_path};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use unicode_normalization::UnicodeNormalization;
use walkdir::WalkDir;

const MAX_FILENAME_CHARS: usize = 80;

#[derive(thiserror::Error, Debug)]
pub enum RenameError {
    #[error("unable to find a unique filename for {0}")]
    NoUniqueName(String),
}

pub struct RenameOutcome {
    pub manifest: AudioManifest,
    pub renamed: usize,
    pub collisions: Vec<CollisionEntry>,
    pub duplicates: Vec<DuplicateEntry>,
}

/// Turn a term key into a filename base: NFC, whitespace runs become a
/// single underscore, everything outside ASCII alphanumerics, underscore,
/// kana and CJK ranges is dropped, capped at 80 characters.
pub fn sanitize_filename(text: &str) -> String {
    let normalized: String = text.nfc().collect();
    let underscored = normalized.split_whitespace().collect::<Vec<_>>().join("_");
    let capped: String = underscored
        .chars()
        .filter(|&c| is_allowed_char(c))
        .take(MAX_FILENAME_CHARS)
        .collect();
    if capped.is_empty() {
        "untitled".to_string()
    } else {
        capped
    }
}

fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || c == '_'
        || ('\u{3040}'..='\u{30FF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{4E00}'..='\u{9FFF}').contains(&c)
}

fn ensure_unique_filename(
    base: &str,
    used: &mut HashSet<String>,
    dir: &Path,
) -> Result<(String, Option<u32>), RenameError> {
    let candidate = format!("{base}.wav");
    if !used.contains(&candidate) && !dir.join(&candidate).exists() {
        used.insert(candidate.clone());
        return Ok((candidate, None));
    }
    for counter in 2..1000 {
        let candidate = format!("{base}__{counter}.wav");
        if !used.contains(&candidate) && !dir.join(&candidate).exists() {
            used.insert(candidate.clone());
            return Ok((candidate, Some(counter)));
        }
    }
    Err(RenameError::NoUniqueName(base.to_string()))
}

fn wav_files_under(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let walker = WalkDir::new(dir)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !is_ignored_entry(&e.file_name().to_string_lossy()));
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() && is_wav(entry.path()) {
            files.push(entry.path().to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

/// Rename every wav file under each voice folder to its sanitized key,
/// flattening nested files into the voice folder, and rebuild manifest
/// entries from the renamed files (first entry wins per key/voice pair).
/// A file already bearing its target name is left untouched rather than
/// re-suffixed.
pub fn rename_voice_files(audio_root: &Path) -> anyhow::Result<RenameOutcome> {
    let voice_folders = list_voice_folders(audio_root)?;
    if voice_folders.is_empty() {
        return Err(ManifestError::NoVoiceFolders(audio_root.to_path_buf()).into());
    }

    let mut manifest = AudioManifest::new();
    let mut collisions = Vec::new();
    let mut duplicates = Vec::new();
    let mut renamed = 0usize;

    for voice in &voice_folders {
        let voice_dir = audio_root.join(voice);
        let mut used: HashSet<String> = fs::read_dir(&voice_dir)?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();

        for path in wav_files_under(&voice_dir)? {
            let filename = match path.file_name() {
                Some(name) => name.to_string_lossy().into_owned(),
                None => continue,
            };
            let key = key_from_filename(&filename);
            if key.is_empty() {
                continue;
            }

            let base = sanitize_filename(&key);
            let desired = format!("{base}.wav");
            let in_place = filename == desired && path.parent() == Some(voice_dir.as_path());
            let (new_name, suffix) = if in_place {
                (desired, None)
            } else {
                ensure_unique_filename(&base, &mut used, &voice_dir)?
            };
            if suffix.is_some() {
                collisions.push(CollisionEntry {
                    voice_folder: voice.clone(),
                    original: filename.clone(),
                    renamed: new_name.clone(),
                });
            }

            let new_path = voice_dir.join(&new_name);
            if path != new_path {
                fs::rename(&path, &new_path)?;
                renamed += 1;
            }

            let rel = slash_path(&new_path);
            let voices = manifest.entry(key.clone()).or_default();
            if let Some(kept) = voices.get(voice).cloned() {
                duplicates.push(DuplicateEntry {
                    key,
                    voice_folder: voice.clone(),
                    kept,
                    seen: rel,
                });
                continue;
            }
            voices.insert(voice.clone(), rel);
        }
    }

    Ok(RenameOutcome {
        manifest,
        renamed,
        collisions,
        duplicates,
    })
}
