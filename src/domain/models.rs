use serde::Serialize;
use std::collections::BTreeMap;

/// Voice-folder name -> relative wav path.
pub type VoiceEntries = BTreeMap<String, String>;

/// Term key -> per-voice wav paths. Sorted so a serialized manifest is
/// deterministic.
pub type AudioManifest = BTreeMap<String, VoiceEntries>;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct CheckReport {
    pub checked: usize,
    pub missing_manifest: Vec<String>,
    pub missing_disk: Vec<String>,
}

#[derive(Debug, Serialize, Clone)]
pub struct DuplicateEntry {
    pub key: String,
    pub voice_folder: String,
    pub kept: String,
    pub seen: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct CollisionEntry {
    pub voice_folder: String,
    pub original: String,
    pub renamed: String,
}

#[derive(Serialize)]
pub struct RebuildReport {
    pub manifest_path: String,
    pub keys: usize,
    pub duplicates: Vec<DuplicateEntry>,
}

#[derive(Serialize)]
pub struct RenameReport {
    pub manifest_path: String,
    pub renamed: usize,
    pub keys: usize,
    pub collisions: Vec<CollisionEntry>,
    pub duplicates: Vec<DuplicateEntry>,
}
