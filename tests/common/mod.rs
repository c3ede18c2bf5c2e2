use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
    pub audio: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().to_path_buf();
        let audio = root.join("Audio");
        fs::create_dir_all(&audio).expect("create audio root");

        Self {
            _tmp: tmp,
            root,
            audio,
        }
    }

    /// Command with its working directory inside the fixture, so the
    /// default `Audio/...` paths resolve there.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("koemap").expect("koemap binary");
        cmd.current_dir(&self.root);
        cmd
    }

    pub fn add_wav(&self, voice: &str, name: &str) -> PathBuf {
        let path = self.audio.join(voice).join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create voice folder");
        }
        fs::write(&path, b"RIFF").expect("write wav fixture");
        path
    }

    pub fn write_manifest(&self, manifest: &Value) {
        let body = serde_json::to_string_pretty(manifest).expect("serialize manifest");
        fs::write(self.audio.join("audio-manifest.json"), body).expect("write manifest");
    }

    pub fn read_manifest(&self) -> Value {
        let raw =
            fs::read_to_string(self.audio.join("audio-manifest.json")).expect("manifest file");
        serde_json::from_str(&raw).expect("valid manifest json")
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}
