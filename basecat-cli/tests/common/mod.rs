use assert_cmd::Command;
use tempfile::TempDir;

pub struct TestEnv {
    pub work_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().unwrap(),
        }
    }

    pub fn basecat(&self) -> Command {
        let mut cmd = Command::cargo_bin("basecat").unwrap();
        cmd.current_dir(self.work_dir.path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("RUST_LOG");
        cmd
    }

    /// Export the built-in catalogue and return it as JSON for editing.
    pub fn builtin_document(&self) -> serde_json::Value {
        let output = self.basecat().arg("export").output().unwrap();
        assert!(output.status.success());
        serde_json::from_slice(&output.stdout).unwrap()
    }

    pub fn write_document(&self, name: &str, document: &serde_json::Value) -> std::path::PathBuf {
        let path = self.work_dir.path().join(name);
        std::fs::write(&path, serde_json::to_string_pretty(document).unwrap()).unwrap();
        path
    }
}
