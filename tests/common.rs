use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

// Helpers shared by the integration and e2e tests. Not every test file uses
// every helper, so dead-code warnings are suppressed to keep CI clean.
#[allow(dead_code)]
pub struct TestContext {
    pub _temp_dir: TempDir,
    pub home: PathBuf,
    pub install_dir: PathBuf,
    pub bin_path: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let home = temp_dir.path().join("home");
        let install_dir = temp_dir.path().join("go");
        std::fs::create_dir_all(&home).expect("Failed to create temp home");

        let bin_path = PathBuf::from(env!("CARGO_BIN_EXE_getgo"));

        Self {
            _temp_dir: temp_dir,
            home,
            install_dir,
            bin_path,
        }
    }

    /// Command for the getgo binary, isolated to the temp home so no real
    /// shell startup files or config are touched.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::new(&self.bin_path);
        cmd.env("HOME", &self.home);
        cmd.env("GETGO_CONFIG_FILE", self._temp_dir.path().join("config.json"));
        cmd.env("GETGO_INSTALL_DIR", &self.install_dir);
        cmd.current_dir(self._temp_dir.path());
        cmd
    }
}

#[allow(dead_code)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub status: std::process::ExitStatus,
}

impl From<Output> for CommandOutput {
    fn from(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            status: output.status,
        }
    }
}

#[allow(dead_code)]
impl CommandOutput {
    pub fn assert_success(&self) -> &Self {
        if !self.status.success() {
            panic!(
                "Command failed with status {:?}\nstdout: {}\nstderr: {}",
                self.status.code(),
                self.stdout,
                self.stderr
            );
        }
        self
    }

    pub fn assert_exit_code(&self, code: i32) -> &Self {
        assert_eq!(
            self.status.code(),
            Some(code),
            "Expected exit code {}\nstdout: {}\nstderr: {}",
            code,
            self.stdout,
            self.stderr
        );
        self
    }

    pub fn assert_stdout_contains(&self, text: &str) -> &Self {
        assert!(
            self.stdout.contains(text),
            "Stdout did not contain '{}'\nActual stdout: {}",
            text,
            self.stdout
        );
        self
    }

    pub fn assert_stderr_contains(&self, text: &str) -> &Self {
        assert!(
            self.stderr.contains(text),
            "Stderr did not contain '{}'\nActual stderr: {}",
            text,
            self.stderr
        );
        self
    }
}
