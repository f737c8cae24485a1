//! TestWorld pattern for CLI integration tests.
//!
//! Every world gets its own temp directory and its own config path, so a
//! developer's real configuration never leaks into a test run.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use profile_widgets_types::User;

const CONFIG_ENV_VAR: &str = "PROFILE_WIDGETS_CONFIG";

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use profile_widgets_testing::TestWorld;
/// use profile_widgets_testing::fixtures::jane_doe;
///
/// let world = TestWorld::new().with_user("jane.json", &jane_doe());
/// let user_file = world.path("jane.json");
/// let result = world
///     .run(&["--format", "text", "display", "--user-file", user_file.to_str().unwrap()])
///     .unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");

        Self {
            temp_dir,
            config_path,
            env_vars: HashMap::new(),
        }
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Config file the CLI will read (may not exist yet).
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Path of a file inside the temp directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write the config file the CLI picks up.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(&self.config_path, toml).expect("Failed to write config");
        self
    }

    /// Write a user record as JSON into the temp directory.
    pub fn with_user(self, name: &str, user: &User) -> Self {
        let json = serde_json::to_string_pretty(user).expect("Failed to encode user");
        self.with_file(name, &json)
    }

    pub fn with_file(self, name: &str, content: &str) -> Self {
        std::fs::write(self.path(name), content).expect("Failed to write file");
        self
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.current_dir(self.temp_dir.path());
        cmd.env(CONFIG_ENV_VAR, &self.config_path);
        cmd.env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run the CLI with arguments.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("profile-widgets")
            .map_err(|e| anyhow::anyhow!("Failed to find profile-widgets binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Run the CLI with stdin content.
    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> Result<CliResult> {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("profile-widgets")
            .map_err(|e| anyhow::anyhow!("Failed to find profile-widgets binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args).write_stdin(stdin.to_string());

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    /// Stdout lines with the trailing newline dropped.
    pub fn lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }
}
