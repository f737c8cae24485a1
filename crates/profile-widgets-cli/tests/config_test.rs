use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use profile_widgets_testing::TestWorld;

#[allow(deprecated)]
fn command(world: &TestWorld) -> Command {
    let mut cmd = Command::cargo_bin("profile-widgets").unwrap();
    world.configure_command(&mut cmd);
    cmd
}

#[test]
fn test_config_show_defaults() {
    let world = TestWorld::new();

    command(&world)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("profile_path_prefix = \"/profile/\""))
        .stdout(predicate::str::contains("navigation = \"full-page\""))
        .stdout(predicate::str::contains("empty_initial = \"?\""));
}

#[test]
fn test_config_show_reflects_file() {
    let world = TestWorld::new().with_config("profile_path_prefix = \"/u/\"\n");

    command(&world)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("profile_path_prefix = \"/u/\""))
        .stdout(predicate::str::contains("link_style = \"span\""));
}

#[test]
fn test_config_path_uses_env_override() -> Result<()> {
    let world = TestWorld::new();
    let result = world.run(&["config", "path"])?;

    assert!(result.success());
    assert_eq!(
        result.stdout().trim_end(),
        world.config_path().display().to_string()
    );
    Ok(())
}

#[test]
fn test_explicit_config_flag_wins_over_env() -> Result<()> {
    let world = TestWorld::new().with_file("other.toml", "profile_path_prefix = \"/people/\"\n");
    let other = world.path("other.toml");
    let result = world.run(&[
        "--config",
        other.to_str().unwrap(),
        "--format",
        "text",
        "picture",
        "--username",
        "zed",
        "--activate",
    ])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(result.lines(), vec!["z", "navigate full-page /people/zed"]);
    Ok(())
}

#[test]
fn test_missing_explicit_config_warns_on_stderr_only() {
    let world = TestWorld::new();

    command(&world)
        .args([
            "--config",
            "/nonexistent/widgets.toml",
            "--format",
            "text",
            "display",
            "--username",
            "abc",
        ])
        .assert()
        .success()
        .stdout("@abc\n")
        .stderr(predicate::str::contains("config file not found"));
}
