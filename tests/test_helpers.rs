use assert_cmd::Command;
use std::path::Path;

/// Creates a `Command` for the `swansong` binary with a clean environment,
/// pointed at `data_dir`. Additional arguments can be configured by the caller.
pub fn base_swansong_command(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("swansong").expect("swansong binary not built");
    configure_swansong_command(&mut cmd, data_dir);
    cmd
}

/// Applies the standard isolated environment to an existing `Command`.
pub fn configure_swansong_command(cmd: &mut Command, data_dir: &Path) {
    cmd.env_clear();
    if let Ok(path) = std::env::var("PATH") {
        cmd.env("PATH", path);
    }
    if let Ok(tmpdir) = std::env::var("TMPDIR") {
        cmd.env("TMPDIR", tmpdir);
    }
    cmd.env("HOME", data_dir);
    cmd.env("SWANSONG_DIR", data_dir);
}
