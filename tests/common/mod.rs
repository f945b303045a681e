#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn mindcare_cmd() -> Command {
    let mut cmd = Command::cargo_bin("mindcare").unwrap();
    cmd.env_remove("MINDCARE_ROOT");
    cmd.env_remove("MINDCARE_LANGUAGE");
    cmd.env_remove("MINDCARE_LOG");
    cmd
}

/// A command running inside an initialized workspace
pub fn workspace_cmd(root: &Path) -> Command {
    let mut cmd = mindcare_cmd();
    cmd.current_dir(root);
    cmd
}

pub fn init_workspace(root: &Path) {
    mindcare_cmd().arg("init").arg(root).assert().success();
}
