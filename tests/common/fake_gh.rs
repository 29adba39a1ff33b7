use std::ffi::OsString;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use tempfile::TempDir;

/// A `gh` stand-in placed first on PATH that records its arguments.
///
/// `FAKE_GH_AUTH_FAIL=1` makes `gh auth status` fail; `FAKE_GH_FAIL_WORKFLOW=<file>`
/// makes `gh workflow run <file>` fail.
pub struct FakeGh {
    pub root: TempDir,
    pub bin_dir: PathBuf,
    pub log_file: PathBuf,
}

impl FakeGh {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir for fake gh");
        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");
        let log_file = root.path().join("gh.log");

        let gh_script_path = bin_dir.join("gh");

        let script_content = format!(
            r#"#!/bin/sh
echo "$@" >> "{}"

case "$1" in
    auth)
        if [ -n "$FAKE_GH_AUTH_FAIL" ]; then
            echo "You are not logged into any GitHub hosts. Run gh auth login to authenticate." >&2
            exit 1
        fi
        echo "Logged in to github.com"
        ;;
    workflow)
        if [ -n "$FAKE_GH_FAIL_WORKFLOW" ] && [ "$3" = "$FAKE_GH_FAIL_WORKFLOW" ]; then
            echo "HTTP 404: could not find workflow $3" >&2
            exit 1
        fi
        echo "Created workflow_dispatch event for $3"
        ;;
esac

exit 0
"#,
            log_file.to_string_lossy()
        );

        fs::write(&gh_script_path, script_content).expect("Failed to write gh script");

        let mut perms =
            fs::metadata(&gh_script_path).expect("Failed to get metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&gh_script_path, perms).expect("Failed to set permissions");

        Self { root, bin_dir, log_file }
    }

    /// PATH with the fake `gh` first.
    pub fn path_env(&self) -> OsString {
        let mut paths = vec![self.bin_dir.clone()];
        if let Some(existing) = std::env::var_os("PATH") {
            paths.extend(std::env::split_paths(&existing));
        }
        std::env::join_paths(paths).expect("Failed to build PATH")
    }

    pub fn get_log(&self) -> String {
        fs::read_to_string(&self.log_file).unwrap_or_default()
    }

    /// Logged `workflow run` invocations, one per line.
    pub fn workflow_runs(&self) -> Vec<String> {
        self.get_log()
            .lines()
            .filter(|line| line.starts_with("workflow run"))
            .map(str::to_string)
            .collect()
    }
}
