#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, isolated from the caller's environment overrides.
pub fn abr() -> Command {
    let mut cmd = cargo_bin_cmd!("absence-report");
    cmd.env_remove("TIMEZONE")
        .env_remove("ABSENCE_SOURCE")
        .env("ABSENCE_REPORT_LOG", "off");
    cmd
}

/// Write `content` to a unique file inside the system temp dir
pub fn temp_file(name: &str, ext: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_absence_report.{}", name, ext));
    fs::write(&path, content).expect("write temp file");
    path.to_string_lossy().to_string()
}

/// Sheet export used by most tests (header + the usual June 2024 team).
pub fn june_sheet(name: &str) -> String {
    temp_file(
        name,
        "csv",
        "Type,Employee,Start,End,Working days,Calendar days\n\
         Vacation,Alice,09.06.2024,11.06.2024,2,3\n\
         Sick,Bob,10.06.2024,10.06.2024,1,1\n\
         Vacation,Carol,20.06.2024,25.06.2024,4,6\n\
         Sick,Dan,18.06.2024,19.06.2024,2,2\n\
         Other,Eve,24.06.2024,24.06.2024,1,1\n",
    )
}

/// Config file pointing at `source`.
pub fn config_for(name: &str, source: &str, timezone: &str) -> String {
    temp_file(
        name,
        "yml",
        &format!("timezone: {}\nsource: {}\nhas_header: true\n", timezone, source),
    )
}
