use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use time::format_description::well_known::Rfc3339;

pub const APP_LOG: &str = "logs/remdir.log";

pub fn log_line<P: AsRef<Path>>(path: P, line: &str) {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let stamp = time::OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default();
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let _ = writeln!(file, "[{stamp}] {line}");
    }
}
