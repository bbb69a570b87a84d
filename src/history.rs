use crate::model::FileRecord;
use chrono::NaiveDate;
use std::path::Path;
use std::process::Command;

/// Ask git for the commit dates touching `file`, newest first, and fold
/// them into a [`FileRecord`].
///
/// Runs `git --no-pager log --pretty=format:%ad --date=short -- <file>`
/// with the working directory set to `repo_root`, so `file` is a path
/// relative to the checkout root. One `YYYY-MM-DD` line per commit.
///
/// An untracked file yields no lines; a failed invocation (bad path,
/// missing git, nonzero exit) is treated the same way. Either case
/// produces the zero-commit sentinel so a single bad path never aborts
/// a batch.
pub fn query(repo_root: &Path, file: &str) -> FileRecord {
    let output = Command::new("git")
        .arg("--no-pager")
        .arg("log")
        .arg("--pretty=format:%ad")
        .arg("--date=short")
        .arg("--")
        .arg(file)
        .current_dir(repo_root)
        .output();

    let stdout = match output {
        Ok(out) if out.status.success() => out.stdout,
        _ => return FileRecord::untracked(file.to_string()),
    };

    let text = String::from_utf8_lossy(&stdout);
    let mut dates = text.lines().filter(|line| !line.is_empty());
    let newest = match dates.next() {
        Some(line) => line.to_string(),
        None => return FileRecord::untracked(file.to_string()),
    };
    let commit_count = 1 + dates.count() as u32;

    FileRecord::new(file.to_string(), commit_count, normalize_date(newest))
}

/// `--date=short` already emits zero-padded ISO dates; anything that
/// fails to parse is kept verbatim rather than dropped.
fn normalize_date(raw: String) -> String {
    match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(_) => raw,
    }
}
