use crate::error::Result;
use crate::model::FileRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Compiler-related path fragments. Substring match anywhere in the path,
/// case-sensitive, no segment boundary: `ci/` can also hit inside longer
/// directory names. Known imprecision, kept as-is.
pub const COMPILER_DIRS: [&str; 5] = ["opto/", "c1/", "code/", "jvmci/", "ci/"];

pub const GC_DIR: &str = "gc/";

/// Write the four reports for `records` into `out_dir`, each prefixed
/// with the cache key.
pub fn generate(records: &[FileRecord], key: &str, out_dir: &Path) -> Result<()> {
    let hot = hot_files(records);
    write_report(&hot, &out_dir.join(format!("{key}hot_files.log")))?;

    let compiler: Vec<&FileRecord> = hot
        .iter()
        .copied()
        .filter(|r| is_compiler_path(&r.file))
        .collect();
    write_report(&compiler, &out_dir.join(format!("{key}hot_compiler_files.log")))?;

    let gc: Vec<&FileRecord> = hot.iter().copied().filter(|r| r.file.contains(GC_DIR)).collect();
    write_report(&gc, &out_dir.join(format!("{key}hot_gc_files.log")))?;

    let recent = last_modified(records);
    write_report(&recent, &out_dir.join(format!("{key}last_modify.log")))?;

    Ok(())
}

/// All records by commit count, descending. The sort is stable, so ties
/// keep their input order.
pub fn hot_files(records: &[FileRecord]) -> Vec<&FileRecord> {
    let mut sorted: Vec<&FileRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.commit_count.cmp(&a.commit_count));
    sorted
}

/// All records by last-modified date, descending. Plain lexicographic
/// comparison is correct for zero-padded ISO dates.
pub fn last_modified(records: &[FileRecord]) -> Vec<&FileRecord> {
    let mut sorted: Vec<&FileRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));
    sorted
}

pub fn is_compiler_path(path: &str) -> bool {
    COMPILER_DIRS.iter().any(|dir| path.contains(dir))
}

fn write_report(records: &[&FileRecord], path: &Path) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for r in records {
        writeln!(out, "{:<5} {:<15} {:<88}", r.commit_count, r.last_modified, r.file)?;
    }
    out.flush()?;
    Ok(())
}
