use crate::history;
use crate::model::FileRecord;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Run the history query over `files`, one worker thread per batch of
/// `batch_size` paths.
///
/// Each worker accumulates into its own Vec and the results are
/// concatenated after all workers have joined, so no state is shared
/// while collection runs. Aggregate order is unspecified; callers sort.
pub fn collect(repo_root: &Path, files: &[String], batch_size: usize) -> Vec<FileRecord> {
    if files.is_empty() {
        return Vec::new();
    }

    let batch_size = batch_size.max(1);
    let batches: Vec<&[String]> = files.chunks(batch_size).collect();
    println!("Analysing... [thread:{}]", batches.len());

    let pb = ProgressBar::new(batches.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} batches")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut records = Vec::with_capacity(files.len());
    std::thread::scope(|scope| {
        let handles: Vec<_> = batches
            .into_iter()
            .map(|batch| {
                scope.spawn(move || {
                    let mut local = Vec::with_capacity(batch.len());
                    for file in batch {
                        local.push(history::query(repo_root, file));
                    }
                    local
                })
            })
            .collect();

        for handle in handles {
            if let Ok(local) = handle.join() {
                records.extend(local);
            }
            pb.inc(1);
        }
    });
    pb.finish_and_clear();

    records
}
