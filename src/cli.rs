use crate::cache::Cache;
use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hotscan")]
#[command(about = "Rank the files of a git checkout by commit count and recency")]
#[command(version)]
pub struct Cli {
    #[arg(help = "Path to the repository checkout to analyse")]
    pub root: String,

    #[arg(long, help = "Subdirectory to scan, relative to the root", default_value = "src/hotspot")]
    pub subdir: String,

    #[arg(long, help = "Files per worker thread", default_value_t = crate::collect::DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    #[arg(long, help = "Directory for cache and report files", default_value = ".")]
    pub out_dir: PathBuf,

    #[arg(long, help = "Ignore any cached result and re-run the analysis")]
    pub no_cache: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        if self.root.is_empty() {
            anyhow::bail!("ROOT must not be empty");
        }

        // The key is the argument as typed, so `/repo` and `/repo/` cache
        // and report under different prefixes.
        let key = Cache::digest(&self.root);
        let cache = Cache::new(&self.out_dir);

        let cached = if self.no_cache {
            None
        } else {
            cache
                .load(&key)
                .context("Failed to load cached analysis")?
        };

        let records = match cached {
            Some(records) => {
                println!("Using cached {key}.json file");
                records
            }
            None => {
                let root = expand_home(&self.root);
                let files = crate::walk::walk_files(&root, &self.subdir);
                let records = crate::collect::collect(&root, &files, self.batch_size);
                cache
                    .save(&key, &records)
                    .context("Failed to save analysis cache")?;
                records
            }
        };

        crate::report::generate(&records, &key, &self.out_dir)
            .context("Failed to write reports")?;

        println!("{}", style("Analysis done!").green());
        Ok(())
    }
}

fn expand_home(raw: &str) -> PathBuf {
    if let Some(rest) = raw.strip_prefix('~') {
        if rest.is_empty() || rest.starts_with('/') {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest.trim_start_matches('/'));
            }
        }
    }
    PathBuf::from(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_pass_through() {
        assert_eq!(expand_home("/repo"), PathBuf::from("/repo"));
        assert_eq!(expand_home("relative/path"), PathBuf::from("relative/path"));
    }

    #[test]
    fn tilde_prefix_expands_to_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/jdk"), home.join("jdk"));
            assert_eq!(expand_home("~"), home);
        }
    }

    #[test]
    fn tilde_user_forms_are_left_alone() {
        assert_eq!(expand_home("~other/jdk"), PathBuf::from("~other/jdk"));
    }
}
