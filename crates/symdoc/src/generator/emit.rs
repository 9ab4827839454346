//! Parallel output pass.
//!
//! Every page-bearing node renders into its own file, so the pass has no
//! ordering between pages. The only shared state is the set of directories
//! already created; returning from [`emit_pages`] is the join point after
//! which every file has been flushed.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use dashmap::DashMap;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::markdown::MarkdownWriter;
use crate::pages::{Page, PageOptions};
use crate::tree::{PathNode, PathTree};

/// A page whose file could not be written.
#[derive(Debug)]
pub struct WriteFailure {
    pub path: PathBuf,
    pub error: io::Error,
}

#[derive(Debug, Default)]
pub struct EmitReport {
    /// Written files, sorted.
    pub written: Vec<PathBuf>,
    pub failures: Vec<WriteFailure>,
}

/// Output file of a node: `<out_dir>/<full path>.md`.
pub fn page_file(
    out_dir: &Path,
    full_path: &str,
) -> PathBuf {
    let mut file = out_dir.to_path_buf();
    for segment in full_path.split('/') {
        file.push(segment);
    }
    let mut name = file.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".md");
    file.set_file_name(name);
    file
}

pub fn emit_pages(
    tree: &PathTree<Page<'_>>,
    out_dir: &Path,
    pool: &rayon::ThreadPool,
    options: PageOptions,
) -> EmitReport {
    let nodes: Vec<&PathNode<Page<'_>>> = tree.pages().collect();
    let created_dirs: DashMap<PathBuf, ()> = DashMap::new();

    debug!("Writing {} page(s) on {} thread(s)", nodes.len(), pool.current_num_threads());

    let results: Vec<Result<PathBuf, WriteFailure>> = pool.install(|| {
        nodes
            .par_iter()
            .map(|node| {
                let file = page_file(out_dir, node.full_path());
                match write_node(node, &file, &created_dirs, options) {
                    Ok(()) => Ok(file),
                    Err(error) => {
                        warn!("Failed to write {}: {error}", file.display());
                        Err(WriteFailure {
                            path: file,
                            error,
                        })
                    },
                }
            })
            .collect()
    });

    let mut report = EmitReport::default();
    for result in results {
        match result {
            Ok(file) => report.written.push(file),
            Err(failure) => report.failures.push(failure),
        }
    }
    report.written.sort();
    report
}

fn write_node(
    node: &PathNode<Page<'_>>,
    file: &Path,
    created_dirs: &DashMap<PathBuf, ()>,
    options: PageOptions,
) -> io::Result<()> {
    let Some(page) = node.page() else {
        return Ok(());
    };
    if let Some(dir) = file.parent() {
        ensure_dir(dir, created_dirs)?;
    }
    let mut writer = MarkdownWriter::new(BufWriter::new(File::create(file)?));
    page.render(&mut writer, options)?;
    writer.flush()
}

fn ensure_dir(
    dir: &Path,
    created_dirs: &DashMap<PathBuf, ()>,
) -> io::Result<()> {
    if created_dirs.contains_key(dir) {
        return Ok(());
    }
    std::fs::create_dir_all(dir)?;
    created_dirs.insert(dir.to_path_buf(), ());
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src/generator/emit_tests.rs"]
mod tests;
