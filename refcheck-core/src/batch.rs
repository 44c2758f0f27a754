//! Batch runner: walks numbered reference/candidate file pairs and
//! accumulates a summary.
//!
//! File identifiers follow the fixed `data<N>.out` naming scheme for
//! `N = 1..count`, where `count` is taken from the reference folder alone.
//! Reads are sequential and fail-fast: one unreadable file aborts the whole
//! batch, since a missing file indicates a setup problem rather than a
//! per-case failure worth tolerating.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::compare::{compare, ComparisonResult};
use crate::error::BatchError;
use crate::render::Emphasis;

const FILE_PREFIX: &str = "data";
const FILE_SUFFIX: &str = ".out";

/// Returns the fixed file name for identifier `id`, e.g. `data7.out`.
pub fn file_name(id: usize) -> String {
    format!("{FILE_PREFIX}{id}{FILE_SUFFIX}")
}

/// Parses a directory-entry name of the form `data<N>.out` back to `N`.
fn numbered_id(name: &str) -> Option<usize> {
    name.strip_prefix(FILE_PREFIX)?
        .strip_suffix(FILE_SUFFIX)?
        .parse()
        .ok()
}

/// Counts the `data<N>.out` entries in `dir`.
///
/// # Errors
///
/// Returns [`BatchError::Enumeration`] if the directory cannot be listed.
pub fn count_numbered_files(dir: &Path) -> Result<usize, BatchError> {
    let enumeration = |source| BatchError::Enumeration {
        dir: dir.to_path_buf(),
        source,
    };

    let mut count = 0;
    for entry in fs::read_dir(dir).map_err(enumeration)? {
        let name = entry.map_err(enumeration)?.file_name();
        if name.to_str().and_then(numbered_id).is_some() {
            count += 1;
        }
    }
    Ok(count)
}

/// Reads one file's raw bytes.
fn read_bytes(path: &Path) -> Result<Vec<u8>, BatchError> {
    fs::read(path).map_err(|source| BatchError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Immutable summary of one batch run.
///
/// Built once by [`run`] and read-only thereafter. The unmatched identifier
/// list is derived at construction and kept in ascending numeric order — the
/// backing map is unordered, so the ordering is made explicit here rather
/// than inherited from iteration order.
#[derive(Debug)]
pub struct BatchSummary {
    total: usize,
    matched: usize,
    results: HashMap<usize, ComparisonResult>,
    unmatched: Vec<usize>,
}

impl BatchSummary {
    /// Number of file pairs in the batch.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of pairs whose texts were byte-identical.
    pub fn matched(&self) -> usize {
        self.matched
    }

    /// True when every pair matched.
    pub fn all_matched(&self) -> bool {
        self.matched == self.total
    }

    /// Identifiers of unmatched pairs, ascending.
    pub fn unmatched(&self) -> &[usize] {
        &self.unmatched
    }

    /// Looks up the stored result for `id`, if any.
    pub fn result(&self, id: usize) -> Option<&ComparisonResult> {
        self.results.get(&id)
    }
}

/// Compares pairs `1..=count` from the two folders and builds the summary.
///
/// Pairs are processed in increasing identifier order. Both files of a pair
/// are read before the pair is compared; the side-by-side view for each pair
/// is precomputed inside [`compare`].
///
/// # Errors
///
/// Returns [`BatchError::EmptyBatch`] when `count` is zero (before any read
/// is attempted) and [`BatchError::Read`] as soon as any file in either
/// folder cannot be read.
pub fn run(
    reference_dir: &Path,
    candidate_dir: &Path,
    count: usize,
    emphasis: &dyn Emphasis,
) -> Result<BatchSummary, BatchError> {
    if count == 0 {
        return Err(BatchError::EmptyBatch(reference_dir.to_path_buf()));
    }

    let mut matched = 0;
    let mut results = HashMap::with_capacity(count);

    for id in 1..=count {
        let name = file_name(id);
        let reference = read_bytes(&reference_dir.join(&name))?;
        let candidate = read_bytes(&candidate_dir.join(&name))?;

        let mut result = compare(
            id,
            &String::from_utf8_lossy(&reference),
            &String::from_utf8_lossy(&candidate),
            emphasis,
        );
        // The matched verdict is byte equality. Lossy decoding maps every
        // invalid byte to U+FFFD, so two files differing only in invalid
        // bytes diff as equal text; demote those pairs here.
        if result.matched && reference != candidate {
            result.matched = false;
        }
        if result.matched {
            matched += 1;
        }
        results.insert(id, result);
    }

    let mut unmatched: Vec<usize> = results
        .values()
        .filter(|r| !r.matched)
        .map(|r| r.id)
        .collect();
    unmatched.sort_unstable();

    Ok(BatchSummary {
        total: count,
        matched,
        results,
        unmatched,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_follow_the_fixed_scheme() {
        assert_eq!(file_name(1), "data1.out");
        assert_eq!(file_name(34), "data34.out");
    }

    #[test]
    fn numbered_id_accepts_only_the_exact_pattern() {
        assert_eq!(numbered_id("data1.out"), Some(1));
        assert_eq!(numbered_id("data120.out"), Some(120));
        assert_eq!(numbered_id("data.out"), None);
        assert_eq!(numbered_id("dataX.out"), None);
        assert_eq!(numbered_id("data1.txt"), None);
        assert_eq!(numbered_id("notes"), None);
    }

    #[test]
    fn zero_count_is_an_empty_batch() {
        let err = run(
            Path::new("ref"),
            Path::new("cand"),
            0,
            &crate::render::MarkerEmphasis,
        )
        .unwrap_err();
        assert!(matches!(err, BatchError::EmptyBatch(_)));
    }
}
