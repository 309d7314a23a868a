//! Collection statistics.

/// Counters for one collection run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CollectStats {
    pub fixtures_scanned: u64,
    pub references_found: u64,
    pub files_copied: u64,
    pub bytes_copied: u64,
    pub missing_sources: u64,
    pub rejected_references: u64,
    pub same_file: u64,
}

impl CollectStats {
    /// Record a scanned fixture and the number of references it held.
    pub fn add_fixture(&mut self, references: usize) {
        self.fixtures_scanned += 1;
        self.references_found += references as u64;
    }

    /// Record a copied (or, in a dry run, copyable) file.
    pub fn add_copied(&mut self, bytes: u64) {
        self.files_copied += 1;
        self.bytes_copied += bytes;
    }

    /// Increment missing source count.
    pub fn increment_missing(&mut self) {
        self.missing_sources += 1;
    }

    /// Increment rejected reference count.
    pub fn increment_rejected(&mut self) {
        self.rejected_references += 1;
    }

    /// Increment the count of sources that already are their destination.
    pub fn increment_same_file(&mut self) {
        self.same_file += 1;
    }

    /// References that could not be copied.
    pub fn total_skipped(&self) -> u64 {
        self.missing_sources + self.rejected_references + self.same_file
    }
}
