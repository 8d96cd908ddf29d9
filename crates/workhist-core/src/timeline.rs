//! Chronological merge of per-repository commit sequences.

use workhist_commit::CommitRecord;

/// Commit records from every repository, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    records: Vec<CommitRecord>,
}

impl Timeline {
    /// Concatenates the per-repository sequences in the given order and sorts
    /// the result by date.
    ///
    /// The sort is stable: records sharing a date keep their concatenation
    /// order.
    pub fn merge<I>(sources: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoIterator<Item = CommitRecord>,
    {
        let mut records: Vec<CommitRecord> = sources.into_iter().flatten().collect();
        records.sort_by_key(CommitRecord::date);
        Self { records }
    }

    /// Returns the records in timeline order.
    #[must_use]
    pub fn records(&self) -> &[CommitRecord] {
        &self.records
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if there are no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over the records in timeline order.
    pub fn iter(&self) -> std::slice::Iter<'_, CommitRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a CommitRecord;
    type IntoIter = std::slice::Iter<'a, CommitRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
