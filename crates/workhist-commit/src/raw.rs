//! Raw log entry as emitted by `git log`.

/// The text fields of one commit, before normalization.
///
/// Every field is kept verbatim; a record truncated by the producer leaves
/// the missing trailing fields empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawLogEntry {
    /// Authored date, `YYYY-MM-DD`.
    pub date: String,

    /// Author display name.
    pub user: String,

    /// Ref decoration (branch and tag names pointing at the commit).
    pub decoration: String,

    /// First line of the commit message.
    pub subject: String,

    /// Remaining commit message text.
    pub body: String,
}

impl RawLogEntry {
    /// Names of the fields in the order the producer emits them.
    pub const FIELDS: [&'static str; 5] = ["date", "user", "decoration", "subject", "body"];

    /// Builds an entry from fields given in [`Self::FIELDS`] order.
    ///
    /// Missing trailing fields stay empty; extra fields are ignored.
    pub fn from_fields<'a>(fields: impl IntoIterator<Item = &'a str>) -> Self {
        let mut entry = Self::default();
        for (name, value) in Self::FIELDS.iter().zip(fields) {
            let slot = match *name {
                "date" => &mut entry.date,
                "user" => &mut entry.user,
                "decoration" => &mut entry.decoration,
                "subject" => &mut entry.subject,
                _ => &mut entry.body,
            };
            *slot = value.to_string();
        }
        entry
    }

    /// Returns true if the date field is blank.
    #[must_use]
    pub fn is_dateless(&self) -> bool {
        self.date.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fields_complete() {
        let entry = RawLogEntry::from_fields([
            "2024-01-01",
            "Ian",
            "HEAD -> main",
            "first",
            "* fix bug",
        ]);

        assert_eq!(entry.date, "2024-01-01");
        assert_eq!(entry.user, "Ian");
        assert_eq!(entry.decoration, "HEAD -> main");
        assert_eq!(entry.subject, "first");
        assert_eq!(entry.body, "* fix bug");
    }

    #[test]
    fn test_from_fields_truncated() {
        let entry = RawLogEntry::from_fields(["2024-01-01", "Ian"]);
        assert_eq!(entry.user, "Ian");
        assert_eq!(entry.subject, "");
        assert_eq!(entry.body, "");
    }

    #[test]
    fn test_from_fields_ignores_extra() {
        let entry = RawLogEntry::from_fields(["d", "u", "r", "s", "b", "extra"]);
        assert_eq!(entry.body, "b");
    }

    #[test]
    fn test_is_dateless() {
        assert!(RawLogEntry::default().is_dateless());
        assert!(RawLogEntry::from_fields(["  \n"]).is_dateless());
        assert!(!RawLogEntry::from_fields(["2024-01-01"]).is_dateless());
    }
}
