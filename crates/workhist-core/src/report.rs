//! Column-aligned activity report.

use std::fmt::Write as _;
use std::io::Write;

use workhist_commit::CommitRecord;

use crate::{CoreResult, Timeline, wrap};

/// Separator between report columns.
const COLUMN_GAP: &str = "  ";

/// Marker that starts a bullet segment in a commit body.
const BULLET: &str = "* ";

/// Placeholder in front of body lines that do not start a bullet.
const CONTINUATION: &str = "  ";

/// Columns reserved out of the report width when wrapping body text.
const WRAP_MARGIN: usize = 3;

/// Bodies of this many characters or fewer are not printed.
const MIN_BODY_LEN: usize = 2;

/// Report layout settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Report width; body text wraps at `width - 3` columns.
    pub width: usize,

    /// Show the author column. Off when the report is filtered to one author.
    pub show_user: bool,
}

/// Maximum character count of each column across a set of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnWidths {
    /// Date column.
    pub date: usize,
    /// Author column.
    pub user: usize,
    /// Repository column.
    pub repo: usize,
    /// Subject column.
    pub subject: usize,
}

impl ColumnWidths {
    /// Measures the widest value of every column.
    ///
    /// Widths are counted in `char`s, not terminal cells, so wide characters
    /// such as CJK ideographs or emoji leave their column misaligned.
    pub fn measure<'a>(records: impl IntoIterator<Item = &'a CommitRecord>) -> Self {
        records.into_iter().fold(Self::default(), |widths, record| Self {
            date: widths.date.max(record.date_string().chars().count()),
            user: widths.user.max(record.user().chars().count()),
            repo: widths.repo.max(record.repo_name().chars().count()),
            subject: widths.subject.max(record.subject().chars().count()),
        })
    }

    /// Returns the character offset at which the subject column starts.
    #[must_use]
    pub fn subject_offset(&self, show_user: bool) -> usize {
        let user = if show_user {
            self.user + COLUMN_GAP.len()
        } else {
            0
        };
        self.date + COLUMN_GAP.len() + user + self.repo + COLUMN_GAP.len()
    }
}

/// Renders a [`Timeline`] as aligned text.
#[derive(Debug, Clone)]
pub struct Report {
    options: RenderOptions,
}

impl Report {
    /// Creates a report with the given layout.
    #[must_use]
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Renders the timeline into lines without trailing newlines.
    pub fn render_lines(&self, timeline: &Timeline) -> Vec<String> {
        let widths = ColumnWidths::measure(timeline);
        let indent = " ".repeat(widths.subject_offset(self.options.show_user));

        let mut lines = Vec::with_capacity(timeline.len());
        for record in timeline {
            lines.push(self.summary_line(record, &widths));
            lines.extend(self.body_lines(record.body(), &indent));
        }
        lines
    }

    /// Writes the rendered timeline, one line per row.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn write_to(&self, timeline: &Timeline, mut out: impl Write) -> CoreResult<()> {
        for line in self.render_lines(timeline) {
            writeln!(out, "{line}")?;
        }
        out.flush()?;
        Ok(())
    }

    fn summary_line(&self, record: &CommitRecord, widths: &ColumnWidths) -> String {
        let mut line = String::new();
        _ = write!(line, "{:<w$}{COLUMN_GAP}", record.date_string(), w = widths.date);
        if self.options.show_user {
            _ = write!(line, "{:<w$}{COLUMN_GAP}", record.user(), w = widths.user);
        }
        _ = write!(line, "{:<w$}{COLUMN_GAP}", record.repo_name(), w = widths.repo);
        _ = write!(line, "{:<w$}", record.subject(), w = widths.subject);

        line.truncate(line.trim_end().len());
        line
    }

    fn body_lines(&self, body: &str, indent: &str) -> Vec<String> {
        if body.chars().count() <= MIN_BODY_LEN {
            return Vec::new();
        }

        let wrap_width = self.options.width.saturating_sub(WRAP_MARGIN).max(1);
        let mut lines = Vec::new();

        // The text before the first marker is plain, every later segment is a bullet.
        for (index, segment) in body.split(BULLET).enumerate() {
            let is_bullet = index > 0;
            for (row, text) in wrap(segment, wrap_width).into_iter().enumerate() {
                let marker = if is_bullet && row == 0 {
                    BULLET
                } else {
                    CONTINUATION
                };
                lines.push(format!("{indent}{marker}{text}"));
            }
        }
        lines
    }
}
