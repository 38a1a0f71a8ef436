use std::io::Write;

use crate::domain::areas::comparator::Comparator;
use crate::domain::areas::source::Source;
use crate::domain::objects::diff::{ComparisonResult, EditOp, LineRange, SyncDiff};
use crate::domain::objects::line::Sequence;

/// Outcome of one comparison, as reported to the shell. Load errors are the
/// only other terminal state and are handled by the caller (exit code 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Identical,
    Different,
}

impl ExitStatus {
    pub fn code(&self) -> i32 {
        match self {
            ExitStatus::Identical => 0,
            ExitStatus::Different => 1,
        }
    }
}

impl Comparator {
    pub fn diff(&self, a: &Source, b: &Source) -> anyhow::Result<ExitStatus> {
        let options = *self.options();
        let left = a.load(options.normalize)?;
        let right = b.load(options.normalize)?;

        match SyncDiff::new(&left, &right).synchronize() {
            ComparisonResult::Identical => {
                if options.report_identical {
                    writeln!(
                        self.writer(),
                        "Files {} and {} are identical",
                        a.display_name(),
                        b.display_name()
                    )?;
                }

                Ok(ExitStatus::Identical)
            }
            ComparisonResult::Edits(edits) => {
                if options.brief {
                    writeln!(
                        self.writer(),
                        "Files {} and {} differ",
                        a.display_name(),
                        b.display_name()
                    )?;

                    return Ok(ExitStatus::Different);
                }

                for edit in &edits {
                    self.print_hunk(edit, &left, &right)?;
                }

                Ok(ExitStatus::Different)
            }
        }
    }

    fn print_hunk(&self, edit: &EditOp, left: &Sequence, right: &Sequence) -> anyhow::Result<()> {
        match edit {
            EditOp::Change { a, b } => {
                writeln!(self.writer(), "{a}c{b}")?;
                self.print_lines(left, a, "< ")?;
                writeln!(self.writer(), "---")?;
                self.print_lines(right, b, "> ")?;
            }
            EditOp::Delete { a, b_point } => {
                writeln!(self.writer(), "{a}d{b_point}")?;
                self.print_lines(left, a, "< ")?;
            }
            EditOp::Insert { a_point, b } => {
                writeln!(self.writer(), "{a_point}a{b}")?;
                self.print_lines(right, b, "> ")?;
            }
        }

        Ok(())
    }

    // Hunk bodies always show the raw text, never the normalized key.
    fn print_lines(
        &self,
        sequence: &Sequence,
        range: &LineRange,
        marker: &str,
    ) -> anyhow::Result<()> {
        for index in range.indexes() {
            writeln!(self.writer(), "{marker}{}", sequence.line(index).raw())?;
        }

        Ok(())
    }
}
