use derive_new::new;
use std::cell::{RefCell, RefMut};

use crate::domain::objects::normalize::NormalizeOptions;

/// Reporting and normalization flags for one comparison. The normalization
/// flags decide what counts as equal; the report flags only decide what is
/// printed once the outcome is known.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, new)]
pub struct DiffOptions {
    pub brief: bool,
    pub report_identical: bool,
    pub normalize: NormalizeOptions,
}

/// Owns the output writer and options for the lifetime of one invocation.
/// No state survives a comparison; independent comparators never share
/// anything, so comparing multiple pairs in parallel needs no coordination.
pub struct Comparator {
    options: DiffOptions,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Comparator {
    pub fn new(options: DiffOptions, writer: Box<dyn std::io::Write>) -> Self {
        Comparator {
            options,
            writer: RefCell::new(writer),
        }
    }

    pub fn options(&self) -> &DiffOptions {
        &self.options
    }

    pub fn writer(&self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }
}
