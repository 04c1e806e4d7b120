//! Diagnostic sinks.
//!
//! The rule reports into any [`DiagnosticSink`]. [`DiagnosticQueue`] is the
//! collecting implementation used by hosts that want to inspect results
//! after a pass.
//!
//! Order is emission order: non-decreasing offsets within one scan, and the
//! external walker's order across nodes. The queue never deduplicates.

use crate::Diagnostic;

/// Receiver for emitted diagnostics.
pub trait DiagnosticSink {
    /// Accept one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}

/// Collecting sink that preserves emission order.
///
/// # Example
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// checker.check(&node, &mut queue)?;
/// for diag in queue.sorted() { ... }
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of collected diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns `true` if nothing was reported.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Collected diagnostics in emission order.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    /// Copy of the collected diagnostics ordered by line, then column.
    ///
    /// The sort is stable: diagnostics at the same position keep their
    /// emission order.
    pub fn sorted(&self) -> Vec<Diagnostic> {
        let mut sorted = self.diagnostics.clone();
        sorted.sort_by_key(|d| (d.line, d.column));
        sorted
    }

    /// Distinct 1-based lines that received at least one diagnostic,
    /// in ascending order.
    pub fn lines(&self) -> Vec<u32> {
        let mut lines: Vec<u32> = self.diagnostics.iter().map(|d| d.line).collect();
        lines.sort_unstable();
        lines.dedup();
        lines
    }

    /// Drain all diagnostics in emission order, leaving the queue empty.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}

impl DiagnosticSink for DiagnosticQueue {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

impl<'a> IntoIterator for &'a DiagnosticQueue {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
