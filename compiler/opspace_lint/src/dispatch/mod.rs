//! Entry point for the syntax-tree walker.
//!
//! The walker calls [`OperatorSpacing::check`] once per matched node. The
//! checker looks the category up in the rule table, turns the node's
//! position into an anchor offset, runs the configured check, and reports
//! each violation to the sink straight away.

use opspace_diagnostic::{Diagnostic, DiagnosticSink};
use opspace_source::ascii::is_space;
use opspace_source::{LineIndex, Position, SourceBuffer, SourceError};
use tracing::{debug, trace};

use crate::rules::{AnchorRule, Check};
use crate::scanner::scan;
use crate::{Category, LintConfig, LintError};

/// A position as the walker reports it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Loc {
    /// Absolute byte offset.
    Offset(u32),
    /// 1-based line and byte column.
    Position(Position),
}

/// A declared name: where it starts, how many bytes it spans, and whether
/// an initializer follows it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Name {
    pub loc: Loc,
    pub len: u32,
    pub initialized: bool,
}

impl Name {
    /// A name followed by `= initializer`. Its spacing is checked.
    pub const fn with_initializer(loc: Loc, len: u32) -> Self {
        Name {
            loc,
            len,
            initialized: true,
        }
    }

    /// A bare name such as `x` in `int x, y = 1;`. Never checked.
    pub const fn without_initializer(loc: Loc, len: u32) -> Self {
        Name {
            loc,
            len,
            initialized: false,
        }
    }
}

/// Positional payload of a node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Site<'n> {
    /// An operator or `:` token start.
    At(Loc),
    /// A control-flow construct: the position the walker reports for it
    /// (its keyword) and its start index (the opening parenthesis).
    Construct { keyword: Loc, start: Loc },
    /// Every name declared by a variable declaration.
    Names(&'n [Name]),
}

/// One traversal event.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Node<'n> {
    pub category: Category,
    pub site: Site<'n>,
}

impl<'n> Node<'n> {
    /// A node addressed by a single token position.
    pub const fn at(category: Category, loc: Loc) -> Self {
        Node {
            category,
            site: Site::At(loc),
        }
    }

    /// A control-flow construct reported at `keyword` whose parenthesis
    /// starts at `start`.
    pub const fn construct(category: Category, keyword: Loc, start: Loc) -> Self {
        Node {
            category,
            site: Site::Construct { keyword, start },
        }
    }

    /// A variable declaration with its declared names.
    pub const fn names(category: Category, names: &'n [Name]) -> Self {
        Node {
            category,
            site: Site::Names(names),
        }
    }
}

/// The operator-spacing checker for one source file.
///
/// Holds the file's [`LineIndex`] for the whole pass. The buffer is only
/// borrowed and never modified.
#[derive(Clone, Debug)]
pub struct OperatorSpacing<'src> {
    source: &'src SourceBuffer,
    index: LineIndex,
    config: LintConfig,
}

impl<'src> OperatorSpacing<'src> {
    /// Index `source` and prepare to check it.
    pub fn new(source: &'src SourceBuffer, config: LintConfig) -> Self {
        let index = LineIndex::build(source.as_bytes());
        debug!(
            bytes = source.len(),
            lines = index.line_count(),
            enabled = config.enabled,
            "indexed source for operator spacing"
        );
        OperatorSpacing {
            source,
            index,
            config,
        }
    }

    pub fn line_index(&self) -> &LineIndex {
        &self.index
    }

    pub fn config(&self) -> LintConfig {
        self.config
    }

    /// Check one node and report its violations to `sink`.
    ///
    /// Returns how many diagnostics were reported. An `Err` means the node's
    /// coordinates are unusable and the file's analysis should stop.
    #[tracing::instrument(level = "trace", skip_all, fields(category = %node.category))]
    pub fn check<S: DiagnosticSink + ?Sized>(
        &self,
        node: &Node<'_>,
        sink: &mut S,
    ) -> Result<usize, LintError> {
        if !self.config.enabled {
            debug!("operator spacing disabled; skipping node");
            return Ok(0);
        }

        let rule = node.category.rule();
        match (rule.anchor, node.site) {
            (AnchorRule::OperatorStart | AnchorRule::Separator, Site::At(loc)) => {
                let anchor = self.rewind_whitespace(self.resolve(loc)?);
                self.run(rule.check, anchor, anchor, sink)
            }
            (AnchorRule::AfterName, Site::Names(names)) => {
                let mut reported = 0;
                for name in names.iter().filter(|name| name.initialized) {
                    let anchor = self.past_name(name)?;
                    reported += self.run(rule.check, anchor, anchor, sink)?;
                }
                Ok(reported)
            }
            (AnchorRule::ParenStart, Site::Construct { keyword, start }) => {
                let start = self.resolve(start)?;
                let keyword = self.resolve(keyword)?;
                self.run(rule.check, start, keyword, sink)
            }
            _ => Err(LintError::SiteMismatch {
                category: node.category,
            }),
        }
    }

    /// Check a batch of nodes in order, stopping at the first fatal error.
    pub fn check_all<S: DiagnosticSink + ?Sized>(
        &self,
        nodes: &[Node<'_>],
        sink: &mut S,
    ) -> Result<usize, LintError> {
        let mut reported = 0;
        for node in nodes {
            reported += self.check(node, sink)?;
        }
        Ok(reported)
    }

    /// Run `check` from `anchor`.
    ///
    /// Scans report at each violation's own offset. The single-byte check
    /// inspects the byte before `anchor` and reports at `report_at`.
    fn run<S: DiagnosticSink + ?Sized>(
        &self,
        check: Check,
        anchor: u32,
        report_at: u32,
        sink: &mut S,
    ) -> Result<usize, LintError> {
        match check {
            Check::Scan(rule) => {
                let violations = scan(self.source.as_bytes(), anchor, rule);
                for violation in &violations {
                    trace!(anchor, offset = violation.offset, kind = ?violation.kind, "violation");
                    self.emit(violation.offset, sink)?;
                }
                Ok(violations.len())
            }
            Check::PrecedingWhitespace => {
                let Some(before) = anchor.checked_sub(1) else {
                    return Err(LintError::NoPrecedingByte { offset: anchor });
                };
                let byte = self
                    .source
                    .byte_at(before)
                    .ok_or(SourceError::OffsetOutOfRange {
                        offset: before,
                        len: self.source.len(),
                    })?;
                if is_space(byte) {
                    return Ok(0);
                }
                trace!(anchor, report_at, "keyword not followed by whitespace");
                self.emit(report_at, sink)?;
                Ok(1)
            }
        }
    }

    fn emit<S: DiagnosticSink + ?Sized>(&self, offset: u32, sink: &mut S) -> Result<(), LintError> {
        let position = self.index.position_of(offset)?;
        sink.report(Diagnostic::operator_spacing(position));
        Ok(())
    }

    /// Convert a walker position to an offset inside the buffer.
    fn resolve(&self, loc: Loc) -> Result<u32, LintError> {
        let offset = match loc {
            Loc::Offset(offset) => offset,
            Loc::Position(position) => self.index.offset_of_position(position)?,
        };
        self.ensure_in_range(offset)
    }

    fn past_name(&self, name: &Name) -> Result<u32, LintError> {
        let start = self.resolve(name.loc)?;
        let end = start.checked_add(name.len).ok_or(SourceError::OffsetOutOfRange {
            offset: u32::MAX,
            len: self.source.len(),
        })?;
        self.ensure_in_range(end)
    }

    fn ensure_in_range(&self, offset: u32) -> Result<u32, LintError> {
        if offset > self.source.len() {
            return Err(SourceError::OffsetOutOfRange {
                offset,
                len: self.source.len(),
            }
            .into());
        }
        Ok(offset)
    }

    /// Step back from a token start over the whitespace that precedes it.
    fn rewind_whitespace(&self, token: u32) -> u32 {
        let before = self
            .source
            .as_bytes()
            .get(..token as usize)
            .unwrap_or_default();
        let gap = before.iter().rev().take_while(|&&b| is_space(b)).count();
        token.saturating_sub(u32::try_from(gap).unwrap_or(token))
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
