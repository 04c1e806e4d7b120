//! Three-phase whitespace-pattern scanner.
//!
//! Verifies the pattern `whitespace+ run whitespace` starting at an anchor
//! offset, where `run` is a non-empty sequence of non-whitespace bytes
//! judged by a [`MiddleRule`].
//!
//! # States
//!
//! ```text
//! LeadingWhitespace ──ws──▶ LeadingWhitespace
//!        │ non-ws, none seen ──▶ MissingLeading, Done
//!        │ non-ws, some seen ──▶ MiddleRun (byte counts as run byte 1)
//! MiddleRun ──ws──▶ Done
//!        │ non-ws ──▶ MiddleRun, DisallowedSymbol if the rule rejects it
//! end of bytes before Done ──▶ MissingTrailing at the anchor
//! ```
//!
//! A rejected run byte does not stop the scan, so one call can report every
//! offending byte of a long operator run. A missing leading space stops the
//! scan at once.

use opspace_source::ascii::is_space;
use smallvec::SmallVec;

use crate::MiddleRule;

/// What a violation is about.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ViolationKind {
    /// The first non-whitespace byte came before any whitespace.
    MissingLeading,
    /// A run byte rejected by the middle rule.
    DisallowedSymbol,
    /// The bytes ran out before whitespace closed the run.
    MissingTrailing,
}

/// A single scan failure at an absolute byte offset.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Violation {
    pub offset: u32,
    pub kind: ViolationKind,
}

impl Violation {
    #[inline]
    const fn new(offset: u32, kind: ViolationKind) -> Self {
        Violation { offset, kind }
    }
}

/// Violations from one scan, in non-decreasing offset order except for a
/// trailing [`ViolationKind::MissingTrailing`], which points back at the
/// anchor.
pub type Violations = SmallVec<[Violation; 2]>;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum State {
    LeadingWhitespace { seen: bool },
    MiddleRun { run_len: u32 },
    Done,
}

/// Scan `bytes` from `start` and collect every violation of the pattern.
///
/// Pure: the result depends only on the arguments. A `start` at or past the
/// end behaves as an empty stream and yields one `MissingTrailing`.
pub fn scan(bytes: &[u8], start: u32, rule: MiddleRule) -> Violations {
    let mut violations = Violations::new();
    let tail = bytes.get(start as usize..).unwrap_or_default();
    let mut state = State::LeadingWhitespace { seen: false };

    for (offset, &byte) in (start..).zip(tail) {
        state = match state {
            State::LeadingWhitespace { .. } if is_space(byte) => {
                State::LeadingWhitespace { seen: true }
            }
            State::LeadingWhitespace { seen: false } => {
                violations.push(Violation::new(offset, ViolationKind::MissingLeading));
                State::Done
            }
            State::LeadingWhitespace { seen: true } => {
                step_run(byte, offset, 0, rule, &mut violations)
            }
            State::MiddleRun { run_len } => step_run(byte, offset, run_len, rule, &mut violations),
            State::Done => break,
        };
    }

    if state != State::Done {
        violations.push(Violation::new(start, ViolationKind::MissingTrailing));
    }
    violations
}

/// Advance the middle run by one byte.
#[inline]
fn step_run(
    byte: u8,
    offset: u32,
    run_len: u32,
    rule: MiddleRule,
    violations: &mut Violations,
) -> State {
    if is_space(byte) {
        return State::Done;
    }
    let run_len = run_len.saturating_add(1);
    if !rule.accepts(byte, run_len) {
        violations.push(Violation::new(offset, ViolationKind::DisallowedSymbol));
    }
    State::MiddleRun { run_len }
}
