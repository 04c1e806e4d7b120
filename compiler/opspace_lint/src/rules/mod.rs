//! Static rule table: syntactic category → anchor rule → check.
//!
//! The table is plain data so it can be inspected and tested without any
//! traversal plumbing. [`RULES`] is laid out in [`Category::ALL`] order, so
//! lookup is a direct index.

use std::fmt;

use crate::middle_rule::{RELATIONAL_SYMBOLS, SHIFT_SYMBOLS};
use crate::{MiddleRule, UnknownCategory};

/// Syntactic categories the walker reports to this rule.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Category {
    // Single-width operators
    /// `a + b`, `a - b`, `a ~ b`
    Add,
    /// Bitwise `a & b`
    And,
    /// Bitwise `a | b`
    Or,
    /// `a * b`, `a / b`, `a % b`
    Mul,
    /// `a ^ b`
    Xor,

    // Double-width operators
    /// `a && b`
    AndAnd,
    /// `a == b`, `a != b`
    Equal,
    /// `a || b`
    OrOr,
    /// `a ^^ b`
    Pow,

    // Keyword comparisons
    /// `a in b`, `a !in b`
    In,
    /// `a is b`, `a !is b`
    Identity,

    // Symbol families
    /// `<<`, `>>`, `>>>`
    Shift,
    /// `<`, `<=`, `>`, `>=`, and the `!`-prefixed forms
    Rel,

    /// `a = b`
    Assign,
    /// The `:` of `c ? a : b`
    Ternary,
    /// `T name = init` (per declared name)
    VariableDeclaration,

    // Keyword followed by `(`
    If,
    While,
    For,
    Foreach,
}

impl Category {
    /// All categories, in rule-table order.
    ///
    /// Kept in sync with `as_str()` (exhaustive match) and [`RULES`]; the
    /// `table_order_matches_all` test catches drift.
    pub const ALL: &[Category] = &[
        Category::Add,
        Category::And,
        Category::Or,
        Category::Mul,
        Category::Xor,
        Category::AndAnd,
        Category::Equal,
        Category::OrOr,
        Category::Pow,
        Category::In,
        Category::Identity,
        Category::Shift,
        Category::Rel,
        Category::Assign,
        Category::Ternary,
        Category::VariableDeclaration,
        Category::If,
        Category::While,
        Category::For,
        Category::Foreach,
    ];

    /// Node name as reported by the syntax-tree walker.
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Add => "AddExpression",
            Category::And => "AndExpression",
            Category::Or => "OrExpression",
            Category::Mul => "MulExpression",
            Category::Xor => "XorExpression",
            Category::AndAnd => "AndAndExpression",
            Category::Equal => "EqualExpression",
            Category::OrOr => "OrOrExpression",
            Category::Pow => "PowExpression",
            Category::In => "InExpression",
            Category::Identity => "IdentityExpression",
            Category::Shift => "ShiftExpression",
            Category::Rel => "RelExpression",
            Category::Assign => "AssignExpression",
            Category::Ternary => "TernaryExpression",
            Category::VariableDeclaration => "VariableDeclaration",
            Category::If => "IfStatement",
            Category::While => "WhileStatement",
            Category::For => "ForStatement",
            Category::Foreach => "ForeachStatement",
        }
    }

    /// This category's rule-table entry.
    #[inline]
    pub fn rule(self) -> &'static RuleEntry {
        rule_for(self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a walker node name like `"AddExpression"`. Case-sensitive.
impl std::str::FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|category| category.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

/// How the scan's starting offset is derived from a node's position.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AnchorRule {
    /// The operator token's start, rewound over the whitespace before it.
    OperatorStart,
    /// The ternary `:` token's start, rewound over the whitespace before it.
    Separator,
    /// The byte just past each declared name.
    AfterName,
    /// The construct's opening parenthesis; reported at its keyword.
    ParenStart,
}

/// What runs at the anchor.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Check {
    /// Full three-phase scan with the given middle rule.
    Scan(MiddleRule),
    /// Single-byte check: the byte before the anchor must be whitespace.
    PrecedingWhitespace,
}

/// One row of the rule table.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct RuleEntry {
    pub category: Category,
    pub anchor: AnchorRule,
    pub check: Check,
}

impl RuleEntry {
    const fn operator(category: Category, rule: MiddleRule) -> Self {
        RuleEntry {
            category,
            anchor: AnchorRule::OperatorStart,
            check: Check::Scan(rule),
        }
    }

    const fn keyword(category: Category) -> Self {
        RuleEntry {
            category,
            anchor: AnchorRule::ParenStart,
            check: Check::PrecedingWhitespace,
        }
    }
}

const ONE: MiddleRule = MiddleRule::MaxLength(1);
const TWO: MiddleRule = MiddleRule::MaxLength(2);
const THREE: MiddleRule = MiddleRule::MaxLength(3);

/// The rule table, one entry per category in [`Category::ALL`] order.
pub static RULES: [RuleEntry; 20] = [
    RuleEntry::operator(Category::Add, ONE),
    RuleEntry::operator(Category::And, ONE),
    RuleEntry::operator(Category::Or, ONE),
    RuleEntry::operator(Category::Mul, ONE),
    RuleEntry::operator(Category::Xor, ONE),
    RuleEntry::operator(Category::AndAnd, TWO),
    RuleEntry::operator(Category::Equal, TWO),
    RuleEntry::operator(Category::OrOr, TWO),
    RuleEntry::operator(Category::Pow, TWO),
    RuleEntry::operator(Category::In, THREE),
    RuleEntry::operator(Category::Identity, THREE),
    RuleEntry::operator(Category::Shift, MiddleRule::AllowedSymbols(SHIFT_SYMBOLS)),
    RuleEntry::operator(Category::Rel, MiddleRule::AllowedSymbols(RELATIONAL_SYMBOLS)),
    RuleEntry::operator(Category::Assign, ONE),
    RuleEntry {
        category: Category::Ternary,
        anchor: AnchorRule::Separator,
        check: Check::Scan(ONE),
    },
    RuleEntry {
        category: Category::VariableDeclaration,
        anchor: AnchorRule::AfterName,
        check: Check::Scan(ONE),
    },
    RuleEntry::keyword(Category::If),
    RuleEntry::keyword(Category::While),
    RuleEntry::keyword(Category::For),
    RuleEntry::keyword(Category::Foreach),
];

/// Look up a category's rule.
#[inline]
pub fn rule_for(category: Category) -> &'static RuleEntry {
    &RULES[category as usize]
}
