use super::*;
use opspace_diagnostic::DiagnosticQueue;
use pretty_assertions::assert_eq;

/// Byte offset of the first occurrence of `needle`.
fn offset_of(source: &str, needle: &str) -> u32 {
    u32::try_from(source.find(needle).unwrap()).unwrap()
}

fn positions(queue: &DiagnosticQueue) -> Vec<(u32, u32)> {
    queue.iter().map(|d| (d.line, d.column)).collect()
}

#[test]
fn operator_anchor_rewinds_over_leading_gap() {
    let source = SourceBuffer::new("x = a  *  b;");
    let checker = OperatorSpacing::new(&source, LintConfig::default());
    let mut queue = DiagnosticQueue::new();

    let node = Node::at(Category::Mul, Loc::Offset(offset_of("x = a  *  b;", "*")));
    assert_eq!(checker.check(&node, &mut queue), Ok(0));
    assert!(queue.is_empty());
}

#[test]
fn operator_anchor_rewinds_across_lines() {
    let text = "total = first\n    + second;";
    let source = SourceBuffer::new(text);
    let checker = OperatorSpacing::new(&source, LintConfig::default());
    let mut queue = DiagnosticQueue::new();

    let node = Node::at(Category::Add, Loc::Offset(offset_of(text, "+")));
    assert_eq!(checker.check(&node, &mut queue), Ok(0));
}

#[test]
fn position_loc_is_resolved() {
    let text = "int a;\nb = c+d;";
    let source = SourceBuffer::new(text);
    let checker = OperatorSpacing::new(&source, LintConfig::default());
    let mut queue = DiagnosticQueue::new();

    let node = Node::at(Category::Add, Loc::Position(Position::new(2, 6)));
    assert_eq!(checker.check(&node, &mut queue), Ok(1));
    assert_eq!(positions(&queue), vec![(2, 6)]);
}

#[test]
fn declaration_checks_every_name() {
    let text = "int a=1, b = 2, c =3;\n";
    let source = SourceBuffer::new(text);
    let checker = OperatorSpacing::new(&source, LintConfig::default());
    let mut queue = DiagnosticQueue::new();

    let names = [
        Name::with_initializer(Loc::Offset(offset_of(text, "a")), 1),
        Name::with_initializer(Loc::Offset(offset_of(text, "b")), 1),
        Name::with_initializer(Loc::Offset(offset_of(text, "c")), 1),
    ];
    let node = Node::names(Category::VariableDeclaration, &names);
    assert_eq!(checker.check(&node, &mut queue), Ok(3));
    // 'a=': missing leading at '='; 'c =3;': '3' and ';' overrun the run
    assert_eq!(positions(&queue), vec![(1, 6), (1, 20), (1, 21)]);
}

#[test]
fn declaration_skips_names_without_initializer() {
    let text = "int x, y = 1;\nint z;\n";
    let source = SourceBuffer::new(text);
    let checker = OperatorSpacing::new(&source, LintConfig::default());
    let mut queue = DiagnosticQueue::new();

    let first = [
        Name::without_initializer(Loc::Offset(offset_of(text, "x")), 1),
        Name::with_initializer(Loc::Offset(offset_of(text, "y")), 1),
    ];
    let second = [Name::without_initializer(Loc::Offset(offset_of(text, "z")), 1)];
    let nodes = [
        Node::names(Category::VariableDeclaration, &first),
        Node::names(Category::VariableDeclaration, &second),
    ];
    assert_eq!(checker.check_all(&nodes, &mut queue), Ok(0));
    assert!(queue.is_empty());
}

#[test]
fn keyword_check_reports_at_keyword() {
    let text = "while(x) {}";
    let source = SourceBuffer::new(text);
    let checker = OperatorSpacing::new(&source, LintConfig::default());
    let mut queue = DiagnosticQueue::new();

    let node = Node::construct(
        Category::While,
        Loc::Offset(0),
        Loc::Offset(offset_of(text, "(")),
    );
    assert_eq!(checker.check(&node, &mut queue), Ok(1));
    assert_eq!(positions(&queue), vec![(1, 1)]);
}

#[test]
fn keyword_check_reports_indented_keyword() {
    let text = "x;\n    if(true) {}\n";
    let source = SourceBuffer::new(text);
    let checker = OperatorSpacing::new(&source, LintConfig::default());
    let mut queue = DiagnosticQueue::new();

    let node = Node::construct(
        Category::If,
        Loc::Position(Position::new(2, 5)),
        Loc::Offset(offset_of(text, "(")),
    );
    assert_eq!(checker.check(&node, &mut queue), Ok(1));
    assert_eq!(positions(&queue), vec![(2, 5)]);
}

#[test]
fn keyword_check_accepts_any_whitespace() {
    let text = "for\t(;;) {}";
    let source = SourceBuffer::new(text);
    let checker = OperatorSpacing::new(&source, LintConfig::default());
    let mut queue = DiagnosticQueue::new();

    let node = Node::construct(
        Category::For,
        Loc::Offset(0),
        Loc::Offset(offset_of(text, "(")),
    );
    assert_eq!(checker.check(&node, &mut queue), Ok(0));
}

#[test]
fn keyword_check_at_offset_zero_is_fatal() {
    let source = SourceBuffer::new("(x)");
    let checker = OperatorSpacing::new(&source, LintConfig::default());
    let mut queue = DiagnosticQueue::new();

    let node = Node::construct(Category::If, Loc::Offset(0), Loc::Offset(0));
    assert_eq!(
        checker.check(&node, &mut queue),
        Err(LintError::NoPrecedingByte { offset: 0 })
    );
    assert!(queue.is_empty());
}

#[test]
fn offset_past_end_is_fatal() {
    let source = SourceBuffer::new("a+b");
    let checker = OperatorSpacing::new(&source, LintConfig::default());
    let mut queue = DiagnosticQueue::new();

    let node = Node::at(Category::Add, Loc::Offset(10));
    assert_eq!(
        checker.check(&node, &mut queue),
        Err(LintError::Source(SourceError::OffsetOutOfRange {
            offset: 10,
            len: 3
        }))
    );
}

#[test]
fn name_past_end_is_fatal() {
    let source = SourceBuffer::new("int x");
    let checker = OperatorSpacing::new(&source, LintConfig::default());
    let mut queue = DiagnosticQueue::new();

    let names = [Name::with_initializer(Loc::Offset(4), 5)];
    let node = Node::names(Category::VariableDeclaration, &names);
    assert!(matches!(
        checker.check(&node, &mut queue),
        Err(LintError::Source(SourceError::OffsetOutOfRange { .. }))
    ));
}

#[test]
fn position_past_line_is_fatal() {
    let source = SourceBuffer::new("a + b");
    let checker = OperatorSpacing::new(&source, LintConfig::default());
    let mut queue = DiagnosticQueue::new();

    let node = Node::at(Category::Add, Loc::Position(Position::new(3, 1)));
    assert!(matches!(
        checker.check(&node, &mut queue),
        Err(LintError::Source(SourceError::LineOutOfRange { .. }))
    ));
}

#[test]
fn mismatched_site_is_fatal() {
    let source = SourceBuffer::new("a + b");
    let checker = OperatorSpacing::new(&source, LintConfig::default());
    let mut queue = DiagnosticQueue::new();

    let node = Node::names(Category::Add, &[]);
    assert_eq!(
        checker.check(&node, &mut queue),
        Err(LintError::SiteMismatch {
            category: Category::Add
        })
    );

    let node = Node::at(Category::VariableDeclaration, Loc::Offset(0));
    assert!(checker.check(&node, &mut queue).is_err());

    // A construct needs both its keyword and its start index
    let node = Node::at(Category::If, Loc::Offset(2));
    assert_eq!(
        checker.check(&node, &mut queue),
        Err(LintError::SiteMismatch {
            category: Category::If
        })
    );
    let node = Node::construct(Category::Add, Loc::Offset(0), Loc::Offset(2));
    assert!(checker.check(&node, &mut queue).is_err());
    assert!(queue.is_empty());
}

#[test]
fn disabled_rule_reports_nothing() {
    let source = SourceBuffer::new("a+b");
    let checker = OperatorSpacing::new(&source, LintConfig::disabled());
    let mut queue = DiagnosticQueue::new();

    let node = Node::at(Category::Add, Loc::Offset(1));
    assert_eq!(checker.check(&node, &mut queue), Ok(0));
    assert!(queue.is_empty());

    // Even unusable coordinates are ignored when disabled
    let node = Node::construct(Category::If, Loc::Offset(0), Loc::Offset(0));
    assert_eq!(checker.check(&node, &mut queue), Ok(0));
}

#[test]
fn check_all_stops_at_first_error() {
    let text = "a+b;\nc+d;";
    let source = SourceBuffer::new(text);
    let checker = OperatorSpacing::new(&source, LintConfig::default());
    let mut queue = DiagnosticQueue::new();

    let nodes = [
        Node::at(Category::Add, Loc::Offset(1)),
        Node::construct(Category::If, Loc::Offset(0), Loc::Offset(0)),
        Node::at(Category::Add, Loc::Offset(6)),
    ];
    assert_eq!(
        checker.check_all(&nodes, &mut queue),
        Err(LintError::NoPrecedingByte { offset: 0 })
    );
    // The first node's diagnostic was already handed off
    assert_eq!(positions(&queue), vec![(1, 2)]);
}

#[test]
fn check_all_sums_reports() {
    let text = "a+b;\nc+d;";
    let source = SourceBuffer::new(text);
    let checker = OperatorSpacing::new(&source, LintConfig::default());
    let mut sink: Vec<Diagnostic> = Vec::new();

    let nodes = [
        Node::at(Category::Add, Loc::Offset(1)),
        Node::at(Category::Add, Loc::Offset(6)),
    ];
    assert_eq!(checker.check_all(&nodes, &mut sink), Ok(2));
    assert_eq!(sink.len(), 2);
    assert_eq!(sink[1].position(), Position::new(2, 2));
}

#[test]
fn exposes_index_and_config() {
    let source = SourceBuffer::new("a\nb");
    let checker = OperatorSpacing::new(&source, LintConfig::default());
    assert_eq!(checker.line_index().line_count(), 2);
    assert!(checker.config().enabled);
}
