//! End-to-end parsing scenarios through the public API
//!
//! Grammars are built either in code or from the fixtures under
//! `tests/fixtures`, parsed with `LineParser` / `Grammar::run`, and checked
//! against the expected tree shape and diagnostics.

use linelang::linelang::grammar::{compile, RuleDescriptor as R};
use linelang::linelang::parsing::DiagnosticKind;
use linelang::linelang::{Ast, LineParser, ParseError};
use rstest::rstest;
use std::fs;

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("tests/fixtures/{}", name)).expect("Failed to read fixture")
}

fn blocks_parser() -> LineParser {
    let desc = R::from_json_str(&fixture("blocks.json")).expect("valid grammar");
    LineParser::new(&desc).expect("grammar compiles")
}

fn leaf_names(ast: &Ast) -> Vec<&str> {
    ast.leaves().iter().map(|l| l.name.as_str()).collect()
}

#[rstest]
#[case("abc", "abc", true)]
#[case("abc", "abcd", false)]
#[case("abc", "xabc", false)]
#[case("a.c", "abc", true)]
#[case("^abc", "abc!", false)]
#[case("abc$", "!abc", false)]
#[case("yes|no", "yes", true)]
#[case("yes|no", "yesno", false)]
#[case("\\s*", "", true)]
#[case("\\s*", "   ", true)]
fn terminal_matches_whole_lines_only(
    #[case] pattern: &str,
    #[case] line: &str,
    #[case] expected: bool,
) {
    let grammar = compile(&R::terminal("t", pattern)).unwrap();
    assert_eq!(grammar.run(&[line]).is_complete(), expected);
}

#[test]
fn sequence_of_two_terminals() {
    let parser = LineParser::new(&R::seq(
        "",
        vec![R::terminal("a", "a"), R::terminal("b", "b")],
    ))
    .unwrap();

    let ast = parser.parse_str("a\nb", false).unwrap();
    let leaves = ast.leaves();
    assert_eq!(leaf_names(&ast), vec!["a", "b"]);
    assert_eq!(leaves[0].begin..leaves[0].end, 0..1);
    assert_eq!(leaves[1].begin..leaves[1].end, 1..2);
}

#[test]
fn sequence_mismatch_references_failing_line() {
    let grammar = compile(&R::seq(
        "pair",
        vec![R::terminal("a", "a"), R::terminal("b", "b")],
    ))
    .unwrap();

    let outcome = grammar.run(&["a", "c"]);
    assert!(!outcome.is_complete());
    assert_eq!(outcome.end, None);

    let no_match = &outcome.diagnostics[0];
    assert_eq!(no_match.kind, DiagnosticKind::NoMatch);
    assert_eq!(no_match.line, 1);
    assert_eq!(
        no_match.to_string(),
        "(b) Error in line 1: c: Expression does not match"
    );

    let child = &outcome.diagnostics[1];
    assert_eq!(child.kind, DiagnosticKind::ChildFailure);
    assert_eq!(child.line, 0);

    let parser = LineParser::from_grammar(grammar);
    assert_eq!(
        parser.parse_str("a\nc", false),
        Err(ParseError::Rejected { total: 2 })
    );
}

#[test]
fn blocks_fixture_pretty_output() {
    let ast = blocks_parser()
        .parse_str(&fixture("blocks.txt"), false)
        .unwrap();

    insta::assert_snapshot!(ast.pretty(), @r##"
<start  range=[0, 6]
  <doc  range=[0, 6]
    <block  range=[0, 4]
      <id  range=[0, 1]  data="#1,1"/>,
      <jtxt  range=[1, 2]  data="> Hello there,Hello there"/>,
      <ctxt  range=[2, 3]  data="; greeting,greeting"/>,
      <whitespace  range=[3, 4]
        <blank  range=[3, 4]  data=""/>
      />
    />,
    <block  range=[4, 6]
      <id  range=[4, 5]  data="#2,2"/>,
      <jtxt  range=[5, 6]  data="> Goodbye,Goodbye"/>,
      <whitespace  range=[6, 6]

      />
    />
  />
/>
"##);
}

#[test]
fn yaml_and_json_grammars_agree() {
    let json = R::from_json_str(&fixture("blocks.json")).unwrap();
    let yaml = R::from_yaml_str(&fixture("blocks.yaml")).unwrap();
    assert_eq!(json, yaml);
}

#[test]
fn sequence_children_are_contiguous() {
    let ast = blocks_parser()
        .parse_str(&fixture("blocks.txt"), false)
        .unwrap();

    fn check(node: &Ast) {
        let children = node.children();
        if let (Some(first), Some(last)) = (children.first(), children.last()) {
            assert!(node.range().start <= first.range().start);
            assert!(last.range().end <= node.range().end);
        }
        for pair in children.windows(2) {
            assert_eq!(pair[0].range().end, pair[1].range().start);
        }
        children.iter().for_each(check);
    }
    check(&ast);
}

#[test]
fn partial_result_on_broken_input() {
    let parser = blocks_parser();
    let source = fixture("broken.txt");

    assert_eq!(
        parser.parse_str(&source, false),
        Err(ParseError::Incomplete {
            consumed: 0,
            total: 2
        })
    );

    // The repetition swallows the failing block, so the partial tree is an
    // empty `doc` covering no lines.
    let partial = parser.parse_str(&source, true).unwrap();
    assert_eq!(partial.range(), 0..0);
    let doc = &partial.children()[0];
    assert_eq!(doc.name(), "doc");
    assert!(doc.children().is_empty());
}

#[test]
fn alternation_prefers_declared_order() {
    let parser = LineParser::new(&R::repeat(
        "lines",
        R::or(
            "line",
            vec![
                R::terminal("number", "\\d+"),
                R::terminal("word", "\\w+"),
                R::terminal("other", ".*"),
            ],
        ),
    ))
    .unwrap();

    let ast = parser.parse_str("42\nabc\n-\n7", false).unwrap();
    assert_eq!(leaf_names(&ast), vec!["number", "word", "other", "number"]);
    // `or` adds no node of its own.
    assert!(ast.find("line").is_none());
}

#[test]
fn empty_input_and_empty_repetition() {
    let parser = LineParser::new(&R::repeat("items", R::terminal("item", ".+"))).unwrap();
    let ast = parser.parse_str("", false).unwrap();
    assert_eq!(ast.range(), 0..0);
    assert_eq!(ast.children()[0].range(), 0..0);
}

#[test]
fn named_groups_are_reachable() {
    let parser = LineParser::new(&R::terminal("kv", "(?P<key>\\w+)=(?P<value>.*)")).unwrap();
    let ast = parser.parse_str("mode=fast", false).unwrap();
    let leaf = ast.leaves()[0];
    assert_eq!(leaf.captures.name("key"), Some("mode"));
    assert_eq!(leaf.captures.name("value"), Some("fast"));
    assert_eq!(leaf.captures.primary(), "mode=fast");
}

#[test]
fn ast_serializes_to_json() {
    let parser = LineParser::new(&R::terminal("only", "x(y)?")).unwrap();
    let ast = parser.parse_str("x", false).unwrap();
    let json = serde_json::to_value(&ast).unwrap();

    assert_eq!(json["kind"], "interior");
    assert_eq!(json["name"], "start");
    let leaf = &json["children"][0];
    assert_eq!(leaf["kind"], "leaf");
    assert_eq!(leaf["begin"], 0);
    assert_eq!(leaf["end"], 1);
    assert_eq!(leaf["captures"]["groups"], serde_json::json!(["x", null]));
}
