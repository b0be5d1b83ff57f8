use std::fs;
use std::path::Path;

use lumen::ast::*;

/// Load a test fixture from tests/fixtures/
pub fn load_fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("Failed to load fixture {}: {}", name, err))
}

/// `(1 + 2)`
pub fn one_plus_two() -> Node {
    Node::binary(Node::number(1.0), "+", Node::number(2.0))
}

/// `((1 + 2) * 3)`
pub fn nested_arithmetic() -> Node {
    Node::binary(one_plus_two(), "*", Node::number(3.0))
}

/// `(x + 5)` as the only statement of a program
pub fn x_plus_five_program() -> Program {
    Program::new(vec![Node::binary(
        Node::identifier("x"),
        "+",
        Node::number(5.0),
    )])
}

/// One node of every variant, in kind-tag declaration order
pub fn one_of_each() -> Vec<Node> {
    vec![
        Node::program(vec![Node::identifier("p")]),
        Node::number(3.14),
        Node::null(),
        Node::identifier("x"),
        one_plus_two(),
        Node::string("hello"),
    ]
}
