use lumen::ast::*;

/// Assert a node renders to the expected canonical text
pub fn assert_renders(node: &Node, expected: &str) {
    assert_eq!(node.to_string(), expected, "unexpected rendering for {:?}", node);
}

/// Assert rendering the same tree twice gives the same text
pub fn assert_render_is_stable(node: &Node) {
    let first = node.to_string();
    let second = node.to_string();
    assert_eq!(first, second, "rendering changed between calls for {:?}", node);
}

/// Assert a program has exactly one statement and return it
pub fn assert_single_statement(program: &Program) -> &Statement {
    assert_eq!(
        program.len(),
        1,
        "Expected exactly one statement, found {}",
        program.len()
    );
    &program.body[0]
}
