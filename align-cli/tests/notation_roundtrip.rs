//! Round-trip parsing of the textual notation for a handful of the spec's example trees.

use align_cli::notation::{parse_trace, parse_tree};
use align_core::Interner;
use align_engine::align;

#[test]
fn sequence_of_parallel_and_xor_notation() {
    let mut interner = Interner::new();
    let (builder, root) = parse_tree("Seq(Par(a, b, e), Xor(c, d))", &mut interner).unwrap();
    let tree = builder.build(root).unwrap();

    let trace = parse_trace("e, b, a, d", &mut interner);
    assert_eq!(align(&tree, &trace), 0);

    let trace = parse_trace("e b a", &mut interner);
    assert_eq!(align(&tree, &trace), 1);
}

#[test]
fn redo_loop_notation() {
    let mut interner = Interner::new();
    let (builder, root) = parse_tree("Loop(Seq(a, b), f)", &mut interner).unwrap();
    let tree = builder.build(root).unwrap();

    let trace = parse_trace("a, b, f, a, b", &mut interner);
    assert_eq!(align(&tree, &trace), 0);

    let trace = parse_trace("", &mut interner);
    assert_eq!(align(&tree, &trace), 2);
}

#[test]
fn bare_xor_notation() {
    let mut interner = Interner::new();
    let (builder, root) = parse_tree("Xor(c, d)", &mut interner).unwrap();
    let tree = builder.build(root).unwrap();

    assert_eq!(align(&tree, &parse_trace("c", &mut interner)), 0);
    assert_eq!(align(&tree, &parse_trace("c, d", &mut interner)), 1);
    assert_eq!(align(&tree, &parse_trace("", &mut interner)), 1);
}
