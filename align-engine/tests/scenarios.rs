//! End-to-end alignment scenarios, one tree/trace combination per assertion.

use align_core::{ActivityId, Interner, ProcessTreeBuilder, Trace};
use align_engine::align;

fn ids(interner: &mut Interner, names: &[&str]) -> Vec<ActivityId> {
    names.iter().map(|name| interner.intern(name)).collect()
}

#[test]
fn sequence_of_parallel_and_xor() {
    let mut interner = Interner::new();
    let v = ids(&mut interner, &["a", "b", "c", "d", "e"]);
    let (a, b, c, d, e) = (v[0], v[1], v[2], v[3], v[4]);

    let mut builder = ProcessTreeBuilder::new();
    let pa = builder.activity(a);
    let pb = builder.activity(b);
    let pe = builder.activity(e);
    let parallel = builder.parallel(vec![pa, pb, pe]);
    let xc = builder.activity(c);
    let xd = builder.activity(d);
    let xor = builder.xor(vec![xc, xd]);
    let root = builder.sequence(vec![parallel, xor]);
    let tree = builder.build(root).unwrap();

    let trace = Trace::new(vec![]);
    assert_eq!(align(&tree, &trace), 4);

    let trace = Trace::new(vec![e, b, a]);
    assert_eq!(align(&tree, &trace), 1);

    let trace = Trace::new(vec![e, b, a, d]);
    assert_eq!(align(&tree, &trace), 0);

    let trace = Trace::new(vec![b, a, b, e, b, b, d, d, d, c, b, b]);
    assert_eq!(align(&tree, &trace), 8);
}

#[test]
fn redo_loop_over_a_sequence_body() {
    let mut interner = Interner::new();
    let v = ids(&mut interner, &["a", "b", "f"]);
    let (a, b, f) = (v[0], v[1], v[2]);

    let mut builder = ProcessTreeBuilder::new();
    let pa = builder.activity(a);
    let pb = builder.activity(b);
    let body = builder.sequence(vec![pa, pb]);
    let redo = builder.activity(f);
    let root = builder.redo_loop(body, redo);
    let tree = builder.build(root).unwrap();

    let mut events = Vec::new();
    for _ in 0..7 {
        events.extend([a, b, f]);
    }
    events.extend([a, b]);
    let trace = Trace::new(events);
    assert_eq!(align(&tree, &trace), 1);

    let trace = Trace::new(vec![a, b, b, b, b, f]);
    assert_eq!(align(&tree, &trace), 4);

    let trace = Trace::new(vec![]);
    assert_eq!(align(&tree, &trace), 2);
}

#[test]
fn bare_parallel_accepts_any_interleaving() {
    let mut interner = Interner::new();
    let v = ids(&mut interner, &["a", "b", "e"]);
    let (a, b, e) = (v[0], v[1], v[2]);

    let mut builder = ProcessTreeBuilder::new();
    let pa = builder.activity(a);
    let pb = builder.activity(b);
    let pe = builder.activity(e);
    let root = builder.parallel(vec![pa, pb, pe]);
    let tree = builder.build(root).unwrap();

    let trace = Trace::new(vec![e, b, a]);
    assert_eq!(align(&tree, &trace), 0);
}

#[test]
fn bare_xor() {
    let mut interner = Interner::new();
    let v = ids(&mut interner, &["c", "d"]);
    let (c, d) = (v[0], v[1]);

    let mut builder = ProcessTreeBuilder::new();
    let xc = builder.activity(c);
    let xd = builder.activity(d);
    let root = builder.xor(vec![xc, xd]);
    let tree = builder.build(root).unwrap();

    assert_eq!(align(&tree, &Trace::new(vec![c])), 0);
    assert_eq!(align(&tree, &Trace::new(vec![c, d])), 1);
    assert_eq!(align(&tree, &Trace::new(vec![])), 1);
}

#[test]
fn sequence_with_redo_loop_body_and_silent_redo() {
    let mut interner = Interner::new();
    let v = ids(&mut interner, &["a", "b"]);
    let (a, b) = (v[0], v[1]);

    let mut builder = ProcessTreeBuilder::new();
    let pa = builder.activity(a);
    let tau = builder.silent();
    let loop_node = builder.redo_loop(pa, tau);
    let pb = builder.activity(b);
    let root = builder.sequence(vec![loop_node, pb]);
    let tree = builder.build(root).unwrap();

    let trace = Trace::new(vec![a, a, a, b]);
    assert_eq!(align(&tree, &trace), 0);
}

#[test]
fn alien_events_cost_one_deletion_each() {
    let mut interner = Interner::new();
    let a = interner.intern("a");
    let x = ActivityId::from_raw(1000);
    let y = ActivityId::from_raw(1001);

    let mut builder = ProcessTreeBuilder::new();
    let root = builder.activity(a);
    let tree = builder.build(root).unwrap();

    let trace = Trace::new(vec![x, a, y]);
    assert_eq!(align(&tree, &trace), 2);
}
