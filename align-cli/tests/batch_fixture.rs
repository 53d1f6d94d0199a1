//! Runs the batch orchestrator over a small fixture directory pair and asserts the printed
//! per-pair costs.

use std::path::Path;

use align_cli::batch;

#[test]
fn batch_over_fixture_directories() {
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let results = batch::run(&fixtures.join("trees"), &fixtures.join("traces")).unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].stem, "pair1");
    assert_eq!(results[0].cost, 0);
    assert_eq!(results[1].stem, "pair2");
    assert_eq!(results[1].cost, 0);
}
