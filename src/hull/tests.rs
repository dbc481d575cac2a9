// Engine-level tests for ladder-cut accumulation and ranking
//
// Scenarios follow the way the grid-search driver uses the engine: one add
// per ladder cut, then probing ranks until exhausted.

use super::*;
use crate::results::CutResult;
use crate::significance::significance;

fn engine() -> OuterHullEngine {
    let config = EngineConfig::greater_than(AxisBounds::new(0.0, 4000.0, 0.0, 1.0), "MR", "R2");
    OuterHullEngine::new(config).unwrap()
}

fn hull_coords(cut: &LadderCut) -> Vec<(f64, f64)> {
    cut.outer_hull().iter().map(|p| (p.y, p.x)).collect()
}

/// Reference staircase: the (0.3, 95) cut-point sits inside (0.2, 90)
#[test]
fn test_end_to_end_staircase() {
    let mut engine = engine();
    engine
        .add(1.0, &[0.1, 0.2, 0.3, 0.4], &[100.0, 90.0, 95.0, 80.0])
        .unwrap();

    let cut = engine.get(0).unwrap();
    assert_eq!(
        hull_coords(cut),
        vec![(0.1, 100.0), (0.2, 90.0), (0.4, 80.0)]
    );
    assert_eq!(cut.raw_points().len(), 4);
}

#[test]
fn test_single_point_hull() {
    let mut engine = engine();
    for z in [-3.0, 0.0, 42.0] {
        engine.add(z, &[0.25], &[1200.0]).unwrap();
    }

    for cut in engine.iter() {
        assert_eq!(cut.outer_hull(), &[CutPoint::new(1200.0, 0.25)]);
    }
}

#[test]
fn test_rank_probing_until_exhausted() {
    let mut engine = engine();
    engine.add(1.5, &[0.1], &[10.0]).unwrap();
    engine.add(4.0, &[0.2], &[20.0]).unwrap();
    engine.add(-0.5, &[0.3], &[30.0]).unwrap();
    engine.add(2.0, &[0.4], &[40.0]).unwrap();

    let mut rank = 0;
    let mut seen = Vec::new();
    while let Some(cut) = engine.get(rank) {
        seen.push(cut.significance());
        rank += 1;
    }

    assert_eq!(seen, vec![4.0, 2.0, 1.5, -0.5]);
    assert_eq!(rank, engine.size());
    assert_eq!(engine.best().unwrap().significance(), 4.0);
}

#[test]
fn test_add_returns_rank() {
    let mut engine = engine();
    assert_eq!(engine.add(1.0, &[0.1], &[1.0]).unwrap(), 0);
    assert_eq!(engine.add(0.5, &[0.1], &[1.0]).unwrap(), 1);
    assert_eq!(engine.add(3.0, &[0.1], &[1.0]).unwrap(), 0);
    // Equal significance goes after the existing one
    assert_eq!(engine.add(1.0, &[0.1], &[1.0]).unwrap(), 2);
}

#[test]
fn test_rejected_input_leaves_ranking_untouched() {
    let mut engine = engine();
    engine.add(1.0, &[0.1], &[1.0]).unwrap();

    assert!(matches!(
        engine.add(9.0, &[], &[]),
        Err(HullError::InvalidInput(_))
    ));
    assert!(matches!(
        engine.add(9.0, &[0.1, 0.2], &[1.0]),
        Err(HullError::InvalidInput(_))
    ));

    assert_eq!(engine.size(), 1);
    assert_eq!(engine.best().unwrap().significance(), 1.0);
}

#[test]
fn test_per_call_direction_override() {
    let mut engine = engine();
    engine
        .add_with_directions(
            1.0,
            &[0.1, 0.2, 0.3],
            &[10.0, 20.0, 15.0],
            CutDirection::LessThan,
            CutDirection::GreaterThan,
        )
        .unwrap();
    engine
        .add(0.5, &[0.1, 0.2, 0.3], &[10.0, 20.0, 15.0])
        .unwrap();

    assert_eq!(
        hull_coords(engine.get(0).unwrap()),
        vec![(0.1, 10.0), (0.2, 20.0)]
    );
    assert_eq!(hull_coords(engine.get(1).unwrap()), vec![(0.1, 10.0)]);
}

#[test]
fn test_configured_directions_apply_to_add() {
    let config = EngineConfig::new(
        AxisBounds::new(0.0, 1.0, 0.0, 1.0),
        vec![
            AxisSpec::new("ptmiss", CutDirection::LessThan),
            AxisSpec::new("eta", CutDirection::GreaterThan),
        ],
    );
    let mut engine = OuterHullEngine::new(config).unwrap();
    assert_eq!(
        engine.directions(),
        (CutDirection::LessThan, CutDirection::GreaterThan)
    );

    engine
        .add(1.0, &[0.1, 0.2, 0.3], &[0.5, 0.7, 0.6])
        .unwrap();
    assert_eq!(hull_coords(engine.best().unwrap()), vec![(0.1, 0.5), (0.2, 0.7)]);
}

#[test]
fn test_construction_rejects_bad_config() {
    let bad_bounds =
        EngineConfig::greater_than(AxisBounds::new(1.0, 0.0, 0.0, 1.0), "MR", "R2");
    assert!(matches!(
        OuterHullEngine::new(bad_bounds),
        Err(HullError::Configuration(_))
    ));

    let three_axes = EngineConfig::new(
        AxisBounds::new(0.0, 1.0, 0.0, 1.0),
        vec![
            AxisSpec::new("a", CutDirection::GreaterThan),
            AxisSpec::new("b", CutDirection::GreaterThan),
            AxisSpec::new("c", CutDirection::GreaterThan),
        ],
    );
    assert!(matches!(
        OuterHullEngine::new(three_axes),
        Err(HullError::Configuration(_))
    ));
}

#[test]
fn test_bounds_and_axes_exposed_for_renderer() {
    let engine = engine();
    assert_eq!(engine.bounds(), &AxisBounds::new(0.0, 4000.0, 0.0, 1.0));
    assert_eq!(engine.axes()[0].name, "MR");
    assert_eq!(engine.axes()[1].name, "R2");
    assert!(engine.is_empty());
}

/// Driver loop: score rows from yields, then pick the best ladder cut
#[test]
fn test_results_ranked_by_computed_significance() {
    let rows = vec![
        CutResult::from_yields(20.0, 10.0, vec![0.1, 0.2], vec![3000.0, 2500.0]),
        CutResult::from_yields(50.0, 10.0, vec![0.3, 0.4], vec![2000.0, 1500.0]),
        CutResult::from_yields(80.0, 0.5, vec![0.5], vec![1000.0]),
    ];

    let mut engine = engine();
    assert_eq!(engine.extend_results(&rows).unwrap(), 3);

    let best = engine.best().unwrap();
    assert_eq!(best.significance(), significance(50.0, 10.0));
    assert_eq!(hull_coords(best), vec![(0.3, 2000.0), (0.4, 1500.0)]);
    // Background below the guard scores zero and ranks last
    assert_eq!(engine.get(2).unwrap().significance(), 0.0);
}

#[test]
fn test_extend_results_stops_at_first_error() {
    let rows = vec![
        CutResult::from_significance(1.0, vec![0.1], vec![1.0]),
        CutResult::from_significance(2.0, vec![0.1, 0.2], vec![1.0]),
        CutResult::from_significance(3.0, vec![0.1], vec![1.0]),
    ];

    let mut engine = engine();
    assert!(engine.extend_results(&rows).is_err());
    assert_eq!(engine.size(), 1);
}

#[test]
fn test_snapshot_outlives_further_adds() {
    let mut engine = engine();
    engine.add(1.0, &[0.1, 0.2], &[2.0, 1.0]).unwrap();
    let snapshot = engine.get(0).unwrap().clone();

    engine.add(5.0, &[0.3], &[0.5]).unwrap();
    assert_eq!(engine.get(1).unwrap(), &snapshot);
}
