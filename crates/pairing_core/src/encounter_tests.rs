use super::*;

#[test]
fn test_missing_pairs_read_as_zero() {
    let graph = EncounterGraph::new();
    assert_eq!(graph.opponent_weight(1, 2), 0);
    assert_eq!(graph.teammate_weight(1, 1), 0);
    assert!(graph.is_empty());
}

#[test]
fn test_doubles_match_updates_each_relationship_once() {
    let mut graph = EncounterGraph::new();
    graph.record_match(&Match::doubles(1, 2, 3, 4));

    // Partners
    assert_eq!(graph.teammate_weight(1, 2), 1);
    assert_eq!(graph.teammate_weight(3, 4), 1);
    // Opponents, queried in either order
    for (a, b) in [(1, 3), (1, 4), (2, 3), (2, 4)] {
        assert_eq!(graph.opponent_weight(a, b), 1);
        assert_eq!(graph.opponent_weight(b, a), 1);
        assert_eq!(graph.teammate_weight(a, b), 0);
    }
    assert_eq!(graph.opponent_weight(1, 2), 0);
    assert_eq!(graph.len(), 6);
}

#[test]
fn test_singles_counts_on_self_pair() {
    let mut graph = EncounterGraph::new();
    graph.record_match(&Match::singles(5, 6));
    graph.record_match(&Match::singles(6, 5));

    assert_eq!(graph.teammate_weight(5, 5), 2);
    assert_eq!(graph.teammate_weight(6, 6), 2);
    assert_eq!(graph.opponent_weight(5, 6), 2);
    assert_eq!(graph.opponent_weight(5, 5), 0);
}

#[test]
fn test_weights_accumulate_across_matches() {
    let mut graph = EncounterGraph::new();
    graph.record_match(&Match::doubles(1, 2, 3, 4));
    graph.record_match(&Match::doubles(2, 1, 4, 5));

    assert_eq!(graph.teammate_weight(1, 2), 2);
    assert_eq!(graph.opponent_weight(1, 4), 2);
    assert_eq!(graph.opponent_weight(2, 5), 1);
    assert_eq!(graph.max_teammate_weight(), 2);
    assert_eq!(graph.max_opponent_weight(), 2);
}

#[test]
fn test_self_pairs_excluded_from_maximum() {
    let mut graph = EncounterGraph::new();
    graph.record_teammates(&Team::singles(1));
    graph.record_teammates(&Team::singles(1));

    assert_eq!(graph.teammate_weight(1, 1), 2);
    assert_eq!(graph.max_teammate_weight(), 0);
}

#[test]
fn test_pairs_listed_in_id_order() {
    let mut graph = EncounterGraph::new();
    graph.record_opponents(&Team::singles(9), &Team::singles(2));
    graph.record_teammates(&Team::doubles(4, 3));

    let keys: Vec<_> = graph.pairs().into_iter().map(|(a, b, _)| (a, b)).collect();
    assert_eq!(keys, vec![(2, 9), (3, 4)]);
}
