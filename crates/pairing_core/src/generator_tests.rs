use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

#[test]
fn test_slot_fills_doubles_in_order() {
    let order: Vec<ParticipantId> = (1..=13).collect();
    let matches = slot_matches(&order, 3);

    assert_eq!(
        matches,
        vec![
            Match::doubles(1, 2, 3, 4),
            Match::doubles(5, 6, 7, 8),
            Match::doubles(9, 10, 11, 12),
        ]
    );
}

#[test]
fn test_slot_adds_one_singles_on_free_court() {
    // Two doubles use 8, three remain: one singles, one left over
    let order: Vec<ParticipantId> = (1..=11).collect();
    let matches = slot_matches(&order, 3);

    assert_eq!(matches.len(), 3);
    assert_eq!(matches[2], Match::singles(9, 10));
    assert!(!matches.iter().any(|m| m.contains(11)));
}

#[test]
fn test_slot_never_builds_two_singles() {
    // One doubles, then three left over with two free courts
    let order: Vec<ParticipantId> = (1..=7).collect();
    let matches = slot_matches(&order, 3);

    let singles = matches
        .iter()
        .filter(|m| m.format() == MatchFormat::Singles)
        .count();
    assert_eq!(singles, 1);
    assert_eq!(matches.len(), 2);
    assert!(!matches.iter().any(|m| m.contains(7)));
}

#[test]
fn test_slot_no_singles_when_courts_full() {
    let order: Vec<ParticipantId> = (1..=10).collect();
    let matches = slot_matches(&order, 2);
    assert_eq!(matches.len(), 2);
    assert!(matches.iter().all(|m| m.format() == MatchFormat::Doubles));
}

#[test]
fn test_slot_too_few_players() {
    assert!(slot_matches(&[], 3).is_empty());
    assert!(slot_matches(&[7], 3).is_empty());
    assert_eq!(slot_matches(&[7, 8], 3), vec![Match::singles(7, 8)]);
    assert_eq!(slot_matches(&[7, 8, 9], 3), vec![Match::singles(7, 8)]);
    assert!(slot_matches(&[1, 2, 3, 4], 0).is_empty());
}

#[test]
fn test_generated_candidates_use_each_player_once() {
    let mut rng = StdRng::seed_from_u64(7);
    let pool: Vec<ParticipantId> = (1..=17).collect();

    for _ in 0..50 {
        let matches = generate_candidates(&pool, 4, &mut rng);
        assert!(matches.len() <= 4);

        let mut seen = HashSet::new();
        for m in &matches {
            for p in m.participants() {
                assert!(pool.contains(&p));
                assert!(seen.insert(p), "player {} placed twice", p);
            }
        }
        assert_eq!(seen.len(), 16);
    }
}

#[test]
fn test_shuffle_varies_leftover() {
    let mut rng = StdRng::seed_from_u64(11);
    let pool: Vec<ParticipantId> = (1..=13).collect();

    let mut leftovers = HashSet::new();
    for _ in 0..200 {
        let matches = generate_candidates(&pool, 3, &mut rng);
        let left: Vec<_> = pool.iter().filter(|&&p| !matches.iter().any(|m| m.contains(p))).collect();
        assert_eq!(left.len(), 1);
        leftovers.insert(*left[0]);
    }
    // Every player should sit out at some point over 200 shuffles
    assert_eq!(leftovers.len(), 13);
}
