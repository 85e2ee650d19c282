use super::*;
use std::collections::HashSet;

fn assert_partitioned(roster: &Roster) {
    let active: HashSet<_> = roster.active().iter().copied().collect();
    let inactive: HashSet<_> = roster.inactive().iter().copied().collect();
    let all: HashSet<_> = roster.all().iter().copied().collect();

    assert!(active.is_disjoint(&inactive), "a player is both active and inactive");
    assert_eq!(&active | &inactive, all);
    assert_eq!(active.len() + inactive.len(), roster.all().len());
}

#[test]
fn test_new_roster_is_all_active() {
    let roster = Roster::new(1..=5);
    assert_eq!(roster.active(), &[1, 2, 3, 4, 5]);
    assert!(roster.inactive().is_empty());
    assert_partitioned(&roster);
}

#[test]
fn test_duplicates_kept_once() {
    let roster = Roster::new([3, 1, 3]);
    assert_eq!(roster.all(), &[3, 1]);
}

#[test]
fn test_toggle_round_trip() {
    let mut roster = Roster::new(1..=4);

    assert_eq!(roster.toggle(2), Ok(RosterChange::Deactivated(2)));
    assert!(!roster.is_active(2));
    assert_eq!(roster.inactive(), &[2]);

    assert_eq!(roster.toggle(2), Ok(RosterChange::Reactivated(2)));
    assert!(roster.is_active(2));
    assert!(roster.inactive().is_empty());
    assert_partitioned(&roster);
}

#[test]
fn test_toggle_unknown_is_rejected_without_change() {
    let mut roster = Roster::new(1..=3);
    let before = roster.status();

    let err = roster.toggle(42).unwrap_err();
    assert_eq!(err, RosterError::UnknownParticipant(42));
    assert_eq!(err.to_string(), "Player 42 is not part of the session.");
    assert_eq!(roster.status(), before);
}

#[test]
fn test_add_is_idempotent() {
    let mut roster = Roster::new(1..=3);
    assert_eq!(roster.add(7), RosterChange::Added(7));
    assert_eq!(roster.add(7), RosterChange::AlreadyKnown(7));
    assert_eq!(roster.add(1), RosterChange::AlreadyKnown(1));
    assert_eq!(roster.all(), &[1, 2, 3, 7]);
    assert_partitioned(&roster);
}

#[test]
fn test_partition_survives_mixed_sequence() {
    let mut roster = Roster::new(1..=6);
    let script: &[(bool, ParticipantId)] = &[
        (false, 3),
        (true, 8),
        (false, 8),
        (false, 1),
        (false, 3),
        (true, 9),
        (false, 99),
        (false, 6),
    ];
    for &(add, player) in script {
        if add {
            roster.add(player);
        } else {
            let _ = roster.toggle(player);
        }
        assert_partitioned(&roster);
    }

    let status = roster.status();
    assert_eq!(status.inactive, vec![1, 6, 8]);
    assert_eq!(status.active, vec![2, 3, 4, 5, 9]);
    assert_eq!(status.total, 8);
}

#[test]
fn test_change_messages() {
    assert_eq!(RosterChange::Added(3).to_string(), "Player 3 has been added.");
    assert_eq!(RosterChange::Deactivated(3).to_string(), "Player 3 is now inactive.");
    assert_eq!(RosterChange::Reactivated(3).to_string(), "Player 3 is now active again.");
}
