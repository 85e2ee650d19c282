use super::*;
use pairing_core::{Match, ScoredMatch};

fn sample_round() -> Round {
    Round {
        number: 2,
        matches: vec![
            ScoredMatch {
                game: Match::doubles(1, 5, 2, 8),
                cost: 0,
            },
            ScoredMatch {
                game: Match::singles(3, 4),
                cost: 2,
            },
        ],
        resting: vec![6, 9],
    }
}

#[test]
fn test_round_text() {
    let text = format_round(&sample_round());
    assert!(text.contains("--- Round 2 ---"));
    assert!(text.contains("Court 1: [1, 5] vs [2, 8] (repeat cost 0)"));
    assert!(text.contains("Court 2: [3] vs [4] (repeat cost 2)"));
    assert!(text.contains("Resting players (2): [6, 9]"));
}

#[test]
fn test_round_text_nobody_resting() {
    let round = Round {
        resting: vec![],
        ..sample_round()
    };
    assert!(format_round(&round).contains("No players are resting this round."));
}

#[test]
fn test_status_text() {
    let status = RosterStatus {
        active: vec![1, 2, 4],
        inactive: vec![3],
        total: 4,
    };
    assert_eq!(
        format_status(&status),
        "Active players (3/4): [1, 2, 4]\nInactive players (1/4): [3]\n"
    );
}

#[test]
fn test_round_json_shape() {
    let round = sample_round();
    let status = RosterStatus {
        active: vec![1, 2, 3, 4, 5, 6, 8, 9],
        inactive: vec![7],
        total: 9,
    };
    let json = serde_json::to_value(RoundReport {
        round: &round,
        status: &status,
    })
    .unwrap();

    assert_eq!(json["round"]["number"], 2);
    assert_eq!(json["round"]["matches"][0]["teams"], serde_json::json!([[1, 5], [2, 8]]));
    assert_eq!(json["round"]["matches"][1]["cost"], 2);
    assert_eq!(json["round"]["resting"], serde_json::json!([6, 9]));
    assert_eq!(json["status"]["inactive"], serde_json::json!([7]));
}

#[test]
fn test_summary_table() {
    let summary = SessionSummary {
        rounds: 3,
        max_opponent_repeats: 2,
        max_partner_repeats: 1,
        players: vec![
            PlayerSummary {
                player: 1,
                active: true,
                participation: Participation {
                    played: 3,
                    rested: 0,
                    last_rested: None,
                },
            },
            PlayerSummary {
                player: 2,
                active: false,
                participation: Participation {
                    played: 1,
                    rested: 1,
                    last_rested: Some(2),
                },
            },
        ],
    };

    let text = format_summary(&summary);
    assert!(text.contains("Session finished after 3 rounds"));
    assert!(text.contains("Most repeated opponents: 2, most repeated partners: 1"));
    assert!(text.contains("(inactive)"));

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["players"][1]["played"], 1);
    assert_eq!(json["players"][1]["last_rested"], 2);
}
