use super::*;

fn entry(user_id: i64, username: &str, score: i64) -> LeaderboardEntry {
    LeaderboardEntry { user_id, username: username.to_owned(), score }
}

#[test]
fn leaderboard_rows_are_ranked_in_order() {
    let rows = leaderboard_rows(&[entry(1, "masha", 42), entry(2, "", 35)]);
    assert_eq!(
        rows,
        vec![
            LeaderboardRow { rank: 1, name: "@masha".into(), score: 42 },
            LeaderboardRow { rank: 2, name: "id 2".into(), score: 35 },
        ]
    );
}

#[test]
fn leaderboard_rows_empty() {
    assert!(leaderboard_rows(&[]).is_empty());
}

#[test]
fn difficulty_class_known_and_unknown() {
    assert_eq!(difficulty_class("easy"), "chip chip--easy");
    assert_eq!(difficulty_class(" HARD "), "chip chip--hard");
    assert_eq!(difficulty_class("legendary"), "chip");
}
