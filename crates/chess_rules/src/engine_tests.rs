use super::*;

#[test]
fn difficulty_presets() {
    assert_eq!(BotDifficulty::Beginner.search_depth(), 5);
    assert_eq!(BotDifficulty::Grandmaster.search_depth(), 35);
    assert_eq!(BotDifficulty::Advanced.skill_level(), 15);
    assert!(BotDifficulty::Beginner.thinking_time() < BotDifficulty::Expert.thinking_time());
    assert_eq!(BotDifficulty::default(), BotDifficulty::Intermediate);
}

#[test]
fn difficulty_parses_by_name() {
    assert_eq!("Expert".parse::<BotDifficulty>(), Ok(BotDifficulty::Expert));
    assert_eq!(" novice ".parse::<BotDifficulty>(), Ok(BotDifficulty::Novice));
    assert!("impossible".parse::<BotDifficulty>().is_err());
}

#[test]
fn difficulty_serde_uses_lowercase_names() {
    let json = serde_json::to_string(&BotDifficulty::Grandmaster).unwrap();
    assert_eq!(json, "\"grandmaster\"");
    let back: BotDifficulty = serde_json::from_str("\"beginner\"").unwrap();
    assert_eq!(back, BotDifficulty::Beginner);
}
