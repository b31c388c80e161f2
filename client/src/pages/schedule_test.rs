use super::*;

#[test]
fn remote_mode_builds_file_urls() {
    let files = vec!["AgAC/1".to_owned(), "plain".to_owned()];
    assert_eq!(
        schedule_images("https://api.example/", &files),
        vec![
            ScheduleImage::Url("https://api.example/file/AgAC%2F1".into()),
            ScheduleImage::Url("https://api.example/file/plain".into()),
        ]
    );
}

#[test]
fn mock_mode_uses_placeholders() {
    let files = vec!["f1".to_owned()];
    assert_eq!(schedule_images("", &files), vec![ScheduleImage::Placeholder("f1".into())]);
}

#[test]
fn empty_listing_has_no_images() {
    assert!(schedule_images("https://api.example", &[]).is_empty());
}

#[test]
fn kinds_cover_three_sections() {
    let kinds: Vec<&str> = SCHEDULE_KINDS.iter().map(|(k, _)| *k).collect();
    assert_eq!(kinds, vec!["today", "tomorrow", "week"]);
}
