use univai_landing::content::Content;

#[test]
fn embedded_copy_parses_and_is_complete() {
    let content = Content::embedded().unwrap();

    assert!(content.hero.title.contains("University"));
    assert!(!content.hero.intro.is_empty());
    assert!(content.hero.note.starts_with("Note:"));

    // the four limitation cards from the About section
    assert_eq!(content.about.len(), 4);
    for card in &content.about {
        assert!(!card.title.is_empty());
        assert!(!card.badge.is_empty());
        assert!(!card.body.is_empty());
    }

    assert!(!content.roadmap.is_empty());
    assert_eq!(content.footer.status.len(), 3);
    assert!(!content.footer.bubble.is_empty());
}
