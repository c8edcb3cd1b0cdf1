use super::*;

#[test]
fn lookup_by_slug() {
    assert_eq!(character_by_slug("atom").map(|c| c.name), Some("Atom"));
    assert!(character_by_slug("nobody").is_none());
}

#[test]
fn mentions_match_names_without_article() {
    let found = mentioned_in("Who is The Kid?");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].slug, "the-kid");
}

#[test]
fn mentions_match_possessives_and_aliases() {
    let found: Vec<_> = mentioned_in("What is Mr. Effort's role?").iter().map(|c| c.slug).collect();
    assert_eq!(found, vec!["mr-effort"]);

    let found: Vec<_> = mentioned_in("tell me about the gamer").iter().map(|c| c.slug).collect();
    assert_eq!(found, vec!["videogamer"]);
}

#[test]
fn unrelated_text_mentions_nobody() {
    assert!(mentioned_in("what's the weather").is_empty());
}
