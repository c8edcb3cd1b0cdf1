use std::collections::HashSet;

use super::*;
use crate::content::characters::CHARACTERS;

#[test]
fn story_ids_are_unique_and_routable() {
    let mut seen = HashSet::new();
    for story in STORIES {
        assert!(seen.insert(story.id), "duplicate id {}", story.id);
        assert_eq!(gate::Route::parse(&format!("/read/{}", story.id)), gate::Route::Read { story_id: story.id.to_owned() });
    }
}

#[test]
fn every_story_belongs_to_a_known_arc_and_has_chapters() {
    for story in STORIES {
        assert!(ARCS.contains(&story.arc));
        assert!(!story.chapters.is_empty());
    }
}

#[test]
fn story_lookup() {
    assert_eq!(story_by_id("atom-1").map(|s| s.title), Some("Point Zero"));
    assert!(story_by_id("missing").is_none());
}

#[test]
fn arc_listing_is_case_insensitive() {
    let arc = stories_in_arc("videogamer");
    assert_eq!(arc.len(), 2);
    assert!(arc.iter().all(|s| s.arc == "Videogamer"));
    assert!(stories_in_arc("unknown").is_empty());
}

#[test]
fn first_appearances_point_at_real_stories() {
    for c in CHARACTERS {
        assert!(story_by_id(c.first_appearance).is_some(), "{} has no story", c.name);
    }
}
