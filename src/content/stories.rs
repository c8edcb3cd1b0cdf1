//! Story catalogue and chapter text.

#[cfg(test)]
#[path = "stories_test.rs"]
mod stories_test;

/// Story arcs in reading order.
pub const ARCS: &[&str] = &["Videogamer", "Atom", "Dictator"];

/// A readable story.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Story {
    /// Route id used by `/read/:id`.
    pub id: &'static str,
    pub title: &'static str,
    pub arc: &'static str,
    pub summary: &'static str,
    /// Markdown, one entry per chapter.
    pub chapters: &'static [&'static str],
}

pub const STORIES: &[Story] = &[
    Story {
        id: "videogamer-1",
        title: "Press Start",
        arc: "Videogamer",
        summary: "The Kid wakes up inside a dream that plays like a video game and meets a streamer who refuses to lose.",
        chapters: &[
            "## Chapter 1: Loading Screen\n\nThe Kid fell asleep with the controller still in his hands. \
             When he opened his eyes the sky had a *health bar*.\n\nSomewhere above him a voice was narrating to an audience \
             that wasn't there.",
            "## Chapter 2: Respawn\n\nVideogamer died four times before lunch and didn't seem to mind. \
             \"Save states,\" he explained, tapping the air. \"You should get some.\"",
        ],
    },
    Story {
        id: "videogamer-2",
        title: "Speedrun",
        arc: "Videogamer",
        summary: "A race through the dream city ends in the archive of Mr. Effort, where every dream is kept.",
        chapters: &[
            "## Chapter 1: Any Percent\n\nThe route was simple: skip the tutorial, skip the bridge, skip the part where \
             anyone explains anything.\n\nThe Kid did not skip the bridge.",
            "## Chapter 2: The Archive\n\nMr. Effort looked up from a shelf of glowing jars. \"Every one of these is somebody's \
             night,\" he said. \"Try not to drop any.\"",
        ],
    },
    Story {
        id: "atom-1",
        title: "Point Zero",
        arc: "Atom",
        summary: "A failed experiment rewrites a lab assistant into Atom, and every use of the new power costs a memory.",
        chapters: &[
            "## Chapter 1: The Lab\n\nThe machine was supposed to map dreams. It mapped Atom instead, \
             one particle at a time.",
            "## Chapter 2: Compression\n\nShe folded the steel door into a marble. Then she forgot her mother's birthday.\n\n\
             **Every use costs something.**",
        ],
    },
    Story {
        id: "dictator-1",
        title: "Decree",
        arc: "Dictator",
        summary: "The ruler of the waking city outlaws waking up, and the dreamers have to decide whether to resist.",
        chapters: &[
            "## Chapter 1: Curfew\n\nThe first decree was polite: *Rest is mandatory.* The second was not.",
            "## Chapter 2: Collective Sleep\n\nBy the end of the week the whole city was dreaming the same dream, \
             and in it the Dictator was always right.",
        ],
    },
];

/// Look up a story by route id.
pub fn story_by_id(id: &str) -> Option<&'static Story> {
    STORIES.iter().find(|s| s.id == id)
}

/// Stories belonging to an arc, in catalogue order.
pub fn stories_in_arc(arc: &str) -> Vec<&'static Story> {
    STORIES.iter().filter(|s| s.arc.eq_ignore_ascii_case(arc)).collect()
}
