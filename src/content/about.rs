//! Author, themes, power system, and timeline for the About page.

pub const AUTHOR: &str = "Jashan Bansal";

pub const AUTHOR_BIO: &str = "Jashan Bansal writes serialized fiction about dreams, effort, and the cost of power. \
    Life Could Be A Dream started as a notebook of half-remembered dreams and grew into a shared universe.";

pub const WRITING_STYLE: &str = "Short chapters, cliffhanger endings, and a narrator who is never quite sure \
    whether the reader is awake.";

pub const CONTACT: &str = "Reach the author through the contact links in the site footer.";

pub const THEMES: &[&str] = &[
    "Effort over talent",
    "The price of power",
    "Freedom versus comfort",
    "Friendship across rivalries",
];

/// How powers work in the universe.
pub const POWER_SYSTEM: &str = "Powers come from dreams that were remembered too clearly. \
    Every power has a cost paid in memories, sleep, or time, and nobody gets one for free.";

/// One entry on the universe timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimelineEntry {
    pub era: &'static str,
    pub event: &'static str,
}

pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry { era: "Before", event: "The dream archive is founded by Mr. Effort." },
    TimelineEntry { era: "Year 0", event: "The dream-mapping experiment turns a lab assistant into Atom." },
    TimelineEntry { era: "Year 1", event: "The Kid enters the game-world dream and meets Videogamer." },
    TimelineEntry { era: "Year 2", event: "The Dictator issues the decree of collective sleep." },
];
