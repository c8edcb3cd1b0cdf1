//! Character roster.

#[cfg(test)]
#[path = "characters_test.rs"]
mod characters_test;

/// A character profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Character {
    pub slug: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub powers: &'static [&'static str],
    pub bio: &'static str,
    /// Story id of the first appearance.
    pub first_appearance: &'static str,
    /// Extra names the assistant should recognise.
    pub aliases: &'static [&'static str],
}

pub const CHARACTERS: &[Character] = &[
    Character {
        slug: "the-kid",
        name: "The Kid",
        role: "Protagonist",
        powers: &["Lucid dreaming", "Dream anchoring"],
        bio: "A quiet teenager who discovers that the dreams he remembers start leaking into the waking world. \
              He never asked to be a hero; he just refuses to wake up while other people are still stuck inside.",
        first_appearance: "videogamer-1",
        aliases: &[],
    },
    Character {
        slug: "atom",
        name: "Atom",
        role: "Reluctant ally",
        powers: &["Matter compression", "Kinetic bursts", "Sub-atomic sight"],
        bio: "A former lab assistant whose body was rewritten at the particle level in a failed experiment. \
              Atom can fold matter down to a point and release it as raw force, but every use costs a memory.",
        first_appearance: "atom-1",
        aliases: &[],
    },
    Character {
        slug: "mr-effort",
        name: "Mr. Effort",
        role: "Mentor and guide",
        powers: &["Perfect recall", "Effort transfer"],
        bio: "A soft-spoken teacher who believes that anything can be earned. He keeps the archive of every dream \
              the city has ever had and answers questions for anyone patient enough to ask.",
        first_appearance: "videogamer-2",
        aliases: &["effort"],
    },
    Character {
        slug: "videogamer",
        name: "Videogamer",
        role: "Rival turned friend",
        powers: &["Respawn", "Level select", "Save states"],
        bio: "A streamer who treats the dream world like a speedrun. Videogamer can save a moment and reload it, \
              which makes him unbeatable until someone figures out where the save file lives.",
        first_appearance: "videogamer-1",
        aliases: &["gamer"],
    },
    Character {
        slug: "the-dictator",
        name: "The Dictator",
        role: "Antagonist",
        powers: &["Decree", "Collective sleep"],
        bio: "Ruler of the waking city who discovered that people who never wake up never complain. \
              His decrees become law inside every dream he touches.",
        first_appearance: "dictator-1",
        aliases: &[],
    },
];

/// Look up a character by slug.
pub fn character_by_slug(slug: &str) -> Option<&'static Character> {
    CHARACTERS.iter().find(|c| c.slug == slug)
}

/// Characters whose name or alias appears in `text` (case-insensitive).
pub fn mentioned_in(text: &str) -> Vec<&'static Character> {
    let lower = text.to_lowercase();
    CHARACTERS
        .iter()
        .filter(|c| {
            let name = c.name.to_lowercase();
            let bare = name.strip_prefix("the ").unwrap_or(&name);
            lower.contains(bare) || c.aliases.iter().any(|a| contains_word(&lower, a))
        })
        .collect()
}

fn contains_word(haystack: &str, word: &str) -> bool {
    haystack
        .split(|c: char| !c.is_alphanumeric() && c != '\'')
        .any(|w| w == word)
}
