//! Static recommendation table for offline mode.
//!
//! Maps a preference category letter (A-D, from the first question's
//! answer) to three pre-written book recommendations. Lookup is total:
//! any other letter falls back to category C.

/// Category used when the profile letter is missing or unknown.
pub const DEFAULT_CATEGORY: char = 'C';

/// Mysteries and Thrillers.
const CATEGORY_A: [&str; 3] = [
    "The Silent Patient by Alex Michaelides - A shocking psychological thriller of a woman's act of violence against her husband.",
    "Gone Girl by Gillian Flynn - A twisted and addictive thriller about a woman's disappearance and the secrets that unravel.",
    "The Da Vinci Code by Dan Brown - A fast-paced mystery thriller that explores religious history and symbology.",
];

/// Romance and Emotions.
const CATEGORY_B: [&str; 3] = [
    "Pride and Prejudice by Jane Austen - A classic tale of manners, upbringing, morality, education, and marriage in British Regency society.",
    "The Notebook by Nicholas Sparks - A poignant story of love lost and found, spanning decades and testing the limits of devotion.",
    "Normal People by Sally Rooney - An exquisite story about how one person can change another person's life.",
];

/// Science Fiction or Fantasy.
const CATEGORY_C: [&str; 3] = [
    "Dune by Frank Herbert - An epic science fiction masterpiece of adventure and mysticism on a desert planet.",
    "The Name of the Wind by Patrick Rothfuss - A richly detailed fantasy about a legendary wizard recounting his life story.",
    "Project Hail Mary by Andy Weir - A lone astronaut must save humanity from extinction through interstellar cooperation.",
];

/// Non-fiction and Real Events.
const CATEGORY_D: [&str; 3] = [
    "Sapiens by Yuval Noah Harari - A groundbreaking narrative of humanity's creation and evolution exploring how biology and history have defined us.",
    "Educated by Tara Westover - A memoir about a woman who leaves her survivalist family and goes on to earn a PhD from Cambridge University.",
    "The Immortal Life of Henrietta Lacks by Rebecca Skloot - The story of a woman whose cells were used for medical research without her knowledge.",
];

/// The three recommendations for a category letter.
///
/// Unknown letters (and lowercase input) resolve to category C.
pub fn recommendations_for(letter: char) -> &'static [&'static str; 3] {
    match letter {
        'A' => &CATEGORY_A,
        'B' => &CATEGORY_B,
        'C' => &CATEGORY_C,
        'D' => &CATEGORY_D,
        _ => &CATEGORY_C,
    }
}
