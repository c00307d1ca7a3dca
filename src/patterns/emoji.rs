//! Static emoji taxonomy: grapheme → {name, group, sub_group}.
//!
//! The table is generated data (Unicode emoji-test derived), supplied to
//! the core rather than built by it. The match pattern is an alternation
//! over the table's keys, longest glyph first, so every match is guaranteed
//! a table entry: a lookup miss can only mean the table and pattern were
//! edited out of sync, which [`lookup`] reports as a fatal configuration
//! error.
//!
//! The table is a process-wide, read-only resource: initialized once,
//! never mutated, safe to read from any number of threads.

use std::sync::LazyLock;

use regex::Regex;
use rustc_hash::FxHashMap;

use crate::error::{ExtractError, Result};

/// One row of the taxonomy table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmojiEntry {
    /// The grapheme as it appears in text (may be multi-codepoint).
    pub glyph: &'static str,
    /// CLDR short name, lowercase.
    pub name: &'static str,
    /// Top-level group (e.g. "Smileys & Emotion").
    pub group: &'static str,
    /// Sub-group within the group (e.g. "face-smiling").
    pub sub_group: &'static str,
}

const fn e(
    glyph: &'static str,
    name: &'static str,
    group: &'static str,
    sub_group: &'static str,
) -> EmojiEntry {
    EmojiEntry { glyph, name, group, sub_group }
}

const SMILEYS: &str = "Smileys & Emotion";
const PEOPLE: &str = "People & Body";
const ANIMALS: &str = "Animals & Nature";
const FOOD: &str = "Food & Drink";
const TRAVEL: &str = "Travel & Places";
const ACTIVITIES: &str = "Activities";
const OBJECTS: &str = "Objects";
const SYMBOLS: &str = "Symbols";
const FLAGS: &str = "Flags";

/// The taxonomy rows. Kept in emoji-test order within each sub-group.
pub static EMOJI_TABLE: &[EmojiEntry] = &[
    // ── Smileys & Emotion ──
    e("😀", "grinning face", SMILEYS, "face-smiling"),
    e("😃", "grinning face with big eyes", SMILEYS, "face-smiling"),
    e("😄", "grinning face with smiling eyes", SMILEYS, "face-smiling"),
    e("😁", "beaming face with smiling eyes", SMILEYS, "face-smiling"),
    e("😆", "grinning squinting face", SMILEYS, "face-smiling"),
    e("😅", "grinning face with sweat", SMILEYS, "face-smiling"),
    e("🤣", "rolling on the floor laughing", SMILEYS, "face-smiling"),
    e("😂", "face with tears of joy", SMILEYS, "face-smiling"),
    e("🙂", "slightly smiling face", SMILEYS, "face-smiling"),
    e("🙃", "upside-down face", SMILEYS, "face-smiling"),
    e("😉", "winking face", SMILEYS, "face-smiling"),
    e("😊", "smiling face with smiling eyes", SMILEYS, "face-smiling"),
    e("😇", "smiling face with halo", SMILEYS, "face-smiling"),
    e("🥰", "smiling face with hearts", SMILEYS, "face-affection"),
    e("😍", "smiling face with heart-eyes", SMILEYS, "face-affection"),
    e("🤩", "star-struck", SMILEYS, "face-affection"),
    e("😘", "face blowing a kiss", SMILEYS, "face-affection"),
    e("😗", "kissing face", SMILEYS, "face-affection"),
    e("😚", "kissing face with closed eyes", SMILEYS, "face-affection"),
    e("😙", "kissing face with smiling eyes", SMILEYS, "face-affection"),
    e("😋", "face savoring food", SMILEYS, "face-tongue"),
    e("😛", "face with tongue", SMILEYS, "face-tongue"),
    e("😜", "winking face with tongue", SMILEYS, "face-tongue"),
    e("🤪", "zany face", SMILEYS, "face-tongue"),
    e("😝", "squinting face with tongue", SMILEYS, "face-tongue"),
    e("🤑", "money-mouth face", SMILEYS, "face-tongue"),
    e("🤗", "hugging face", SMILEYS, "face-hand"),
    e("🤭", "face with hand over mouth", SMILEYS, "face-hand"),
    e("🤫", "shushing face", SMILEYS, "face-hand"),
    e("🤔", "thinking face", SMILEYS, "face-hand"),
    e("🤐", "zipper-mouth face", SMILEYS, "face-neutral-skeptical"),
    e("🤨", "face with raised eyebrow", SMILEYS, "face-neutral-skeptical"),
    e("😐", "neutral face", SMILEYS, "face-neutral-skeptical"),
    e("😑", "expressionless face", SMILEYS, "face-neutral-skeptical"),
    e("😶", "face without mouth", SMILEYS, "face-neutral-skeptical"),
    e("😏", "smirking face", SMILEYS, "face-neutral-skeptical"),
    e("😒", "unamused face", SMILEYS, "face-neutral-skeptical"),
    e("🙄", "face with rolling eyes", SMILEYS, "face-neutral-skeptical"),
    e("😬", "grimacing face", SMILEYS, "face-neutral-skeptical"),
    e("🤥", "lying face", SMILEYS, "face-neutral-skeptical"),
    e("😌", "relieved face", SMILEYS, "face-sleepy"),
    e("😔", "pensive face", SMILEYS, "face-sleepy"),
    e("😪", "sleepy face", SMILEYS, "face-sleepy"),
    e("🤤", "drooling face", SMILEYS, "face-sleepy"),
    e("😴", "sleeping face", SMILEYS, "face-sleepy"),
    e("😷", "face with medical mask", SMILEYS, "face-unwell"),
    e("🤒", "face with thermometer", SMILEYS, "face-unwell"),
    e("🤕", "face with head-bandage", SMILEYS, "face-unwell"),
    e("🤢", "nauseated face", SMILEYS, "face-unwell"),
    e("🤮", "face vomiting", SMILEYS, "face-unwell"),
    e("🤧", "sneezing face", SMILEYS, "face-unwell"),
    e("🥵", "hot face", SMILEYS, "face-unwell"),
    e("🥶", "cold face", SMILEYS, "face-unwell"),
    e("🥴", "woozy face", SMILEYS, "face-unwell"),
    e("😵", "dizzy face", SMILEYS, "face-unwell"),
    e("🤯", "exploding head", SMILEYS, "face-unwell"),
    e("🤠", "cowboy hat face", SMILEYS, "face-hat"),
    e("🥳", "partying face", SMILEYS, "face-hat"),
    e("😎", "smiling face with sunglasses", SMILEYS, "face-glasses"),
    e("🤓", "nerd face", SMILEYS, "face-glasses"),
    e("🧐", "face with monocle", SMILEYS, "face-glasses"),
    e("😕", "confused face", SMILEYS, "face-concerned"),
    e("😟", "worried face", SMILEYS, "face-concerned"),
    e("🙁", "slightly frowning face", SMILEYS, "face-concerned"),
    e("😮", "face with open mouth", SMILEYS, "face-concerned"),
    e("😯", "hushed face", SMILEYS, "face-concerned"),
    e("😲", "astonished face", SMILEYS, "face-concerned"),
    e("😳", "flushed face", SMILEYS, "face-concerned"),
    e("🥺", "pleading face", SMILEYS, "face-concerned"),
    e("😦", "frowning face with open mouth", SMILEYS, "face-concerned"),
    e("😧", "anguished face", SMILEYS, "face-concerned"),
    e("😨", "fearful face", SMILEYS, "face-concerned"),
    e("😰", "anxious face with sweat", SMILEYS, "face-concerned"),
    e("😥", "sad but relieved face", SMILEYS, "face-concerned"),
    e("😢", "crying face", SMILEYS, "face-concerned"),
    e("😭", "loudly crying face", SMILEYS, "face-concerned"),
    e("😱", "face screaming in fear", SMILEYS, "face-concerned"),
    e("😖", "confounded face", SMILEYS, "face-concerned"),
    e("😣", "persevering face", SMILEYS, "face-concerned"),
    e("😞", "disappointed face", SMILEYS, "face-concerned"),
    e("😓", "downcast face with sweat", SMILEYS, "face-concerned"),
    e("😩", "weary face", SMILEYS, "face-concerned"),
    e("😫", "tired face", SMILEYS, "face-concerned"),
    e("🥱", "yawning face", SMILEYS, "face-concerned"),
    e("😤", "face with steam from nose", SMILEYS, "face-negative"),
    e("😡", "pouting face", SMILEYS, "face-negative"),
    e("😠", "angry face", SMILEYS, "face-negative"),
    e("🤬", "face with symbols on mouth", SMILEYS, "face-negative"),
    e("😈", "smiling face with horns", SMILEYS, "face-negative"),
    e("👿", "angry face with horns", SMILEYS, "face-negative"),
    e("💀", "skull", SMILEYS, "face-negative"),
    e("💩", "pile of poo", SMILEYS, "face-costume"),
    e("🤡", "clown face", SMILEYS, "face-costume"),
    e("👹", "ogre", SMILEYS, "face-costume"),
    e("👺", "goblin", SMILEYS, "face-costume"),
    e("👻", "ghost", SMILEYS, "face-costume"),
    e("👽", "alien", SMILEYS, "face-costume"),
    e("🤖", "robot", SMILEYS, "face-costume"),
    e("😺", "grinning cat", SMILEYS, "cat-face"),
    e("😸", "grinning cat with smiling eyes", SMILEYS, "cat-face"),
    e("😹", "cat with tears of joy", SMILEYS, "cat-face"),
    e("😻", "smiling cat with heart-eyes", SMILEYS, "cat-face"),
    e("😼", "cat with wry smile", SMILEYS, "cat-face"),
    e("😽", "kissing cat", SMILEYS, "cat-face"),
    e("🙀", "weary cat", SMILEYS, "cat-face"),
    e("😿", "crying cat", SMILEYS, "cat-face"),
    e("😾", "pouting cat", SMILEYS, "cat-face"),
    e("🙈", "see-no-evil monkey", SMILEYS, "monkey-face"),
    e("🙉", "hear-no-evil monkey", SMILEYS, "monkey-face"),
    e("🙊", "speak-no-evil monkey", SMILEYS, "monkey-face"),
    e("💋", "kiss mark", SMILEYS, "emotion"),
    e("💌", "love letter", SMILEYS, "emotion"),
    e("💘", "heart with arrow", SMILEYS, "emotion"),
    e("💝", "heart with ribbon", SMILEYS, "emotion"),
    e("💖", "sparkling heart", SMILEYS, "emotion"),
    e("💗", "growing heart", SMILEYS, "emotion"),
    e("💓", "beating heart", SMILEYS, "emotion"),
    e("💞", "revolving hearts", SMILEYS, "emotion"),
    e("💕", "two hearts", SMILEYS, "emotion"),
    e("💔", "broken heart", SMILEYS, "emotion"),
    e("\u{2764}\u{FE0F}", "red heart", SMILEYS, "emotion"),
    e("\u{2764}", "red heart", SMILEYS, "emotion"),
    e("🧡", "orange heart", SMILEYS, "emotion"),
    e("💛", "yellow heart", SMILEYS, "emotion"),
    e("💚", "green heart", SMILEYS, "emotion"),
    e("💙", "blue heart", SMILEYS, "emotion"),
    e("💜", "purple heart", SMILEYS, "emotion"),
    e("🖤", "black heart", SMILEYS, "emotion"),
    e("💯", "hundred points", SMILEYS, "emotion"),
    e("💢", "anger symbol", SMILEYS, "emotion"),
    e("💥", "collision", SMILEYS, "emotion"),
    e("💫", "dizzy", SMILEYS, "emotion"),
    e("💦", "sweat droplets", SMILEYS, "emotion"),
    e("💨", "dashing away", SMILEYS, "emotion"),
    e("💬", "speech balloon", SMILEYS, "emotion"),
    e("💤", "zzz", SMILEYS, "emotion"),
    // ── People & Body ──
    e("👍", "thumbs up", PEOPLE, "hand-fingers-closed"),
    e("👎", "thumbs down", PEOPLE, "hand-fingers-closed"),
    e("✊", "raised fist", PEOPLE, "hand-fingers-closed"),
    e("👊", "oncoming fist", PEOPLE, "hand-fingers-closed"),
    e("👏", "clapping hands", PEOPLE, "hands"),
    e("🙌", "raising hands", PEOPLE, "hands"),
    e("👐", "open hands", PEOPLE, "hands"),
    e("🤝", "handshake", PEOPLE, "hands"),
    e("🙏", "folded hands", PEOPLE, "hands"),
    e("💪", "flexed biceps", PEOPLE, "body-parts"),
    e("👀", "eyes", PEOPLE, "body-parts"),
    // ── Animals & Nature ──
    e("🐶", "dog face", ANIMALS, "animal-mammal"),
    e("🐱", "cat face", ANIMALS, "animal-mammal"),
    e("🐭", "mouse face", ANIMALS, "animal-mammal"),
    e("🐰", "rabbit face", ANIMALS, "animal-mammal"),
    e("🦊", "fox", ANIMALS, "animal-mammal"),
    e("🐻", "bear", ANIMALS, "animal-mammal"),
    e("🐼", "panda", ANIMALS, "animal-mammal"),
    e("🐨", "koala", ANIMALS, "animal-mammal"),
    e("🐯", "tiger face", ANIMALS, "animal-mammal"),
    e("🦁", "lion", ANIMALS, "animal-mammal"),
    e("🐵", "monkey face", ANIMALS, "animal-mammal"),
    e("🦋", "butterfly", ANIMALS, "animal-bug"),
    e("🐝", "honeybee", ANIMALS, "animal-bug"),
    e("🌹", "rose", ANIMALS, "plant-flower"),
    e("🌸", "cherry blossom", ANIMALS, "plant-flower"),
    e("🌻", "sunflower", ANIMALS, "plant-flower"),
    e("🌷", "tulip", ANIMALS, "plant-flower"),
    e("🌲", "evergreen tree", ANIMALS, "plant-other"),
    e("🍀", "four leaf clover", ANIMALS, "plant-other"),
    // ── Food & Drink ──
    e("🍎", "red apple", FOOD, "food-fruit"),
    e("🍌", "banana", FOOD, "food-fruit"),
    e("🍉", "watermelon", FOOD, "food-fruit"),
    e("🍓", "strawberry", FOOD, "food-fruit"),
    e("🍒", "cherries", FOOD, "food-fruit"),
    e("🍑", "peach", FOOD, "food-fruit"),
    e("🍍", "pineapple", FOOD, "food-fruit"),
    e("🍕", "pizza", FOOD, "food-prepared"),
    e("🍔", "hamburger", FOOD, "food-prepared"),
    e("🍟", "french fries", FOOD, "food-prepared"),
    e("🌮", "taco", FOOD, "food-prepared"),
    e("🎂", "birthday cake", FOOD, "food-sweet"),
    e("🍩", "doughnut", FOOD, "food-sweet"),
    e("☕", "hot beverage", FOOD, "drink"),
    e("🍺", "beer mug", FOOD, "drink"),
    e("🍷", "wine glass", FOOD, "drink"),
    e("🍾", "bottle with popping cork", FOOD, "drink"),
    // ── Travel & Places ──
    e("🌋", "volcano", TRAVEL, "place-geographic"),
    e("🗻", "mount fuji", TRAVEL, "place-geographic"),
    e("🏠", "house", TRAVEL, "place-building"),
    e("🚗", "automobile", TRAVEL, "transport-ground"),
    e("🚕", "taxi", TRAVEL, "transport-ground"),
    e("🚌", "bus", TRAVEL, "transport-ground"),
    e("🚲", "bicycle", TRAVEL, "transport-ground"),
    e("🚀", "rocket", TRAVEL, "transport-air"),
    e("🛸", "flying saucer", TRAVEL, "transport-air"),
    e("🌈", "rainbow", TRAVEL, "sky & weather"),
    e("⭐", "star", TRAVEL, "sky & weather"),
    e("🌙", "crescent moon", TRAVEL, "sky & weather"),
    e("🔥", "fire", TRAVEL, "sky & weather"),
    e("💧", "droplet", TRAVEL, "sky & weather"),
    e("🌊", "water wave", TRAVEL, "sky & weather"),
    e("⛄", "snowman without snow", TRAVEL, "sky & weather"),
    // ── Activities ──
    e("🎉", "party popper", ACTIVITIES, "event"),
    e("🎊", "confetti ball", ACTIVITIES, "event"),
    e("🎈", "balloon", ACTIVITIES, "event"),
    e("🎁", "wrapped gift", ACTIVITIES, "event"),
    e("✨", "sparkles", ACTIVITIES, "event"),
    e("🏆", "trophy", ACTIVITIES, "award-medal"),
    e("🥇", "1st place medal", ACTIVITIES, "award-medal"),
    e("⚽", "soccer ball", ACTIVITIES, "sport"),
    e("🏀", "basketball", ACTIVITIES, "sport"),
    e("🏈", "american football", ACTIVITIES, "sport"),
    e("⚾", "baseball", ACTIVITIES, "sport"),
    e("🎮", "video game", ACTIVITIES, "game"),
    e("🎲", "game die", ACTIVITIES, "game"),
    // ── Objects ──
    e("🎵", "musical note", OBJECTS, "music"),
    e("🎶", "musical notes", OBJECTS, "music"),
    e("🎸", "guitar", OBJECTS, "musical-instrument"),
    e("📱", "mobile phone", OBJECTS, "phone"),
    e("💻", "laptop", OBJECTS, "computer"),
    e("📷", "camera", OBJECTS, "light & video"),
    e("💡", "light bulb", OBJECTS, "light & video"),
    e("📚", "books", OBJECTS, "book-paper"),
    e("💰", "money bag", OBJECTS, "money"),
    e("💸", "money with wings", OBJECTS, "money"),
    e("💵", "dollar banknote", OBJECTS, "money"),
    e("📧", "e-mail", OBJECTS, "mail"),
    e("📦", "package", OBJECTS, "mail"),
    e("⏰", "alarm clock", OBJECTS, "time"),
    e("🔨", "hammer", OBJECTS, "tool"),
    e("🔒", "locked", OBJECTS, "lock"),
    e("🔑", "key", OBJECTS, "lock"),
    // ── Symbols ──
    e("✅", "check mark button", SYMBOLS, "other-symbol"),
    e("❌", "cross mark", SYMBOLS, "other-symbol"),
    e("🔴", "red circle", SYMBOLS, "geometric"),
    e("🔵", "blue circle", SYMBOLS, "geometric"),
    // ── Flags ──
    e("🏁", "chequered flag", FLAGS, "flag"),
    e("🚩", "triangular flag", FLAGS, "flag"),
];

/// Glyph → entry index, built once.
pub static EMOJI_ENTRIES: LazyLock<FxHashMap<&'static str, &'static EmojiEntry>> =
    LazyLock::new(|| EMOJI_TABLE.iter().map(|entry| (entry.glyph, entry)).collect());

/// The emoji match pattern: an alternation over the table's glyphs, longest
/// first so multi-codepoint sequences win over their prefixes.
pub static EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    let mut glyphs: Vec<&str> = EMOJI_TABLE.iter().map(|entry| entry.glyph).collect();
    glyphs.sort_by_key(|glyph| std::cmp::Reverse(glyph.len()));
    glyphs.dedup();
    let alternation = glyphs
        .iter()
        .map(|glyph| regex::escape(glyph))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&alternation).unwrap()
});

/// Resolve a matched grapheme to its taxonomy entry.
///
/// # Errors
///
/// [`ExtractError::UnknownEmoji`] when the grapheme has no entry — a
/// pattern/table mismatch, never a property of the input text.
pub fn lookup(glyph: &str) -> Result<&'static EmojiEntry> {
    EMOJI_ENTRIES
        .get(glyph)
        .copied()
        .ok_or_else(|| ExtractError::UnknownEmoji(glyph.to_string()))
}
