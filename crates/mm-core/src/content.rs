//! Content packs: the read-only tables every activity is built from.
//!
//! [`ContentPack::builtin`] returns the standard MetalMind content. Custom
//! packs can be loaded from JSON; they are validated on load so sessions
//! built from them never start in an unusable state.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::element::Element;
use crate::error::{ContentError, ContentResult};
use crate::item::{ClassificationItem, validate_items};
use crate::question::{QuizQuestion, validate_questions};

/// Elements, sorting items and quiz questions bundled together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPack {
    /// Reference elements for the learn browser.
    #[serde(default)]
    pub elements: Vec<Element>,
    /// Pool for the sorting activity.
    pub sort_items: Vec<ClassificationItem>,
    /// Questions for the quiz, in the order they are asked.
    pub questions: Vec<QuizQuestion>,
}

impl ContentPack {
    /// The built-in content.
    pub fn builtin() -> Self {
        Self {
            elements: builtin_elements(),
            sort_items: builtin_sort_items(),
            questions: builtin_questions(),
        }
    }

    /// Parse and validate a pack from JSON text.
    pub fn from_json(json: &str) -> ContentResult<Self> {
        let pack: Self = serde_json::from_str(json)?;
        pack.validate()?;
        tracing::debug!(
            elements = pack.elements.len(),
            sort_items = pack.sort_items.len(),
            questions = pack.questions.len(),
            "loaded content pack"
        );
        Ok(pack)
    }

    /// Read, parse and validate a pack from a JSON file.
    pub fn from_path(path: &Path) -> ContentResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load from `path` if given, otherwise return the built-in pack.
    pub fn load(path: Option<&Path>) -> ContentResult<Self> {
        match path {
            Some(p) => Self::from_path(p),
            None => Ok(Self::builtin()),
        }
    }

    /// Serialize the pack as pretty-printed JSON.
    pub fn to_json(&self) -> ContentResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate every table of the pack.
    ///
    /// Sorting items must be non-empty with unique ids and cover both
    /// categories; questions must be non-empty, valid and uniquely numbered;
    /// element ids must be unique.
    pub fn validate(&self) -> ContentResult<()> {
        validate_items(&self.sort_items)?;
        for category in Category::ALL {
            if !self.sort_items.iter().any(|i| i.category == category) {
                return Err(ContentError::MissingCategory(category));
            }
        }
        validate_questions(&self.questions)?;

        let mut seen = HashSet::new();
        for element in &self.elements {
            if !seen.insert(element.id.as_str()) {
                return Err(ContentError::DuplicateId(element.id.clone()));
            }
        }
        Ok(())
    }

    /// Elements of one category, in table order.
    pub fn elements_in(&self, category: Category) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(move |e| e.category == category)
    }

    /// Find an element by id or name, ignoring case.
    pub fn find_element(&self, key: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.matches(key))
    }
}

impl Default for ContentPack {
    fn default() -> Self {
        Self::builtin()
    }
}

#[allow(clippy::too_many_arguments)]
fn element(
    id: &str,
    name: &str,
    category: Category,
    description: &str,
    fun_fact: &str,
    properties: &[&str],
    emoji: &str,
    color: &str,
) -> Element {
    Element {
        id: id.to_string(),
        name: name.to_string(),
        category,
        description: description.to_string(),
        fun_fact: fun_fact.to_string(),
        properties: properties.iter().map(|p| p.to_string()).collect(),
        emoji: emoji.to_string(),
        color: color.to_string(),
    }
}

fn builtin_elements() -> Vec<Element> {
    use Category::{Metal, NonMetal};
    vec![
        element(
            "gold",
            "Gold",
            Metal,
            "A precious yellow metal that never rusts or tarnishes.",
            "Gold is so soft you can bend it with your hands!",
            &["Shiny", "Conducts electricity", "Does not rust"],
            "\u{1f947}",
            "metal-gold",
        ),
        element(
            "copper",
            "Copper",
            Metal,
            "A reddish-brown metal used in wires and pipes.",
            "The Statue of Liberty is made of copper - that's why it's green!",
            &["Good conductor", "Malleable", "Turns green over time"],
            "\u{1f538}",
            "metal-copper",
        ),
        element(
            "aluminum",
            "Aluminum",
            Metal,
            "A lightweight, silver metal used in cans and foil.",
            "Aluminum cans can be recycled forever without losing quality!",
            &["Lightweight", "Resistant to rust", "Recyclable"],
            "\u{1f964}",
            "metal-silver",
        ),
        element(
            "oxygen",
            "Oxygen",
            NonMetal,
            "An invisible gas that we breathe to stay alive.",
            "Fish breathe oxygen too, but they get it from water!",
            &["Colorless gas", "Supports combustion", "Essential for life"],
            "\u{1f4a8}",
            "nonmetal-oxygen",
        ),
        element(
            "carbon",
            "Carbon",
            NonMetal,
            "Found in pencil lead (graphite) and diamonds.",
            "Diamonds and pencil lead are both made of carbon!",
            &["Can be hard or soft", "Black in graphite form", "Makes compounds easily"],
            "\u{270f}\u{fe0f}",
            "nonmetal-carbon",
        ),
        element(
            "sulfur",
            "Sulfur",
            NonMetal,
            "A yellow powder that smells like rotten eggs.",
            "Sulfur is what makes rotten eggs smell so bad!",
            &["Yellow color", "Brittle", "Burns with blue flame"],
            "\u{1f7e1}",
            "nonmetal-sulfur",
        ),
    ]
}

fn builtin_sort_items() -> Vec<ClassificationItem> {
    use Category::{Metal, NonMetal};
    [
        ("gold", "Gold Ring", Metal, "\u{1f48d}", "metal-gold"),
        ("oxygen", "Oxygen Tank", NonMetal, "\u{1fac1}", "nonmetal-oxygen"),
        ("copper", "Copper Wire", Metal, "\u{1f50c}", "metal-copper"),
        ("carbon", "Pencil", NonMetal, "\u{270f}\u{fe0f}", "nonmetal-carbon"),
        ("aluminum", "Aluminum Can", Metal, "\u{1f964}", "metal-silver"),
        ("sulfur", "Sulfur Powder", NonMetal, "\u{1f7e1}", "nonmetal-sulfur"),
    ]
    .into_iter()
    .map(|(id, name, category, emoji, color)| {
        ClassificationItem::new(id, name, category)
            .with_emoji(emoji)
            .with_color(color)
    })
    .collect()
}

fn question(
    id: u32,
    prompt: &str,
    options: [&str; 4],
    correct: usize,
    explanation: &str,
    emoji: &str,
) -> QuizQuestion {
    QuizQuestion {
        id,
        prompt: prompt.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct,
        explanation: explanation.to_string(),
        emoji: emoji.to_string(),
    }
}

fn builtin_questions() -> Vec<QuizQuestion> {
    vec![
        question(
            1,
            "Which of these is a metal?",
            ["Oxygen", "Gold", "Carbon", "Sulfur"],
            1,
            "Gold is a precious metal that's shiny and conducts electricity!",
            "\u{1f947}",
        ),
        question(
            2,
            "What do we breathe to stay alive?",
            ["Carbon", "Sulfur", "Oxygen", "Aluminum"],
            2,
            "Oxygen is essential for life - we breathe it in from the air!",
            "\u{1f4a8}",
        ),
        question(
            3,
            "Which property is common in metals?",
            [
                "They are brittle",
                "They conduct electricity",
                "They are gases",
                "They smell bad",
            ],
            1,
            "Metals are great conductors of electricity - that's why wires are made of metal!",
            "\u{26a1}",
        ),
        question(
            4,
            "What is pencil lead made of?",
            ["Lead metal", "Graphite (Carbon)", "Gold", "Silver"],
            1,
            "Pencil 'lead' is actually made of graphite, which is a form of carbon!",
            "\u{270f}\u{fe0f}",
        ),
        question(
            5,
            "Which of these metals can you find in coins?",
            ["Oxygen", "Copper", "Carbon", "Sulfur"],
            1,
            "Copper is used in coins because it's durable and doesn't rust easily!",
            "\u{1fa99}",
        ),
        question(
            6,
            "Non-metals are usually:",
            [
                "Shiny and hard",
                "Brittle or gaseous",
                "Good conductors",
                "Magnetic",
            ],
            1,
            "Non-metals tend to be brittle when solid or exist as gases!",
            "\u{1f32c}\u{fe0f}",
        ),
        question(
            7,
            "What gives rotten eggs their bad smell?",
            ["Gold", "Carbon", "Sulfur", "Aluminum"],
            2,
            "Sulfur compounds create that distinctive rotten egg smell!",
            "\u{1f95a}",
        ),
        question(
            8,
            "Which metal is used to make soda cans?",
            ["Gold", "Carbon", "Aluminum", "Sulfur"],
            2,
            "Aluminum is lightweight and perfect for making drink cans!",
            "\u{1f964}",
        ),
        question(
            9,
            "Diamonds are made of which element?",
            ["Gold", "Carbon", "Oxygen", "Copper"],
            1,
            "Diamonds are pure carbon arranged in a special crystal structure!",
            "\u{1f48e}",
        ),
        question(
            10,
            "Which property do all metals share?",
            [
                "They are yellow",
                "They smell",
                "They are shiny when polished",
                "They float",
            ],
            2,
            "All metals have a characteristic metallic luster when polished!",
            "\u{2728}",
        ),
    ]
}
