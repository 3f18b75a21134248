//! Static texts for the home and about screens.

/// Application name.
pub const APP_NAME: &str = "MetalMind";

/// One-line pitch shown under the title.
pub const TAGLINE: &str = "Learn Metals & Non-Metals through Fun & Play!";

/// Who the game is for.
pub const AUDIENCE: &str = "An interactive science adventure for curious minds aged 8-14";

/// Welcome text for the home screen.
pub const WELCOME: &str = "Ready to explore the amazing world of elements? \
Pick any section to start your scientific journey!";

/// Fact shown at the bottom of the home screen.
pub const DID_YOU_KNOW: &str = "Did you know? Your pencil lead is made of graphite - a non-metal!";

/// Name of the creator.
pub const CREATOR: &str = "Harish Chillapalli";

/// A headed paragraph of the about screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    /// Heading.
    pub title: &'static str,
    /// Body text.
    pub body: &'static str,
}

/// Creator story, in display order.
pub const STORY: [Section; 2] = [
    Section {
        title: "My Passion",
        body: "Hi there! I'm Harish, a passionate software engineering student who believes \
that learning should be joyful, engaging, and fun! I created MetalMind because I wanted to \
help children discover the amazing world of science through interactive play and colorful \
visuals.",
    },
    Section {
        title: "My Mission",
        body: "My goal is to make complex scientific concepts simple and accessible for young \
minds. Through MetalMind, children can learn about metals and non-metals without stress - \
purely through exploration, games, and interactive experiences that spark curiosity!",
    },
];

/// Educational philosophy, in display order.
pub const PHILOSOPHY: [Section; 3] = [
    Section {
        title: "Learn Through Play",
        body: "Games and interactive activities make learning memorable and enjoyable",
    },
    Section {
        title: "Visual Learning",
        body: "Colorful designs and animations help children understand concepts better",
    },
    Section {
        title: "Positive Reinforcement",
        body: "Celebrating every achievement builds confidence and encourages exploration",
    },
];

/// Closing quote.
pub const QUOTE: &str =
    "Education is the most powerful weapon which you can use to change the world.";

/// Author of [`QUOTE`].
pub const QUOTE_AUTHOR: &str = "Nelson Mandela";

/// The activities offered from the home screen as `(title, description)`.
pub const ACTIVITIES: [(&str, &str); 4] = [
    ("Learn", "Discover metals and non-metals"),
    ("Sort", "Sort everyday objects into the right box"),
    ("Quiz", "Test your knowledge"),
    ("About", "Meet Harish Chillapalli"),
];
