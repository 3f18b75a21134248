//! Top-level application state managing tabs.

use mm_core::ContentPack;
use mm_quiz::QuizSession;
use mm_sort::{SortConfig, SortSession};

use crate::tabs::about::AboutTab;
use crate::tabs::home::HomeTab;
use crate::tabs::learn::LearnTab;
use crate::tabs::quiz::QuizTab;
use crate::tabs::sort::SortTab;
use crate::tabs::{Tab, TabAction, TabId};

/// Main application state for the TUI.
pub struct TuiApp {
    /// Currently active tab.
    pub active_tab: TabId,
    /// Whether to show the global help popup.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,

    /// Home tab.
    pub home: HomeTab,
    /// Learn tab.
    pub learn: LearnTab,
    /// Sort tab, owning the sorting session.
    pub sort: SortTab,
    /// Quiz tab, owning the quiz session.
    pub quiz: QuizTab,
    /// About tab.
    pub about: AboutTab,
}

impl TuiApp {
    /// Create a new app from a content pack.
    ///
    /// `seed` shuffles the sorting items; without it they keep pack order.
    pub fn new(pack: ContentPack, start_tab: TabId, seed: Option<u64>) -> Result<Self, String> {
        let config = SortConfig::default().with_shuffle(seed);
        let sort = SortSession::with_config(pack.sort_items, config)
            .map_err(|e| format!("failed to start sorting game: {e}"))?;
        let quiz =
            QuizSession::new(pack.questions).map_err(|e| format!("failed to start quiz: {e}"))?;

        Ok(Self {
            active_tab: start_tab,
            show_help: false,
            should_quit: false,
            home: HomeTab::new(),
            learn: LearnTab::new(pack.elements),
            sort: SortTab::new(sort),
            quiz: QuizTab::new(quiz),
            about: AboutTab::new(),
        })
    }

    /// Get a reference to the active tab.
    pub fn active_tab_ref(&self) -> &dyn Tab {
        match self.active_tab {
            TabId::Home => &self.home,
            TabId::Learn => &self.learn,
            TabId::Sort => &self.sort,
            TabId::Quiz => &self.quiz,
            TabId::About => &self.about,
        }
    }

    /// Get a mutable reference to the active tab.
    pub fn active_tab_mut(&mut self) -> &mut dyn Tab {
        match self.active_tab {
            TabId::Home => &mut self.home,
            TabId::Learn => &mut self.learn,
            TabId::Sort => &mut self.sort,
            TabId::Quiz => &mut self.quiz,
            TabId::About => &mut self.about,
        }
    }

    /// Switch to a tab by ID.
    pub fn switch_tab(&mut self, tab: TabId) {
        tracing::debug!(?tab, "switching tab");
        self.active_tab = tab;
    }

    /// Forward a key to the active tab and carry out what it asks for.
    pub fn dispatch(&mut self, key: crossterm::event::KeyEvent) {
        match self.active_tab_mut().handle_key(key) {
            TabAction::None => {}
            TabAction::Switch(tab) => self.switch_tab(tab),
            TabAction::Quit => self.should_quit = true,
        }
    }
}
