//! Default keybindings.

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use super::context::Screen;
use crate::models::SourceKind;

/// Lines scrolled by one arrow key press.
pub const LINE_SCROLL: usize = 1;

/// A key code plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }
}

/// Bindings by scope. Lookup order is global, overlay, then screen.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    pub global: HashMap<KeyCombo, Command>,
    pub overlay: HashMap<KeyCombo, Command>,
    pub screen: HashMap<Screen, HashMap<KeyCombo, Command>>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            overlay: HashMap::new(),
            screen: HashMap::new(),
        };

        config.setup_global_bindings();
        config.setup_overlay_bindings();
        config.setup_screen_bindings();

        config
    }

    fn setup_global_bindings(&mut self) {
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);
        self.global.insert(
            KeyCombo::plain(KeyCode::F(1)),
            Command::Browse(SourceKind::Verse),
        );
        self.global.insert(
            KeyCombo::plain(KeyCode::F(2)),
            Command::Browse(SourceKind::Narration),
        );
    }

    fn setup_overlay_bindings(&mut self) {
        let overlay = &mut self.overlay;
        overlay.insert(KeyCombo::plain(KeyCode::Esc), Command::CloseResults);
        overlay.insert(KeyCombo::plain(KeyCode::Up), Command::ScrollUp(LINE_SCROLL));
        overlay.insert(KeyCombo::plain(KeyCode::Down), Command::ScrollDown(LINE_SCROLL));
        overlay.insert(KeyCombo::plain(KeyCode::PageUp), Command::ScrollPageUp);
        overlay.insert(KeyCombo::plain(KeyCode::PageDown), Command::ScrollPageDown);
    }

    fn setup_screen_bindings(&mut self) {
        let mut home = HashMap::new();
        home.insert(KeyCombo::plain(KeyCode::Enter), Command::Submit);
        home.insert(KeyCombo::plain(KeyCode::Backspace), Command::Backspace);
        home.insert(KeyCombo::plain(KeyCode::Esc), Command::ClearInput);
        home.insert(KeyCombo::ctrl(KeyCode::Char('u')), Command::ClearInput);
        self.screen.insert(Screen::Home, home);

        let mut list = HashMap::new();
        list.insert(KeyCombo::plain(KeyCode::Up), Command::MoveUp);
        list.insert(KeyCombo::plain(KeyCode::Down), Command::MoveDown);
        list.insert(KeyCombo::plain(KeyCode::PageUp), Command::ScrollPageUp);
        list.insert(KeyCombo::plain(KeyCode::PageDown), Command::ScrollPageDown);
        list.insert(KeyCombo::plain(KeyCode::Enter), Command::Select);
        list.insert(KeyCombo::plain(KeyCode::Esc), Command::Back);
        list.insert(KeyCombo::plain(KeyCode::Backspace), Command::Back);
        self.screen.insert(Screen::CollectionList, list);

        let mut detail = HashMap::new();
        detail.insert(KeyCombo::plain(KeyCode::Up), Command::ScrollUp(LINE_SCROLL));
        detail.insert(KeyCombo::plain(KeyCode::Down), Command::ScrollDown(LINE_SCROLL));
        detail.insert(KeyCombo::plain(KeyCode::PageUp), Command::ScrollPageUp);
        detail.insert(KeyCombo::plain(KeyCode::PageDown), Command::ScrollPageDown);
        detail.insert(KeyCombo::plain(KeyCode::Esc), Command::Back);
        detail.insert(KeyCombo::plain(KeyCode::Backspace), Command::Back);
        self.screen.insert(Screen::CollectionDetail, detail);
    }

    pub fn get_global(&self, combo: &KeyCombo) -> Option<&Command> {
        self.global.get(combo)
    }

    pub fn get_overlay(&self, combo: &KeyCombo) -> Option<&Command> {
        self.overlay.get(combo)
    }

    pub fn get_screen(&self, screen: Screen, combo: &KeyCombo) -> Option<&Command> {
        self.screen.get(&screen).and_then(|bindings| bindings.get(combo))
    }
}
