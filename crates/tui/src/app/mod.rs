use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ledger::{Category, Draft, Ledger};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
    ui::{
        self,
        components::date::DateDisplay,
        keymap::{AppAction, map_key},
    },
};

/// Form control receiving key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Amount,
    Category,
    Description,
    AddButton,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Self::Amount => Self::Category,
            Self::Category => Self::Description,
            Self::Description => Self::AddButton,
            Self::AddButton => Self::Amount,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Amount => Self::AddButton,
            Self::Category => Self::Amount,
            Self::Description => Self::Category,
            Self::AddButton => Self::Description,
        }
    }
}

/// Everything the ledger view renders from.
#[derive(Debug)]
pub struct AppState {
    pub ledger: Ledger,
    pub draft: Draft,
    pub focus: Focus,
    pub dates: DateDisplay,
    /// Highlighted row of the recent-expenses list; 0 is the newest.
    pub selected: usize,
}

impl AppState {
    pub fn new(dates: DateDisplay) -> Self {
        Self {
            ledger: Ledger::new(),
            draft: Draft::default(),
            focus: Focus::Amount,
            dates,
            selected: 0,
        }
    }

    /// Applies one mapped key. Returns `false` when the app should quit.
    pub fn apply(&mut self, action: AppAction) -> bool {
        match action {
            AppAction::Quit => return false,
            AppAction::NextField => self.focus = self.focus.next(),
            AppAction::PrevField => self.focus = self.focus.prev(),
            AppAction::Submit => self.submit(),
            AppAction::Backspace => self.backspace(),
            AppAction::Left | AppAction::Up if self.focus == Focus::Category => {
                self.draft.category = Some(Category::cycle_prev(self.draft.category));
            }
            AppAction::Right | AppAction::Down if self.focus == Focus::Category => {
                self.draft.category = Some(Category::cycle_next(self.draft.category));
            }
            AppAction::Up | AppAction::ScrollUp => self.select_prev(),
            AppAction::Down | AppAction::ScrollDown => self.select_next(),
            AppAction::Left | AppAction::Right => {}
            AppAction::Input(ch) => self.input(ch),
            AppAction::None => {}
        }
        true
    }

    fn submit(&mut self) {
        // Incomplete drafts are dropped without feedback; the draft stays as typed.
        if self.ledger.submit(&mut self.draft).is_ok() {
            self.focus = Focus::Amount;
            self.selected = 0;
        }
    }

    fn select_next(&mut self) {
        if self.ledger.is_empty() {
            return;
        }
        self.selected = (self.selected + 1).min(self.ledger.len() - 1);
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn backspace(&mut self) {
        match self.focus {
            Focus::Amount => {
                self.draft.amount.pop();
            }
            Focus::Category => self.draft.category = None,
            Focus::Description => {
                self.draft.description.pop();
            }
            Focus::AddButton => {}
        }
    }

    fn input(&mut self, ch: char) {
        match self.focus {
            Focus::Amount => {
                if ch.is_ascii_digit() || ch == '.' || ch == ',' {
                    self.draft.amount.push(ch);
                }
            }
            Focus::Category => {
                if ch == ' ' {
                    self.draft.category = Some(Category::cycle_next(self.draft.category));
                } else if let Some(category) = category_by_initial(ch) {
                    self.draft.category = Some(category);
                }
            }
            Focus::Description => {
                if !ch.is_control() {
                    self.draft.description.push(ch);
                }
            }
            Focus::AddButton => {
                if ch == ' ' {
                    self.submit();
                }
            }
        }
    }
}

fn category_by_initial(ch: char) -> Option<Category> {
    let wanted = ch.to_ascii_uppercase();
    Category::ALL
        .into_iter()
        .find(|c| c.label().starts_with(wanted))
}

pub struct App {
    pub state: AppState,
    tick_rate: Duration,
    should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            state: AppState::new(DateDisplay::from_config(config)?),
            tick_rate: Duration::from_millis(config.tick_rate_ms),
            should_quit: false,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        ui::restore_terminal(&mut terminal)?;
        tracing::info!(entries = self.state.ledger.len(), "session ended");
        result
    }

    fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        while !self.should_quit {
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(self.tick_rate)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if !self.state.apply(map_key(key)) {
            self.should_quit = true;
        }
    }
}
