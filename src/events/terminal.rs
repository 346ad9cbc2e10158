use crate::state::{ActionEntry, ConfirmChoice, FormField, MenuEntry, Page, SearchField, State};
use crate::store::Store;
use anyhow::Result;
use clipboard::{ClipboardContext, ClipboardProvider};
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            if event::poll(tick_rate).unwrap() {
                if let CrosstermEvent::Key(key) = event::read().unwrap() {
                    tx_clone.send(Event::Input(key)).unwrap();
                }
            }
            tx_clone.send(Event::Tick).unwrap();
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and dispatch it to the current page.
    /// Returns result with value true if should continue or false if
    /// exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State, store: &Store) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(key) => {
                if key.kind == KeyEventKind::Release {
                    return Ok(true);
                }
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    debug!("Processing exit terminal event '{:?}'...", key);
                    return Ok(false);
                }
                match state.current_page() {
                    Page::Menu => handle_menu_key(key, state, store),
                    Page::RecordList => handle_list_key(key, state, store),
                    Page::ActionMenu => handle_actions_key(key, state, store),
                    Page::AddForm | Page::EditForm => handle_form_key(key, state, store),
                    Page::SearchForm => handle_search_key(key, state, store),
                    Page::ValidationNotice => handle_notice_key(key, state),
                    Page::DeleteConfirm | Page::PurgeConfirm => {
                        handle_confirm_key(key, state, store)
                    }
                }
            }
            Event::Tick => Ok(true),
        }
    }
}

fn handle_menu_key(key: KeyEvent, state: &mut State, store: &Store) -> Result<bool> {
    match key.code {
        KeyCode::Down => state.menu_select_next(),
        KeyCode::Up => state.menu_select_prev(),
        KeyCode::Enter => {
            if let Some(entry) = state.selected_menu_entry() {
                return dispatch_menu_entry(entry, state, store);
            }
        }
        KeyCode::Char(c) => {
            let entry = state
                .menu_entries()
                .iter()
                .copied()
                .find(|entry| entry.shortcut() == c);
            if let Some(entry) = entry {
                return dispatch_menu_entry(entry, state, store);
            }
        }
        _ => {}
    }
    Ok(true)
}

fn dispatch_menu_entry(entry: MenuEntry, state: &mut State, store: &Store) -> Result<bool> {
    match entry {
        MenuEntry::ViewAll => state.show_list(store, "")?,
        MenuEntry::Search => state.open_search(),
        MenuEntry::Purge => state.open_purge_confirm(),
        MenuEntry::Add => state.open_add(),
        MenuEntry::Quit => {
            debug!("Received application exit request.");
            return Ok(false);
        }
    }
    Ok(true)
}

fn handle_list_key(key: KeyEvent, state: &mut State, store: &Store) -> Result<bool> {
    match key.code {
        KeyCode::Down => state.list_select_next(),
        KeyCode::Up => state.list_select_prev(),
        KeyCode::Esc => state.show_menu(store)?,
        KeyCode::Enter => match state.selected_record().cloned() {
            Some(record) => state.open_actions(record),
            // The trailing row is the menu item.
            None => state.show_menu(store)?,
        },
        KeyCode::Char(c) => {
            // Record shortcuts take precedence over the menu shortcut, so
            // a record named "make" keeps its own first-letter key.
            let record = state
                .records()
                .iter()
                .find(|record| record.shortcut() == Some(c))
                .cloned();
            if let Some(record) = record {
                state.open_actions(record);
            } else if c == 'm' {
                state.show_menu(store)?;
            }
        }
        _ => {}
    }
    Ok(true)
}

fn handle_actions_key(key: KeyEvent, state: &mut State, store: &Store) -> Result<bool> {
    let entry = match key.code {
        KeyCode::Down => {
            state.action_select_next();
            return Ok(true);
        }
        KeyCode::Up => {
            state.action_select_prev();
            return Ok(true);
        }
        KeyCode::Esc => {
            state.show_menu(store)?;
            return Ok(true);
        }
        KeyCode::Enter => state.selected_action(),
        KeyCode::Char(c) => ActionEntry::ALL
            .iter()
            .copied()
            .find(|action| action.shortcut() == c),
        _ => None,
    };
    match entry {
        Some(ActionEntry::Delete) => state.open_delete_confirm(),
        Some(ActionEntry::Edit) => state.open_edit(),
        Some(ActionEntry::GetPath) => {
            if let Some(record) = state.selected() {
                export_path(&record.path);
            }
            debug!("Received application exit request.");
            return Ok(false);
        }
        Some(ActionEntry::Menu) => state.show_menu(store)?,
        None => {}
    }
    Ok(true)
}

/// Best-effort copy of the path to the OS clipboard. Failure is logged
/// and otherwise ignored; the session ends either way so the user can
/// paste and run the command.
fn export_path(path: &str) {
    let context: std::result::Result<ClipboardContext, _> = ClipboardProvider::new();
    match context.and_then(|mut context| context.set_contents(path.to_string())) {
        Ok(()) => info!("Copied path to clipboard."),
        Err(e) => warn!("Failed to write clipboard: {}", e),
    }
}

fn handle_form_key(key: KeyEvent, state: &mut State, store: &Store) -> Result<bool> {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.form_insert_char(c)
        }
        KeyCode::Backspace => state.form_backspace(),
        KeyCode::Tab | KeyCode::Down => state.form_focus_next(),
        KeyCode::BackTab | KeyCode::Up => state.form_focus_prev(),
        KeyCode::Esc => state.show_menu(store)?,
        KeyCode::Enter => match state.form_focus() {
            FormField::Save => state.submit_form(store)?,
            FormField::Menu => state.show_menu(store)?,
            _ => state.form_focus_next(),
        },
        _ => {}
    }
    Ok(true)
}

fn handle_search_key(key: KeyEvent, state: &mut State, store: &Store) -> Result<bool> {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.search_insert_char(c)
        }
        KeyCode::Backspace => state.search_backspace(),
        KeyCode::Tab | KeyCode::Down => state.search_focus_next(),
        KeyCode::BackTab | KeyCode::Up => state.search_focus_prev(),
        KeyCode::Esc => state.show_menu(store)?,
        KeyCode::Enter => match state.search_focus() {
            SearchField::Query | SearchField::Search => state.submit_search(store)?,
            SearchField::Menu => state.show_menu(store)?,
        },
        _ => {}
    }
    Ok(true)
}

fn handle_notice_key(key: KeyEvent, state: &mut State) -> Result<bool> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => state.acknowledge_notice(),
        _ => {}
    }
    Ok(true)
}

fn handle_confirm_key(key: KeyEvent, state: &mut State, store: &Store) -> Result<bool> {
    match key.code {
        KeyCode::Left | KeyCode::Right | KeyCode::Tab => state.toggle_confirm_choice(),
        KeyCode::Esc => resolve_confirm(state, store, ConfirmChoice::Cancel)?,
        KeyCode::Enter => {
            let choice = state.confirm_choice();
            resolve_confirm(state, store, choice)?;
        }
        _ => {}
    }
    Ok(true)
}

fn resolve_confirm(state: &mut State, store: &Store, choice: ConfirmChoice) -> Result<()> {
    match state.current_page() {
        Page::PurgeConfirm => state.resolve_purge(store, choice)?,
        _ => state.resolve_delete(store, choice)?,
    }
    Ok(())
}
