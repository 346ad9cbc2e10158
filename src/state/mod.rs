//! Application state management module.
//!
//! Houses the navigation state machine: the page stack, the transient
//! record copies the pages display, and the transition methods wiring
//! user actions to store and validation calls. The store is passed into
//! each transition explicitly so tests can drive the machine against an
//! in-memory store.

mod form;
mod navigation;

pub use form::{Draft, FormField, SearchField};
pub use navigation::{ActionEntry, ConfirmChoice, MenuEntry, Page};

use crate::store::{Record, Store, StoreError};
use crate::validate;
use log::*;
use ratatui::widgets::ListState;

/// Houses data representative of application state.
///
/// The record copies held here are transient: the listing is re-fetched
/// from the store before every display, and the selected record only
/// lives as long as the action/confirm pages built from it.
pub struct State {
    page_stack: Vec<Page>,
    menu_entries: Vec<MenuEntry>,
    menu_state: ListState,
    records: Vec<Record>,
    list_state: ListState,
    list_filter: String,
    selected: Option<Record>,
    action_state: ListState,
    draft: Draft,
    edit_id: Option<i64>,
    form_focus: FormField,
    search_input: String,
    search_focus: SearchField,
    confirm_choice: ConfirmChoice,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            page_stack: vec![Page::Menu],
            menu_entries: vec![],
            menu_state: ListState::default(),
            records: vec![],
            list_state: ListState::default(),
            list_filter: String::new(),
            selected: None,
            action_state: ListState::default(),
            draft: Draft::default(),
            edit_id: None,
            form_focus: FormField::Name,
            search_input: String::new(),
            search_focus: SearchField::Query,
            confirm_choice: ConfirmChoice::Delete,
        }
    }
}

impl State {
    pub fn new() -> State {
        State::default()
    }

    pub fn current_page(&self) -> Page {
        self.page_stack.last().copied().unwrap_or(Page::Menu)
    }

    /// Page beneath the current one, used when rendering modal pages
    /// over the surface they interrupted.
    pub fn page_under_modal(&self) -> Page {
        let len = self.page_stack.len();
        if len >= 2 {
            self.page_stack[len - 2]
        } else {
            Page::Menu
        }
    }

    /// Rebuild the menu from the store and make it the only page on the
    /// stack. Every return to the menu re-derives the item set, so the
    /// record-dependent entries disappear as soon as the store empties.
    pub fn show_menu(&mut self, store: &Store) -> Result<(), StoreError> {
        let mut entries = Vec::new();
        if store.has_records()? {
            entries.push(MenuEntry::ViewAll);
            entries.push(MenuEntry::Search);
            entries.push(MenuEntry::Purge);
        }
        entries.push(MenuEntry::Add);
        entries.push(MenuEntry::Quit);

        self.menu_entries = entries;
        self.menu_state = ListState::default().with_selected(Some(0));
        self.page_stack = vec![Page::Menu];
        self.records.clear();
        self.selected = None;
        Ok(())
    }

    /// Fetch records matching the filter and show the list page. An
    /// empty result set falls straight back to the menu instead of
    /// showing an empty list.
    pub fn show_list(&mut self, store: &Store, filter: &str) -> Result<(), StoreError> {
        let records = store.list(filter)?;
        if records.is_empty() {
            debug!("No records matched '{}', returning to menu", filter);
            return self.show_menu(store);
        }
        self.records = records;
        self.list_filter = filter.to_string();
        self.list_state = ListState::default().with_selected(Some(0));
        self.page_stack.push(Page::RecordList);
        Ok(())
    }

    pub fn open_search(&mut self) {
        self.search_input.clear();
        self.search_focus = SearchField::Query;
        self.page_stack.push(Page::SearchForm);
    }

    pub fn submit_search(&mut self, store: &Store) -> Result<(), StoreError> {
        let query = self.search_input.clone();
        self.show_list(store, &query)
    }

    pub fn open_add(&mut self) {
        self.draft = Draft::default();
        self.edit_id = None;
        self.form_focus = FormField::Name;
        self.page_stack.push(Page::AddForm);
    }

    /// Open the edit form pre-filled with the selected record.
    pub fn open_edit(&mut self) {
        if let Some(record) = &self.selected {
            self.draft = Draft::from_record(record);
            self.edit_id = Some(record.id);
            self.form_focus = FormField::Name;
            self.page_stack.push(Page::EditForm);
        }
    }

    pub fn open_actions(&mut self, record: Record) {
        self.selected = Some(record);
        self.action_state = ListState::default().with_selected(Some(0));
        self.page_stack.push(Page::ActionMenu);
    }

    pub fn open_delete_confirm(&mut self) {
        self.confirm_choice = ConfirmChoice::Delete;
        self.page_stack.push(Page::DeleteConfirm);
    }

    pub fn open_purge_confirm(&mut self) {
        self.confirm_choice = ConfirmChoice::Delete;
        self.page_stack.push(Page::PurgeConfirm);
    }

    /// Persist the draft. An invalid draft pushes the blocking notice
    /// page instead; the draft is kept so the form comes back intact.
    pub fn submit_form(&mut self, store: &Store) -> Result<(), StoreError> {
        let record = self.draft.to_record(self.edit_id.unwrap_or(0));
        if !validate::is_valid(&record) {
            debug!("Rejected draft below minimum field length");
            self.page_stack.push(Page::ValidationNotice);
            return Ok(());
        }
        match self.edit_id {
            Some(_) => store.update(&record)?,
            None => store.create(&record)?,
        }
        self.show_menu(store)
    }

    /// Dismiss the validation notice, returning focus to the form it
    /// interrupted.
    pub fn acknowledge_notice(&mut self) {
        if self.current_page() == Page::ValidationNotice {
            self.page_stack.pop();
            self.form_focus = FormField::Name;
        }
    }

    /// Resolve the single-record delete confirmation, then return to the
    /// menu either way.
    pub fn resolve_delete(&mut self, store: &Store, choice: ConfirmChoice) -> Result<(), StoreError> {
        if choice == ConfirmChoice::Delete {
            if let Some(record) = &self.selected {
                store.delete_one(record.id)?;
            }
        }
        self.show_menu(store)
    }

    /// Resolve the purge confirmation, then return to the menu either
    /// way.
    pub fn resolve_purge(&mut self, store: &Store, choice: ConfirmChoice) -> Result<(), StoreError> {
        if choice == ConfirmChoice::Delete {
            store.delete_all()?;
        }
        self.show_menu(store)
    }

    // Menu accessors.

    pub fn menu_entries(&self) -> &[MenuEntry] {
        &self.menu_entries
    }

    pub fn menu_state(&mut self) -> &mut ListState {
        &mut self.menu_state
    }

    pub fn menu_select_next(&mut self) {
        cycle_selection(&mut self.menu_state, self.menu_entries.len(), true);
    }

    pub fn menu_select_prev(&mut self) {
        cycle_selection(&mut self.menu_state, self.menu_entries.len(), false);
    }

    pub fn selected_menu_entry(&self) -> Option<MenuEntry> {
        self.menu_state
            .selected()
            .and_then(|index| self.menu_entries.get(index))
            .copied()
    }

    // Record list accessors. The rendered list carries one trailing
    // "Menu" row past the records.

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn list_filter(&self) -> &str {
        &self.list_filter
    }

    pub fn list_state(&mut self) -> &mut ListState {
        &mut self.list_state
    }

    pub fn list_select_next(&mut self) {
        cycle_selection(&mut self.list_state, self.records.len() + 1, true);
    }

    pub fn list_select_prev(&mut self) {
        cycle_selection(&mut self.list_state, self.records.len() + 1, false);
    }

    /// Record under the cursor, or None on the trailing menu row.
    pub fn selected_record(&self) -> Option<&Record> {
        self.list_state
            .selected()
            .and_then(|index| self.records.get(index))
    }

    // Action menu accessors.

    pub fn selected(&self) -> Option<&Record> {
        self.selected.as_ref()
    }

    pub fn action_state(&mut self) -> &mut ListState {
        &mut self.action_state
    }

    pub fn action_select_next(&mut self) {
        cycle_selection(&mut self.action_state, ActionEntry::ALL.len(), true);
    }

    pub fn action_select_prev(&mut self) {
        cycle_selection(&mut self.action_state, ActionEntry::ALL.len(), false);
    }

    pub fn selected_action(&self) -> Option<ActionEntry> {
        self.action_state
            .selected()
            .and_then(|index| ActionEntry::ALL.get(index))
            .copied()
    }

    // Form accessors.

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn is_edit_form(&self) -> bool {
        self.edit_id.is_some()
    }

    pub fn form_focus(&self) -> FormField {
        self.form_focus
    }

    pub fn form_focus_next(&mut self) {
        self.form_focus = self.form_focus.next();
    }

    pub fn form_focus_prev(&mut self) {
        self.form_focus = self.form_focus.prev();
    }

    pub fn form_insert_char(&mut self, c: char) {
        if let Some(field) = self.draft.field_mut(self.form_focus) {
            field.push(c);
        }
    }

    pub fn form_backspace(&mut self) {
        if let Some(field) = self.draft.field_mut(self.form_focus) {
            field.pop();
        }
    }

    // Search form accessors.

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn search_focus(&self) -> SearchField {
        self.search_focus
    }

    pub fn search_focus_next(&mut self) {
        self.search_focus = self.search_focus.next();
    }

    pub fn search_focus_prev(&mut self) {
        self.search_focus = self.search_focus.prev();
    }

    pub fn search_insert_char(&mut self, c: char) {
        if self.search_focus == SearchField::Query {
            self.search_input.push(c);
        }
    }

    pub fn search_backspace(&mut self) {
        if self.search_focus == SearchField::Query {
            self.search_input.pop();
        }
    }

    // Confirmation accessors.

    pub fn confirm_choice(&self) -> ConfirmChoice {
        self.confirm_choice
    }

    pub fn toggle_confirm_choice(&mut self) {
        self.confirm_choice = self.confirm_choice.toggled();
    }
}

fn cycle_selection(state: &mut ListState, len: usize, forward: bool) {
    if len == 0 {
        return;
    }
    let current = state.selected().unwrap_or(0);
    let next = if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    };
    state.select(Some(next));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(entries: &[(&str, &str, &str)]) -> Store {
        let store = Store::open_in_memory().unwrap();
        for (name, description, path) in entries {
            store
                .create(&Record {
                    id: 0,
                    name: name.to_string(),
                    description: description.to_string(),
                    path: path.to_string(),
                })
                .unwrap();
        }
        store
    }

    fn type_into(state: &mut State, field: FormField, text: &str) {
        while state.form_focus() != field {
            state.form_focus_next();
        }
        for c in text.chars() {
            state.form_insert_char(c);
        }
    }

    #[test]
    fn test_empty_store_menu_shows_only_add_and_quit() {
        let store = store_with(&[]);
        let mut state = State::new();
        state.show_menu(&store).unwrap();
        assert_eq!(state.menu_entries(), &[MenuEntry::Add, MenuEntry::Quit]);
        assert_eq!(state.current_page(), Page::Menu);
    }

    #[test]
    fn test_non_empty_store_menu_shows_all_entries() {
        let store = store_with(&[("alpha", "first entry", "/bin/alpha")]);
        let mut state = State::new();
        state.show_menu(&store).unwrap();
        assert_eq!(
            state.menu_entries(),
            &[
                MenuEntry::ViewAll,
                MenuEntry::Search,
                MenuEntry::Purge,
                MenuEntry::Add,
                MenuEntry::Quit,
            ]
        );
    }

    #[test]
    fn test_add_rejected_then_corrected() {
        let store = store_with(&[]);
        let mut state = State::new();
        state.show_menu(&store).unwrap();

        state.open_add();
        assert_eq!(state.current_page(), Page::AddForm);
        type_into(&mut state, FormField::Name, "ls");
        type_into(&mut state, FormField::Description, "list files");
        type_into(&mut state, FormField::Path, "/bin/ls");

        // Name is below the three-character minimum: rejected, notice
        // shown, draft retained.
        state.submit_form(&store).unwrap();
        assert_eq!(state.current_page(), Page::ValidationNotice);
        assert!(!store.has_records().unwrap());

        state.acknowledge_notice();
        assert_eq!(state.current_page(), Page::AddForm);
        assert_eq!(state.draft().name, "ls");
        assert_eq!(state.draft().description, "list files");

        type_into(&mut state, FormField::Name, "s");
        state.submit_form(&store).unwrap();
        assert_eq!(state.current_page(), Page::Menu);

        let all = store.list("").unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "lss");
        assert_eq!(all[0].path, "/bin/ls");
    }

    #[test]
    fn test_edit_rewrites_selected_record() {
        let store = store_with(&[("alpha", "first entry", "/bin/alpha")]);
        let mut state = State::new();
        state.show_menu(&store).unwrap();
        state.show_list(&store, "").unwrap();

        let record = state.selected_record().unwrap().clone();
        state.open_actions(record.clone());
        state.open_edit();
        assert_eq!(state.current_page(), Page::EditForm);
        assert_eq!(state.draft().name, "alpha");

        type_into(&mut state, FormField::Path, "2");
        state.submit_form(&store).unwrap();
        assert_eq!(state.current_page(), Page::Menu);

        let all = store.list("").unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, record.id);
        assert_eq!(all[0].path, "/bin/alpha2");
    }

    #[test]
    fn test_search_filters_and_empty_result_returns_to_menu() {
        let store = store_with(&[
            ("alpha", "first entry", "/bin/alpha"),
            ("beta", "second entry", "/bin/beta"),
        ]);
        let mut state = State::new();
        state.show_menu(&store).unwrap();

        state.open_search();
        for c in "al".chars() {
            state.search_insert_char(c);
        }
        state.submit_search(&store).unwrap();
        assert_eq!(state.current_page(), Page::RecordList);
        assert_eq!(state.records().len(), 1);
        assert_eq!(state.records()[0].name, "alpha");
        assert_eq!(state.list_filter(), "al");

        // A search with no matches silently redirects to the menu.
        state.show_menu(&store).unwrap();
        state.open_search();
        for c in "zzz".chars() {
            state.search_insert_char(c);
        }
        state.submit_search(&store).unwrap();
        assert_eq!(state.current_page(), Page::Menu);
    }

    #[test]
    fn test_delete_confirm_and_cancel() {
        let store = store_with(&[
            ("alpha", "first entry", "/bin/alpha"),
            ("beta", "second entry", "/bin/beta"),
        ]);
        let mut state = State::new();
        state.show_menu(&store).unwrap();
        state.show_list(&store, "").unwrap();
        let record = state.selected_record().unwrap().clone();
        state.open_actions(record.clone());

        state.open_delete_confirm();
        assert_eq!(state.current_page(), Page::DeleteConfirm);
        assert_eq!(state.page_under_modal(), Page::ActionMenu);
        state.resolve_delete(&store, ConfirmChoice::Cancel).unwrap();
        assert_eq!(state.current_page(), Page::Menu);
        assert_eq!(store.list("").unwrap().len(), 2);

        state.show_list(&store, "").unwrap();
        state.open_actions(record.clone());
        state.open_delete_confirm();
        state.resolve_delete(&store, ConfirmChoice::Delete).unwrap();
        assert_eq!(state.current_page(), Page::Menu);
        let remaining = store.list("").unwrap();
        assert_eq!(remaining.len(), 1);
        assert_ne!(remaining[0].id, record.id);
    }

    #[test]
    fn test_delete_of_absent_id_is_silent() {
        let store = store_with(&[("alpha", "first entry", "/bin/alpha")]);
        let mut state = State::new();
        state.show_menu(&store).unwrap();

        let ghost = Record {
            id: 9999,
            name: "ghost".to_string(),
            description: "not stored".to_string(),
            path: "/bin/ghost".to_string(),
        };
        state.open_actions(ghost);
        state.open_delete_confirm();
        state.resolve_delete(&store, ConfirmChoice::Delete).unwrap();
        assert_eq!(state.current_page(), Page::Menu);
        assert_eq!(store.list("").unwrap().len(), 1);
    }

    #[test]
    fn test_purge_empties_store_and_shrinks_menu() {
        let store = store_with(&[
            ("alpha", "first entry", "/bin/alpha"),
            ("beta", "second entry", "/bin/beta"),
        ]);
        let mut state = State::new();
        state.show_menu(&store).unwrap();

        state.open_purge_confirm();
        assert_eq!(state.current_page(), Page::PurgeConfirm);
        state.resolve_purge(&store, ConfirmChoice::Delete).unwrap();

        assert!(!store.has_records().unwrap());
        assert_eq!(state.menu_entries(), &[MenuEntry::Add, MenuEntry::Quit]);
    }

    #[test]
    fn test_purge_cancel_keeps_records() {
        let store = store_with(&[("alpha", "first entry", "/bin/alpha")]);
        let mut state = State::new();
        state.show_menu(&store).unwrap();
        state.open_purge_confirm();
        state.resolve_purge(&store, ConfirmChoice::Cancel).unwrap();
        assert!(store.has_records().unwrap());
        assert_eq!(state.current_page(), Page::Menu);
    }

    #[test]
    fn test_list_trailing_menu_row_selects_no_record() {
        let store = store_with(&[("alpha", "first entry", "/bin/alpha")]);
        let mut state = State::new();
        state.show_menu(&store).unwrap();
        state.show_list(&store, "").unwrap();

        assert!(state.selected_record().is_some());
        state.list_select_next();
        assert!(state.selected_record().is_none());
        state.list_select_next();
        assert_eq!(state.selected_record().map(|r| r.name.as_str()), Some("alpha"));
    }

    #[test]
    fn test_listing_is_refetched_not_cached() {
        let store = store_with(&[("alpha", "first entry", "/bin/alpha")]);
        let mut state = State::new();
        state.show_menu(&store).unwrap();
        state.show_list(&store, "").unwrap();
        assert_eq!(state.records().len(), 1);

        store
            .create(&Record {
                id: 0,
                name: "beta".to_string(),
                description: "second entry".to_string(),
                path: "/bin/beta".to_string(),
            })
            .unwrap();

        state.show_menu(&store).unwrap();
        assert!(state.records().is_empty());
        state.show_list(&store, "").unwrap();
        assert_eq!(state.records().len(), 2);
    }
}
