//! Navigation-related state types.
//!
//! This module contains the page enum driving the navigation state
//! machine and the data-carrying command values dispatched for menu and
//! action list items.

/// Specifying the different pages.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Page {
    Menu,
    RecordList,
    ActionMenu,
    AddForm,
    EditForm,
    SearchForm,
    ValidationNotice,
    DeleteConfirm,
    PurgeConfirm,
}

impl Page {
    /// True for pages drawn as a dialog over the page beneath them on
    /// the stack.
    pub fn is_modal(&self) -> bool {
        matches!(
            self,
            Page::ValidationNotice | Page::DeleteConfirm | Page::PurgeConfirm
        )
    }
}

/// Main menu items. Which of them appear is re-derived from the store on
/// every entry to the menu; the record-dependent ones vanish entirely
/// while the collection is empty.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MenuEntry {
    ViewAll,
    Search,
    Purge,
    Add,
    Quit,
}

impl MenuEntry {
    pub fn label(&self) -> &'static str {
        match self {
            MenuEntry::ViewAll => "View all commands",
            MenuEntry::Search => "Search for commands",
            MenuEntry::Purge => "Purge database",
            MenuEntry::Add => "Add a new command",
            MenuEntry::Quit => "Quit program",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            MenuEntry::ViewAll => 'v',
            MenuEntry::Search => 's',
            MenuEntry::Purge => 'p',
            MenuEntry::Add => 'a',
            MenuEntry::Quit => 'q',
        }
    }
}

/// Actions offered for a selected record.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ActionEntry {
    Delete,
    Edit,
    GetPath,
    Menu,
}

impl ActionEntry {
    pub const ALL: [ActionEntry; 4] = [
        ActionEntry::Delete,
        ActionEntry::Edit,
        ActionEntry::GetPath,
        ActionEntry::Menu,
    ];

    pub fn shortcut(&self) -> char {
        match self {
            ActionEntry::Delete => 'd',
            ActionEntry::Edit => 'e',
            ActionEntry::GetPath => 'g',
            ActionEntry::Menu => 'm',
        }
    }
}

/// The two buttons offered by a confirmation dialog.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ConfirmChoice {
    Delete,
    Cancel,
}

impl ConfirmChoice {
    pub fn toggled(&self) -> ConfirmChoice {
        match self {
            ConfirmChoice::Delete => ConfirmChoice::Cancel,
            ConfirmChoice::Cancel => ConfirmChoice::Delete,
        }
    }
}
