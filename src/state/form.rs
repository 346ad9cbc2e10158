//! Form editing state types.
//!
//! The add/edit form mutates an in-memory draft on every keystroke and
//! only touches the record store at submit time.

use crate::store::Record;

/// In-memory draft of a record being added or edited.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub description: String,
    pub path: String,
}

impl Draft {
    pub fn from_record(record: &Record) -> Draft {
        Draft {
            name: record.name.clone(),
            description: record.description.clone(),
            path: record.path.clone(),
        }
    }

    /// Build a record for persistence. New drafts carry id zero, which
    /// the store ignores on create.
    pub fn to_record(&self, id: i64) -> Record {
        Record {
            id,
            name: self.name.clone(),
            description: self.description.clone(),
            path: self.path.clone(),
        }
    }

    /// Mutable handle on the text behind a form field; the two buttons
    /// carry no text.
    pub fn field_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Name => Some(&mut self.name),
            FormField::Description => Some(&mut self.description),
            FormField::Path => Some(&mut self.path),
            FormField::Save | FormField::Menu => None,
        }
    }

    pub fn field(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Name => Some(&self.name),
            FormField::Description => Some(&self.description),
            FormField::Path => Some(&self.path),
            FormField::Save | FormField::Menu => None,
        }
    }
}

/// Specifying add/edit form focus, including the trailing buttons.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FormField {
    Name,
    Description,
    Path,
    Save,
    Menu,
}

impl FormField {
    pub fn next(&self) -> FormField {
        match self {
            FormField::Name => FormField::Description,
            FormField::Description => FormField::Path,
            FormField::Path => FormField::Save,
            FormField::Save => FormField::Menu,
            FormField::Menu => FormField::Name,
        }
    }

    pub fn prev(&self) -> FormField {
        match self {
            FormField::Name => FormField::Menu,
            FormField::Description => FormField::Name,
            FormField::Path => FormField::Description,
            FormField::Save => FormField::Path,
            FormField::Menu => FormField::Save,
        }
    }
}

/// Specifying search form focus.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SearchField {
    Query,
    Search,
    Menu,
}

impl SearchField {
    pub fn next(&self) -> SearchField {
        match self {
            SearchField::Query => SearchField::Search,
            SearchField::Search => SearchField::Menu,
            SearchField::Menu => SearchField::Query,
        }
    }

    pub fn prev(&self) -> SearchField {
        match self {
            SearchField::Query => SearchField::Menu,
            SearchField::Search => SearchField::Query,
            SearchField::Menu => SearchField::Search,
        }
    }
}
