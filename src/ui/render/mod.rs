mod action_menu;
mod footer;
mod form;
mod menu;
mod modal;
mod record_list;
mod search;

use super::*;
use crate::state::{Page, State};
use footer::footer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Render the current page according to state. Modal pages draw over
/// the page beneath them on the stack.
///
pub fn render(frame: &mut Frame, state: &mut State) {
    let size = frame.size();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)].as_ref())
        .split(size);

    let page = state.current_page();
    let base = if page.is_modal() {
        state.page_under_modal()
    } else {
        page
    };
    surface(frame, rows[0], base, state);

    footer(frame, rows[1], page);

    match page {
        Page::ValidationNotice => modal::validation_notice(frame, size),
        Page::DeleteConfirm => modal::delete_confirm(frame, size, state),
        Page::PurgeConfirm => modal::purge_confirm(frame, size, state),
        _ => {}
    }
}

fn surface(frame: &mut Frame, size: Rect, page: Page, state: &mut State) {
    match page {
        Page::RecordList => record_list::record_list(frame, size, state),
        Page::ActionMenu => action_menu::action_menu(frame, size, state),
        Page::AddForm | Page::EditForm => form::form(frame, size, state),
        Page::SearchForm => search::search(frame, size, state),
        // Modal pages never sit beneath another modal; everything else
        // falls back to the menu.
        _ => menu::menu(frame, size, state),
    }
}
