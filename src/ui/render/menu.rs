use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

const BLOCK_TITLE: &str = "MAIN MENU";

/// Render the main menu according to state.
///
pub fn menu(frame: &mut Frame, size: Rect, state: &mut State) {
    let items: Vec<ListItem> = state
        .menu_entries()
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("({}) ", entry.shortcut()), styling::shortcut_style()),
                Span::raw(entry.label()),
            ]))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(BLOCK_TITLE)
        .border_style(styling::active_block_border_style());

    let list = List::new(items)
        .block(block)
        .highlight_style(styling::active_list_item_style())
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, size, state.menu_state());
}
