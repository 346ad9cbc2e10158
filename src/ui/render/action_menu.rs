use super::Frame;
use crate::state::{ActionEntry, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

fn entry_lines(entry: ActionEntry, name: &str) -> Vec<Line<'static>> {
    let label = match entry {
        ActionEntry::Delete => "Delete".to_string(),
        ActionEntry::Edit => "Edit".to_string(),
        ActionEntry::GetPath => format!("Get path for {name} to your clipboard"),
        ActionEntry::Menu => "Menu".to_string(),
    };
    let mut lines = vec![Line::from(vec![
        Span::styled(format!("({}) ", entry.shortcut()), styling::shortcut_style()),
        Span::raw(label),
    ])];
    if entry == ActionEntry::GetPath {
        lines.push(Line::from(Span::styled(
            "    This will exit the program. Then you may use (Ctrl + v) to run the command",
            styling::muted_text_style(),
        )));
    }
    lines
}

/// Render the per-record action menu according to state.
///
pub fn action_menu(frame: &mut Frame, size: Rect, state: &mut State) {
    let name = state
        .selected()
        .map(|record| record.name.clone())
        .unwrap_or_default();

    let items: Vec<ListItem> = ActionEntry::ALL
        .iter()
        .map(|entry| ListItem::new(entry_lines(*entry, &name)))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("PICK AN ACTION FOR {name}"))
        .border_style(styling::active_block_border_style());

    let list = List::new(items)
        .block(block)
        .highlight_style(styling::active_list_item_style())
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, size, state.action_state());
}
