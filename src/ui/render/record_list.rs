use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Render the record list according to state, one row per record plus a
/// trailing menu row.
///
pub fn record_list(frame: &mut Frame, size: Rect, state: &mut State) {
    let title = if state.list_filter().is_empty() {
        format!("ALL COMMANDS: {}", state.records().len())
    } else {
        format!(
            "ALL COMMANDS containing {}: {}",
            state.list_filter(),
            state.records().len()
        )
    };

    let mut items: Vec<ListItem> = state
        .records()
        .iter()
        .map(|record| {
            let shortcut = match record.shortcut() {
                Some(c) => format!("({c}) "),
                None => "    ".to_string(),
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(shortcut, styling::shortcut_style()),
                    Span::raw(record.name.clone()),
                ]),
                Line::from(Span::styled(
                    format!("    {}", record.description),
                    styling::muted_text_style(),
                )),
            ])
        })
        .collect();
    items.push(ListItem::new(Line::from(vec![
        Span::styled("(m) ", styling::shortcut_style()),
        Span::raw("Menu"),
    ])));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(styling::active_block_border_style());

    let list = List::new(items)
        .block(block)
        .highlight_style(styling::active_list_item_style())
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, size, state.list_state());
}
