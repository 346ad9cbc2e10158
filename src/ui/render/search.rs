use super::Frame;
use crate::state::{SearchField, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const BLOCK_TITLE: &str = "SEARCH FOR A COMMAND BY NAME OR DESCRIPTION";

/// Render the search form according to state.
///
pub fn search(frame: &mut Frame, size: Rect, state: &mut State) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(BLOCK_TITLE)
        .border_style(styling::active_block_border_style());
    frame.render_widget(block, size);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ]
            .as_ref(),
        )
        .margin(2)
        .split(size);

    let focus = state.search_focus();
    let query = state.search_input().to_string();
    let query_block = Block::default()
        .borders(Borders::ALL)
        .title("Name/Description")
        .border_style(if focus == SearchField::Query {
            styling::active_block_border_style()
        } else {
            styling::normal_block_border_style()
        });
    frame.render_widget(Paragraph::new(query.clone()).block(query_block), chunks[0]);
    if focus == SearchField::Query {
        frame.set_cursor(chunks[0].x + 1 + query.len() as u16, chunks[0].y + 1);
    }

    let buttons = Line::from(vec![
        Span::styled(
            " SEARCH ",
            if focus == SearchField::Search {
                styling::active_button_style()
            } else {
                styling::normal_button_style()
            },
        ),
        Span::raw("  "),
        Span::styled(
            " MENU ",
            if focus == SearchField::Menu {
                styling::active_button_style()
            } else {
                styling::normal_button_style()
            },
        ),
    ]);
    frame.render_widget(Paragraph::new(buttons), chunks[1]);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "If no results are found, you'll be back to the menu",
            styling::muted_text_style(),
        )),
        chunks[2],
    );
}
