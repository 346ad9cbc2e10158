use super::Frame;
use crate::state::{FormField, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const FIELDS: [(FormField, &str); 3] = [
    (FormField::Name, "Name"),
    (FormField::Description, "Description"),
    (FormField::Path, "Path"),
];

/// Render the add/edit form according to state: three labeled text
/// fields and the SAVE/MENU buttons.
///
pub fn form(frame: &mut Frame, size: Rect, state: &mut State) {
    let title = if state.is_edit_form() {
        let name = state
            .selected()
            .map(|record| record.name.clone())
            .unwrap_or_default();
        format!("EDIT {name}")
    } else {
        "ADD A NEW COMMAND".to_string()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(styling::active_block_border_style());
    frame.render_widget(block, size);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
            ]
            .as_ref(),
        )
        .margin(2)
        .split(size);

    let focus = state.form_focus();
    for (index, (field, label)) in FIELDS.iter().enumerate() {
        let active = focus == *field;
        let text = state.draft().field(*field).unwrap_or_default().to_string();
        let field_block = Block::default()
            .borders(Borders::ALL)
            .title(*label)
            .border_style(if active {
                styling::active_block_border_style()
            } else {
                styling::normal_block_border_style()
            });
        frame.render_widget(
            Paragraph::new(text.clone()).block(field_block),
            chunks[index],
        );
        if active {
            frame.set_cursor(
                chunks[index].x + 1 + text.len() as u16,
                chunks[index].y + 1,
            );
        }
    }

    let buttons = Line::from(vec![
        Span::styled(
            " SAVE ",
            if focus == FormField::Save {
                styling::active_button_style()
            } else {
                styling::normal_button_style()
            },
        ),
        Span::raw("  "),
        Span::styled(
            " MENU ",
            if focus == FormField::Menu {
                styling::active_button_style()
            } else {
                styling::normal_button_style()
            },
        ),
    ]);
    frame.render_widget(Paragraph::new(buttons), chunks[3]);
}
