use super::Frame;
use crate::state::{ConfirmChoice, State};
use crate::ui::widgets::styling;
use crate::validate::MIN_FIELD_LEN;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Return a centered rect using up certain percentage of the available
/// rect.
///
fn centered_rect(percent_x: u16, percent_y: u16, size: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ]
            .as_ref(),
        )
        .split(size);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ]
            .as_ref(),
        )
        .split(popup_layout[1])[1]
}

fn confirm_buttons(choice: ConfirmChoice) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            " Delete ",
            if choice == ConfirmChoice::Delete {
                styling::active_button_style()
            } else {
                styling::normal_button_style()
            },
        ),
        Span::raw("   "),
        Span::styled(
            " Cancel ",
            if choice == ConfirmChoice::Cancel {
                styling::active_button_style()
            } else {
                styling::normal_button_style()
            },
        ),
    ])
}

fn confirm_dialog(frame: &mut Frame, size: Rect, message: String, choice: ConfirmChoice) {
    let popup_area = centered_rect(60, 25, size);
    frame.render_widget(Clear, popup_area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(message, styling::warning_style())),
        Line::from(""),
        confirm_buttons(choice),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styling::warning_style()),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, popup_area);
}

/// Render the single-record delete confirmation dialog.
///
pub fn delete_confirm(frame: &mut Frame, size: Rect, state: &State) {
    let name = state
        .selected()
        .map(|record| record.name.clone())
        .unwrap_or_default();
    confirm_dialog(
        frame,
        size,
        format!("Are you sure you want to delete the {name} command?"),
        state.confirm_choice(),
    );
}

/// Render the purge confirmation dialog.
///
pub fn purge_confirm(frame: &mut Frame, size: Rect, state: &State) {
    confirm_dialog(
        frame,
        size,
        "Are you sure you want to delete ALL the commands?".to_string(),
        state.confirm_choice(),
    );
}

/// Render the blocking validation notice shown when submitted fields
/// are too short.
///
pub fn validation_notice(frame: &mut Frame, size: Rect) {
    let popup_area = centered_rect(50, 20, size);
    frame.render_widget(Clear, popup_area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("All the fields require {MIN_FIELD_LEN}+ characters"),
            styling::warning_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(" OK ", styling::active_button_style())),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styling::warning_style()),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, popup_area);
}
