use super::Frame;
use crate::state::Page;
use crate::ui::widgets::styling;
use ratatui::{layout::Rect, widgets::Paragraph};

/// Render the one-line key hints for the current page.
///
pub fn footer(frame: &mut Frame, size: Rect, page: Page) {
    let hints = match page {
        Page::Menu => " ↑/↓: move | Enter: select | (key): shortcut | q: quit",
        Page::RecordList => " ↑/↓: move | Enter: pick | (key): shortcut | m: menu",
        Page::ActionMenu => " d: delete | e: edit | g: get path | m: menu",
        Page::AddForm | Page::EditForm => {
            " Tab/↑/↓: field | Enter: next/activate | Esc: menu"
        }
        Page::SearchForm => " Tab/↑/↓: field | Enter: search | Esc: menu",
        Page::ValidationNotice => " Enter: ok",
        Page::DeleteConfirm | Page::PurgeConfirm => {
            " ←/→: choose | Enter: confirm | Esc: cancel"
        }
    };
    frame.render_widget(
        Paragraph::new(hints).style(styling::muted_text_style()),
        size,
    );
}
