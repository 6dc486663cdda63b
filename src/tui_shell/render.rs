use super::*;

/// Rows below the tree: a blank separator and the status line.
pub const RESERVED_ROWS: u16 = 2;

const INDENT: u16 = 3;

/// Tree rows available in a terminal `height` rows tall.
pub fn tree_height(height: u16) -> usize {
    height.saturating_sub(RESERVED_ROWS).max(1) as usize
}

/// Left margin in columns for a node at `depth`, saturating on deep trees.
fn indent_width(depth: usize) -> u16 {
    u16::try_from(depth)
        .unwrap_or(u16::MAX)
        .saturating_mul(INDENT)
}

pub(super) fn draw<R: Registry>(frame: &mut ratatui::Frame, browser: &Browser<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());
    let tree_area = chunks[0];

    for row in browser.visible_rows() {
        let y = tree_area.y + row.row as u16;
        if y >= tree_area.bottom() {
            break;
        }
        let indent = indent_width(row.node.depth()).min(tree_area.width);
        let area = Rect {
            x: tree_area.x + indent,
            y,
            width: tree_area.width - indent,
            height: 1,
        };

        let mut style = match row.node.kind() {
            NodeKind::Path => Style::default(),
            NodeKind::Tag => Style::default().fg(Color::Cyan),
        };
        if row.highlighted {
            style = style.add_modifier(Modifier::REVERSED);
        }
        frame.render_widget(
            Paragraph::new(Line::styled(row.node.name(), style)),
            area,
        );
    }

    frame.render_widget(Paragraph::new(browser.status()), chunks[2]);
}

#[cfg(test)]
#[path = "../tests/tui_shell/render_tests.rs"]
mod tests;
