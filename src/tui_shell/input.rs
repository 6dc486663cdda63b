use super::*;

/// Maps a key press onto a navigation event; `None` for keys with no
/// binding.
pub(super) fn nav_event(key: KeyEvent) -> Option<NavEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Down => Some(NavEvent::Down),
        KeyCode::Up => Some(NavEvent::Up),
        KeyCode::Right => Some(NavEvent::Expand),
        KeyCode::Left => Some(NavEvent::Collapse),
        KeyCode::Enter => Some(NavEvent::Activate),
        KeyCode::Esc => Some(NavEvent::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(NavEvent::Quit)
        }
        KeyCode::Char(c)
            if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                && (c.is_ascii_lowercase() || c.is_ascii_digit()) =>
        {
            Some(NavEvent::Char(c))
        }
        _ => None,
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/input_tests.rs"]
mod tests;
