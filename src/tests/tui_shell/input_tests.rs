use super::*;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn arrows_and_enter_map_to_navigation() {
    assert_eq!(nav_event(press(KeyCode::Down)), Some(NavEvent::Down));
    assert_eq!(nav_event(press(KeyCode::Up)), Some(NavEvent::Up));
    assert_eq!(nav_event(press(KeyCode::Right)), Some(NavEvent::Expand));
    assert_eq!(nav_event(press(KeyCode::Left)), Some(NavEvent::Collapse));
    assert_eq!(nav_event(press(KeyCode::Enter)), Some(NavEvent::Activate));
}

#[test]
fn escape_and_ctrl_c_quit() {
    assert_eq!(nav_event(press(KeyCode::Esc)), Some(NavEvent::Quit));
    assert_eq!(
        nav_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Some(NavEvent::Quit)
    );
}

#[test]
fn lowercase_letters_and_digits_jump() {
    assert_eq!(nav_event(press(KeyCode::Char('q'))), Some(NavEvent::Char('q')));
    assert_eq!(nav_event(press(KeyCode::Char('7'))), Some(NavEvent::Char('7')));
    assert_eq!(nav_event(press(KeyCode::Char('A'))), None);
    assert_eq!(nav_event(press(KeyCode::Char('-'))), None);
    assert_eq!(
        nav_event(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT)),
        None
    );
}

#[test]
fn releases_are_ignored() {
    let mut key = press(KeyCode::Down);
    key.kind = KeyEventKind::Release;
    assert_eq!(nav_event(key), None);
}
