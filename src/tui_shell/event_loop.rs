use super::*;

/// Draws, then waits for the next terminal event, until a quit event.
/// `next_event` is `crossterm::event::read` outside tests.
pub(super) fn run_loop<B, R>(
    terminal: &mut Terminal<B>,
    browser: &mut Browser<R>,
    mut next_event: impl FnMut() -> io::Result<Event>,
) -> Result<()>
where
    B: Backend,
    R: Registry,
{
    loop {
        terminal
            .draw(|f| render::draw(f, browser))
            .context("draw")?;

        match next_event().context("read event")? {
            Event::Key(key) => {
                if let Some(ev) = input::nav_event(key)
                    && browser.handle(ev) == Flow::Quit
                {
                    return Ok(());
                }
            }
            Event::Resize(_, height) => browser.resize(tree_height(height)),
            _ => {}
        }
    }
}

pub(super) fn read_event() -> io::Result<Event> {
    event::read()
}

#[cfg(test)]
#[path = "../tests/tui_shell/event_loop_tests.rs"]
mod tests;
