use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Quit,
    SpeedUp,
    SpeedDown,
    Resize,
}

pub(crate) fn map_event(ev: &Event) -> Option<Command> {
    match ev {
        Event::Key(k) if k.kind != KeyEventKind::Release => map_key(k),
        Event::Resize(..) => Some(Command::Resize),
        _ => None,
    }
}

fn map_key(k: &KeyEvent) -> Option<Command> {
    // raw mode swallows SIGINT, so ctrl+c shows up here as a key
    if k.code == KeyCode::Char('c') && k.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Command::Quit);
    }
    match k.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        KeyCode::Up | KeyCode::Char('+') => Some(Command::SpeedUp),
        KeyCode::Down | KeyCode::Char('-') => Some(Command::SpeedDown),
        _ => None,
    }
}
