use macroquad::prelude::*;
use crate::application::Session;
use crate::domain::AutomatonKind;

/// Number keys in menu order: 1 selects the first kind, 0 the tenth
const KIND_KEYS: [KeyCode; 10] = [
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::Key6,
    KeyCode::Key7,
    KeyCode::Key8,
    KeyCode::Key9,
    KeyCode::Key0,
];

/// Top letter row, one key per rule slot
const RULE_KEYS: [KeyCode; 8] = [
    KeyCode::Q,
    KeyCode::W,
    KeyCode::E,
    KeyCode::R,
    KeyCode::T,
    KeyCode::Y,
    KeyCode::U,
    KeyCode::I,
];

/// Process keyboard input functionally
pub fn process_keyboard_input(session: Session) -> Session {
    type KeyAction = (KeyCode, fn(Session) -> Session);

    let actions: [KeyAction; 15] = [
        (KeyCode::Space, Session::toggle_running),
        (KeyCode::Enter, Session::restart),
        (KeyCode::N, Session::toggle_neighborhood),
        (KeyCode::D, Session::reset_boolean_rules),
        (KeyCode::S, Session::next_initial_state),
        (KeyCode::P, Session::next_seed),
        (KeyCode::B, Session::toggle_shown_buffer),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
        (KeyCode::Right, |s| s.adjust_brush(1)),
        (KeyCode::Left, |s| s.adjust_brush(-1)),
        (KeyCode::Equal, |s| s.adjust_density(5)),
        (KeyCode::Minus, |s| s.adjust_density(-5)),
        (KeyCode::RightBracket, |s| s.adjust_num_states(1)),
        (KeyCode::LeftBracket, |s| s.adjust_num_states(-1)),
    ];

    let session = actions.iter().fold(session, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    });

    let session = RULE_KEYS
        .iter()
        .enumerate()
        .fold(session, |s, (index, key)| {
            if is_key_pressed(*key) { s.toggle_rule_slot(index) } else { s }
        });

    KIND_KEYS
        .iter()
        .zip(AutomatonKind::all())
        .fold(session, |s, (key, kind)| {
            if is_key_pressed(*key) { s.select_kind(kind) } else { s }
        })
}
