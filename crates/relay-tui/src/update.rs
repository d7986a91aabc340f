//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! This is the single source of truth for how events modify state.

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::home::HomeScreen;
use crate::features::login;
use crate::state::{AppState, Screen};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            if let Screen::Login(screen) = &mut app.screen {
                screen.expire_status();
            }
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::LoginResult { username, result } => {
            match &mut app.screen {
                Screen::Login(screen) => {
                    if let Some(session) = login::handle_result(screen, &username, result) {
                        // Replace the screen outright: the login state is
                        // dropped and there is no way back.
                        app.screen = Screen::Home(HomeScreen::new(session));
                    }
                }
                // Completion arrived after navigation; nothing to update.
                Screen::Home(_) => {}
            }
            vec![]
        }
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => {
            // Ctrl+C quits from anywhere
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                return vec![UiEffect::Quit];
            }

            match &mut app.screen {
                Screen::Login(screen) => login::handle_key(screen, key),
                Screen::Home(_) => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => vec![UiEffect::Quit],
                    _ => vec![],
                },
            }
        }
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crossterm::event::{KeyEvent, KeyEventState};
    use relay_core::client::LoginOutcome;
    use relay_core::config::Config;
    use relay_core::prefs::LoginPrefs;

    use super::*;
    use crate::common::StatusMessage;
    use crate::features::login::{LoginField, MSG_CANNOT_CONNECT, MSG_INVALID_LOGIN};

    fn app_with_prefs(prefs: &LoginPrefs) -> AppState {
        AppState::new(Config::default(), prefs)
    }

    fn app() -> AppState {
        app_with_prefs(&LoginPrefs::default())
    }

    fn key(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }))
    }

    fn login_result(username: &str, result: Result<LoginOutcome, String>) -> UiEvent {
        UiEvent::LoginResult {
            username: username.to_string(),
            result,
        }
    }

    fn type_str(app: &mut AppState, text: &str) {
        for ch in text.chars() {
            update(app, key(KeyCode::Char(ch)));
        }
    }

    fn login_screen(app: &AppState) -> &crate::features::login::LoginScreen {
        match &app.screen {
            Screen::Login(screen) => screen,
            Screen::Home(_) => panic!("expected login screen"),
        }
    }

    #[test]
    fn test_remembered_prefs_prepopulate_fields() {
        let prefs = LoginPrefs {
            save_login: true,
            username: "alice".to_string(),
            password: "p1".to_string(),
            ..Default::default()
        };
        let app = app_with_prefs(&prefs);

        let screen = login_screen(&app);
        assert_eq!(screen.username.value(), "alice");
        assert_eq!(screen.password.value(), "p1");
        assert!(screen.remember);
    }

    #[test]
    fn test_forgotten_prefs_start_blank() {
        let prefs = LoginPrefs {
            save_login: false,
            username: "stale".to_string(),
            password: "stale".to_string(),
            ..Default::default()
        };
        let app = app_with_prefs(&prefs);

        let screen = login_screen(&app);
        assert_eq!(screen.username.value(), "");
        assert_eq!(screen.password.value(), "");
        assert!(!screen.remember);
    }

    #[test]
    fn test_submit_persists_then_sends() {
        let mut app = app();
        type_str(&mut app, "alice");
        update(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "p1");

        let effects = update(&mut app, key(KeyCode::Enter));

        assert_eq!(
            effects,
            vec![
                UiEffect::PersistLogin {
                    remember: false,
                    username: "alice".to_string(),
                    password: "p1".to_string(),
                },
                UiEffect::SubmitLogin {
                    username: "alice".to_string(),
                    password: "p1".to_string(),
                },
            ]
        );
        assert_eq!(login_screen(&app).focus, LoginField::Submit);
    }

    #[test]
    fn test_empty_username_skips_network_call() {
        let mut app = app();
        update(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "p1");

        let effects = update(&mut app, key(KeyCode::Enter));

        assert_eq!(
            effects,
            vec![UiEffect::PersistLogin {
                remember: false,
                username: String::new(),
                password: "p1".to_string(),
            }]
        );
    }

    #[test]
    fn test_username_with_space_submitted_unchanged() {
        let mut app = app();
        type_str(&mut app, "alice smith");

        let effects = update(&mut app, key(KeyCode::Enter));

        assert!(effects.iter().any(|effect| matches!(
            effect,
            UiEffect::SubmitLogin { username, .. } if username == "alice smith"
        )));
    }

    #[test]
    fn test_space_toggles_remember_when_focused() {
        let mut app = app();
        // Tab to the checkbox: Username -> Password -> Remember
        update(&mut app, key(KeyCode::Tab));
        update(&mut app, key(KeyCode::Tab));
        update(&mut app, key(KeyCode::Char(' ')));

        assert!(login_screen(&app).remember);
        assert_eq!(login_screen(&app).username.value(), "");
    }

    #[test]
    fn test_accepted_navigates_to_home_once() {
        let mut app = app();
        type_str(&mut app, "alice");
        update(&mut app, key(KeyCode::Enter));

        let effects = update(&mut app, login_result("alice", Ok(LoginOutcome::Accepted)));

        assert!(effects.is_empty());
        match &app.screen {
            Screen::Home(home) => assert_eq!(home.session.username, "alice"),
            Screen::Login(_) => panic!("expected home screen"),
        }
    }

    #[test]
    fn test_session_uses_submitted_username_not_edited_field() {
        let mut app = app();
        type_str(&mut app, "alice");
        update(&mut app, key(KeyCode::Enter));

        // Edit the field while the request is in flight.
        update(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "x");
        assert_eq!(login_screen(&app).username.value(), "alicex");

        update(&mut app, login_result("alice", Ok(LoginOutcome::Accepted)));

        match &app.screen {
            Screen::Home(home) => assert_eq!(home.session.username, "alice"),
            Screen::Login(_) => panic!("expected home screen"),
        }
    }

    #[test]
    fn test_rejected_stays_with_message_and_fields() {
        let mut app = app();
        type_str(&mut app, "alice");
        update(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "wrong");
        update(&mut app, key(KeyCode::Enter));

        update(
            &mut app,
            login_result("alice", Ok(LoginOutcome::Rejected { status: 401 })),
        );

        let screen = login_screen(&app);
        assert_eq!(
            screen.status.as_ref().map(|s| s.text.as_str()),
            Some(MSG_INVALID_LOGIN)
        );
        assert_eq!(screen.username.value(), "alice");
        assert_eq!(screen.password.value(), "wrong");
        assert_eq!(screen.in_flight, 0);
    }

    #[test]
    fn test_transport_failure_shows_connectivity_message() {
        let mut app = app();
        type_str(&mut app, "alice");
        update(&mut app, key(KeyCode::Enter));

        update(
            &mut app,
            login_result("alice", Err("connection refused".to_string())),
        );

        let screen = login_screen(&app);
        assert_eq!(
            screen.status.as_ref().map(|s| s.text.as_str()),
            Some(MSG_CANNOT_CONNECT)
        );
    }

    #[test]
    fn test_late_result_after_navigation_is_noop() {
        let mut app = app();
        type_str(&mut app, "alice");
        update(&mut app, key(KeyCode::Enter));
        update(&mut app, key(KeyCode::Enter));
        update(&mut app, login_result("alice", Ok(LoginOutcome::Accepted)));
        assert!(matches!(app.screen, Screen::Home(_)));

        // The second submission resolves after navigation.
        let effects = update(
            &mut app,
            login_result("alice", Ok(LoginOutcome::Rejected { status: 401 })),
        );

        assert!(effects.is_empty());
        assert!(matches!(app.screen, Screen::Home(_)));
    }

    #[test]
    fn test_overlapping_submits_each_issue_a_request() {
        let mut app = app();
        type_str(&mut app, "alice");

        let first = update(&mut app, key(KeyCode::Enter));
        let second = update(&mut app, key(KeyCode::Enter));

        for effects in [first, second] {
            assert!(
                effects
                    .iter()
                    .any(|effect| matches!(effect, UiEffect::SubmitLogin { .. }))
            );
        }
        assert_eq!(login_screen(&app).in_flight, 2);
    }

    #[test]
    fn test_tick_clears_expired_status() {
        let mut app = app();
        match &mut app.screen {
            Screen::Login(screen) => {
                screen.status = Some(StatusMessage::new(MSG_INVALID_LOGIN, Duration::ZERO));
            }
            Screen::Home(_) => unreachable!(),
        }

        update(&mut app, UiEvent::Tick);

        assert!(login_screen(&app).status.is_none());
    }

    #[test]
    fn test_esc_quits_from_login() {
        let mut app = app();
        let effects = update(&mut app, key(KeyCode::Esc));
        assert_eq!(effects, vec![UiEffect::Quit]);
    }

    #[test]
    fn test_q_quits_from_home() {
        let mut app = app();
        type_str(&mut app, "alice");
        update(&mut app, key(KeyCode::Enter));
        update(&mut app, login_result("alice", Ok(LoginOutcome::Accepted)));

        let effects = update(&mut app, key(KeyCode::Char('q')));
        assert_eq!(effects, vec![UiEffect::Quit]);
    }
}
