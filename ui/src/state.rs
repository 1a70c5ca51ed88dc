use yewdux::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthState {
    /// Stored token not yet validated.
    #[default]
    Unknown,
    LoggedOut,
    LoggedIn,
}

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    pub auth_state: AuthState,
}

impl State {
    pub fn is_authenticated(&self) -> bool {
        self.auth_state == AuthState::LoggedIn
    }

    pub fn login(&mut self) {
        self.auth_state = AuthState::LoggedIn;
    }

    pub fn logout(&mut self) {
        self.auth_state = AuthState::LoggedOut;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_starts_unknown() {
        let mut state = State::default();
        assert_eq!(state.auth_state, AuthState::Unknown);
        assert!(!state.is_authenticated());

        state.login();
        assert!(state.is_authenticated());
        state.logout();
        assert_eq!(state.auth_state, AuthState::LoggedOut);
    }
}
