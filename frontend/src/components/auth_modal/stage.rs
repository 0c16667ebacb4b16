//! Modal sub-state machine. Pure logic, no DOM.
//!
//! `Login ⇄ Register → AwaitingVerification`; the modal itself being
//! open or closed is owned by the app shell, so dismissal from any stage
//! simply unmounts the component and discards everything here.

/// Which tab a role-entry button asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStage {
    LoginForm,
    RegisterForm,
    /// Between "Verify Identity" submission and OTP confirmation.
    AwaitingVerification,
}

impl AuthStage {
    pub fn from_mode(mode: AuthMode) -> Self {
        match mode {
            AuthMode::Login => Self::LoginForm,
            AuthMode::Register => Self::RegisterForm,
        }
    }

    /// Heading shown above the modal body.
    pub fn title(&self) -> &'static str {
        match self {
            Self::LoginForm => "Welcome Back",
            Self::RegisterForm => "Secure Verification",
            Self::AwaitingVerification => "Check Your Email",
        }
    }

    /// Tab switching is only meaningful while a form is showing.
    pub fn tabs_enabled(&self) -> bool {
        matches!(self, Self::LoginForm | Self::RegisterForm)
    }

    /// Switch tabs. Returns the new stage plus whether the switch
    /// actually happened (the caller discards the other form's fields
    /// only on a real switch).
    pub fn switch_to(&self, mode: AuthMode) -> (Self, bool) {
        let target = Self::from_mode(mode);
        if self.tabs_enabled() && *self != target {
            (target, true)
        } else {
            (*self, false)
        }
    }

    /// A validated, accepted registration moves to the verification
    /// holding state. Any other stage stays put.
    pub fn registration_accepted(&self) -> Self {
        match self {
            Self::RegisterForm => Self::AwaitingVerification,
            other => *other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_on_the_requested_tab() {
        assert_eq!(AuthStage::from_mode(AuthMode::Login), AuthStage::LoginForm);
        assert_eq!(
            AuthStage::from_mode(AuthMode::Register),
            AuthStage::RegisterForm
        );
    }

    #[test]
    fn tab_switch_roundtrip() {
        let (stage, switched) = AuthStage::LoginForm.switch_to(AuthMode::Register);
        assert_eq!(stage, AuthStage::RegisterForm);
        assert!(switched);

        let (stage, switched) = stage.switch_to(AuthMode::Login);
        assert_eq!(stage, AuthStage::LoginForm);
        assert!(switched);
    }

    #[test]
    fn switching_to_the_active_tab_is_a_noop() {
        let (stage, switched) = AuthStage::LoginForm.switch_to(AuthMode::Login);
        assert_eq!(stage, AuthStage::LoginForm);
        assert!(!switched);
    }

    #[test]
    fn no_tab_switching_while_awaiting_verification() {
        let (stage, switched) = AuthStage::AwaitingVerification.switch_to(AuthMode::Login);
        assert_eq!(stage, AuthStage::AwaitingVerification);
        assert!(!switched);
        assert!(!AuthStage::AwaitingVerification.tabs_enabled());
    }

    #[test]
    fn only_the_register_form_advances_to_verification() {
        assert_eq!(
            AuthStage::RegisterForm.registration_accepted(),
            AuthStage::AwaitingVerification
        );
        assert_eq!(
            AuthStage::LoginForm.registration_accepted(),
            AuthStage::LoginForm
        );
    }

    #[test]
    fn titles_match_the_visible_headings() {
        assert_eq!(AuthStage::LoginForm.title(), "Welcome Back");
        assert_eq!(AuthStage::RegisterForm.title(), "Secure Verification");
        assert_eq!(AuthStage::AwaitingVerification.title(), "Check Your Email");
    }
}
