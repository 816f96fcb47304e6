use thiserror::Error;

/// Where the user currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    LoginForm,
    Dashboard,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Cannot navigate from {from:?} to {to:?}")]
    InvalidTransition { from: View, to: View },
}

/// Two-state view machine for the login flow.
///
/// `LoginForm` is initial and `Dashboard` is terminal: the only move is
/// `LoginForm -> Dashboard`. Re-entering the current view is a no-op.
#[derive(Debug, Clone, Default)]
pub struct NavigationStateMachine {
    current: View,
}

impl NavigationStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> View {
        self.current
    }

    /// Move to `target`, returning whether the view actually changed.
    pub fn transition(&mut self, target: View) -> Result<bool, NavigationError> {
        match (self.current, target) {
            (from, to) if from == to => Ok(false),
            (View::LoginForm, View::Dashboard) => {
                self.current = View::Dashboard;
                Ok(true)
            }
            (from, to) => Err(NavigationError::InvalidTransition { from, to }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_login_form() {
        assert_eq!(NavigationStateMachine::new().current(), View::LoginForm);
    }

    #[test]
    fn login_form_moves_to_dashboard() {
        let mut machine = NavigationStateMachine::new();

        assert_eq!(machine.transition(View::Dashboard), Ok(true));
        assert_eq!(machine.current(), View::Dashboard);
    }

    #[test]
    fn same_view_is_noop() {
        let mut machine = NavigationStateMachine::new();

        assert_eq!(machine.transition(View::LoginForm), Ok(false));
        machine.transition(View::Dashboard).unwrap();
        assert_eq!(machine.transition(View::Dashboard), Ok(false));
        assert_eq!(machine.current(), View::Dashboard);
    }

    #[test]
    fn dashboard_is_terminal() {
        let mut machine = NavigationStateMachine::new();
        machine.transition(View::Dashboard).unwrap();

        assert_eq!(
            machine.transition(View::LoginForm),
            Err(NavigationError::InvalidTransition {
                from: View::Dashboard,
                to: View::LoginForm,
            })
        );
        assert_eq!(machine.current(), View::Dashboard);
    }
}
