use secrecy::Secret;

/// The two fields the login form edits.
///
/// Created empty when the view loads and mutated by keystrokes. Nothing is
/// validated locally; the backend is the only authority on what a valid
/// email or password looks like.
#[derive(Debug, Clone)]
pub struct Credentials {
    email: String,
    password: Secret<String>,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: Secret<String>) -> Self {
        Self {
            email: email.into(),
            password,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &Secret<String> {
        &self.password
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: Secret<String>) {
        self.password = password;
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: Secret::new(String::new()),
        }
    }
}
