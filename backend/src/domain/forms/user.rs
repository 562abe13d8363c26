//! User form: name, email, role and optional password.

use serde_json::Value;
use validator::ValidateEmail;
use zeroize::Zeroizing;

use super::{FormInput, FormViolations, check_length};
use crate::domain::Role;

/// Minimum length of `name`.
pub const NAME_MIN: usize = 3;
/// Maximum length of `name`.
pub const NAME_MAX: usize = 100;
/// Minimum length of a supplied password.
pub const PASSWORD_MIN: usize = 6;

/// Validated user submission.
///
/// ## Invariants
/// - `role` is [`Role::Admin`] or [`Role::User`].
/// - `password` is `None` when absent, null or empty; otherwise at least
///   six characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserForm {
    /// Full name, 3..=100 characters.
    pub name: String,
    /// Syntactically valid email.
    pub email: String,
    /// Assigned role.
    pub role: Role,
    /// Initial password, if one was supplied.
    pub password: Option<Zeroizing<String>>,
}

fn name(input: &FormInput<'_>) -> Result<String, String> {
    let value = input.required_str("name", "Name")?;
    check_length(
        value,
        NAME_MIN,
        NAME_MAX,
        || format!("Name must be at least {NAME_MIN} characters"),
        || format!("Name must be at most {NAME_MAX} characters"),
    )
}

fn email(input: &FormInput<'_>) -> Result<String, String> {
    let value = input.required_str("email", "Email")?;
    if value.validate_email() {
        Ok(value.to_owned())
    } else {
        Err("Invalid email address".to_owned())
    }
}

fn role(input: &FormInput<'_>) -> Result<Role, String> {
    match input.required_str("role", "Role")? {
        "ADMIN" => Ok(Role::Admin),
        "USER" => Ok(Role::User),
        _ => Err("Role must be ADMIN or USER".to_owned()),
    }
}

fn password(input: &FormInput<'_>) -> Result<Option<Zeroizing<String>>, String> {
    match input.optional_str("password", "Password")? {
        None | Some("") => Ok(None),
        Some(value) if value.chars().count() < PASSWORD_MIN => Err(format!(
            "Password must be at least {PASSWORD_MIN} characters"
        )),
        Some(value) => Ok(Some(Zeroizing::new(value.to_owned()))),
    }
}

impl UserForm {
    /// Validate an arbitrary JSON submission.
    ///
    /// # Examples
    /// ```
    /// use housing::domain::forms::UserForm;
    /// use serde_json::json;
    ///
    /// let form = UserForm::parse(&json!({
    ///     "name": "Bob Smith",
    ///     "email": "b@x.com",
    ///     "role": "USER",
    ///     "password": ""
    /// }))
    /// .expect("valid user");
    /// assert!(form.password.is_none());
    /// ```
    pub fn parse(value: &Value) -> Result<Self, FormViolations> {
        let input = FormInput::new(value);
        let mut violations = FormViolations::default();

        let name = violations.take("name", name(&input));
        let email = violations.take("email", email(&input));
        let role = violations.take("role", role(&input));
        let password = violations.take("password", password(&input));

        let form = match (name, email, role, password) {
            (Some(name), Some(email), Some(role), Some(password)) => Some(Self {
                name,
                email,
                role,
                password,
            }),
            _ => None,
        };
        violations.into_result(form)
    }
}
