//! House-type form: name, price and optional description.

use serde_json::Value;

use super::{FormInput, FormViolations, check_length};

/// Minimum length of `typeName`.
pub const TYPE_NAME_MIN: usize = 3;
/// Maximum length of `typeName`.
pub const TYPE_NAME_MAX: usize = 50;
/// Maximum length of `description`.
pub const DESCRIPTION_MAX: usize = 200;
/// Highest accepted price.
pub const PRICE_MAX: f64 = 100_000_000.0;

/// Validated house-type submission.
#[derive(Debug, Clone, PartialEq)]
pub struct HouseTypeForm {
    /// Display name, 3..=50 characters.
    pub type_name: String,
    /// Price, in `(0, 100_000_000]`.
    pub price: f64,
    /// Optional description, at most 200 characters.
    pub description: Option<String>,
}

fn type_name(input: &FormInput<'_>) -> Result<String, String> {
    let value = input.required_str("typeName", "Type name")?;
    check_length(
        value,
        TYPE_NAME_MIN,
        TYPE_NAME_MAX,
        || format!("Type name must be at least {TYPE_NAME_MIN} characters"),
        || format!("Type name must be at most {TYPE_NAME_MAX} characters"),
    )
}

fn price(input: &FormInput<'_>) -> Result<f64, String> {
    let value = input.required_number("price", "Price")?;
    if value <= 0.0 {
        return Err("Price must be a positive number".to_owned());
    }
    if value > PRICE_MAX {
        return Err("Price must be at most 100,000,000".to_owned());
    }
    Ok(value)
}

fn description(input: &FormInput<'_>) -> Result<Option<String>, String> {
    input
        .optional_str("description", "Description")?
        .map(|value| {
            check_length(
                value,
                0,
                DESCRIPTION_MAX,
                String::new,
                || format!("Description must be at most {DESCRIPTION_MAX} characters"),
            )
        })
        .transpose()
}

impl HouseTypeForm {
    /// Validate an arbitrary JSON submission.
    ///
    /// # Examples
    /// ```
    /// use housing::domain::forms::HouseTypeForm;
    /// use serde_json::json;
    ///
    /// let err = HouseTypeForm::parse(&json!({ "typeName": "AC", "price": -5 }))
    ///     .expect_err("two violations");
    /// assert_eq!(err.len(), 2);
    /// ```
    pub fn parse(value: &Value) -> Result<Self, FormViolations> {
        let input = FormInput::new(value);
        let mut violations = FormViolations::default();

        let type_name = violations.take("typeName", type_name(&input));
        let price = violations.take("price", price(&input));
        let description = violations.take("description", description(&input));

        let form = match (type_name, price, description) {
            (Some(type_name), Some(price), Some(description)) => Some(Self {
                type_name,
                price,
                description,
            }),
            _ => None,
        };
        violations.into_result(form)
    }
}
