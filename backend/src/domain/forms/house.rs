//! House form: house number, block, house type and optional owner.

use serde_json::Value;

use super::{FormInput, FormViolations, check_length};

/// Maximum length of `houseNumber` and `block`.
pub const HOUSE_FIELD_MAX: usize = 50;

/// Validated house submission.
///
/// ## Invariants
/// - `house_number` and `block` are 1..=50 characters.
/// - `house_type_id` is non-empty.
/// - `user_id` is `None` when absent, null, or an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HouseForm {
    /// House number within the block.
    pub house_number: String,
    /// Block label.
    pub block: String,
    /// Identifier of the house type.
    pub house_type_id: String,
    /// Identifier of the owning user, if assigned.
    pub user_id: Option<String>,
}

fn bounded(input: &FormInput<'_>, field: &str, label: &str) -> Result<String, String> {
    let value = input.required_str(field, label)?;
    check_length(
        value,
        1,
        HOUSE_FIELD_MAX,
        || format!("{label} is required"),
        || format!("{label} must be at most {HOUSE_FIELD_MAX} characters"),
    )
}

impl HouseForm {
    /// Validate an arbitrary JSON submission.
    ///
    /// # Examples
    /// ```
    /// use housing::domain::forms::HouseForm;
    /// use serde_json::json;
    ///
    /// let form = HouseForm::parse(&json!({
    ///     "houseNumber": "12",
    ///     "block": "B1",
    ///     "houseTypeId": "t1"
    /// }))
    /// .expect("valid house");
    /// assert_eq!(form.block, "B1");
    /// assert!(form.user_id.is_none());
    /// ```
    pub fn parse(value: &Value) -> Result<Self, FormViolations> {
        let input = FormInput::new(value);
        let mut violations = FormViolations::default();

        let house_number = violations.take(
            "houseNumber",
            bounded(&input, "houseNumber", "House number"),
        );
        let block = violations.take("block", bounded(&input, "block", "Block"));
        let house_type_id = violations.take(
            "houseTypeId",
            input
                .required_str("houseTypeId", "House type")
                .and_then(|id| {
                    if id.is_empty() {
                        Err("House type is required".to_owned())
                    } else {
                        Ok(id.to_owned())
                    }
                }),
        );
        let user_id = violations.take(
            "userId",
            input
                .optional_str("userId", "User")
                .map(|id| id.filter(|id| !id.is_empty()).map(str::to_owned)),
        );

        let form = match (house_number, block, house_type_id, user_id) {
            (Some(house_number), Some(block), Some(house_type_id), Some(user_id)) => Some(Self {
                house_number,
                block,
                house_type_id,
                user_id,
            }),
            _ => None,
        };
        violations.into_result(form)
    }
}
