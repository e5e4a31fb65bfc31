//! Store app entity model, transfer shape and create DTO.
//!
//! [`StoreApp`] is the persisted row and never leaves the service layer.
//! [`StoreAppSummary`] is what clients receive; the only way to build one
//! from a row is the `From` projection below, which destructures the row so
//! adding a column without mirroring it is a compile error.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storeapps_core::error::CoreError;
use storeapps_core::types::DbId;
use storeapps_core::validation::{field_errors, require_text, validate_price};
use validator::{Validate, ValidationError};

/// A row from the `store_apps` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct StoreApp {
    pub id: DbId,
    pub name: String,
    pub rating: f64,
    pub people: i64,
    pub category: String,
    pub date: String,
    pub price: String,
}

/// Client-facing representation of a store app.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreAppSummary {
    pub id: DbId,
    pub name: String,
    pub rating: f64,
    pub people: i64,
    pub category: String,
    pub date: String,
    pub price: String,
}

impl From<StoreApp> for StoreAppSummary {
    fn from(app: StoreApp) -> Self {
        let StoreApp {
            id,
            name,
            rating,
            people,
            category,
            date,
            price,
        } = app;
        Self {
            id,
            name,
            rating,
            people,
            category,
            date,
            price,
        }
    }
}

/// DTO for creating a store app.
///
/// Fields are optional at the decoding level so a missing field is reported
/// with its own reason instead of failing the whole body. `id` and `people`
/// are not accepted: the store assigns both.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateStoreApp {
    #[validate(
        required(message = "Name must be between 3 and 100 characters"),
        length(min = 3, max = 100, message = "Name must be between 3 and 100 characters")
    )]
    pub name: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 4.0, message = "Rating must be between 0 and 4"))]
    pub rating: f64,
    #[validate(
        required(message = "Category is required"),
        custom(function = "category_present")
    )]
    pub category: Option<String>,
    #[validate(required(message = "Date is required"), custom(function = "date_present"))]
    pub date: Option<String>,
    #[validate(
        required(message = "Price should be a number"),
        custom(function = "validate_price")
    )]
    pub price: Option<String>,
}

/// A create DTO that passed validation, ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStoreApp {
    pub name: String,
    pub rating: f64,
    pub category: String,
    pub date: String,
    pub price: String,
}

impl CreateStoreApp {
    /// Run every field rule; all must pass.
    ///
    /// On failure every offending field is reported, not just the first.
    /// The `required` rules guarantee every optional field is present once
    /// validation passes.
    pub fn validated(self) -> Result<NewStoreApp, CoreError> {
        self.validate()
            .map_err(|errors| CoreError::InvalidFields(field_errors(&errors)))?;

        Ok(NewStoreApp {
            name: self.name.unwrap_or_default(),
            rating: self.rating,
            category: self.category.unwrap_or_default(),
            date: self.date.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
        })
    }
}

fn category_present(category: &str) -> Result<(), ValidationError> {
    require_text(category, "Category is required")
}

fn date_present(date: &str) -> Result<(), ValidationError> {
    require_text(date, "Date is required")
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use storeapps_core::validation::FieldError;

    use super::*;

    fn valid_input() -> CreateStoreApp {
        CreateStoreApp {
            name: Some("SkyChart".to_string()),
            rating: 3.5,
            category: Some("Weather".to_string()),
            date: Some("30-06-2021".to_string()),
            price: Some("199.00".to_string()),
        }
    }

    fn failing_fields(input: CreateStoreApp) -> Vec<FieldError> {
        assert_matches!(input.validated(), Err(CoreError::InvalidFields(fields)) => fields)
    }

    // -- projection ----------------------------------------------------------

    #[test]
    fn projection_preserves_every_field() {
        let row = StoreApp {
            id: 7,
            name: "StarMap".to_string(),
            rating: 4.0,
            people: 1200,
            category: "Astronomy".to_string(),
            date: "01/02/2020".to_string(),
            price: "0".to_string(),
        };

        let summary = StoreAppSummary::from(row.clone());

        assert_eq!(summary.id, row.id);
        assert_eq!(summary.name, row.name);
        assert_eq!(summary.rating, row.rating);
        assert_eq!(summary.people, row.people);
        assert_eq!(summary.category, row.category);
        assert_eq!(summary.date, row.date);
        assert_eq!(summary.price, row.price);
    }

    #[test]
    fn summary_serializes_exactly_the_record_fields() {
        let summary = StoreAppSummary::from(StoreApp {
            id: 1,
            name: "SkyChart".to_string(),
            rating: 2.5,
            people: 10,
            category: "Weather".to_string(),
            date: "2021".to_string(),
            price: "1.50".to_string(),
        });

        let json = serde_json::to_value(&summary).unwrap();
        let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["category", "date", "id", "name", "people", "price", "rating"]
        );
        assert_eq!(json["price"], "1.50");
        assert_eq!(json["date"], "2021");
    }

    // -- validation ----------------------------------------------------------

    #[test]
    fn valid_input_passes() {
        let new_app = valid_input().validated().unwrap();
        assert_eq!(new_app.name, "SkyChart");
        assert_eq!(new_app.price, "199.00");
    }

    #[test]
    fn two_character_name_fails_on_name() {
        let input = CreateStoreApp {
            name: Some("ab".to_string()),
            ..valid_input()
        };
        assert_eq!(
            failing_fields(input),
            vec![FieldError {
                field: "name".into(),
                message: "Name must be between 3 and 100 characters".into(),
            }]
        );
    }

    #[test]
    fn name_length_bounds_are_inclusive() {
        for len in [3, 100] {
            let input = CreateStoreApp {
                name: Some("x".repeat(len)),
                ..valid_input()
            };
            assert!(input.validated().is_ok(), "length {len} should pass");
        }
        let too_long = CreateStoreApp {
            name: Some("x".repeat(101)),
            ..valid_input()
        };
        assert_eq!(failing_fields(too_long)[0].field, "name");
    }

    #[test]
    fn rating_outside_range_fails() {
        let input = CreateStoreApp {
            rating: 4.5,
            ..valid_input()
        };
        assert_eq!(
            failing_fields(input),
            vec![FieldError {
                field: "rating".into(),
                message: "Rating must be between 0 and 4".into(),
            }]
        );
    }

    #[test]
    fn non_numeric_price_fails() {
        let input = CreateStoreApp {
            price: Some("Free".to_string()),
            ..valid_input()
        };
        assert_eq!(
            failing_fields(input),
            vec![FieldError {
                field: "price".into(),
                message: "Price should be a number".into(),
            }]
        );
    }

    #[test]
    fn blank_category_and_missing_date_are_both_reported() {
        let input = CreateStoreApp {
            category: Some("   ".to_string()),
            date: None,
            ..valid_input()
        };
        assert_eq!(
            failing_fields(input),
            vec![
                FieldError {
                    field: "category".into(),
                    message: "Category is required".into(),
                },
                FieldError {
                    field: "date".into(),
                    message: "Date is required".into(),
                },
            ]
        );
    }

    #[test]
    fn empty_body_reports_every_required_field() {
        let fields: Vec<String> = failing_fields(CreateStoreApp::default())
            .into_iter()
            .map(|f| f.field)
            .collect();
        assert_eq!(fields, ["category", "date", "name", "price"]);
    }

    #[test]
    fn client_id_and_people_are_ignored_when_decoding() {
        let input: CreateStoreApp = serde_json::from_value(serde_json::json!({
            "id": 99,
            "people": 5000,
            "name": "SkyChart",
            "rating": 1.0,
            "category": "Weather",
            "date": "2021",
            "price": "0"
        }))
        .unwrap();
        let new_app = input.validated().unwrap();
        assert_eq!(new_app.name, "SkyChart");
    }
}
