//! Validation utilities for form input
//!
//! Checks run before any request is sent. Failures report the unmet
//! requirement category ("Please fill all fields"), not per-field detail.

use std::path::PathBuf;

use shared::CategoryStatus;

use crate::core::error::{AppError, Result};

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    /// Convert into `Err(AppError::Validation)` when invalid.
    pub fn into_result(self) -> Result<()> {
        match (self.is_valid, self.error) {
            (true, _) => Ok(()),
            (false, message) => Err(AppError::Validation(
                message.unwrap_or_else(|| "Invalid input".to_string()),
            )),
        }
    }
}

/// Raw input of the menu create form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuForm {
    pub name: String,
    pub description: String,
    pub image: Option<PathBuf>,
    pub category_id: Option<i64>,
    pub status: String,
    pub stock: String,
    pub price: String,
}

/// Validate email format
pub fn validate_email(email: &str) -> ValidationResult {
    if email.is_empty() {
        return ValidationResult::err("Email is required");
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return ValidationResult::err("Invalid email format");
    }

    if parts[0].is_empty() {
        return ValidationResult::err("Email username cannot be empty");
    }

    if parts[1].is_empty() || !parts[1].contains('.') {
        return ValidationResult::err("Invalid email domain");
    }

    ValidationResult::ok()
}

/// Validate the login password field
pub fn validate_password(password: &str) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::err("Password is required");
    }

    ValidationResult::ok()
}

/// Validate the category create form
pub fn validate_category_form(name: &str, status: &str) -> ValidationResult {
    if name.trim().is_empty() || status.trim().is_empty() {
        return ValidationResult::err("Please fill in all fields");
    }

    if CategoryStatus::parse(status).is_none() {
        return ValidationResult::err("Status must be Active or Inactive");
    }

    ValidationResult::ok()
}

/// Validate the menu create form
pub fn validate_menu_form(form: &MenuForm) -> ValidationResult {
    let missing = form.name.trim().is_empty()
        || form.description.trim().is_empty()
        || form.image.is_none()
        || form.category_id.is_none()
        || form.stock.trim().is_empty()
        || form.price.trim().is_empty();

    if missing {
        return ValidationResult::err("Please fill all fields");
    }

    if form.stock.trim().parse::<u32>().is_err() {
        return ValidationResult::err("Stock must be a whole number");
    }

    match form.price.trim().parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => {}
        _ => return ValidationResult::err("Price must be a non-negative number"),
    }

    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(validate_email("test@example.com").is_valid);
        assert!(validate_email("user@domain.co.id").is_valid);
        assert!(!validate_email("").is_valid);
        assert!(!validate_email("invalid").is_valid);
        assert!(!validate_email("@example.com").is_valid);
        assert!(!validate_email("test@").is_valid);
    }

    #[test]
    fn test_category_form_validation() {
        assert!(validate_category_form("Drinks", "Active").is_valid);
        assert!(validate_category_form("Drinks", "inactive").is_valid);

        let missing = validate_category_form("  ", "Active");
        assert_eq!(missing.error.as_deref(), Some("Please fill in all fields"));
        assert!(!validate_category_form("Drinks", "").is_valid);
        assert!(!validate_category_form("Drinks", "Archived").is_valid);
    }

    #[test]
    fn test_menu_form_requires_every_field() {
        let form = MenuForm {
            name: "Tea".to_string(),
            description: "Hot".to_string(),
            image: Some(PathBuf::from("tea.jpg")),
            category_id: Some(1),
            status: "active".to_string(),
            stock: "3".to_string(),
            price: "5000".to_string(),
        };
        assert!(validate_menu_form(&form).is_valid);

        let mut no_category = form.clone();
        no_category.category_id = None;
        assert_eq!(
            validate_menu_form(&no_category).error.as_deref(),
            Some("Please fill all fields")
        );

        let mut bad_stock = form.clone();
        bad_stock.stock = "-2".to_string();
        assert!(!validate_menu_form(&bad_stock).is_valid);

        let mut bad_price = form;
        bad_price.price = "cheap".to_string();
        assert!(!validate_menu_form(&bad_price).is_valid);
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationResult::ok().into_result().is_ok());
        assert_eq!(
            ValidationResult::err("Please fill all fields").into_result(),
            Err(AppError::Validation("Please fill all fields".to_string()))
        );
    }
}
