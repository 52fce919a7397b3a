//! Input validation utilities

use regex::Regex;
use std::sync::OnceLock;

/// Validate username
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.is_empty() {
        return Err("username is required".to_string());
    }

    if username.len() < 3 {
        return Err("username must be at least 3 characters long".to_string());
    }

    if username.len() > 32 {
        return Err("username must be at most 32 characters long".to_string());
    }

    static USERNAME_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = USERNAME_REGEX
        .get_or_init(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("Failed to compile username regex"));

    if !regex.is_match(username) {
        return Err("username can only contain letters, numbers, and underscores".to_string());
    }

    Ok(())
}

/// Validate email
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("email is required".to_string());
    }

    if email.len() > 254 {
        return Err("email must be at most 254 characters long".to_string());
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err("invalid email format".to_string());
    }

    Ok(())
}

/// Validate password
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("password is required".to_string());
    }

    if password.len() < 6 {
        return Err("password must be at least 6 characters long".to_string());
    }

    if password.len() > 128 {
        return Err("password must be at most 128 characters long".to_string());
    }

    Ok(())
}

/// Validate a product listing's fields
pub fn validate_listing(title: &str, category: &str, price: f64) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("title is required".to_string());
    }

    if title.len() > 200 {
        return Err("title must be at most 200 characters long".to_string());
    }

    if category.trim().is_empty() {
        return Err("category is required".to_string());
    }

    validate_price(price)
}

/// Validate a listing price
pub fn validate_price(price: f64) -> Result<(), String> {
    if !price.is_finite() || price <= 0.0 {
        return Err("price must be a positive number".to_string());
    }

    Ok(())
}

/// Validate a cart item quantity
pub fn validate_quantity(quantity: i32) -> Result<(), String> {
    if quantity < 1 {
        return Err("quantity must be at least 1".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_username() {
        assert!(validate_username("ana").is_ok());
        assert!(validate_username("ana_42").is_ok());
        assert!(validate_username("").is_err());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("has spaces").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@x.com").is_ok());
        assert!(validate_email("first.last+tag@sub.example.org").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@tld").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("secret1").is_ok());
        assert!(validate_password("").is_err());
        assert!(validate_password("short").is_err());
        assert!(validate_password(&"x".repeat(129)).is_err());
    }

    #[test]
    fn test_validate_listing() {
        assert!(validate_listing("Lamp", "Home", 12.5).is_ok());
        assert!(validate_listing("", "Home", 12.5).is_err());
        assert!(validate_listing("Lamp", "", 12.5).is_err());
        assert!(validate_listing("Lamp", "Home", 0.0).is_err());
        assert!(validate_listing("Lamp", "Home", -1.0).is_err());
        assert!(validate_listing("Lamp", "Home", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(10).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-3).is_err());
    }
}
