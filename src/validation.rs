//! Fixed per-field rules for the contact and diary forms. The store trusts
//! its input; everything user-typed passes through here first.

use chrono::NaiveDate;

pub fn validate_name(name: &str) -> Result<(), String> {
    let name = name.trim();
    if name.is_empty() {
        Err("Пожалуйста, введите ваше имя".to_string())
    } else if name.chars().count() < 2 {
        Err("Имя должно содержать минимум 2 символа".to_string())
    } else {
        Ok(())
    }
}

pub fn validate_email(email: &str) -> Result<(), String> {
    let email = email.trim();
    if email.is_empty() {
        Err("Пожалуйста, введите ваш email".to_string())
    } else if !is_valid_email(email) {
        Err("Пожалуйста, введите корректный email".to_string())
    } else {
        Ok(())
    }
}

pub fn validate_message(message: &str) -> Result<(), String> {
    let message = message.trim();
    if message.is_empty() {
        Err("Пожалуйста, введите ваше сообщение".to_string())
    } else if message.chars().count() < 10 {
        Err("Сообщение должно содержать минимум 10 символов".to_string())
    } else {
        Ok(())
    }
}

pub fn validate_entry_title(title: &str) -> Result<(), String> {
    let title = title.trim();
    if title.is_empty() {
        Err("Пожалуйста, введите название задачи".to_string())
    } else if title.chars().count() < 3 {
        Err("Название задачи должно содержать минимум 3 символа".to_string())
    } else {
        Ok(())
    }
}

/// Empty input is allowed; the store substitutes today's date.
pub fn parse_entry_date(raw: &str) -> Result<Option<NaiveDate>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| "Дата должна быть в формате ГГГГ-ММ-ДД".to_string())
}

// Shape check only: non-empty local part, single '@', domain with an
// inner dot. Deliverability is out of scope.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_requires_two_characters() {
        assert!(validate_name("").is_err());
        assert!(validate_name("А").is_err());
        assert!(validate_name("Ив").is_ok());
        assert!(validate_name("  Сергей  ").is_ok());
    }

    #[test]
    fn email_shape_is_checked() {
        assert!(validate_email("").is_err());
        assert!(validate_email("user").is_err());
        assert!(validate_email("user@host").is_err());
        assert!(validate_email("user@@host.ru").is_err());
        assert!(validate_email("us er@host.ru").is_err());
        assert!(validate_email("user@.ru").is_err());
        assert!(validate_email("user@host.").is_err());
        assert!(validate_email("user@host.ru").is_ok());
        assert!(validate_email("a@b.c").is_ok());
    }

    #[test]
    fn message_requires_ten_characters() {
        assert!(validate_message("").is_err());
        assert!(validate_message("коротко").is_err());
        assert!(validate_message("достаточно длинное сообщение").is_ok());
    }

    #[test]
    fn entry_title_requires_three_characters() {
        assert!(validate_entry_title("").is_err());
        assert!(validate_entry_title("ab").is_err());
        assert!(validate_entry_title("CSS").is_ok());
    }

    #[test]
    fn entry_date_is_optional_but_must_be_iso() {
        assert_eq!(parse_entry_date("").unwrap(), None);
        assert_eq!(
            parse_entry_date("2024-12-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 15)
        );
        assert!(parse_entry_date("15.12.2024").is_err());
        assert!(parse_entry_date("2024-13-40").is_err());
    }
}
