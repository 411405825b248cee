//! Contact detection in free text
//!
//! Pattern-based extraction of phone numbers, e-mail addresses and messenger
//! handles. Runs on every inbound message so contacts are captured even when
//! the model-side analysis misses them.

use once_cell::sync::Lazy;
use regex::Regex;
use sales_agent_core::ContactInfo;

static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+?\d{1,4}[-.\s]?\d{3,4}[-.\s]?\d{3,4}[-.\s]?\d{3,4}|\+?\d{10,15})")
        .expect("phone pattern compiles")
});

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w.\-]+@[\w.\-]+\.\w+").expect("email pattern compiles"));

static HANDLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"@\w+").expect("handle pattern compiles"));

/// Scan a message for contact details. First match of each kind wins.
pub fn extract_contacts(text: &str) -> ContactInfo {
    let email = EMAIL.find(text).map(|m| m.as_str().to_string());

    // Strip the email before scanning for handles so its domain part is not
    // mistaken for a messenger handle.
    let handle_source = match &email {
        Some(found) => text.replace(found.as_str(), " "),
        None => text.to_string(),
    };
    let telegram = HANDLE
        .find(&handle_source)
        .map(|m| m.as_str().to_string());

    let phone = PHONE.find(text).map(|m| m.as_str().trim().to_string());

    ContactInfo {
        phone,
        email,
        telegram,
    }
}

/// True when the message carries any recognizable contact detail
pub fn has_contact(text: &str) -> bool {
    !extract_contacts(text).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_international_phone() {
        let contacts = extract_contacts("you can reach me at +380977281466");
        assert_eq!(contacts.phone.as_deref(), Some("+380977281466"));
        assert!(contacts.email.is_none());
        assert!(contacts.telegram.is_none());
    }

    #[test]
    fn test_spaced_phone() {
        let contacts = extract_contacts("call +1 555 123 4567 tomorrow");
        assert!(contacts.phone.is_some());
    }

    #[test]
    fn test_email_and_handle_do_not_collide() {
        let contacts = extract_contacts("write to jane.doe@example.com or ping @janedoe");
        assert_eq!(contacts.email.as_deref(), Some("jane.doe@example.com"));
        assert_eq!(contacts.telegram.as_deref(), Some("@janedoe"));
    }

    #[test]
    fn test_email_domain_is_not_a_handle() {
        let contacts = extract_contacts("my mail is jane@example.com");
        assert_eq!(contacts.email.as_deref(), Some("jane@example.com"));
        assert!(contacts.telegram.is_none());
    }

    #[test]
    fn test_plain_text_has_no_contacts() {
        assert!(!has_contact("I run a small bakery in town"));
        assert!(has_contact("my telegram is @bakery_jane"));
    }
}
