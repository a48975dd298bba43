//! Outbound contact links (WhatsApp, phone, email) for sellers and leads.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// WhatsApp chat link for `phone`, keeping digits only. `message` becomes a
/// prefilled chat text.
pub fn whatsapp_link(phone: Option<&str>, message: Option<&str>) -> Option<String> {
    let digits = phone?.chars().filter(char::is_ascii_digit).collect::<String>();
    if digits.is_empty() {
        return None;
    }
    Some(match message {
        Some(text) => format!("https://wa.me/{digits}?text={}", urlencoding::encode(text)),
        None => format!("https://wa.me/{digits}"),
    })
}

pub fn tel_link(phone: Option<&str>) -> Option<String> {
    let phone = phone?.trim();
    (!phone.is_empty()).then(|| format!("tel:{}", phone.replace(' ', "")))
}

pub fn mailto_link(email: &str) -> String {
    format!("mailto:{}", email.trim())
}
