//! Address structures.

use serde::Serialize;

/// A mailing address plus the contact details that travel with it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// `ADR1`..`ADR3` lines in source order.
    pub address_lines: Vec<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub fax: Option<String>,
    pub web: Option<String>,
}

impl Address {
    /// Whether no field has been populated.
    pub fn is_empty(&self) -> bool {
        self.address_lines.is_empty()
            && self.city.is_none()
            && self.state.is_none()
            && self.postal_code.is_none()
            && self.country.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.fax.is_none()
            && self.web.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_empty() {
        let mut address = Address::default();
        assert!(address.is_empty());

        address.city = Some("Ottawa".to_string());
        assert!(!address.is_empty());
    }
}
