use std::{fmt, sync::LazyLock};

use formation_core::CompanyInfoPatch;
use regex::Regex;

/// `local@domain.tld`, no whitespace.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Contact details collected before an order is submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomerForm {
    pub owner_name: String,
    pub phone: String,
    pub email: String,
    /// Optional.
    pub wechat: String,
}

impl CustomerForm {
    /// Validates that the form has all required values for submission.
    ///
    /// Rules:
    /// - owner name is required
    /// - phone is required
    /// - email is required and must look like `local@domain.tld`
    ///
    /// Every failing rule is reported, in field order.
    pub fn validate_for_submit(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.owner_name.trim().is_empty() {
            errors.push("Owner name is required.".to_string());
        }

        if self.phone.trim().is_empty() {
            errors.push("Phone number is required.".to_string());
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push("Email is required.".to_string());
        } else if !EMAIL_RE.is_match(email) {
            errors.push(format!("Email '{email}' is not a valid address."));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// The company-info fields this form fills in. WeChat has no
    /// counterpart in the record and is left out.
    pub fn to_patch(&self) -> CompanyInfoPatch {
        CompanyInfoPatch {
            owner_name: Some(self.owner_name.trim().to_string()),
            phone: Some(self.phone.trim().to_string()),
            email: Some(self.email.trim().to_string()),
            ..Default::default()
        }
    }
}

impl fmt::Display for CustomerForm {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Owner:  {}", self.owner_name)?;
        writeln!(f, "Phone:  {}", self.phone)?;
        writeln!(f, "Email:  {}", self.email)?;
        if self.wechat.trim().is_empty() {
            writeln!(f, "WeChat: —")
        } else {
            writeln!(f, "WeChat: {}", self.wechat)
        }
    }
}
