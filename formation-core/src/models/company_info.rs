use serde::{Deserialize, Serialize};

use super::{EntityType, Jurisdiction};

/// Company details shared between the calculator and the document preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub jurisdiction: Jurisdiction,
    pub company_name: String,
    pub owner_name: String,
    pub registration_number: String,
    pub registration_date: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub business_scope: String,
    pub entity_type: EntityType,
}

impl Default for CompanyInfo {
    fn default() -> Self {
        Self {
            jurisdiction: Jurisdiction::Colorado,
            company_name: "示例公司名称 LLC".to_string(),
            owner_name: "张三".to_string(),
            registration_number: "L123456789".to_string(),
            registration_date: "2024年3月30日".to_string(),
            address: "123 Main St, Denver, CO 80202".to_string(),
            phone: String::new(),
            email: String::new(),
            business_scope: String::new(),
            entity_type: EntityType::Corporation,
        }
    }
}

/// A partial update to [`CompanyInfo`]. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyInfoPatch {
    pub jurisdiction: Option<Jurisdiction>,
    pub company_name: Option<String>,
    pub owner_name: Option<String>,
    pub registration_number: Option<String>,
    pub registration_date: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub business_scope: Option<String>,
    pub entity_type: Option<EntityType>,
}

impl CompanyInfoPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl CompanyInfo {
    /// Shallow merge: every field present in `patch` replaces the current
    /// value, every absent field is kept.
    pub fn apply(
        &mut self,
        patch: CompanyInfoPatch,
    ) {
        let CompanyInfoPatch {
            jurisdiction,
            company_name,
            owner_name,
            registration_number,
            registration_date,
            address,
            phone,
            email,
            business_scope,
            entity_type,
        } = patch;

        if let Some(v) = jurisdiction {
            self.jurisdiction = v;
        }
        if let Some(v) = company_name {
            self.company_name = v;
        }
        if let Some(v) = owner_name {
            self.owner_name = v;
        }
        if let Some(v) = registration_number {
            self.registration_number = v;
        }
        if let Some(v) = registration_date {
            self.registration_date = v;
        }
        if let Some(v) = address {
            self.address = v;
        }
        if let Some(v) = phone {
            self.phone = v;
        }
        if let Some(v) = email {
            self.email = v;
        }
        if let Some(v) = business_scope {
            self.business_scope = v;
        }
        if let Some(v) = entity_type {
            self.entity_type = v;
        }
    }
}
