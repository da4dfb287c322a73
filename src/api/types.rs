use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Vendor,
    Government,
    Admin,
}

impl UserType {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "vendor" => Some(Self::Vendor),
            "government" => Some(Self::Government),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
}

impl User {
    pub fn new(name: impl Into<String>, user_type: UserType) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            user_type,
        }
    }

    pub fn slim(&self) -> UserSlim {
        UserSlim {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

/// The part of a user embedded in other resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSlim {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRef {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: Uuid,
    pub legal_name: String,
    pub website_url: String,
    pub street_address: String,
    pub city: String,
    pub region: String,
    pub mail_code: String,
    pub country: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub logo_image_file: Option<FileRef>,
    pub owner: Option<UserSlim>,
    pub active: bool,
}

impl Organization {
    /// A fresh active organization with only the required fields filled.
    pub fn new(legal_name: impl Into<String>, contact_email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            legal_name: legal_name.into(),
            website_url: String::new(),
            street_address: String::new(),
            city: String::new(),
            region: String::new(),
            mail_code: String::new(),
            country: String::new(),
            contact_name: String::new(),
            contact_email: contact_email.into(),
            contact_phone: String::new(),
            logo_image_file: None,
            owner: None,
            active: true,
        }
    }

    pub fn get(&self, field: OrgField) -> &str {
        match field {
            OrgField::LegalName => &self.legal_name,
            OrgField::WebsiteUrl => &self.website_url,
            OrgField::StreetAddress => &self.street_address,
            OrgField::City => &self.city,
            OrgField::Region => &self.region,
            OrgField::MailCode => &self.mail_code,
            OrgField::Country => &self.country,
            OrgField::ContactName => &self.contact_name,
            OrgField::ContactEmail => &self.contact_email,
            OrgField::ContactPhone => &self.contact_phone,
        }
    }

    fn get_mut(&mut self, field: OrgField) -> &mut String {
        match field {
            OrgField::LegalName => &mut self.legal_name,
            OrgField::WebsiteUrl => &mut self.website_url,
            OrgField::StreetAddress => &mut self.street_address,
            OrgField::City => &mut self.city,
            OrgField::Region => &mut self.region,
            OrgField::MailCode => &mut self.mail_code,
            OrgField::Country => &mut self.country,
            OrgField::ContactName => &mut self.contact_name,
            OrgField::ContactEmail => &mut self.contact_email,
            OrgField::ContactPhone => &mut self.contact_phone,
        }
    }

    /// Overwrite every editable attribute from an update body.
    pub fn apply(&mut self, body: &UpdateOrganizationBody) {
        for field in OrgField::ALL {
            *self.get_mut(field) = body.get(field).trim().to_string();
        }
    }

    pub fn is_owned_by(&self, user: &User) -> bool {
        self.owner.as_ref().is_some_and(|owner| owner.id == user.id)
    }
}

/// Editable organization attributes, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrgField {
    LegalName,
    WebsiteUrl,
    StreetAddress,
    City,
    Region,
    MailCode,
    Country,
    ContactName,
    ContactEmail,
    ContactPhone,
}

impl OrgField {
    pub const COUNT: usize = 10;

    pub const ALL: [OrgField; Self::COUNT] = [
        Self::LegalName,
        Self::WebsiteUrl,
        Self::StreetAddress,
        Self::City,
        Self::Region,
        Self::MailCode,
        Self::Country,
        Self::ContactName,
        Self::ContactEmail,
        Self::ContactPhone,
    ];

    /// Position in [`OrgField::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look a field up by its wire name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.wire_name().eq_ignore_ascii_case(s))
    }

    pub fn wire_name(self) -> &'static str {
        match self {
            Self::LegalName => "legalName",
            Self::WebsiteUrl => "websiteUrl",
            Self::StreetAddress => "streetAddress",
            Self::City => "city",
            Self::Region => "region",
            Self::MailCode => "mailCode",
            Self::Country => "country",
            Self::ContactName => "contactName",
            Self::ContactEmail => "contactEmail",
            Self::ContactPhone => "contactPhone",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::LegalName => "Legal Name",
            Self::WebsiteUrl => "Website URL",
            Self::StreetAddress => "Street Address",
            Self::City => "City",
            Self::Region => "Province/State",
            Self::MailCode => "Postal/ZIP Code",
            Self::Country => "Country",
            Self::ContactName => "Contact Name",
            Self::ContactEmail => "Contact Email",
            Self::ContactPhone => "Contact Phone Number",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, Self::LegalName | Self::ContactEmail)
    }
}

impl fmt::Display for OrgField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrganizationBody {
    pub values: BTreeMap<OrgField, String>,
    pub logo_image_file: Option<Uuid>,
}

impl UpdateOrganizationBody {
    /// Empty string for fields the body does not carry.
    pub fn get(&self, field: OrgField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(mut self, field: OrgField, value: impl Into<String>) -> Self {
        self.values.insert(field, value.into());
        self
    }
}

/// Why an update was rejected: per-field messages plus general ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateErrors {
    pub fields: BTreeMap<OrgField, Vec<String>>,
    pub general: Vec<String>,
}

impl UpdateErrors {
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            fields: BTreeMap::new(),
            general: vec![message.into()],
        }
    }

    pub fn for_field(&self, field: OrgField) -> &[String] {
        self.fields.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.general.is_empty() && self.fields.values().all(Vec::is_empty)
    }
}
