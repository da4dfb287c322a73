//! Organization field validators.
//!
//! Shared by the form component (client side) and the in-memory API
//! (server side), so both reject the same input with the same messages.

use std::collections::BTreeMap;

use super::types::{OrgField, UpdateErrors, UpdateOrganizationBody};
use crate::validation::Validation;

pub const MAX_TEXT_LEN: usize = 100;

/// Error messages for one field value; empty when the value is acceptable.
pub fn validate_field(field: OrgField, value: &str) -> Vec<String> {
    let value = value.trim();
    match field {
        OrgField::LegalName => validate_required_text(field, value),
        OrgField::ContactEmail => validate_email(value),
        OrgField::WebsiteUrl => validate_url(value),
        _ => validate_optional_text(field, value),
    }
}

pub fn validate_update_body(body: &UpdateOrganizationBody) -> Validation<(), UpdateErrors> {
    let fields: BTreeMap<OrgField, Vec<String>> = OrgField::ALL
        .into_iter()
        .map(|field| (field, validate_field(field, body.get(field))))
        .filter(|(_, errors)| !errors.is_empty())
        .collect();

    if fields.is_empty() {
        Validation::Valid(())
    } else {
        Validation::Invalid(UpdateErrors {
            fields,
            general: Vec::new(),
        })
    }
}

fn validate_required_text(field: OrgField, value: &str) -> Vec<String> {
    if value.is_empty() {
        return vec![format!("{} is required.", field.label())];
    }
    validate_optional_text(field, value)
}

fn validate_optional_text(field: OrgField, value: &str) -> Vec<String> {
    if value.chars().count() > MAX_TEXT_LEN {
        vec![format!(
            "{} must be at most {} characters long.",
            field.label(),
            MAX_TEXT_LEN
        )]
    } else {
        Vec::new()
    }
}

fn validate_email(value: &str) -> Vec<String> {
    if value.is_empty() {
        return vec!["Contact Email is required.".to_string()];
    }
    let well_formed = value.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty()
            && !domain.contains('@')
            && domain
                .split_once('.')
                .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
    });
    if well_formed {
        validate_optional_text(OrgField::ContactEmail, value)
    } else {
        vec!["Please enter a valid email address.".to_string()]
    }
}

fn validate_url(value: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    if value.starts_with("http://") || value.starts_with("https://") {
        validate_optional_text(OrgField::WebsiteUrl, value)
    } else {
        vec!["Please enter a valid URL starting with http:// or https://.".to_string()]
    }
}
