//! Client: a record scoped to exactly one therapist.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;
use crate::mapping::{overwrite, overwrite_some, Merge};
use crate::validation::{check_email, check_name, check_optional_email, Validate, ValidationErrors};

pub const MSG_GENDER: &str = "invalid gender! must be male or female";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ValidationErrors;

    /// Exact lowercase match only.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(ValidationErrors::single("gender", MSG_GENDER)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Client {
    pub id: Option<Uuid>,
    /// Owning therapist. Set once when the client is added.
    pub therapist_id: Option<Uuid>,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub job: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub job: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub gender: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientUpdateRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub job: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub gender: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientResponse {
    pub id: Uuid,
    pub therapist_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub job: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
}

impl ClientRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self { name: Some(name.into()), email: Some(email.into()), ..Default::default() }
    }
}

fn check_gender(errors: &mut ValidationErrors, gender: Option<&str>) {
    if let Some(g) = gender {
        if g.parse::<Gender>().is_err() {
            errors.push("gender", MSG_GENDER);
        }
    }
}

fn parse_gender(gender: Option<&str>) -> Result<Option<Gender>, ModelError> {
    gender.map(str::parse::<Gender>).transpose().map_err(ModelError::from)
}

impl Validate for ClientRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_name(&mut errors, self.name.as_deref());
        check_email(&mut errors, self.email.as_deref());
        check_gender(&mut errors, self.gender.as_deref());
        errors.into_result()
    }
}

impl Validate for ClientUpdateRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_optional_email(&mut errors, self.email.as_deref());
        check_gender(&mut errors, self.gender.as_deref());
        errors.into_result()
    }
}

impl TryFrom<ClientRequest> for Client {
    type Error = ModelError;

    fn try_from(req: ClientRequest) -> Result<Self, Self::Error> {
        req.validate()?;
        Ok(Self {
            id: None,
            therapist_id: None,
            gender: parse_gender(req.gender.as_deref())?,
            name: req.name.unwrap_or_default(),
            email: req.email.unwrap_or_default(),
            phone_number: req.phone_number,
            address: req.address,
            job: req.job,
            birth_date: req.birth_date,
        })
    }
}

impl Merge<Client> for ClientUpdateRequest {
    fn merge_into(self, target: &mut Client) -> Result<(), ModelError> {
        self.validate()?;
        let gender = parse_gender(self.gender.as_deref())?;
        overwrite(&mut target.name, self.name);
        overwrite(&mut target.email, self.email);
        overwrite_some(&mut target.phone_number, self.phone_number);
        overwrite_some(&mut target.address, self.address);
        overwrite_some(&mut target.job, self.job);
        overwrite_some(&mut target.birth_date, self.birth_date);
        overwrite_some(&mut target.gender, gender);
        Ok(())
    }
}

impl TryFrom<&Client> for ClientResponse {
    type Error = ModelError;

    fn try_from(c: &Client) -> Result<Self, Self::Error> {
        Ok(Self {
            id: c.id.ok_or_else(|| ModelError::missing("client", "id"))?,
            therapist_id: c.therapist_id.ok_or_else(|| ModelError::missing("client", "therapist id"))?,
            name: c.name.clone(),
            email: c.email.clone(),
            phone_number: c.phone_number.clone(),
            address: c.address.clone(),
            job: c.job.clone(),
            birth_date: c.birth_date,
            gender: c.gender,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::to_response;
    use crate::validation::{FieldError, MSG_EMAIL, MSG_NOT_BLANK};

    fn mariam() -> Client {
        Client {
            id: Some(Uuid::new_v4()),
            therapist_id: Some(Uuid::new_v4()),
            name: "Mariam".into(),
            email: "mariam@test.com".into(),
            phone_number: Some("+2012345987".into()),
            address: Some("Cairo".into()),
            job: None,
            birth_date: NaiveDate::from_ymd_opt(1990, 4, 12),
            gender: Some(Gender::Female),
        }
    }

    #[test]
    fn gender_accepts_exact_lowercase_only() {
        assert_eq!("male".parse::<Gender>().ok(), Some(Gender::Male));
        assert_eq!("female".parse::<Gender>().ok(), Some(Gender::Female));
        assert!("Female".parse::<Gender>().is_err());
        assert!("other".parse::<Gender>().is_err());
    }

    #[test]
    fn request_deserializes_camel_case() -> anyhow::Result<()> {
        let req: ClientRequest = serde_json::from_value(serde_json::json!({
            "name": "Mariam",
            "email": "mariam@test.com",
            "phoneNumber": "+2012345987",
            "birthDate": "1990-04-12",
            "gender": "female"
        }))?;
        let c = Client::try_from(req)?;
        assert_eq!(c.phone_number.as_deref(), Some("+2012345987"));
        assert_eq!(c.birth_date, NaiveDate::from_ymd_opt(1990, 4, 12));
        assert_eq!(c.gender, Some(Gender::Female));
        assert_eq!(c.id, None);
        assert_eq!(c.therapist_id, None);
        Ok(())
    }

    #[test]
    fn invalid_request_lists_every_field() {
        let req = ClientRequest { gender: Some("unknown".into()), ..ClientRequest::new("", "mariam.com") };
        let ModelError::Validation(errors) = Client::try_from(req).unwrap_err() else {
            panic!("expected validation error")
        };
        assert_eq!(
            errors.into_errors(),
            vec![
                FieldError::new("name", MSG_NOT_BLANK),
                FieldError::new("email", MSG_EMAIL),
                FieldError::new("gender", MSG_GENDER),
            ]
        );
    }

    #[test]
    fn empty_update_is_identity() -> anyhow::Result<()> {
        let original = mariam();
        let mut merged = original.clone();
        ClientUpdateRequest::default().merge_into(&mut merged)?;
        assert_eq!(merged, original);
        Ok(())
    }

    #[test]
    fn update_overrides_name_only() -> anyhow::Result<()> {
        let original = mariam();
        let mut merged = original.clone();
        ClientUpdateRequest { name: Some("Mariam K.".into()), ..Default::default() }.merge_into(&mut merged)?;
        assert_eq!(merged.name, "Mariam K.");
        assert_eq!(Client { name: original.name.clone(), ..merged }, original);
        Ok(())
    }

    #[test]
    fn update_with_bad_gender_is_rejected_untouched() {
        let original = mariam();
        let mut merged = original.clone();
        let upd = ClientUpdateRequest { job: Some("Engineer".into()), gender: Some("x".into()), ..Default::default() };
        assert!(matches!(upd.merge_into(&mut merged), Err(ModelError::Validation(_))));
        assert_eq!(merged, original);
    }

    #[test]
    fn response_serializes_every_contract_field() -> anyhow::Result<()> {
        let c = mariam();
        let view: ClientResponse = to_response(&c)?;
        let v = serde_json::to_value(&view)?;
        assert_eq!(v["therapistId"], serde_json::json!(c.therapist_id));
        assert_eq!(v["gender"], "female");
        assert_eq!(v["birthDate"], "1990-04-12");
        assert!(v["job"].is_null());
        Ok(())
    }

    #[test]
    fn response_without_owner_is_a_mapping_error() {
        let c = Client { therapist_id: None, ..mariam() };
        assert!(matches!(ClientResponse::try_from(&c), Err(ModelError::Mapping(_))));
    }
}
