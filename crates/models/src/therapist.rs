//! Therapist: the top-level tenant that clients belong to.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;
use crate::mapping::{overwrite, overwrite_some, Merge};
use crate::validation::{
    check_email, check_name, check_optional_email, check_optional_uuid, Validate,
    ValidationErrors, MSG_UUID,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Therapist {
    /// Assigned by the store on first save, never changed afterwards.
    pub id: Option<Uuid>,
    pub practice_id: Option<Uuid>,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TherapistRequest {
    #[serde(default)]
    pub practice_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TherapistUpdateRequest {
    #[serde(default)]
    pub practice_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TherapistResponse {
    pub id: Uuid,
    pub practice_id: Option<Uuid>,
    pub name: String,
    pub email: String,
}

impl TherapistRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self { practice_id: None, name: Some(name.into()), email: Some(email.into()) }
    }
}

impl Validate for TherapistRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_optional_uuid(&mut errors, "practiceId", self.practice_id.as_deref());
        check_name(&mut errors, self.name.as_deref());
        check_email(&mut errors, self.email.as_deref());
        errors.into_result()
    }
}

impl Validate for TherapistUpdateRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_optional_uuid(&mut errors, "practiceId", self.practice_id.as_deref());
        check_optional_email(&mut errors, self.email.as_deref());
        errors.into_result()
    }
}

fn parse_practice_id(value: Option<&str>) -> Result<Option<Uuid>, ModelError> {
    value
        .map(|v| Uuid::parse_str(v).map_err(|_| ValidationErrors::single("practiceId", MSG_UUID)))
        .transpose()
        .map_err(ModelError::from)
}

impl TryFrom<TherapistRequest> for Therapist {
    type Error = ModelError;

    fn try_from(req: TherapistRequest) -> Result<Self, Self::Error> {
        req.validate()?;
        Ok(Self {
            id: None,
            practice_id: parse_practice_id(req.practice_id.as_deref())?,
            name: req.name.unwrap_or_default(),
            email: req.email.unwrap_or_default(),
        })
    }
}

impl Merge<Therapist> for TherapistUpdateRequest {
    fn merge_into(self, target: &mut Therapist) -> Result<(), ModelError> {
        self.validate()?;
        let practice_id = parse_practice_id(self.practice_id.as_deref())?;
        overwrite_some(&mut target.practice_id, practice_id);
        overwrite(&mut target.name, self.name);
        overwrite(&mut target.email, self.email);
        Ok(())
    }
}

impl TryFrom<&Therapist> for TherapistResponse {
    type Error = ModelError;

    fn try_from(t: &Therapist) -> Result<Self, Self::Error> {
        Ok(Self {
            id: t.id.ok_or_else(|| ModelError::missing("therapist", "id"))?,
            practice_id: t.practice_id,
            name: t.name.clone(),
            email: t.email.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::{map_all, to_entity, to_response};
    use crate::validation::{FieldError, MSG_EMAIL, MSG_NOT_BLANK};

    const PRACTICE: &str = "3f2b8c1e-9d4a-4c6b-8e2f-1a2b3c4d5e6f";

    fn stored() -> Therapist {
        Therapist {
            id: Some(Uuid::new_v4()),
            practice_id: Some(Uuid::parse_str(PRACTICE).unwrap()),
            name: "Y".into(),
            email: "y@test.com".into(),
        }
    }

    #[test]
    fn request_to_entity_copies_fields() -> anyhow::Result<()> {
        let req = TherapistRequest {
            practice_id: Some(PRACTICE.into()),
            ..TherapistRequest::new("Ahmed", "ahmed@test.com")
        };
        let t: Therapist = to_entity(req)?;
        assert_eq!(t.id, None);
        assert_eq!(t.practice_id.map(|p| p.to_string()).as_deref(), Some(PRACTICE));
        assert_eq!(t.name, "Ahmed");
        assert_eq!(t.email, "ahmed@test.com");
        Ok(())
    }

    #[test]
    fn invalid_request_reports_each_field() {
        let req = TherapistRequest {
            practice_id: Some("not-a-uuid".into()),
            name: Some(" ".into()),
            email: Some("ahmed.com".into()),
        };
        let err = Therapist::try_from(req).unwrap_err();
        let ModelError::Validation(errors) = err else { panic!("expected validation error") };
        assert_eq!(
            errors.errors(),
            &[
                FieldError::new("practiceId", MSG_UUID),
                FieldError::new("name", MSG_NOT_BLANK),
                FieldError::new("email", MSG_EMAIL),
            ]
        );
    }

    #[test]
    fn null_required_fields_are_blank() -> anyhow::Result<()> {
        let req: TherapistRequest = serde_json::from_str(r#"{"name": null, "email": null}"#)?;
        let ModelError::Validation(errors) = Therapist::try_from(req).unwrap_err() else {
            panic!("expected validation error")
        };
        assert_eq!(
            errors.errors(),
            &[FieldError::new("name", MSG_NOT_BLANK), FieldError::new("email", MSG_NOT_BLANK)]
        );
        Ok(())
    }

    #[test]
    fn merge_with_all_fields_absent_is_identity() -> anyhow::Result<()> {
        let original = stored();
        let mut merged = original.clone();
        TherapistUpdateRequest::default().merge_into(&mut merged)?;
        assert_eq!(merged, original);
        Ok(())
    }

    #[test]
    fn merge_overrides_only_present_fields() -> anyhow::Result<()> {
        let original = stored();
        let mut merged = original.clone();
        TherapistUpdateRequest { name: Some("X".into()), ..Default::default() }.merge_into(&mut merged)?;
        assert_eq!(merged.name, "X");
        assert_eq!(merged.email, original.email);
        assert_eq!(merged.practice_id, original.practice_id);
        assert_eq!(merged.id, original.id);
        Ok(())
    }

    #[test]
    fn rejected_merge_leaves_entity_untouched() {
        let original = stored();
        let mut merged = original.clone();
        let upd = TherapistUpdateRequest { name: Some("X".into()), email: Some("bad".into()), ..Default::default() };
        assert!(upd.merge_into(&mut merged).is_err());
        assert_eq!(merged, original);
    }

    #[test]
    fn response_requires_an_id() {
        let mut t = stored();
        t.id = None;
        let err = to_response::<_, TherapistResponse>(&t).unwrap_err();
        assert!(matches!(err, ModelError::Mapping(_)));
    }

    #[test]
    fn response_uses_camel_case_keys() -> anyhow::Result<()> {
        let t = stored();
        let views: Vec<TherapistResponse> = map_all([&t])?;
        let v = serde_json::to_value(&views[0])?;
        assert_eq!(v["id"], serde_json::json!(t.id));
        assert_eq!(v["practiceId"], serde_json::json!(PRACTICE));
        assert_eq!(v["name"], "Y");
        Ok(())
    }
}
