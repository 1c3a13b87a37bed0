use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct TherapistRequestDoc {
    /// Canonical lowercase UUID, optional.
    pub practice_id: Option<String>,
    pub name: String,
    pub email: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct TherapistUpdateRequestDoc {
    pub practice_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct TherapistResponseDoc {
    pub id: String,
    pub practice_id: Option<String>,
    pub name: String,
    pub email: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ClientRequestDoc {
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub job: Option<String>,
    /// `YYYY-MM-DD`
    pub birth_date: Option<String>,
    /// `male` or `female`
    pub gender: Option<String>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ClientUpdateRequestDoc {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub job: Option<String>,
    pub birth_date: Option<String>,
    pub gender: Option<String>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ClientResponseDoc {
    pub id: String,
    pub therapist_id: String,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub job: Option<String>,
    pub birth_date: Option<String>,
    pub gender: Option<String>,
}

/// `code` is the offending field; absent for not-found and malformed input.
#[derive(ToSchema)]
pub struct ErrorItemDoc { pub code: Option<String>, pub message: String }

#[derive(ToSchema)]
pub struct ErrorResponseDoc { pub errors: Vec<ErrorItemDoc> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::therapists::create,
        crate::routes::therapists::list,
        crate::routes::therapists::get,
        crate::routes::therapists::update,
        crate::routes::clients::create,
        crate::routes::clients::list,
        crate::routes::clients::get,
        crate::routes::clients::update,
        crate::routes::clients::delete,
        crate::routes::clients::delete_all,
    ),
    components(
        schemas(
            HealthResponse,
            TherapistRequestDoc,
            TherapistUpdateRequestDoc,
            TherapistResponseDoc,
            ClientRequestDoc,
            ClientUpdateRequestDoc,
            ClientResponseDoc,
            ErrorItemDoc,
            ErrorResponseDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "therapists"),
        (name = "clients")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for p in [
            "/health",
            "/therapists",
            "/therapists/{therapist_id}",
            "/therapists/{therapist_id}/clients",
            "/therapists/{therapist_id}/clients/{client_id}",
        ] {
            assert!(paths.iter().any(|k| k.as_str() == p), "missing {p}");
        }
    }

    #[test]
    fn error_responses_carry_schemas() -> anyhow::Result<()> {
        let doc = serde_json::to_value(ApiDoc::openapi())?;
        let schemas = &doc["components"]["schemas"];
        assert!(schemas["ErrorItemDoc"].is_object());
        assert!(schemas["ErrorResponseDoc"]["properties"]["errors"].is_object());

        let create = &doc["paths"]["/therapists"]["post"]["responses"];
        assert_eq!(
            create["400"]["content"]["application/json"]["schema"]["$ref"],
            "#/components/schemas/ErrorResponseDoc"
        );
        let get = &doc["paths"]["/therapists/{therapist_id}/clients/{client_id}"]["get"]["responses"];
        assert_eq!(
            get["404"]["content"]["application/json"]["schema"]["$ref"],
            "#/components/schemas/ErrorItemDoc"
        );
        Ok(())
    }
}
