//! Explicit entity/DTO conversions.
//!
//! Request payloads become entities through `TryFrom<Request> for Entity`,
//! entities are projected through `TryFrom<&Entity> for Response`, and update
//! payloads are applied with [`Merge`]. Every pair is written out field by
//! field, so a renamed or retyped field fails to compile instead of failing at
//! runtime.

use crate::errors::ModelError;

/// Applies the present fields of an update payload onto an existing entity.
///
/// Absent fields leave the target untouched. The payload is validated before
/// any field is written, so a rejected payload never leaves a half-merged
/// entity behind.
pub trait Merge<E> {
    fn merge_into(self, target: &mut E) -> Result<(), ModelError>;
}

/// Builds a fresh entity from an inbound payload.
pub fn to_entity<R, E>(request: R) -> Result<E, ModelError>
where
    E: TryFrom<R, Error = ModelError>,
{
    E::try_from(request)
}

/// Projects an entity into its outward-facing shape.
pub fn to_response<'a, E, R>(entity: &'a E) -> Result<R, ModelError>
where
    R: TryFrom<&'a E, Error = ModelError>,
{
    R::try_from(entity)
}

pub fn map_all<'a, E, R, I>(entities: I) -> Result<Vec<R>, ModelError>
where
    E: 'a,
    I: IntoIterator<Item = &'a E>,
    R: TryFrom<&'a E, Error = ModelError>,
{
    entities.into_iter().map(R::try_from).collect()
}

pub(crate) fn overwrite<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

pub(crate) fn overwrite_some<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrite_keeps_existing_on_none() {
        let mut name = "Y".to_string();
        overwrite(&mut name, None);
        assert_eq!(name, "Y");
        overwrite(&mut name, Some("X".to_string()));
        assert_eq!(name, "X");
    }

    #[test]
    fn overwrite_some_never_clears() {
        let mut phone = Some("+20".to_string());
        overwrite_some(&mut phone, None);
        assert_eq!(phone.as_deref(), Some("+20"));
        overwrite_some(&mut phone, Some("+44".into()));
        assert_eq!(phone.as_deref(), Some("+44"));
    }
}
