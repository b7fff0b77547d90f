use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Stored inventory item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Assigned by storage on insert
    #[schema(example = 1)]
    pub id_item: i32,
    #[schema(example = "Pen")]
    pub nama_item: String,
    #[schema(example = "pcs")]
    pub unit: String,
    #[schema(example = 10)]
    pub stok: i32,
    #[schema(example = 2.5)]
    pub harga_satuan: f64,
}

impl Item {
    pub fn from_payload(id_item: i32, payload: ItemPayload) -> Self {
        Self {
            id_item,
            nama_item: payload.nama_item,
            unit: payload.unit,
            stok: payload.stok,
            harga_satuan: payload.harga_satuan,
        }
    }
}

/// Request body for create and update.
///
/// Omitted and `null` fields deserialize to their zero value and are then
/// rejected by validation, so every field is effectively required and non-zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct ItemPayload {
    #[serde(deserialize_with = "null_as_zero")]
    #[validate(length(min = 1, code = "required", message = "nama_item is required"))]
    #[schema(example = "Pen")]
    pub nama_item: String,

    #[serde(deserialize_with = "null_as_zero")]
    #[validate(length(min = 1, code = "required", message = "unit is required"))]
    #[schema(example = "pcs")]
    pub unit: String,

    #[serde(deserialize_with = "null_as_zero")]
    #[validate(custom(function = "validate_stok"))]
    #[schema(example = 10)]
    pub stok: i32,

    #[serde(deserialize_with = "null_as_zero")]
    #[validate(custom(function = "validate_harga_satuan"))]
    #[schema(example = 2.5)]
    pub harga_satuan: f64,
}

fn null_as_zero<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn required(message: &'static str) -> ValidationError {
    ValidationError::new("required").with_message(message.into())
}

fn validate_stok(stok: i32) -> Result<(), ValidationError> {
    if stok == 0 {
        return Err(required("stok is required"));
    }
    Ok(())
}

fn validate_harga_satuan(harga_satuan: f64) -> Result<(), ValidationError> {
    if harga_satuan == 0.0 {
        return Err(required("harga_satuan is required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pen() -> ItemPayload {
        ItemPayload {
            nama_item: "Pen".to_string(),
            unit: "pcs".to_string(),
            stok: 10,
            harga_satuan: 2.5,
        }
    }

    #[test]
    fn test_valid_payload() {
        assert!(pen().validate().is_ok());
    }

    #[test]
    fn test_negative_values_are_allowed() {
        let payload = ItemPayload {
            stok: -4,
            harga_satuan: -1.25,
            ..pen()
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_omitted_fields_fail_validation() {
        let payload: ItemPayload = serde_json::from_str(r#"{"nama_item": "Pen"}"#).unwrap();
        assert_eq!(payload.unit, "");
        assert_eq!(payload.stok, 0);

        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("unit"));
        assert!(fields.contains_key("stok"));
        assert!(fields.contains_key("harga_satuan"));
        assert!(!fields.contains_key("nama_item"));
        assert_eq!(fields["unit"][0].code, "required");
    }

    #[test]
    fn test_null_fields_fail_validation_like_omitted() {
        let payload: ItemPayload = serde_json::from_str(
            r#"{"nama_item": "Pen", "unit": null, "stok": null, "harga_satuan": 2.5}"#,
        )
        .unwrap();
        assert_eq!(payload.unit, "");
        assert_eq!(payload.stok, 0);

        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert_eq!(fields["unit"][0].code, "required");
        assert_eq!(fields["stok"][0].code, "required");
        assert!(!fields.contains_key("harga_satuan"));
    }

    #[test]
    fn test_zero_stok_fails_validation() {
        let payload = ItemPayload { stok: 0, ..pen() };
        let errors = payload.validate().unwrap_err();
        assert_eq!(errors.field_errors()["stok"][0].code, "required");
    }

    #[test]
    fn test_zero_price_fails_validation() {
        let payload = ItemPayload {
            harga_satuan: 0.0,
            ..pen()
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("harga_satuan"));
    }

    #[test]
    fn test_from_payload() {
        let item = Item::from_payload(7, pen());
        assert_eq!(item.id_item, 7);
        assert_eq!(item.nama_item, "Pen");
        assert_eq!(item.harga_satuan, 2.5);
    }
}
