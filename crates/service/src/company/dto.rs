use chrono::NaiveDate;
use models::company::Sector;
use serde::{de, Deserialize, Deserializer, Serialize};

/// Company as it crosses the service boundary.
///
/// `id` is `None` until the record has been stored. `sector` may be `None`
/// (or a blank string on the wire); the service fills in its default on save.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyDto {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub ceo: Option<String>,
    #[serde(default)]
    pub foundation_date: Option<NaiveDate>,
    #[serde(default)]
    pub revenue: Option<i64>,
    #[serde(default, deserialize_with = "blank_sector_as_none")]
    pub sector: Option<Sector>,
}

fn blank_sector_as_none<'de, D>(deserializer: D) -> Result<Option<Sector>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(name) => name.parse().map(Some).map_err(de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_or_missing_sector_deserializes_as_none() {
        let missing: CompanyDto = serde_json::from_str(r#"{"name":"Acme"}"#).unwrap();
        assert_eq!(missing.sector, None);
        let blank: CompanyDto = serde_json::from_str(r#"{"name":"Acme","sector":"  "}"#).unwrap();
        assert_eq!(blank.sector, None);
        let null: CompanyDto = serde_json::from_str(r#"{"name":"Acme","sector":null}"#).unwrap();
        assert_eq!(null.sector, None);
    }

    #[test]
    fn sector_and_date_parse_from_wire() {
        let dto: CompanyDto = serde_json::from_str(
            r#"{"id":4,"name":"Globex","foundation_date":"1989-12-17","revenue":42,"sector":"ENERGY"}"#,
        )
        .unwrap();
        assert_eq!(dto.id, Some(4));
        assert_eq!(dto.foundation_date, NaiveDate::from_ymd_opt(1989, 12, 17));
        assert_eq!(dto.sector, Some(Sector::Energy));
    }

    #[test]
    fn unknown_sector_is_rejected() {
        let err = serde_json::from_str::<CompanyDto>(r#"{"name":"Acme","sector":"SPACE"}"#).unwrap_err();
        assert!(err.to_string().contains("unknown sector"));
    }
}
