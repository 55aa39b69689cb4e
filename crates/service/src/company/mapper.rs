//! Field-by-field conversions between the stored entity and the DTO.
//! No defaulting happens here; see `CompanyService::save_company`.

use models::company;
use sea_orm::ActiveValue::{NotSet, Set};

use super::dto::CompanyDto;

impl From<company::Model> for CompanyDto {
    fn from(m: company::Model) -> Self {
        Self {
            id: Some(m.id),
            name: m.name,
            country: m.country,
            ceo: m.ceo,
            foundation_date: m.foundation_date,
            revenue: m.revenue,
            sector: Some(m.sector),
        }
    }
}

/// An absent id or sector stays `NotSet`, so the store decides insert vs update
/// from the id alone.
impl From<CompanyDto> for company::ActiveModel {
    fn from(dto: CompanyDto) -> Self {
        Self {
            id: dto.id.map_or(NotSet, Set),
            name: Set(dto.name),
            country: Set(dto.country),
            ceo: Set(dto.ceo),
            foundation_date: Set(dto.foundation_date),
            revenue: Set(dto.revenue),
            sector: dto.sector.map_or(NotSet, Set),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use models::company::Sector;
    use sea_orm::TryIntoModel;

    fn stored() -> company::Model {
        company::Model {
            id: 9,
            name: "Initech".into(),
            country: Some("US".into()),
            ceo: Some("Bill Lumbergh".into()),
            foundation_date: NaiveDate::from_ymd_opt(1996, 2, 19),
            revenue: Some(3_500_000),
            sector: Sector::Technology,
        }
    }

    #[test]
    fn entity_to_dto_copies_every_field() {
        let dto = CompanyDto::from(stored());
        assert_eq!(dto.id, Some(9));
        assert_eq!(dto.name, "Initech");
        assert_eq!(dto.ceo.as_deref(), Some("Bill Lumbergh"));
        assert_eq!(dto.revenue, Some(3_500_000));
        assert_eq!(dto.sector, Some(Sector::Technology));
    }

    #[test]
    fn dto_to_entity_and_back_is_lossless_for_stored_records() {
        let am = company::ActiveModel::from(CompanyDto::from(stored()));
        assert_eq!(am.try_into_model().unwrap(), stored());
    }

    #[test]
    fn dto_without_id_leaves_id_unset() {
        let dto = CompanyDto { name: "New Co".into(), ..Default::default() };
        let am = company::ActiveModel::from(dto);
        assert!(am.id.is_not_set());
        assert!(am.sector.is_not_set());
        assert!(am.name.is_set());
    }
}
