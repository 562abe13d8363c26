//! Tests for the house catalogue service.

use std::sync::Arc;

use rstest::rstest;

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::{MockHouseRepository, MockHouseTypeRepository, fixture_houses};
use crate::domain::HouseTypeId;
use crate::test_support::FixedClock;

fn make_service(
    houses: MockHouseRepository,
    house_types: MockHouseTypeRepository,
) -> HouseCatalogService<MockHouseRepository, MockHouseTypeRepository> {
    HouseCatalogService::new(
        Arc::new(houses),
        Arc::new(house_types),
        Arc::new(FixedClock::on(2026, 10, 19)),
    )
}

#[tokio::test]
async fn unpaid_houses_use_the_clock_month() {
    let mut houses = MockHouseRepository::new();
    houses
        .expect_list_unpaid()
        .withf(|period| period.year() == 2026 && period.month() == 10)
        .times(1)
        .return_once(|_| {
            Ok(fixture_houses()
                .into_iter()
                .filter(|house| house.owner.is_some())
                .collect())
        });

    let service = make_service(houses, MockHouseTypeRepository::new());
    let unpaid = service
        .unpaid_houses_this_month()
        .await
        .expect("unpaid houses");
    assert_eq!(unpaid.len(), 1);
    assert!(unpaid.iter().all(|house| !house.is_available()));
}

#[tokio::test]
async fn available_houses_delegate_to_unowned_listing() {
    let mut houses = MockHouseRepository::new();
    houses.expect_list_unowned().times(1).return_once(|| Ok(Vec::new()));

    let service = make_service(houses, MockHouseTypeRepository::new());
    assert!(service.available_houses().await.expect("houses").is_empty());
}

#[rstest]
#[case(HouseRepositoryError::connection("refused"), ErrorCode::ServiceUnavailable)]
#[case(HouseRepositoryError::query("syntax"), ErrorCode::InternalError)]
#[case(HouseRepositoryError::missing_reference("house type"), ErrorCode::InvalidRequest)]
#[case(HouseRepositoryError::duplicate("1", "A"), ErrorCode::Conflict)]
#[tokio::test]
async fn create_maps_repository_errors(
    #[case] failure: HouseRepositoryError,
    #[case] expected: ErrorCode,
) {
    let mut houses = MockHouseRepository::new();
    houses
        .expect_create()
        .times(1)
        .return_once(move |_| Err(failure));

    let service = make_service(houses, MockHouseTypeRepository::new());
    let err = service
        .create_house(NewHouse {
            house_number: "1".to_owned(),
            block: "A".to_owned(),
            house_type_id: HouseTypeId::random(),
            owner_id: None,
        })
        .await
        .expect_err("repository failure");
    assert_eq!(err.code(), expected);
}

#[tokio::test]
async fn duplicate_house_type_is_a_conflict() {
    let mut house_types = MockHouseTypeRepository::new();
    house_types
        .expect_create()
        .times(1)
        .return_once(|form| Err(HouseTypeRepositoryError::duplicate(form.type_name.clone())));

    let service = make_service(MockHouseRepository::new(), house_types);
    let err = service
        .create_house_type(HouseTypeForm {
            type_name: "Standard".to_owned(),
            price: 500_000.0,
            description: None,
        })
        .await
        .expect_err("duplicate");
    assert_eq!(err.code(), ErrorCode::Conflict);
    assert_eq!(err.message(), "House type Standard already exists");
}
