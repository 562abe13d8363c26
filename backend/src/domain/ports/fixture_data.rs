//! Deterministic records served by the fixture ports.
//!
//! The fixture estate has one administrator owning house A-1, an empty
//! house A-2, and a single "Standard" house type. Identifiers are constants
//! so HTTP tests can refer to them.

use uuid::{Uuid, uuid};

use crate::domain::{
    House, HouseId, HouseOwner, HouseType, HouseTypeId, HouseTypeSummary, Role, User, UserId,
};

/// Email accepted by the fixture login.
pub const FIXTURE_ADMIN_EMAIL: &str = "admin@example.com";
/// Password accepted by the fixture login.
pub const FIXTURE_ADMIN_PASSWORD: &str = "password";

const ADMIN_ID: Uuid = uuid!("123e4567-e89b-12d3-a456-426614174000");
const STANDARD_TYPE_ID: Uuid = uuid!("0e6b3c0a-6a7c-4b7e-9f51-3a1e2c4d5f60");
const OCCUPIED_HOUSE_ID: Uuid = uuid!("5b0f6a52-2d0e-4f38-9a61-0c4b4f1f7e01");
const AVAILABLE_HOUSE_ID: Uuid = uuid!("5b0f6a52-2d0e-4f38-9a61-0c4b4f1f7e02");

/// Monthly fee of the fixture house type.
pub const FIXTURE_STANDARD_PRICE: f64 = 500_000.0;

/// The fixture administrator.
#[must_use]
pub fn fixture_admin() -> User {
    User {
        id: UserId::from_uuid(ADMIN_ID),
        name: "Admin Perumahan".to_owned(),
        email: FIXTURE_ADMIN_EMAIL.to_owned(),
        role: Role::Admin,
        phone: None,
        is_first_login: false,
    }
}

/// The single fixture house type.
#[must_use]
pub fn fixture_house_type() -> HouseType {
    HouseType {
        id: HouseTypeId::from_uuid(STANDARD_TYPE_ID),
        type_name: "Standard".to_owned(),
        price: FIXTURE_STANDARD_PRICE,
        description: Some("Two bedrooms, one bathroom".to_owned()),
    }
}

pub(crate) fn fixture_house_type_summary() -> HouseTypeSummary {
    let house_type = fixture_house_type();
    HouseTypeSummary {
        id: house_type.id,
        type_name: house_type.type_name,
        price: house_type.price,
    }
}

/// Every fixture house: A-1 occupied, A-2 available.
#[must_use]
pub fn fixture_houses() -> Vec<House> {
    let admin = fixture_admin();
    vec![
        House {
            id: HouseId::from_uuid(OCCUPIED_HOUSE_ID),
            house_number: "1".to_owned(),
            block: "A".to_owned(),
            house_type: fixture_house_type_summary(),
            owner: Some(HouseOwner {
                id: admin.id,
                name: admin.name,
            }),
        },
        House {
            id: HouseId::from_uuid(AVAILABLE_HOUSE_ID),
            house_number: "2".to_owned(),
            block: "A".to_owned(),
            house_type: fixture_house_type_summary(),
            owner: None,
        },
    ]
}
