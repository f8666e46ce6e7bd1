use serde::{Deserialize, Serialize};

/// Postal address owned by a [`Member`](super::Member)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub unit_number: Option<String>,
    pub building_number: String,
    pub street: String,
    pub postcode: String,
    pub commune: String,
    pub country: String,
}

impl Address {
    pub fn new(
        unit_number: Option<String>,
        building_number: String,
        street: String,
        postcode: String,
        commune: String,
        country: String,
    ) -> Self {
        Self {
            unit_number,
            building_number,
            street,
            postcode,
            commune,
            country,
        }
    }
}
