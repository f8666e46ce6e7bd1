//! Typed view-model of the registration form
//!
//! The page binds its inputs to a [`RegistrationFields`] at render time, so
//! validation and object construction never look anything up by DOM id.

use crate::domain::{Address, Member};

/// One input of the registration form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Username,
    LastName,
    FirstName,
    PhoneNumber,
    Street,
    BuildingNumber,
    UnitNumber,
    Postcode,
    Commune,
    Country,
    Password,
}

impl Field {
    /// DOM id of the input element
    pub fn id(&self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::LastName => "lastname",
            Field::FirstName => "firstname",
            Field::PhoneNumber => "phone_number",
            Field::Street => "street",
            Field::BuildingNumber => "building_number",
            Field::UnitNumber => "unit_number",
            Field::Postcode => "postcode",
            Field::Commune => "commune",
            Field::Country => "country",
            Field::Password => "password",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Username => "Pseudonyme",
            Field::LastName => "Nom",
            Field::FirstName => "Prénom",
            Field::PhoneNumber => "Numéro de téléphone",
            Field::Street => "Rue",
            Field::BuildingNumber => "Numéro",
            Field::UnitNumber => "Boîte",
            Field::Postcode => "Code postal",
            Field::Commune => "Commune",
            Field::Country => "Pays",
            Field::Password => "Mot de passe",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Username => "pseudonyme",
            Field::LastName => "nom",
            Field::FirstName => "prénom",
            Field::PhoneNumber => "numéro de téléphone",
            Field::Street => "rue",
            Field::BuildingNumber => "numéro",
            Field::UnitNumber => "boîte",
            Field::Postcode => "CP",
            Field::Commune => "commune",
            Field::Country => "pays",
            Field::Password => "mot de passe",
        }
    }

    /// HTML input type
    pub fn input_type(&self) -> &'static str {
        match self {
            Field::Password => "password",
            _ => "text",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Field::PhoneNumber | Field::UnitNumber)
    }

    pub fn variants() -> &'static [Field] {
        &[
            Field::Username,
            Field::LastName,
            Field::FirstName,
            Field::PhoneNumber,
            Field::Street,
            Field::BuildingNumber,
            Field::UnitNumber,
            Field::Postcode,
            Field::Commune,
            Field::Country,
            Field::Password,
        ]
    }

    /// Required fields in the order they are checked for emptiness
    pub fn required() -> &'static [Field] {
        &[
            Field::Username,
            Field::LastName,
            Field::FirstName,
            Field::Password,
            Field::BuildingNumber,
            Field::Street,
            Field::Postcode,
            Field::Commune,
            Field::Country,
        ]
    }
}

/// Raw, untrimmed values of every input
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationFields {
    pub username: String,
    pub last_name: String,
    pub first_name: String,
    pub phone_number: String,
    pub street: String,
    pub building_number: String,
    pub unit_number: String,
    pub postcode: String,
    pub commune: String,
    pub country: String,
    pub password: String,
}

impl RegistrationFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::LastName => &self.last_name,
            Field::FirstName => &self.first_name,
            Field::PhoneNumber => &self.phone_number,
            Field::Street => &self.street,
            Field::BuildingNumber => &self.building_number,
            Field::UnitNumber => &self.unit_number,
            Field::Postcode => &self.postcode,
            Field::Commune => &self.commune,
            Field::Country => &self.country,
            Field::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Username => &mut self.username,
            Field::LastName => &mut self.last_name,
            Field::FirstName => &mut self.first_name,
            Field::PhoneNumber => &mut self.phone_number,
            Field::Street => &mut self.street,
            Field::BuildingNumber => &mut self.building_number,
            Field::UnitNumber => &mut self.unit_number,
            Field::Postcode => &mut self.postcode,
            Field::Commune => &mut self.commune,
            Field::Country => &mut self.country,
            Field::Password => &mut self.password,
        };
        *slot = value.into();
    }

    /// Builder-style [`set`](Self::set)
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn trimmed(&self, field: Field) -> &str {
        self.get(field).trim()
    }

    fn optional(&self, field: Field) -> Option<String> {
        let value = self.trimmed(field);
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    /// Build the address, then the member owning it, from trimmed values.
    ///
    /// Does not validate; callers run the [`RuleSet`](crate::RuleSet) first.
    pub fn to_member(&self) -> Member {
        let address = Address::new(
            self.optional(Field::UnitNumber),
            self.trimmed(Field::BuildingNumber).to_string(),
            self.trimmed(Field::Street).to_string(),
            self.trimmed(Field::Postcode).to_string(),
            self.trimmed(Field::Commune).to_string(),
            self.trimmed(Field::Country).to_string(),
        );

        Member::new(
            self.trimmed(Field::Username).to_string(),
            self.trimmed(Field::LastName).to_string(),
            self.trimmed(Field::FirstName).to_string(),
            self.trimmed(Field::Password).to_string(),
            self.optional(Field::PhoneNumber),
            address,
        )
    }
}
