use lazy_static::lazy_static;
use regex::Regex;

// Digits are spelled [0-9]: `\d` would accept any Unicode digit.
lazy_static! {
    // +32 (123) 456-7890 style numbers
    pub static ref PHONE_NUMBER: Regex = Regex::new(
        r"^[+]?[(]?[0-9]{3}[)]?[- .]?[0-9]{3}[- .]?[0-9]{4,6}$"
    ).unwrap();

    // Last and first names
    pub static ref LETTERS: Regex = Regex::new(
        r"^[a-zA-Z éàùöèêûî']+$"
    ).unwrap();

    // Street, commune, country
    pub static ref LETTERS_AND_DASH: Regex = Regex::new(
        r"^[a-zA-Z éàùöèê'ûî-]+$"
    ).unwrap();

    // Building number: digits, optionally one trailing letter
    pub static ref HOUSE_NUMBER: Regex = Regex::new(
        r"^[0-9]+[a-zA-Z]?$"
    ).unwrap();

    // Unit number: zero or more house-number groups
    pub static ref UNIT_NUMBER: Regex = Regex::new(
        r"^([0-9]+[a-zA-Z]?)*$"
    ).unwrap();

    pub static ref NUMBERS_AND_DASH: Regex = Regex::new(
        r"^[0-9-]+$"
    ).unwrap();
}
