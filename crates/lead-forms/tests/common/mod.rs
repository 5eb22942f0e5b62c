#![allow(dead_code)]

use lead_forms::{Field, FormRecord, SolutionType};

pub const BASE_FIELDS: [Field; 9] = [
    Field::Salutation,
    Field::FirstName,
    Field::LastName,
    Field::Email,
    Field::Mobile,
    Field::Country,
    Field::Zipcode,
    Field::HearAbout,
    Field::SolutionType,
];

pub const BRANCH_FIELDS: [Field; 5] = [
    Field::HomeCapacity,
    Field::CommercialUnit,
    Field::CommercialCapacity,
    Field::ModuleType,
    Field::ModuleQuantity,
];

/// A record with every base field filled in validly and no branch selected.
pub fn base_record() -> FormRecord {
    FormRecord::from_pairs([
        "salutation=Dr.",
        "firstName=Anita",
        "lastName=D'Souza",
        "email=anita.dsouza@example.in",
        "mobile=919876543210",
        "country=India",
        "zipcode=560001",
        "hearAbout=Trade Show",
        "company=Sunrise Textiles",
        "description=Rooftop for the warehouse",
    ])
    .unwrap_or_else(|e| panic!("Failed to build base record: {e}"))
}

/// A fully valid record for the given branch.
pub fn valid_record(branch: SolutionType) -> FormRecord {
    let mut record = base_record();
    record.set(Field::SolutionType, branch.as_str());
    match branch {
        SolutionType::Home => record.set(Field::HomeCapacity, "4.5"),
        SolutionType::CommercialIndustrial => {
            record.set(Field::CommercialUnit, "MW");
            record.set(Field::CommercialCapacity, "2");
        }
        SolutionType::OnlyModule => {
            record.set(Field::ModuleType, "DCR");
            record.set(Field::ModuleQuantity, "5");
        }
    }
    record
}
