//! Fixed option lists offered by the lead form.

use std::fmt;
use std::str::FromStr;

use crate::error::FormError;
use crate::record::Field;

/// Titles offered in the salutation select.
pub const SALUTATIONS: &[&str] = &["Mr.", "Ms.", "Mrs.", "Dr.", "Prof."];

/// Sources offered in the "where did you hear about us" select.
pub const HEAR_ABOUT_SOURCES: &[&str] = &[
    "Web Advertisement",
    "Print Media",
    "Social Media",
    "Search Engine",
    "Trade Show",
    "Employee Referral",
    "External Referral",
    "Tender",
    "Others",
];

/// Capacity units for commercial installations.
pub const COMMERCIAL_UNITS: &[&str] = &["KW", "MW"];

/// Module types for module-only orders.
pub const MODULE_TYPES: &[&str] = &["DCR", "NON DCR"];

/// The solution branch a lead is interested in.
///
/// Each branch activates its own set of required fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolutionType {
    Home,
    CommercialIndustrial,
    OnlyModule,
}

impl SolutionType {
    pub const ALL: [Self; 3] = [Self::Home, Self::CommercialIndustrial, Self::OnlyModule];

    /// Returns the wire value of the branch.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "Home Solution",
            Self::CommercialIndustrial => "Commercial & Industrial Solutions",
            Self::OnlyModule => "Only Module",
        }
    }

    /// Returns the conditional fields this branch makes required.
    pub fn branch_fields(self) -> &'static [Field] {
        match self {
            Self::Home => &[Field::HomeCapacity],
            Self::CommercialIndustrial => &[Field::CommercialUnit, Field::CommercialCapacity],
            Self::OnlyModule => &[Field::ModuleType, Field::ModuleQuantity],
        }
    }

    /// Returns the branch a conditional field belongs to, if any.
    pub fn governing(field: Field) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|branch| branch.branch_fields().contains(&field))
    }

    /// Returns the wire values of every branch.
    pub fn values() -> Vec<&'static str> {
        Self::ALL.iter().map(|b| b.as_str()).collect()
    }
}

impl fmt::Display for SolutionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SolutionType {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|branch| branch.as_str() == s)
            .ok_or_else(|| FormError::UnknownSolutionType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solution_type_parse() {
        assert_eq!(
            "Commercial & Industrial Solutions".parse::<SolutionType>().unwrap(),
            SolutionType::CommercialIndustrial
        );
        assert!("Solar Farm".parse::<SolutionType>().is_err());
    }

    #[test]
    fn test_branches_are_disjoint() {
        for field in Field::ALL {
            let owners = SolutionType::ALL
                .iter()
                .filter(|b| b.branch_fields().contains(&field))
                .count();
            assert!(owners <= 1, "{field} belongs to {owners} branches");
        }
    }

    #[test]
    fn test_governing() {
        assert_eq!(
            SolutionType::governing(Field::ModuleQuantity),
            Some(SolutionType::OnlyModule)
        );
        assert_eq!(SolutionType::governing(Field::Email), None);
    }
}
