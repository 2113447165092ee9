use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilingStatus {
    Single,
    MarriedFilingJointly,
    MarriedFilingSeparately,
    HeadOfHousehold,
}

impl FilingStatus {
    /// Every recognized status, in the order it is presented to the user.
    pub const ALL: [FilingStatus; 4] = [
        Self::Single,
        Self::MarriedFilingJointly,
        Self::MarriedFilingSeparately,
        Self::HeadOfHousehold,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::MarriedFilingJointly => "Married Filing Jointly",
            Self::MarriedFilingSeparately => "Married Filing Separately",
            Self::HeadOfHousehold => "Head of Household",
        }
    }

    /// Parses a user-facing label or short code into a status.
    ///
    /// Accepts the full display labels (`"Single"`, `"Married Filing
    /// Jointly"`, ...) as well as the usual short codes (`"S"`, `"MFJ"`,
    /// `"MFS"`, `"HOH"`). Returns `None` for anything else; callers decide
    /// what an unrecognized status means (the bracket resolver falls back
    /// to a default rate pair rather than erroring).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "Single" | "S" => Some(Self::Single),
            "Married Filing Jointly" | "MFJ" => Some(Self::MarriedFilingJointly),
            "Married Filing Separately" | "MFS" => Some(Self::MarriedFilingSeparately),
            "Head of Household" | "HOH" => Some(Self::HeadOfHousehold),
            _ => None,
        }
    }
}

impl std::fmt::Display for FilingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
