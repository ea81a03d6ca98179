use crate::location::CountryCode;
use serde::{Deserialize, Serialize};

/// Depth in the country → ADM1 → … → ADM5 administrative nesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminLevel {
    Country,
    Adm1,
    Adm2,
    Adm3,
    Adm4,
    Adm5,
}

impl AdminLevel {
    /// Numeric depth, `0` for countries.
    pub fn depth(self) -> usize {
        match self {
            AdminLevel::Country => 0,
            AdminLevel::Adm1 => 1,
            AdminLevel::Adm2 => 2,
            AdminLevel::Adm3 => 3,
            AdminLevel::Adm4 => 4,
            AdminLevel::Adm5 => 5,
        }
    }

    /// Administrative level of a `class`/`code` pair; only class `A` codes
    /// have one.
    pub fn of(class: char, code: &str) -> Option<Self> {
        if class != 'A' {
            return None;
        }
        match code {
            "PCL" | "PCLD" | "PCLF" | "PCLI" | "PCLIX" | "PCLS" | "TERR" => {
                Some(AdminLevel::Country)
            }
            "ADM1" => Some(AdminLevel::Adm1),
            "ADM2" => Some(AdminLevel::Adm2),
            "ADM3" => Some(AdminLevel::Adm3),
            "ADM4" => Some(AdminLevel::Adm4),
            "ADM5" => Some(AdminLevel::Adm5),
            _ => None,
        }
    }

    pub fn from_depth(depth: usize) -> Option<Self> {
        match depth {
            0 => Some(AdminLevel::Country),
            1 => Some(AdminLevel::Adm1),
            2 => Some(AdminLevel::Adm2),
            3 => Some(AdminLevel::Adm3),
            4 => Some(AdminLevel::Adm4),
            5 => Some(AdminLevel::Adm5),
            _ => None,
        }
    }
}

/// Upstream feature taxonomy entry, e.g. `(A, ADM1)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureCode {
    pub id: u16,
    pub class: char,
    pub code: String,
    #[serde(default)]
    pub description: String,
}

impl FeatureCode {
    pub fn new(id: u16, class: char, code: impl Into<String>) -> Self {
        Self {
            id,
            class,
            code: code.into(),
            description: String::new(),
        }
    }

    /// `class.code`, the form used in configuration and upstream dumps.
    ///
    /// ```
    /// use geostore_types::feature::FeatureCode;
    ///
    /// assert_eq!(FeatureCode::new(1, 'A', "ADM1").key(), "A.ADM1");
    /// ```
    pub fn key(&self) -> String {
        format!("{}.{}", self.class, self.code)
    }

    pub fn is_continent(&self) -> bool {
        self.class == 'L' && self.code == "CONT"
    }

    pub fn is_country(&self) -> bool {
        self.admin_level() == Some(AdminLevel::Country)
    }

    /// Administrative level for class `A` features; historical variants
    /// (`ADM1H`, `PCLH`) are not administrative.
    pub fn admin_level(&self) -> Option<AdminLevel> {
        AdminLevel::of(self.class, &self.code)
    }

    pub fn boundary_eligible(&self) -> bool {
        if self.is_continent() {
            return true;
        }
        matches!(self.admin_level(), Some(level) if level <= AdminLevel::Adm3)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub iso: CountryCode,
    /// Absent for compact country lists that only carry code, name and continent.
    #[serde(default)]
    pub geoname_id: Option<u32>,
    pub name: String,
    /// Two-letter continent code (`EU`, `NA`, ...).
    pub continent: String,
    #[serde(default)]
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timezone {
    pub id: u16,
    /// IANA name, e.g. `Europe/Oslo`.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_levels() {
        assert_eq!(
            FeatureCode::new(1, 'A', "PCLI").admin_level(),
            Some(AdminLevel::Country)
        );
        assert_eq!(
            FeatureCode::new(2, 'A', "ADM3").admin_level(),
            Some(AdminLevel::Adm3)
        );
        assert_eq!(FeatureCode::new(3, 'A', "ADM1H").admin_level(), None);
        assert_eq!(FeatureCode::new(4, 'P', "PPL").admin_level(), None);
        assert_eq!(AdminLevel::from_depth(2), Some(AdminLevel::Adm2));
        assert_eq!(AdminLevel::Adm4.depth(), 4);
    }

    #[test]
    fn test_boundary_eligibility() {
        assert!(FeatureCode::new(1, 'L', "CONT").boundary_eligible());
        assert!(FeatureCode::new(2, 'A', "PCLI").boundary_eligible());
        assert!(FeatureCode::new(3, 'A', "ADM3").boundary_eligible());
        assert!(!FeatureCode::new(4, 'A', "ADM4").boundary_eligible());
        assert!(!FeatureCode::new(5, 'A', "ADM5").boundary_eligible());
        assert!(!FeatureCode::new(6, 'P', "PPLC").boundary_eligible());
    }
}
