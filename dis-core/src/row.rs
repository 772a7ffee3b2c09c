use serde::{Deserialize, Serialize};

/// Identifier shared by a data row and its polygon in the US states topology
/// (the state FIPS code, e.g. 39 for Ohio).
pub type JoinKey = u32;

/// The seven disability categories reported per state, in column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisabilityCategory {
    #[serde(rename = "Any Disability")]
    Any,
    #[serde(rename = "Cognitive Disability")]
    Cognitive,
    #[serde(rename = "Hearing Disability")]
    Hearing,
    #[serde(rename = "Mobility Disability")]
    Mobility,
    #[serde(rename = "Vision Disability")]
    Vision,
    #[serde(rename = "Self-care Disability")]
    SelfCare,
    #[serde(rename = "Independent Living Disability")]
    IndependentLiving,
}

impl DisabilityCategory {
    pub const ALL: [DisabilityCategory; 7] = [
        DisabilityCategory::Any,
        DisabilityCategory::Cognitive,
        DisabilityCategory::Hearing,
        DisabilityCategory::Mobility,
        DisabilityCategory::Vision,
        DisabilityCategory::SelfCare,
        DisabilityCategory::IndependentLiving,
    ];

    /// CSV header for this category.
    pub fn column(self) -> &'static str {
        match self {
            DisabilityCategory::Any => "Any Disability",
            DisabilityCategory::Cognitive => "Cognitive Disability",
            DisabilityCategory::Hearing => "Hearing Disability",
            DisabilityCategory::Mobility => "Mobility Disability",
            DisabilityCategory::Vision => "Vision Disability",
            DisabilityCategory::SelfCare => "Self-care Disability",
            DisabilityCategory::IndependentLiving => "Independent Living Disability",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Adult age buckets, youngest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBucket {
    #[serde(rename = "18-44")]
    From18To44,
    #[serde(rename = "45-64")]
    From45To64,
    #[serde(rename = "65+")]
    From65,
}

impl AgeBucket {
    pub const ALL: [AgeBucket; 3] = [
        AgeBucket::From18To44,
        AgeBucket::From45To64,
        AgeBucket::From65,
    ];

    pub fn column(self) -> &'static str {
        match self {
            AgeBucket::From18To44 => "18-44",
            AgeBucket::From45To64 => "45-64",
            AgeBucket::From65 => "65+",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn column(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// One state's disability estimates, all values in percent.
///
/// Values are stored exactly as read. Nothing checks that they fall within
/// [0, 100]; out-of-range input is a data-quality problem and is rendered
/// faithfully.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub join_key: JoinKey,
    pub state_name: String,
    pub(crate) categories: [f64; 7],
    pub(crate) ages: [f64; 3],
    pub(crate) genders: [f64; 2],
}

impl Row {
    pub fn new(
        join_key: JoinKey,
        state_name: impl Into<String>,
        categories: [f64; 7],
        ages: [f64; 3],
        genders: [f64; 2],
    ) -> Self {
        Self {
            join_key,
            state_name: state_name.into(),
            categories,
            ages,
            genders,
        }
    }

    pub fn category(&self, category: DisabilityCategory) -> f64 {
        self.categories[category.index()]
    }

    pub fn age(&self, bucket: AgeBucket) -> f64 {
        self.ages[bucket as usize]
    }

    pub fn gender(&self, gender: Gender) -> f64 {
        self.genders[gender as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ohio() -> Row {
        Row::new(
            39,
            "Ohio",
            [29.1, 14.2, 6.8, 13.9, 5.4, 4.0, 8.7],
            [12.3, 25.6, 40.1],
            [26.0, 31.9],
        )
    }

    #[test]
    fn accessors_follow_column_order() {
        let row = ohio();
        assert_eq!(row.category(DisabilityCategory::Any), 29.1);
        assert_eq!(row.category(DisabilityCategory::IndependentLiving), 8.7);
        assert_eq!(row.age(AgeBucket::From45To64), 25.6);
        assert_eq!(row.gender(Gender::Female), 31.9);
    }

    #[test]
    fn category_columns_are_distinct() {
        let names: std::collections::HashSet<&str> =
            DisabilityCategory::ALL.iter().map(|c| c.column()).collect();
        assert_eq!(names.len(), 7);
        assert_eq!(DisabilityCategory::ALL[0].column(), "Any Disability");
    }

    #[test]
    fn out_of_range_values_are_kept() {
        let row = Row::new(1, "Nowhere", [120.0; 7], [-3.0, 0.0, 0.0], [0.0, 0.0]);
        assert_eq!(row.category(DisabilityCategory::Vision), 120.0);
        assert_eq!(row.age(AgeBucket::From18To44), -3.0);
    }
}
