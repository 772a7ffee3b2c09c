//! Wide-to-long projection of a row's bucket columns.
//!
//! A row holds one column per age bucket and one per gender. Bar charts want
//! one record per (state, bucket) pair with the percentage as a fraction, so
//! [`melt`] folds the chosen bucket columns into [`MeltedRow`]s.

use serde::Serialize;

use crate::row::{AgeBucket, Gender, Row};

/// A fixed, ordered set of percentage columns that can be melted.
pub trait Bucket: Copy + 'static {
    /// Every bucket in display order.
    const BUCKETS: &'static [Self];

    fn label(self) -> &'static str;

    /// Raw percentage (0-100) of this bucket in `row`.
    fn percentage(self, row: &Row) -> f64;
}

impl Bucket for AgeBucket {
    const BUCKETS: &'static [Self] = &AgeBucket::ALL;

    fn label(self) -> &'static str {
        self.column()
    }

    fn percentage(self, row: &Row) -> f64 {
        row.age(self)
    }
}

impl Bucket for Gender {
    const BUCKETS: &'static [Self] = &Gender::ALL;

    fn label(self) -> &'static str {
        self.column()
    }

    fn percentage(self, row: &Row) -> f64 {
        row.gender(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeltedRow {
    pub state_name: String,
    pub bucket_label: &'static str,
    /// `raw / 100`, so nominally within [0, 1].
    pub percentage: f64,
}

/// Melt `row` into one [`MeltedRow`] per bucket of `B`, in `B::BUCKETS` order.
pub fn melt<B: Bucket>(row: &Row) -> Vec<MeltedRow> {
    B::BUCKETS
        .iter()
        .map(|&bucket| MeltedRow {
            state_name: row.state_name.clone(),
            bucket_label: bucket.label(),
            percentage: bucket.percentage(row) / 100.0,
        })
        .collect()
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
    fn melt_age_keeps_bucket_order() {
        let melted = melt::<AgeBucket>(&ohio());
        let labels: Vec<&str> = melted.iter().map(|m| m.bucket_label).collect();
        assert_eq!(labels, vec!["18-44", "45-64", "65+"]);
        assert!(melted.iter().all(|m| m.state_name == "Ohio"));
    }

    #[test]
    fn each_fraction_is_raw_over_hundred() {
        let row = ohio();
        let melted = melt::<AgeBucket>(&row);
        assert_eq!(melted[0].percentage, 12.3 / 100.0);
        assert_eq!(melted[1].percentage, 25.6 / 100.0);
        assert_eq!(melted[2].percentage, 40.1 / 100.0);
        assert!((melted[0].percentage - 0.123).abs() < 1e-12);

        let melted = melt::<Gender>(&row);
        assert_eq!(melted.len(), 2);
        assert_eq!(melted[0].bucket_label, "Male");
        assert_eq!(melted[0].percentage, 26.0 / 100.0);
        assert_eq!(melted[1].percentage, 31.9 / 100.0);
    }

    #[test]
    fn not_sorted_by_value() {
        let row = Row::new(1, "X", [0.0; 7], [50.0, 10.0, 30.0], [9.0, 1.0]);
        let melted = melt::<AgeBucket>(&row);
        assert_eq!(melted[0].bucket_label, "18-44");
        assert_eq!(melted[0].percentage, 0.5);
        let melted = melt::<Gender>(&row);
        assert_eq!(melted[0].bucket_label, "Male");
    }
}
