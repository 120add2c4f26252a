//! Rating history types.

use serde::{Deserialize, Serialize};

use super::variant::Variant;

/// Rating history of one variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingHistory {
    /// Variant label (e.g. `"Bullet"`, `"King of the Hill"`).
    pub name: String,

    /// Rating samples, oldest first.
    #[serde(default)]
    pub points: Vec<RatingPoint>,
}

impl RatingHistory {
    /// Returns the variant this history belongs to, if the label is known.
    #[must_use]
    pub fn variant(&self) -> Option<Variant> {
        Variant::from_label(&self.name)
    }

    /// Returns the most recent rating.
    #[must_use]
    pub fn latest(&self) -> Option<i32> {
        self.points.last().map(|p| p.rating)
    }

    /// Returns the highest rating ever reached.
    #[must_use]
    pub fn peak(&self) -> Option<i32> {
        self.points.iter().map(|p| p.rating).max()
    }
}

/// A dated rating sample.
///
/// On the wire a sample is `[year, month, day, rating]` with a 0-based month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "(i32, u32, u32, i32)", into = "(i32, u32, u32, i32)")]
pub struct RatingPoint {
    /// Year.
    pub year: i32,
    /// Month, 0-based (January is 0).
    pub month: u32,
    /// Day of month.
    pub day: u32,
    /// Rating on that day.
    pub rating: i32,
}

impl RatingPoint {
    /// Returns the calendar date of the sample.
    #[must_use]
    pub fn date(&self) -> Option<chrono::NaiveDate> {
        self.month
            .checked_add(1)
            .and_then(|month| chrono::NaiveDate::from_ymd_opt(self.year, month, self.day))
    }
}

impl From<(i32, u32, u32, i32)> for RatingPoint {
    fn from((year, month, day, rating): (i32, u32, u32, i32)) -> Self {
        Self {
            year,
            month,
            day,
            rating,
        }
    }
}

impl From<RatingPoint> for (i32, u32, u32, i32) {
    fn from(point: RatingPoint) -> Self {
        (point.year, point.month, point.day, point.rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HISTORY_JSON: &str = r#"[
        {"name": "Bullet", "points": [[2011, 0, 8, 1472], [2011, 0, 9, 1332], [2012, 11, 31, 1523]]},
        {"name": "King of the Hill", "points": []},
        {"name": "Puzzles", "points": [[2020, 5, 1, 2011]]}
    ]"#;

    #[test]
    fn test_history_deserialize() {
        let history: Vec<RatingHistory> = serde_json::from_str(HISTORY_JSON).expect("deserialize");
        assert_eq!(history.len(), 3);

        let bullet = &history[0];
        assert_eq!(bullet.variant(), Some(Variant::Bullet));
        assert_eq!(bullet.points.len(), 3);
        assert_eq!(
            bullet.points[0],
            RatingPoint {
                year: 2011,
                month: 0,
                day: 8,
                rating: 1472
            }
        );
        assert_eq!(bullet.latest(), Some(1523));
        assert_eq!(bullet.peak(), Some(1523));

        assert_eq!(history[1].variant(), Some(Variant::KingOfTheHill));
        assert!(history[1].latest().is_none());
        assert_eq!(history[2].variant(), Some(Variant::Puzzle));
    }

    #[test]
    fn test_point_date_is_one_based() {
        let point = RatingPoint::from((2012, 11, 31, 1523));
        let date = point.date().expect("valid date");
        assert_eq!(date.to_string(), "2012-12-31");
    }

    #[test]
    fn test_point_date_out_of_range_month() {
        let point: RatingPoint =
            serde_json::from_str("[2020, 4294967295, 1, 1500]").expect("deserialize");
        assert!(point.date().is_none());

        let point = RatingPoint::from((2020, 12, 1, 1500));
        assert!(point.date().is_none());
    }

    #[test]
    fn test_point_serializes_as_array() {
        let point = RatingPoint::from((2011, 0, 8, 1472));
        let json = serde_json::to_string(&point).expect("serialize");
        assert_eq!(json, "[2011,0,8,1472]");
    }
}
