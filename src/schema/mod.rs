//! Static layout registry.
//!
//! One immutable `LayoutDescriptor` per lottery. The registry is read-only
//! after process start; there is deliberately no mutation API.

use crate::domain::Lottery;
use crate::error::AppError;

/// Immutable description of one lottery's raw-table shape.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutDescriptor {
    /// Positional column names; the raw row width must equal this length.
    pub columns: &'static [&'static str],
    /// Number of primary (`n1..`) number columns.
    pub primary_count: usize,
    /// Number of secondary (`m1..`) number columns.
    pub secondary_count: usize,
    /// Inclusive bounds of the primary numbers.
    pub primary_range: (u32, u32),
    /// Inclusive bounds of the secondary numbers, if any.
    pub secondary_range: Option<(u32, u32)>,
    /// `chrono` format string for the `date` column.
    pub date_format: &'static str,
}

impl LayoutDescriptor {
    pub fn date_index(&self) -> usize {
        // Enforced by `layout_invariants_hold` below: exactly one `date` column.
        self.columns.iter().position(|c| *c == "date").unwrap_or(0)
    }

    pub fn primary_columns(&self) -> impl Iterator<Item = String> + '_ {
        (1..=self.primary_count).map(|i| format!("n{i}"))
    }

    pub fn secondary_columns(&self) -> impl Iterator<Item = String> + '_ {
        (1..=self.secondary_count).map(|i| format!("m{i}"))
    }

    /// All number column names, primaries first.
    pub fn number_columns(&self) -> impl Iterator<Item = String> + '_ {
        self.primary_columns().chain(self.secondary_columns())
    }
}

static LOTTO: LayoutDescriptor = LayoutDescriptor {
    columns: &["no", "date", "n1", "n2", "n3", "n4", "n5", "n6"],
    primary_count: 6,
    secondary_count: 0,
    primary_range: (1, 49),
    secondary_range: None,
    date_format: "%d.%m.%Y",
};

static LOTTO_PLUS: LayoutDescriptor = LayoutDescriptor {
    columns: &["no", "date", "n1", "n2", "n3", "n4", "n5", "n6"],
    primary_count: 6,
    secondary_count: 0,
    primary_range: (1, 49),
    secondary_range: None,
    date_format: "%d.%m.%Y",
};

static EUROJACKPOT: LayoutDescriptor = LayoutDescriptor {
    columns: &["no", "date", "n1", "n2", "n3", "n4", "n5", "m1", "m2"],
    primary_count: 5,
    secondary_count: 2,
    primary_range: (1, 50),
    secondary_range: Some((1, 12)),
    date_format: "%d.%m.%Y",
};

static MINILOTTO: LayoutDescriptor = LayoutDescriptor {
    columns: &["no", "date", "n1", "n2", "n3", "n4", "n5"],
    primary_count: 5,
    secondary_count: 0,
    primary_range: (1, 42),
    secondary_range: None,
    date_format: "%d.%m.%Y",
};

static MULTI: LayoutDescriptor = LayoutDescriptor {
    columns: &[
        "no", "date", "time", "n1", "n2", "n3", "n4", "n5", "n6", "n7", "n8", "n9", "n10", "n11",
        "n12", "n13", "n14", "n15", "n16", "n17", "n18", "n19", "n20", "m1",
    ],
    primary_count: 20,
    secondary_count: 1,
    primary_range: (1, 80),
    secondary_range: Some((1, 80)),
    date_format: "%d.%m.%Y",
};

/// Layout for a known lottery.
pub fn layout(lottery: Lottery) -> &'static LayoutDescriptor {
    match lottery {
        Lottery::Lotto => &LOTTO,
        Lottery::LottoPlus => &LOTTO_PLUS,
        Lottery::Eurojackpot => &EUROJACKPOT,
        Lottery::Minilotto => &MINILOTTO,
        Lottery::Multi => &MULTI,
    }
}

/// Layout lookup by string identifier; fails for unregistered ids.
pub fn lookup(id: &str) -> Result<&'static LayoutDescriptor, AppError> {
    Ok(layout(Lottery::from_id(id)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_invariants_hold() {
        for lottery in Lottery::ALL {
            let layout = layout(lottery);

            let date_cols = layout.columns.iter().filter(|c| **c == "date").count();
            assert_eq!(date_cols, 1, "{}: exactly one date column", lottery.id());

            let numbered = layout
                .columns
                .iter()
                .filter(|c| {
                    let (prefix, rest) = c.split_at(1);
                    (prefix == "n" || prefix == "m") && rest.parse::<usize>().is_ok()
                })
                .count();
            assert_eq!(
                numbered,
                layout.primary_count + layout.secondary_count,
                "{}: numbered fields match counts",
                lottery.id()
            );

            // Every named number column is present in the positional list.
            for name in layout.number_columns() {
                assert!(
                    layout.columns.iter().any(|c| *c == name),
                    "{}: missing column {name}",
                    lottery.id()
                );
            }

            let (lo, hi) = layout.primary_range;
            assert!(lo <= hi);
            if let Some((lo, hi)) = layout.secondary_range {
                assert!(lo <= hi);
            } else {
                assert_eq!(layout.secondary_count, 0);
            }
        }
    }

    #[test]
    fn glossary_counts_and_ranges() {
        assert_eq!(layout(Lottery::Lotto).primary_count, 6);
        assert_eq!(layout(Lottery::Lotto).primary_range, (1, 49));
        assert_eq!(layout(Lottery::Eurojackpot).secondary_count, 2);
        assert_eq!(layout(Lottery::Eurojackpot).secondary_range, Some((1, 12)));
        assert_eq!(layout(Lottery::Minilotto).primary_range, (1, 42));
        assert_eq!(layout(Lottery::Multi).primary_count, 20);
        assert_eq!(layout(Lottery::Multi).secondary_count, 1);
    }

    #[test]
    fn lookup_rejects_unknown_ids() {
        assert!(lookup("lotto").is_ok());
        assert!(lookup("keno").is_err());
    }
}
