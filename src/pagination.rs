// src/pagination.rs
use std::fmt;
use std::str::FromStr;

/// Page sizes offered by the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PerPage {
    #[default]
    Ten,
    Twenty,
    Fifty,
}

impl PerPage {
    pub const ALL: [PerPage; 3] = [PerPage::Ten, PerPage::Twenty, PerPage::Fifty];

    pub fn get(self) -> u32 {
        match self {
            PerPage::Ten => 10,
            PerPage::Twenty => 20,
            PerPage::Fifty => 50,
        }
    }
}

impl TryFrom<u32> for PerPage {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        PerPage::ALL
            .into_iter()
            .find(|p| p.get() == value)
            .ok_or_else(|| format!("page size must be one of 10, 20, 50 (got {value})"))
    }
}

impl FromStr for PerPage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: u32 = s
            .trim()
            .parse()
            .map_err(|_| format!("invalid page size '{s}'"))?;
        PerPage::try_from(n)
    }
}

impl fmt::Display for PerPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Number of pages needed to show `total` items, never less than one.
pub fn total_pages(total: u64, per_page: u32) -> u64 {
    if per_page == 0 {
        return 1;
    }
    total.div_ceil(u64::from(per_page)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up_and_floors_at_one() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(45, 20), 3);
        assert_eq!(total_pages(100, 50), 2);
    }

    #[test]
    fn total_pages_matches_ceiling_over_a_range() {
        for per_page in [1u32, 3, 10, 20, 50] {
            for total in 0u64..500 {
                let expected = ((total as f64) / f64::from(per_page)).ceil().max(1.0) as u64;
                assert_eq!(total_pages(total, per_page), expected, "total={total} per_page={per_page}");
            }
        }
    }

    #[test]
    fn per_page_only_accepts_offered_sizes() {
        assert_eq!("20".parse::<PerPage>().unwrap(), PerPage::Twenty);
        assert_eq!(PerPage::try_from(50).unwrap().get(), 50);
        assert!(PerPage::try_from(25).is_err());
        assert!("ten".parse::<PerPage>().is_err());
        assert_eq!(PerPage::default().get(), 10);
    }
}
