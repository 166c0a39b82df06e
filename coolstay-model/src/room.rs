//! Room catalog types.

use crate::image::ImageSource;

/// Stable identifier for a room within the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub u32);

/// One bookable room type, as presented on the listing and showcase.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub tagline: String,
    pub description: String,
    /// Nightly rate in whole rupees.
    pub price_per_night: u32,
    /// Human line such as "Up to 4 guests".
    pub capacity: String,
    pub features: Vec<String>,
    /// Ordered image set backing the card carousel; never empty.
    pub images: Vec<ImageSource>,
}

impl Room {
    /// Rate formatted for display, e.g. `₹5,000/night`.
    pub fn price_label(&self) -> String {
        format!("₹{}/night", group_thousands(self.price_per_night))
    }
}

/// Groups digits with commas in the Indian short style used on the site
/// (plain three-digit grouping; rates never reach the lakh notation).
fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(950), "950");
        assert_eq!(group_thousands(5000), "5,000");
        assert_eq!(group_thousands(12500), "12,500");
        assert_eq!(group_thousands(1250000), "1,250,000");
    }

    #[test]
    fn price_label_includes_unit() {
        let room = Room {
            id: RoomId(1),
            name: "Family Room".into(),
            tagline: String::new(),
            description: String::new(),
            price_per_night: 5000,
            capacity: "Up to 4 guests".into(),
            features: Vec::new(),
            images: Vec::new(),
        };
        assert_eq!(room.price_label(), "₹5,000/night");
    }
}
