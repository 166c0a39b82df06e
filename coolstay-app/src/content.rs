//! Static marketing content: hotel identity, room catalog, gallery
//! sources, and contact details.
//!
//! Everything the site displays lives here so the domains stay purely
//! behavioral. Room and gallery definitions are built on demand; they are
//! tiny and only constructed once at boot.

use coolstay_model::{
    GalleryImage, GalleryImageId, ImageSource, Room, RoomId,
};

pub const HOTEL_NAME: &str = "Kodai Cool Stay";

pub const HERO_TITLE_TOP: &str = "Experience Serenity at";
pub const HERO_TITLE_BRAND: &str = "Kodai Cool Stay";
pub const HERO_TAGLINE: &str = "A scenic hotel retreat offering cozy, \
     elegant rooms with breathtaking views and unmatched hospitality in \
     the heart of nature.";
pub const HERO_BACKGROUND: &str = "background.jpeg";

pub const ABOUT_HEADING: &str = "About Kodai Cool Stay";
pub const ABOUT_LEAD: &str = "Nestled in the serene hills, Kodai Cool \
     Stay is a haven of tranquility and luxury. Established in 2010, our \
     retreat offers a perfect blend of modern comfort and natural beauty, \
     making it an ideal escape from the bustle of city life.";
pub const ABOUT_BODY: &str = "Our hotel is designed to provide an \
     immersive experience where guests can reconnect with nature while \
     enjoying premium amenities and personalized service that caters to \
     their every need.";
pub const ABOUT_IMAGE: &str = "https://images.unsplash.com/photo-1584132915807-fd1f5fbc078f?auto=format&fit=crop&w=870&q=80";

/// Small highlight cards under the about copy.
pub const ABOUT_FEATURES: [(&str, &str); 4] = [
    (
        "Stunning Views",
        "Each room offers breathtaking panoramic views of the \
         surrounding landscape.",
    ),
    (
        "Gourmet Cuisine",
        "Experience exquisite local and international dishes prepared \
         by our expert chefs.",
    ),
    (
        "Premium Amenities",
        "Enjoy our spa, swimming pool, and recreational facilities \
         during your stay.",
    ),
    (
        "Personalized Service",
        "Our dedicated staff ensures a memorable and comfortable \
         experience for all guests.",
    ),
];

pub const SHOWCASE_HEADING: &str = "Explore Our Rooms";
pub const SHOWCASE_LEAD: &str = "Discover our range of comfortable and \
     elegantly designed rooms, each offering unique features and \
     amenities for a perfect stay.";

pub const ROOMS_HEADING: &str = "Our Accommodations";
pub const ROOMS_LEAD: &str = "Choose from our selection of thoughtfully \
     designed rooms that offer comfort, style, and all the amenities you \
     need for a perfect stay.";

pub const CONTACT_HEADING: &str = "Contact Us";
pub const CONTACT_LEAD: &str = "Have questions or need more information? \
     Reach out to us and we'll be happy to assist you.";

pub const FOOTER_BLURB: &str = "Experience luxury and comfort in our \
     scenic hotel retreat nestled in the beautiful hills of Kodaikanal.";

pub const GALLERY_HEADING: &str = "Our Gallery";
pub const GALLERY_LEAD: &str = "Explore our beautiful spaces and \
     experiences through our carefully curated collection of images.";

/// One slide in the full-width showcase carousel.
#[derive(Debug, Clone)]
pub struct ShowcaseSlide {
    pub name: &'static str,
    pub description: &'static str,
    pub image: ImageSource,
}

pub fn showcase_slides() -> Vec<ShowcaseSlide> {
    vec![
        ShowcaseSlide {
            name: "Family Room",
            description: "Spacious room perfect for families, featuring \
                 comfortable beds and modern amenities.",
            image: ImageSource::Remote(
                "https://images.unsplash.com/photo-1566665797739-1674de7a421a?auto=format&fit=crop&w=1074&q=80"
                    .to_owned(),
            ),
        },
        ShowcaseSlide {
            name: "Suite Room",
            description: "Luxurious suite with separate living area and \
                 premium furnishings for ultimate comfort.",
            image: ImageSource::Remote(
                "https://images.unsplash.com/photo-1590490360182-c33d57733427?auto=format&fit=crop&w=1074&q=80"
                    .to_owned(),
            ),
        },
        ShowcaseSlide {
            name: "Deluxe Room",
            description: "Elegant room with stunning views and a cozy \
                 atmosphere for a relaxing stay.",
            image: ImageSource::Remote(
                "https://images.unsplash.com/photo-1618773928121-c32242e63f39?auto=format&fit=crop&w=1170&q=80"
                    .to_owned(),
            ),
        },
    ]
}

pub fn rooms() -> Vec<Room> {
    vec![
        Room {
            id: RoomId(1),
            name: "Family Room".to_owned(),
            tagline: "Room for the whole family".to_owned(),
            description: "Spacious accommodation perfect for families, \
                 featuring comfortable beds, modern amenities, and a warm \
                 atmosphere."
                .to_owned(),
            price_per_night: 5000,
            capacity: "Up to 4 guests".to_owned(),
            features: vec![
                "2 Queen Beds".to_owned(),
                "Private Bathroom".to_owned(),
                "Free WiFi".to_owned(),
                "Air Conditioning".to_owned(),
            ],
            images: vec![
                ImageSource::Remote(
                    "https://images.unsplash.com/photo-1566665797739-1674de7a421a?auto=format&fit=crop&w=1074&q=80"
                        .to_owned(),
                ),
                ImageSource::Remote(
                    "https://images.unsplash.com/photo-1540518614846-7eded433c457?auto=format&fit=crop&w=1257&q=80"
                        .to_owned(),
                ),
                ImageSource::Remote(
                    "https://images.unsplash.com/photo-1505693416388-ac5ce068fe85?auto=format&fit=crop&w=1170&q=80"
                        .to_owned(),
                ),
            ],
        },
        Room {
            id: RoomId(2),
            name: "Suite Room".to_owned(),
            tagline: "Our most relaxing stay".to_owned(),
            description: "Luxurious suite with separate living area and \
                 premium furnishings for the ultimate comfort and \
                 relaxation during your stay."
                .to_owned(),
            price_per_night: 5000,
            capacity: "Up to 2 guests".to_owned(),
            features: vec![
                "King Size Bed".to_owned(),
                "Separate Living Area".to_owned(),
                "Mini Bar".to_owned(),
                "Premium Toiletries".to_owned(),
            ],
            images: vec![
                ImageSource::Remote(
                    "https://images.unsplash.com/photo-1590490360182-c33d57733427?auto=format&fit=crop&w=1074&q=80"
                        .to_owned(),
                ),
                ImageSource::Remote(
                    "https://images.unsplash.com/photo-1587985064135-0366536eab42?auto=format&fit=crop&w=1170&q=80"
                        .to_owned(),
                ),
                ImageSource::Remote(
                    "https://images.unsplash.com/photo-1631049307264-da0ec9d70304?auto=format&fit=crop&w=1170&q=80"
                        .to_owned(),
                ),
            ],
        },
    ]
}

pub fn gallery_images() -> Vec<GalleryImage> {
    let catalog: [(&str, &str); 21] = [
        ("family.jpeg", "Hotel Room Interior"),
        ("suite.jpeg", "Hotel View"),
        ("background.jpeg", "Hotel Lobby"),
        ("suiter.jpeg", "Hotel Room"),
        ("about.jpeg", "Hotel Exterior"),
        ("fa1.jpeg", "Family Room"),
        ("se.jpeg", "Hillside View"),
        ("sen.jpeg", "Evening Terrace"),
        ("interi.jpeg", "Lounge Interior"),
        ("1.jpeg", "Around the Property"),
        ("2.jpeg", "Around the Property"),
        ("3.jpeg", "Around the Property"),
        ("4.jpeg", "Around the Property"),
        ("5.jpeg", "Around the Property"),
        ("6.jpeg", "Around the Property"),
        ("7.jpeg", "Around the Property"),
        ("8.jpeg", "Around the Property"),
        ("9.jpeg", "Around the Property"),
        ("10.jpeg", "Around the Property"),
        ("11.jpeg", "Around the Property"),
        ("13.jpeg", "Around the Property"),
    ];

    catalog
        .iter()
        .enumerate()
        .map(|(i, (path, caption))| GalleryImage {
            id: GalleryImageId(i as u32 + 1),
            source: ImageSource::Asset((*path).to_owned()),
            caption: (*caption).to_owned(),
        })
        .collect()
}

/// Address, phone, and email lines for the contact card and footer.
#[derive(Debug, Clone, Copy)]
pub struct ContactDetails {
    pub address_lines: [&'static str; 2],
    pub phones: [&'static str; 2],
    pub emails: [&'static str; 2],
    pub reception_hours: &'static str,
    /// Display-only map reference; there is no embedded map widget.
    pub map_label: &'static str,
    pub map_coordinates: (f64, f64),
    pub map_url: &'static str,
}

pub const CONTACT_DETAILS: ContactDetails = ContactDetails {
    address_lines: ["123 Kodaikanal Hills,", "Tamil Nadu, India 624103"],
    phones: ["+91 9876543210", "+91 1234567890"],
    emails: ["info@kodaicoolstay.com", "bookings@kodaicoolstay.com"],
    reception_hours: "24 Hours, 7 Days a Week",
    map_label: "Kodaikanal, Tamil Nadu",
    map_coordinates: (10.2382, 77.4766),
    map_url: "https://maps.google.com/?q=Kodaikanal,+Tamil+Nadu",
};
