//! Hard-coded display data for every section of the page. Optional fields
//! (original price, discount, badge) render nothing when absent.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub image: &'static str,
    pub rating: f64,
    pub reviews: u32,
    pub price: u32,
    pub original_price: Option<u32>,
    pub discount: Option<u32>,
    pub badge: Option<&'static str>,
    pub is_new: bool,
}

pub const BESTSELLERS: &[Product] = &[
    Product {
        id: 1,
        name: "Eau De Toilette | Blanc (100ml)",
        image: "/assets/product-perfume-blanc.jpg",
        rating: 4.83,
        reviews: 665,
        price: 899,
        original_price: Some(1799),
        discount: Some(50),
        badge: Some("Best Seller"),
        is_new: false,
    },
    Product {
        id: 2,
        name: "Eau De Parfum | Citron (100ml)",
        image: "/assets/product-perfume-citron.jpg",
        rating: 4.84,
        reviews: 50,
        price: 899,
        original_price: Some(1499),
        discount: Some(40),
        badge: Some("Best Seller"),
        is_new: false,
    },
    Product {
        id: 3,
        name: "Charcoal Face Scrub | Charcoal & Eucalyptus",
        image: "/assets/product-charcoal-scrub.jpg",
        rating: 4.63,
        reviews: 375,
        price: 299,
        original_price: Some(349),
        discount: Some(14),
        badge: None,
        is_new: false,
    },
    Product {
        id: 4,
        name: "Moisturising Cream | Shea Butter And Vitamin E",
        image: "/assets/product-moisturizer.jpg",
        rating: 4.74,
        reviews: 158,
        price: 309,
        original_price: Some(349),
        discount: Some(11),
        badge: None,
        is_new: false,
    },
    Product {
        id: 5,
        name: "Derma Roller | For Beard & Hair Growth",
        image: "/assets/product-derma-roller.jpg",
        rating: 4.68,
        reviews: 90,
        price: 459,
        original_price: None,
        discount: None,
        badge: Some("New Launch"),
        is_new: true,
    },
    Product {
        id: 6,
        name: "Eau De Parfum | Intense (100ml)",
        image: "/assets/product-perfume-intense.jpg",
        rating: 4.81,
        reviews: 120,
        price: 549,
        original_price: Some(1299),
        discount: Some(57),
        badge: Some("Best Seller"),
        is_new: false,
    },
];

pub const NEW_ARRIVALS: &[Product] = &[
    Product {
        id: 7,
        name: "Vitamin C Face Serum | Vitamin C & Hyaluronic Acid",
        image: "/assets/product-vitamin-c-serum.jpg",
        rating: 4.79,
        reviews: 394,
        price: 399,
        original_price: Some(499),
        discount: Some(20),
        badge: Some("New Launch"),
        is_new: true,
    },
    Product {
        id: 8,
        name: "Sunscreen Gel SPF 50 PA+++ | Oil-Free",
        image: "/assets/product-sunscreen.jpg",
        rating: 4.86,
        reviews: 36,
        price: 399,
        original_price: Some(499),
        discount: Some(20),
        badge: Some("New Launch"),
        is_new: true,
    },
    Product {
        id: 9,
        name: "Charcoal Face Wash | Charcoal & Ylang Ylang",
        image: "/assets/product-charcoal-wash.jpg",
        rating: 4.53,
        reviews: 429,
        price: 299,
        original_price: Some(349),
        discount: Some(14),
        badge: None,
        is_new: false,
    },
    Product {
        id: 10,
        name: "Beard Oil | Natural Blend",
        image: "/assets/product-beard-oil.jpg",
        rating: 4.71,
        reviews: 215,
        price: 349,
        original_price: Some(449),
        discount: Some(22),
        badge: Some("Popular"),
        is_new: false,
    },
    Product {
        id: 11,
        name: "Hair Styling Pomade | Strong Hold",
        image: "/assets/product-hair-wax.jpg",
        rating: 4.62,
        reviews: 178,
        price: 279,
        original_price: Some(349),
        discount: Some(20),
        badge: None,
        is_new: false,
    },
    Product {
        id: 12,
        name: "Body Wash | Aquatic Fresh",
        image: "/assets/product-body-wash.jpg",
        rating: 4.58,
        reviews: 142,
        price: 249,
        original_price: Some(299),
        discount: Some(17),
        badge: None,
        is_new: false,
    },
];

pub const SKIN_CARE: &[Product] = &[
    Product {
        id: 21,
        name: "Brightening Vitamin C Face Serum | Vitamin C & Hyaluronic Acid",
        image: "/assets/product-vitamin-c-serum.jpg",
        rating: 4.79,
        reviews: 394,
        price: 399,
        original_price: Some(499),
        discount: Some(20),
        badge: Some("Best Seller"),
        is_new: false,
    },
    Product {
        id: 22,
        name: "Sunscreen Gel SPF 50 PA+++ | Non-Comedogenic | Oil-Free",
        image: "/assets/product-sunscreen.jpg",
        rating: 4.86,
        reviews: 36,
        price: 399,
        original_price: Some(499),
        discount: Some(20),
        badge: Some("New Launch"),
        is_new: true,
    },
    Product {
        id: 23,
        name: "Charcoal Face Wash | Charcoal & Ylang Ylang",
        image: "/assets/product-charcoal-wash.jpg",
        rating: 4.53,
        reviews: 429,
        price: 299,
        original_price: Some(349),
        discount: Some(14),
        badge: None,
        is_new: false,
    },
    Product {
        id: 24,
        name: "Charcoal Face Scrub | Charcoal & Eucalyptus",
        image: "/assets/product-charcoal-scrub.jpg",
        rating: 4.63,
        reviews: 375,
        price: 299,
        original_price: Some(349),
        discount: Some(14),
        badge: None,
        is_new: false,
    },
    Product {
        id: 25,
        name: "Moisturising Cream | Shea Butter And Vitamin E",
        image: "/assets/product-moisturizer.jpg",
        rating: 4.74,
        reviews: 158,
        price: 309,
        original_price: Some(349),
        discount: Some(11),
        badge: Some("Popular"),
        is_new: false,
    },
    Product {
        id: 26,
        name: "Derma Roller | For Beard & Hair Growth",
        image: "/assets/product-derma-roller.jpg",
        rating: 4.68,
        reviews: 90,
        price: 459,
        original_price: None,
        discount: None,
        badge: Some("New Launch"),
        is_new: true,
    },
];

pub const VITAMIN_C: &[Product] = &[
    Product {
        id: 31,
        name: "Vitamin C Face Wash | Vitamin C & Niacinamide",
        image: "/assets/product-charcoal-wash.jpg",
        rating: 4.86,
        reviews: 157,
        price: 219,
        original_price: Some(259),
        discount: Some(15),
        badge: Some("Best Seller"),
        is_new: false,
    },
    Product {
        id: 32,
        name: "Vitamin C Sheet Mask (Pack of 3)",
        image: "/assets/product-vitamin-c-serum.jpg",
        rating: 5.0,
        reviews: 1,
        price: 199,
        original_price: Some(525),
        discount: Some(62),
        badge: None,
        is_new: false,
    },
    Product {
        id: 33,
        name: "Brightening Vitamin C Face Serum | Vitamin C & Hyaluronic Acid",
        image: "/assets/product-vitamin-c-serum.jpg",
        rating: 4.79,
        reviews: 394,
        price: 399,
        original_price: Some(499),
        discount: Some(20),
        badge: Some("Best Seller"),
        is_new: false,
    },
    Product {
        id: 34,
        name: "Skin Glow Combo",
        image: "/assets/product-moisturizer.jpg",
        rating: 4.79,
        reviews: 43,
        price: 499,
        original_price: Some(758),
        discount: Some(34),
        badge: None,
        is_new: false,
    },
    Product {
        id: 35,
        name: "Vitamin C Face Care Kit",
        image: "/assets/product-sunscreen.jpg",
        rating: 4.8,
        reviews: 10,
        price: 599,
        original_price: Some(933),
        discount: Some(35),
        badge: Some("Best Seller"),
        is_new: false,
    },
    Product {
        id: 36,
        name: "Vitamin C Instant Glow Kit",
        image: "/assets/product-charcoal-scrub.jpg",
        rating: 5.0,
        reviews: 1,
        price: 299,
        original_price: Some(434),
        discount: Some(31),
        badge: Some("Best Seller"),
        is_new: false,
    },
];

pub const FLUENCER_PICKS: &[Product] = &[
    Product {
        id: 41,
        name: "Sunscreen Gel SPF 50 PA+++",
        image: "/assets/product-sunscreen.jpg",
        rating: 4.86,
        reviews: 0,
        price: 399,
        original_price: Some(499),
        discount: Some(20),
        badge: None,
        is_new: false,
    },
    Product {
        id: 42,
        name: "Vitamin C Face Serum",
        image: "/assets/product-vitamin-c-serum.jpg",
        rating: 4.79,
        reviews: 0,
        price: 399,
        original_price: Some(499),
        discount: Some(20),
        badge: None,
        is_new: false,
    },
    Product {
        id: 43,
        name: "Derma Roller",
        image: "/assets/product-derma-roller.jpg",
        rating: 4.68,
        reviews: 0,
        price: 459,
        original_price: None,
        discount: None,
        badge: None,
        is_new: false,
    },
    Product {
        id: 44,
        name: "Charcoal Face Scrub",
        image: "/assets/product-charcoal-scrub.jpg",
        rating: 4.63,
        reviews: 0,
        price: 299,
        original_price: Some(349),
        discount: Some(14),
        badge: None,
        is_new: false,
    },
    Product {
        id: 45,
        name: "Eau De Parfum | Intense",
        image: "/assets/product-perfume-intense.jpg",
        rating: 4.81,
        reviews: 0,
        price: 549,
        original_price: Some(1299),
        discount: Some(57),
        badge: None,
        is_new: false,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occasion {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

pub const OCCASIONS: &[Occasion] = &[
    Occasion { id: "party", name: "Party Ready", icon: "🎉" },
    Occasion { id: "date", name: "Date Ready", icon: "❤️" },
    Occasion { id: "office", name: "Office Ready", icon: "💼" },
    Occasion { id: "day", name: "Day Ready", icon: "☀️" },
    Occasion { id: "gym", name: "Gym Ready", icon: "🏋️" },
];

const PARTY_PRODUCTS: &[Product] = &[
    Product { id: 51, name: "Eau De Toilette | Noir (100ml)", image: "/assets/product-perfume-intense.jpg", rating: 4.58, reviews: 74, price: 1499, original_price: Some(2199), discount: Some(31), badge: Some("Best Seller"), is_new: false },
    Product { id: 52, name: "Party Starter Kit", image: "/assets/product-perfume-blanc.jpg", rating: 4.6, reviews: 58, price: 899, original_price: Some(2598), discount: Some(65), badge: None, is_new: false },
    Product { id: 53, name: "Body Perfume | Noir (120ml)", image: "/assets/product-perfume-citron.jpg", rating: 4.75, reviews: 118, price: 299, original_price: Some(399), discount: Some(25), badge: None, is_new: false },
    Product { id: 54, name: "Classic Daily Kit", image: "/assets/product-charcoal-scrub.jpg", rating: 4.6, reviews: 40, price: 799, original_price: Some(2198), discount: Some(63), badge: None, is_new: false },
];

const DATE_PRODUCTS: &[Product] = &[
    Product { id: 55, name: "Eau De Parfum | Citron (100ml)", image: "/assets/product-perfume-citron.jpg", rating: 4.84, reviews: 50, price: 899, original_price: Some(1499), discount: Some(40), badge: Some("Best Seller"), is_new: false },
    Product { id: 56, name: "Romance Kit", image: "/assets/product-vitamin-c-serum.jpg", rating: 4.7, reviews: 32, price: 699, original_price: Some(1599), discount: Some(56), badge: None, is_new: false },
    Product { id: 57, name: "Beard Oil | Natural Blend", image: "/assets/product-beard-oil.jpg", rating: 4.71, reviews: 215, price: 349, original_price: Some(449), discount: Some(22), badge: Some("Popular"), is_new: false },
    Product { id: 58, name: "Date Night Set", image: "/assets/product-moisturizer.jpg", rating: 4.65, reviews: 28, price: 549, original_price: Some(999), discount: Some(45), badge: None, is_new: false },
];

const OFFICE_PRODUCTS: &[Product] = &[
    Product { id: 59, name: "Eau De Toilette | Blanc (100ml)", image: "/assets/product-perfume-blanc.jpg", rating: 4.83, reviews: 665, price: 899, original_price: Some(1799), discount: Some(50), badge: Some("Best Seller"), is_new: false },
    Product { id: 60, name: "Professional Grooming Kit", image: "/assets/product-hair-wax.jpg", rating: 4.55, reviews: 45, price: 649, original_price: Some(1299), discount: Some(50), badge: None, is_new: false },
    Product { id: 61, name: "Face Wash | Charcoal", image: "/assets/product-charcoal-wash.jpg", rating: 4.53, reviews: 429, price: 299, original_price: Some(349), discount: Some(14), badge: None, is_new: false },
    Product { id: 62, name: "Office Essentials", image: "/assets/product-derma-roller.jpg", rating: 4.6, reviews: 38, price: 499, original_price: Some(899), discount: Some(44), badge: None, is_new: false },
];

const DAY_PRODUCTS: &[Product] = &[
    Product { id: 63, name: "Sunscreen Gel SPF 50", image: "/assets/product-sunscreen.jpg", rating: 4.86, reviews: 36, price: 399, original_price: Some(499), discount: Some(20), badge: Some("New Launch"), is_new: true },
    Product { id: 64, name: "Day Care Combo", image: "/assets/product-body-wash.jpg", rating: 4.62, reviews: 52, price: 449, original_price: Some(799), discount: Some(44), badge: None, is_new: false },
    Product { id: 65, name: "Vitamin C Serum", image: "/assets/product-vitamin-c-serum.jpg", rating: 4.79, reviews: 394, price: 399, original_price: Some(499), discount: Some(20), badge: Some("Best Seller"), is_new: false },
    Product { id: 66, name: "Daily Fresh Kit", image: "/assets/product-charcoal-scrub.jpg", rating: 4.58, reviews: 67, price: 379, original_price: Some(699), discount: Some(46), badge: None, is_new: false },
];

const GYM_PRODUCTS: &[Product] = &[
    Product { id: 67, name: "Body Wash | Aquatic", image: "/assets/product-body-wash.jpg", rating: 4.58, reviews: 142, price: 249, original_price: Some(299), discount: Some(17), badge: None, is_new: false },
    Product { id: 68, name: "Gym Fresh Kit", image: "/assets/product-charcoal-wash.jpg", rating: 4.52, reviews: 89, price: 329, original_price: Some(599), discount: Some(45), badge: None, is_new: false },
    Product { id: 69, name: "Hair Styling Pomade", image: "/assets/product-hair-wax.jpg", rating: 4.62, reviews: 178, price: 279, original_price: Some(349), discount: Some(20), badge: None, is_new: false },
    Product { id: 70, name: "Post-Workout Care", image: "/assets/product-moisturizer.jpg", rating: 4.48, reviews: 56, price: 359, original_price: Some(649), discount: Some(45), badge: None, is_new: false },
];

/// Unknown ids fall back to the first occasion rather than an empty grid.
pub fn occasion_products(id: &str) -> &'static [Product] {
    match id {
        "party" => PARTY_PRODUCTS,
        "date" => DATE_PRODUCTS,
        "office" => OFFICE_PRODUCTS,
        "day" => DAY_PRODUCTS,
        "gym" => GYM_PRODUCTS,
        _ => PARTY_PRODUCTS,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bundle {
    pub id: u32,
    pub name: &'static str,
    pub tagline: &'static str,
    pub icon: &'static str,
    pub price: u32,
    pub original_price: u32,
    pub accent: &'static str,
    pub items: &'static [&'static str],
}

impl Bundle {
    /// Percentage saved against the undiscounted price, rounded to nearest.
    pub fn discount_percent(&self) -> u32 {
        if self.original_price == 0 {
            return 0;
        }
        let saved = self.original_price.saturating_sub(self.price) as f64;
        (saved / self.original_price as f64 * 100.0).round() as u32
    }
}

pub const BUNDLES: &[Bundle] = &[
    Bundle {
        id: 1,
        name: "Fab Five Kit",
        tagline: "Most Picked",
        icon: "⚡",
        price: 999,
        original_price: 1999,
        accent: "linear-gradient(90deg, #f59e0b, #f97316)",
        items: &["Perfume", "Face Wash", "Moisturizer", "Beard Oil", "Body Wash"],
    },
    Bundle {
        id: 2,
        name: "Luxury Scent Box",
        tagline: "Luxury Scents",
        icon: "✨",
        price: 1099,
        original_price: 2299,
        accent: "linear-gradient(90deg, #a855f7, #ec4899)",
        items: &["3 Premium Perfumes", "Travel Kit", "Gift Box"],
    },
    Bundle {
        id: 3,
        name: "Mini Perfume Box",
        tagline: "Bestseller",
        icon: "💎",
        price: 599,
        original_price: 1299,
        accent: "linear-gradient(90deg, #3b82f6, #06b6d4)",
        items: &["5 Mini Perfumes", "Sample Collection"],
    },
    Bundle {
        id: 4,
        name: "Self Grooming Kit",
        tagline: "Value Deal",
        icon: "📦",
        price: 599,
        original_price: 1199,
        accent: "linear-gradient(90deg, #22c55e, #10b981)",
        items: &["Face Care Set", "Hair Styling", "Grooming Tools"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub avatar: &'static str,
    pub rating: u32,
    pub verified: bool,
    pub text: &'static str,
    pub product: &'static str,
    pub product_image: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "Rahul Mehta",
        avatar: "R",
        rating: 5,
        verified: true,
        text: "I've tried multiple face washes, but this one actually controls oil without drying my skin. My face feels fresh and clean all day.",
        product: "Charcoal Cleansing Kit",
        product_image: "/assets/product-charcoal-wash.jpg",
    },
    Testimonial {
        id: 2,
        name: "Arjun Kapoor",
        avatar: "A",
        rating: 5,
        verified: true,
        text: "The fragrance is subtle yet long-lasting. I've received compliments at work and on evenings out, it is definitely my go-to scent now.",
        product: "Eau De Toilette | Blanc (100ml)",
        product_image: "/assets/product-perfume-blanc.jpg",
    },
    Testimonial {
        id: 3,
        name: "Nikhil Verma",
        avatar: "N",
        rating: 5,
        verified: true,
        text: "My beard feels softer and looks healthier within a week of use. No itchiness, no greasiness, just a well-groomed beard.",
        product: "Beard Growth Pair",
        product_image: "/assets/product-beard-oil.jpg",
    },
    Testimonial {
        id: 4,
        name: "Vikram Singh",
        avatar: "V",
        rating: 5,
        verified: true,
        text: "The Vitamin C serum has transformed my skin. Dark spots have faded and my complexion is so much brighter. Highly recommend!",
        product: "Vitamin C Face Serum",
        product_image: "/assets/product-vitamin-c-serum.jpg",
    },
    Testimonial {
        id: 5,
        name: "Aditya Sharma",
        avatar: "A",
        rating: 5,
        verified: true,
        text: "Finally found a sunscreen that doesn't feel greasy! The gel formula is perfect for my oily skin. Will definitely repurchase.",
        product: "Sunscreen Gel SPF 50",
        product_image: "/assets/product-sunscreen.jpg",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Concern {
    pub name: &'static str,
    pub image: &'static str,
    pub overlay: &'static str,
}

pub const CONCERNS: &[Concern] = &[
    Concern { name: "Oily Skin & Acne", image: "/assets/product-charcoal-wash.jpg", overlay: "rgba(37, 99, 235, 0.8)" },
    Concern { name: "Grey Hair", image: "/assets/product-hair-wax.jpg", overlay: "rgba(75, 85, 99, 0.8)" },
    Concern { name: "Dry Skin", image: "/assets/product-moisturizer.jpg", overlay: "rgba(217, 119, 6, 0.8)" },
    Concern { name: "Dark Lips", image: "/assets/product-vitamin-c-serum.jpg", overlay: "rgba(225, 29, 72, 0.8)" },
    Concern { name: "Dark Circle", image: "/assets/product-derma-roller.jpg", overlay: "rgba(147, 51, 234, 0.8)" },
    Concern { name: "Beard Growth", image: "/assets/product-beard-oil.jpg", overlay: "rgba(5, 150, 105, 0.8)" },
    Concern { name: "Tanned Skin", image: "/assets/product-sunscreen.jpg", overlay: "rgba(234, 88, 12, 0.8)" },
    Concern { name: "Ageing", image: "/assets/product-perfume-intense.jpg", overlay: "rgba(79, 70, 229, 0.8)" },
    Concern { name: "Black Heads", image: "/assets/product-charcoal-scrub.jpg", overlay: "rgba(71, 85, 105, 0.8)" },
    Concern { name: "Dry Hair", image: "/assets/product-body-wash.jpg", overlay: "rgba(8, 145, 178, 0.8)" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub icon: &'static str,
    pub tint: &'static str,
}

pub const CATEGORIES: &[Category] = &[
    Category { name: "Valentine's Gifts", icon: "❤️", tint: "#fff1f2" },
    Category { name: "Fragrance", icon: "💧", tint: "#fffbeb" },
    Category { name: "Face Care", icon: "🧴", tint: "#eff6ff" },
    Category { name: "Gifts for Men", icon: "🎁", tint: "#f0fdf4" },
    Category { name: "Hair Care", icon: "✂️", tint: "#faf5ff" },
    Category { name: "Tools & Accessories", icon: "🔧", tint: "#f3f4f6" },
    Category { name: "Beard Essentials", icon: "✨", tint: "#fdf6e3" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
    pub dropdown: &'static [&'static str],
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { name: "Best Sellers", href: "#bestsellers", dropdown: &[] },
    NavItem { name: "All Products", href: "#products", dropdown: &[] },
    NavItem { name: "Bundles", href: "#bundles", dropdown: &[] },
    NavItem {
        name: "Shop By Concern",
        href: "#concerns",
        dropdown: &[
            "Dark Circles",
            "Dark Lips",
            "Ageing",
            "Blackheads",
            "Body Odour",
            "Beard Growth",
            "Grey Beard",
            "Hair Fall",
        ],
    },
    NavItem { name: "Perfumes", href: "#perfumes", dropdown: &[] },
    NavItem { name: "Hair Care", href: "#haircare", dropdown: &[] },
    NavItem { name: "Body Care", href: "#bodycare", dropdown: &[] },
];

/// "Dark Circles" -> "dark-circles", for in-page anchor hrefs.
pub fn anchor_slug(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_ids_are_unique_within_each_table() {
        for table in [BESTSELLERS, NEW_ARRIVALS, SKIN_CARE, VITAMIN_C, FLUENCER_PICKS] {
            let mut ids: Vec<u32> = table.iter().map(|p| p.id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), table.len());
        }
    }

    #[test]
    fn every_occasion_has_a_full_grid() {
        for occasion in OCCASIONS {
            assert_eq!(occasion_products(occasion.id).len(), 4);
        }
        // unknown ids degrade to the default grid
        assert_eq!(occasion_products("nonsense"), PARTY_PRODUCTS);
    }

    #[test]
    fn bundle_discount_matches_the_price_pair() {
        let fab_five = &BUNDLES[0];
        assert_eq!(fab_five.discount_percent(), 50);
        let zero = Bundle { original_price: 0, ..*fab_five };
        assert_eq!(zero.discount_percent(), 0);
    }

    #[test]
    fn anchor_slug_hyphenates_and_lowercases() {
        assert_eq!(anchor_slug("Dark Circles"), "dark-circles");
        assert_eq!(anchor_slug("Tools & Accessories"), "tools-&-accessories");
        assert_eq!(anchor_slug("Fragrance"), "fragrance");
    }
}
