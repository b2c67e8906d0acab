//! Compiled-in mock catalog.
//!
//! The storefront has no product backend; this dataset is the whole catalog
//! unless `STOREFRONT_CATALOG_PATH` points at a JSON file.

use brightcart_core::{Price, Product, ProductId};

/// Display fields for one mock product.
struct Seed {
    id: &'static str,
    title: &'static str,
    short_description: &'static str,
    description: Option<&'static str>,
    brand: Option<&'static str>,
    cents: u32,
    tag: Option<&'static str>,
    tagline: Option<&'static str>,
    rating: Option<f32>,
    review_count: Option<u32>,
}

impl Seed {
    fn into_product(self) -> Product {
        Product {
            id: ProductId::new(self.id),
            image_url: format!("/images/products/{}.jpg", self.id),
            image_alt: Some(self.title.to_owned()),
            title: Some(self.title.to_owned()),
            short_description: Some(self.short_description.to_owned()),
            description: self.description.map(str::to_owned),
            brand: self.brand.map(str::to_owned),
            price: Price::from_cents(self.cents),
            tag: self.tag.map(str::to_owned),
            tagline: self.tagline.map(str::to_owned),
            rating: self.rating,
            review_count: self.review_count,
            is_saved: false,
            in_cart: false,
        }
    }
}

const SEEDS: [Seed; 10] = [
    Seed {
        id: "echo-dot-4",
        title: "Echo Dot (4th Gen)",
        short_description: "Smart speaker with Alexa",
        description: Some("Compact smart speaker with crisp vocals and balanced bass."),
        brand: Some("Amazon"),
        cents: 4999,
        tag: Some("Best Seller"),
        tagline: Some("Our most popular smart speaker"),
        rating: Some(4.7),
        review_count: Some(412_306),
    },
    Seed {
        id: "kindle-paperwhite",
        title: "Kindle Paperwhite",
        short_description: "Waterproof e-reader with a 6.8\" display",
        description: Some("Adjustable warm light and weeks of battery life."),
        brand: Some("Amazon"),
        cents: 13_999,
        tag: None,
        tagline: None,
        rating: Some(4.8),
        review_count: Some(98_120),
    },
    Seed {
        id: "airpods-pro",
        title: "AirPods Pro",
        short_description: "Wireless earbuds with active noise cancellation",
        description: Some("Transparency mode and a customizable fit."),
        brand: Some("Apple"),
        cents: 24_900,
        tag: Some("Deal"),
        tagline: Some("Limited time offer"),
        rating: Some(4.6),
        review_count: Some(77_431),
    },
    Seed {
        id: "instant-pot-duo",
        title: "Instant Pot Duo 7-in-1",
        short_description: "Electric pressure cooker, 6 quart",
        description: Some("Pressure cooker, slow cooker, rice cooker, steamer and more."),
        brand: Some("Instant Pot"),
        cents: 8900,
        tag: None,
        tagline: None,
        rating: Some(4.7),
        review_count: Some(156_218),
    },
    Seed {
        id: "logitech-mx-master-3",
        title: "Logitech MX Master 3",
        short_description: "Advanced wireless mouse",
        description: None,
        brand: Some("Logitech"),
        cents: 9999,
        tag: None,
        tagline: None,
        rating: Some(4.5),
        review_count: Some(21_004),
    },
    Seed {
        id: "hydro-flask-32",
        title: "Hydro Flask 32 oz",
        short_description: "Insulated stainless steel water bottle",
        description: Some("Keeps drinks cold for 24 hours and hot for 12."),
        brand: Some("Hydro Flask"),
        cents: 4495,
        tag: Some("New"),
        tagline: None,
        rating: None,
        review_count: None,
    },
    Seed {
        id: "fire-tv-stick",
        title: "Fire TV Stick 4K",
        short_description: "Streaming device with Alexa voice remote",
        description: Some("Dolby Vision, HDR and HDR10+ support."),
        brand: Some("Amazon"),
        cents: 4999,
        tag: Some("Best Seller"),
        tagline: None,
        rating: Some(4.7),
        review_count: Some(640_117),
    },
    Seed {
        id: "atomic-habits",
        title: "Atomic Habits",
        short_description: "Hardcover book by James Clear",
        description: Some("An easy and proven way to build good habits and break bad ones."),
        brand: None,
        cents: 1199,
        tag: None,
        tagline: Some("#1 New York Times best seller"),
        rating: Some(4.8),
        review_count: Some(88_951),
    },
    Seed {
        id: "anker-powercore-10000",
        title: "Anker PowerCore 10000",
        short_description: "Portable charger, 10000mAh",
        description: None,
        brand: Some("Anker"),
        cents: 2599,
        tag: Some("Deal"),
        tagline: None,
        rating: Some(4.6),
        review_count: Some(132_540),
    },
    Seed {
        id: "lodge-cast-iron-skillet",
        title: "Lodge Cast Iron Skillet",
        short_description: "Pre-seasoned 10.25 inch skillet",
        description: Some("Oven, stovetop, grill and campfire safe."),
        brand: Some("Lodge"),
        cents: 1990,
        tag: None,
        tagline: None,
        rating: Some(4.7),
        review_count: None,
    },
];

/// Build the mock product list. IDs are unique by construction.
pub fn products() -> Vec<Product> {
    SEEDS.into_iter().map(Seed::into_product).collect()
}
