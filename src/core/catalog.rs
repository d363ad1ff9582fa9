//! Static shop catalog: the cards the page renders.
//!
//! Items never change at runtime, so everything here is `'static` data.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Arrivals,
    Disposables,
    Liquids,
    Pods,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Arrivals => "New Arrivals",
            Category::Disposables => "Disposables",
            Category::Liquids => "E-Liquids",
            Category::Pods => "Pod Systems",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Product {
    pub name: &'static str,
    pub blurb: &'static str,
    pub price: f32,
    pub old_price: Option<f32>,
    pub categories: &'static [Category],
    pub accent: [u8; 3],
}

impl Product {
    pub fn in_category(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    pub fn price_label(&self) -> String {
        format!("{:.2} zł", self.price)
    }

    pub fn old_price_label(&self) -> Option<String> {
        self.old_price.map(|p| format!("{:.2} zł", p))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Review {
    pub author: &'static str,
    pub rating: u8,
    pub text: &'static str,
}

impl Review {
    pub fn stars(&self) -> String {
        let filled = usize::from(self.rating.min(5));
        let mut stars = "★".repeat(filled);
        stars.push_str(&"☆".repeat(5 - filled));
        stars
    }
}

pub const PRODUCTS: &[Product] = &[
    Product {
        name: "Nebula Ice 600",
        blurb: "Arctic mint, 600 puffs",
        price: 34.90,
        old_price: None,
        categories: &[Category::Arrivals, Category::Disposables],
        accent: [95, 215, 190],
    },
    Product {
        name: "Mango Tango 10ml",
        blurb: "Ripe mango shortfill",
        price: 24.50,
        old_price: Some(29.90),
        categories: &[Category::Arrivals, Category::Liquids],
        accent: [250, 180, 90],
    },
    Product {
        name: "Vortex Pod Kit",
        blurb: "1100 mAh refillable system",
        price: 129.00,
        old_price: None,
        categories: &[Category::Arrivals, Category::Pods],
        accent: [150, 130, 250],
    },
    Product {
        name: "Berry Frost 600",
        blurb: "Blueberry with a cold finish",
        price: 34.90,
        old_price: None,
        categories: &[Category::Disposables],
        accent: [120, 140, 250],
    },
    Product {
        name: "Citrus Cloud 10ml",
        blurb: "Lemon-lime 50/50 blend",
        price: 22.90,
        old_price: None,
        categories: &[Category::Liquids],
        accent: [220, 235, 110],
    },
    Product {
        name: "Stealth Pod Mini",
        blurb: "Pocket system, 750 mAh",
        price: 99.00,
        old_price: Some(119.00),
        categories: &[Category::Pods],
        accent: [130, 220, 130],
    },
    Product {
        name: "Watermelon Rush 800",
        blurb: "Summer melon, 800 puffs",
        price: 39.90,
        old_price: None,
        categories: &[Category::Arrivals, Category::Disposables],
        accent: [250, 120, 130],
    },
    Product {
        name: "Vanilla Custard 10ml",
        blurb: "Dessert classic, 70/30",
        price: 26.90,
        old_price: None,
        categories: &[Category::Liquids],
        accent: [240, 210, 160],
    },
];

/// The carousel track. Order matters; slides index into this list.
pub const BEST_SELLERS: &[Product] = &[
    Product {
        name: "Nebula Ice 600",
        blurb: "Arctic mint, 600 puffs",
        price: 34.90,
        old_price: None,
        categories: &[Category::Disposables],
        accent: [95, 215, 190],
    },
    Product {
        name: "Vortex Pod Kit",
        blurb: "1100 mAh refillable system",
        price: 129.00,
        old_price: None,
        categories: &[Category::Pods],
        accent: [150, 130, 250],
    },
    Product {
        name: "Mango Tango 10ml",
        blurb: "Ripe mango shortfill",
        price: 24.50,
        old_price: Some(29.90),
        categories: &[Category::Liquids],
        accent: [250, 180, 90],
    },
    Product {
        name: "Berry Frost 600",
        blurb: "Blueberry with a cold finish",
        price: 34.90,
        old_price: None,
        categories: &[Category::Disposables],
        accent: [120, 140, 250],
    },
    Product {
        name: "Stealth Pod Mini",
        blurb: "Pocket system, 750 mAh",
        price: 99.00,
        old_price: Some(119.00),
        categories: &[Category::Pods],
        accent: [130, 220, 130],
    },
    Product {
        name: "Watermelon Rush 800",
        blurb: "Summer melon, 800 puffs",
        price: 39.90,
        old_price: None,
        categories: &[Category::Disposables],
        accent: [250, 120, 130],
    },
    Product {
        name: "Citrus Cloud 10ml",
        blurb: "Lemon-lime 50/50 blend",
        price: 22.90,
        old_price: None,
        categories: &[Category::Liquids],
        accent: [220, 235, 110],
    },
    Product {
        name: "Vanilla Custard 10ml",
        blurb: "Dessert classic, 70/30",
        price: 26.90,
        old_price: None,
        categories: &[Category::Liquids],
        accent: [240, 210, 160],
    },
    Product {
        name: "Glacier Grape 800",
        blurb: "Dark grape, icy throat hit",
        price: 39.90,
        old_price: None,
        categories: &[Category::Disposables],
        accent: [180, 110, 230],
    },
    Product {
        name: "Aurora Pod Pro",
        blurb: "Adjustable airflow, 1500 mAh",
        price: 159.00,
        old_price: Some(179.00),
        categories: &[Category::Pods],
        accent: [110, 200, 250],
    },
];

pub const REVIEWS: &[Review] = &[
    Review {
        author: "Marta K.",
        rating: 5,
        text: "Order arrived next day, the Vortex kit feels premium for the price.",
    },
    Review {
        author: "Tomek W.",
        rating: 4,
        text: "Great flavour range. Mango Tango is now my daily liquid.",
    },
    Review {
        author: "Ania S.",
        rating: 5,
        text: "Best sellers section is spot on, everything I tried from it was solid.",
    },
    Review {
        author: "Piotr D.",
        rating: 4,
        text: "Stealth Pod Mini is tiny and lasts the whole day. Would buy again.",
    },
    Review {
        author: "Ewa L.",
        rating: 5,
        text: "Friendly support and fair prices. The ice range is excellent.",
    },
    Review {
        author: "Karol M.",
        rating: 4,
        text: "Packaging could be simpler, but the products themselves are top shelf.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_product_has_a_category() {
        for product in PRODUCTS {
            assert!(!product.categories.is_empty(), "{} has no category", product.name);
        }
    }

    #[test]
    fn stars_render_five_slots() {
        for review in REVIEWS {
            assert_eq!(Review::stars(review).chars().count(), 5);
        }
        let overrated = Review { author: "x", rating: 9, text: "" };
        assert_eq!(overrated.stars(), "★★★★★");
    }

    #[test]
    fn price_labels_use_zloty() {
        let product = PRODUCTS[0];
        assert!(product.price_label().ends_with("zł"));
    }
}
