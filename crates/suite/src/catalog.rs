//! Catalog of the demo shop's products and product options.

/// One product in the catalog. `index` is the 1-based position in the
/// product grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Product {
    pub index: usize,
    pub name: &'static str,
    pub price: f64,
}

pub const BACKPACK: Product = Product {
    index: 1,
    name: "Sauce Labs Backpack",
    price: 29.99,
};
pub const BIKE_LIGHT: Product = Product {
    index: 2,
    name: "Sauce Labs Bike Light",
    price: 9.99,
};
pub const BOLT_TSHIRT: Product = Product {
    index: 3,
    name: "Sauce Labs Bolt T-Shirt",
    price: 15.99,
};
pub const FLEECE_JACKET: Product = Product {
    index: 4,
    name: "Sauce Labs Fleece Jacket",
    price: 49.99,
};
pub const ONESIE: Product = Product {
    index: 5,
    name: "Sauce Labs Onesie",
    price: 7.99,
};
pub const TEST_TSHIRT: Product = Product {
    index: 6,
    name: "Test.allTheThings() T-Shirt",
    price: 15.99,
};

pub const PRODUCTS: [Product; 6] = [
    BACKPACK,
    BIKE_LIGHT,
    BOLT_TSHIRT,
    FLEECE_JACKET,
    ONESIE,
    TEST_TSHIRT,
];

pub fn by_index(index: usize) -> Option<Product> {
    PRODUCTS.iter().copied().find(|p| p.index == index)
}

pub fn by_name(name: &str) -> Option<Product> {
    PRODUCTS.iter().copied().find(|p| p.name == name)
}

/// Color swatch on the product details screen. `control_id` is the
/// accessibility id of its selector circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorOption {
    pub name: &'static str,
    pub control_id: &'static str,
}

pub const BLACK: ColorOption = ColorOption {
    name: "black",
    control_id: "black circle",
};
pub const BLUE: ColorOption = ColorOption {
    name: "blue",
    control_id: "blue circle",
};
pub const GRAY: ColorOption = ColorOption {
    name: "gray",
    control_id: "gray circle",
};
pub const RED: ColorOption = ColorOption {
    name: "red",
    control_id: "red circle",
};

pub const COLORS: [ColorOption; 4] = [BLACK, BLUE, GRAY, RED];
