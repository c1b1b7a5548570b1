//! Products (catalog) screen.

use thirtyfour::By;

use autotest_harness::{Actions, Locator, Result, Session, Validations};

use crate::catalog::Product;

/// How the catalog can be sorted. `control_id` is the accessibility id of
/// the option inside the sort modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub name: &'static str,
    pub control_id: &'static str,
}

pub const NAME_ASCENDING: SortOrder = SortOrder {
    name: "name ascending",
    control_id: "nameAsc",
};
pub const NAME_DESCENDING: SortOrder = SortOrder {
    name: "name descending",
    control_id: "nameDesc",
};
pub const PRICE_LOW_TO_HIGH: SortOrder = SortOrder {
    name: "price low to high",
    control_id: "priceAsc",
};
pub const PRICE_HIGH_TO_LOW: SortOrder = SortOrder {
    name: "price high to low",
    control_id: "priceDesc",
};

pub struct ProductsPage {
    actions: Actions,
    validations: Validations,
    screen: Locator,
    sort_button: Locator,
    cart_badge: Locator,
    cart_badge_count: Locator,
    store_items: Locator,
}

impl ProductsPage {
    pub fn new(session: &Session) -> Self {
        ProductsPage {
            actions: Actions::new(session),
            validations: Validations::new(session),
            screen: Locator::accessibility("Products screen", "products screen"),
            sort_button: Locator::accessibility("Sort button", "sort button"),
            cart_badge: Locator::accessibility("Cart badge", "cart badge"),
            cart_badge_count: Locator::mobile(
                "Cart badge count",
                By::XPath("//android.view.ViewGroup[@content-desc='cart badge']/android.widget.TextView"),
                By::XPath("//XCUIElementTypeOther[@name='cart badge']/XCUIElementTypeStaticText"),
            ),
            store_items: Locator::accessibility("Store items", "store item"),
        }
    }

    fn store_item_at(index: usize) -> Locator {
        Locator::mobile(
            format!("Store item {index}"),
            By::XPath(format!(
                "(//android.view.ViewGroup[@content-desc='store item'])[{index}]"
            )),
            By::XPath(format!(
                "(//XCUIElementTypeOther[@name='store item'])[{index}]"
            )),
        )
    }

    /// Opens the details screen of a product by its 1-based grid position.
    pub async fn open_product_at(&self, index: usize) -> Result<()> {
        self.actions.click(&Self::store_item_at(index)).await
    }

    pub async fn open_product(&self, product: Product) -> Result<()> {
        self.open_product_at(product.index).await
    }

    pub async fn open_cart(&self) -> Result<()> {
        self.actions.click(&self.cart_badge).await
    }

    pub async fn sort_by(&self, order: SortOrder) -> Result<()> {
        self.actions.click(&self.sort_button).await?;
        let option = Locator::accessibility(
            format!("Sort option: {}", order.name),
            order.control_id,
        );
        self.actions.click(&option).await
    }

    pub async fn product_count(&self) -> Result<usize> {
        self.actions.count(&self.store_items).await
    }

    /// Number shown on the cart badge, or 0 when the badge is absent.
    pub async fn cart_badge_count(&self) -> usize {
        match self.actions.text(&self.cart_badge_count).await {
            Ok(text) => text.trim().parse().unwrap_or(0),
            Err(_) => 0,
        }
    }

    pub async fn validate_screen_displayed(&self) -> Result<()> {
        self.validations.validate_displayed(&self.screen).await
    }

    pub async fn is_screen_displayed(&self) -> bool {
        self.validations.is_displayed(&self.screen).await
    }

    pub async fn is_sort_button_displayed(&self) -> bool {
        self.validations.is_displayed(&self.sort_button).await
    }

    pub async fn is_cart_badge_displayed(&self) -> bool {
        self.validations.is_displayed(&self.cart_badge).await
    }
}
