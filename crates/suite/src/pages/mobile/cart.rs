//! Cart screen, including price and item-count parsing.

use std::time::Duration;

use thirtyfour::By;

use autotest_harness::{Actions, Error, Locator, Result, Session, Validations};

/// Parses a displayed price like "$39.98" or "$1,049.99" into a number.
pub fn parse_price(text: &str) -> Result<f64> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();
    cleaned.parse().map_err(|_| Error::Parse {
        what: "price",
        text: text.to_string(),
    })
}

/// Parses an item-count caption like "2 items" into a number.
pub fn parse_count(text: &str) -> Result<u32> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    digits.parse().map_err(|_| Error::Parse {
        what: "item count",
        text: text.to_string(),
    })
}

/// Price comparison with a one-cent tolerance for float drift.
pub fn matches_total(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 0.01
}

pub struct CartPage {
    actions: Actions,
    validations: Validations,
    screen: Locator,
    proceed_to_checkout: Locator,
    remove_item: Locator,
    counter_plus: Locator,
    counter_minus: Locator,
    counter_amount: Locator,
    total_price: Locator,
    total_number: Locator,
    product_labels: Locator,
    product_rows: Locator,
    no_items_message: Locator,
    go_shopping: Locator,
}

impl CartPage {
    pub fn new(session: &Session) -> Self {
        CartPage {
            actions: Actions::new(session),
            validations: Validations::new(session),
            screen: Locator::accessibility("Cart screen", "cart screen"),
            proceed_to_checkout: Locator::accessibility(
                "Proceed To Checkout button",
                "Proceed To Checkout button",
            ),
            remove_item: Locator::accessibility("Remove item button", "remove item"),
            counter_plus: Locator::accessibility("Quantity plus button", "counter plus button"),
            counter_minus: Locator::accessibility("Quantity minus button", "counter minus button"),
            counter_amount: Locator::accessibility("Quantity amount", "counter amount"),
            total_price: Locator::accessibility("Total price", "total price"),
            total_number: Locator::accessibility("Total item count", "total number"),
            product_labels: Locator::accessibility("Product labels", "product label"),
            product_rows: Locator::accessibility("Product rows", "product row"),
            no_items_message: Locator::mobile(
                "No items message",
                By::XPath("//android.widget.TextView[contains(@text, 'No Items')]"),
                By::XPath("//XCUIElementTypeStaticText[contains(@name, 'No Items')]"),
            ),
            go_shopping: Locator::accessibility("Go Shopping button", "Go Shopping button"),
        }
    }

    pub async fn proceed_to_checkout(&self) -> Result<()> {
        self.actions.click(&self.proceed_to_checkout).await
    }

    pub async fn remove_item(&self) -> Result<()> {
        self.actions.click(&self.remove_item).await
    }

    /// Removes items one by one until the cart is empty.
    pub async fn remove_all_items(&self) -> Result<()> {
        while self.has_items().await {
            self.remove_item().await?;
            tokio::time::sleep(Duration::from_millis(500)).await;
        }
        Ok(())
    }

    pub async fn increase_quantity(&self) -> Result<()> {
        self.actions.click(&self.counter_plus).await
    }

    pub async fn decrease_quantity(&self) -> Result<()> {
        self.actions.click(&self.counter_minus).await
    }

    pub async fn go_shopping(&self) -> Result<()> {
        self.actions.click(&self.go_shopping).await
    }

    pub async fn total_price(&self) -> Result<f64> {
        let text = self.actions.text(&self.total_price).await?;
        parse_price(&text)
    }

    pub async fn total_items_count(&self) -> Result<u32> {
        let text = self.actions.text(&self.total_number).await?;
        parse_count(&text)
    }

    pub async fn item_quantity(&self) -> Result<String> {
        self.actions.text(&self.counter_amount).await
    }

    pub async fn product_row_count(&self) -> Result<usize> {
        self.actions.count(&self.product_rows).await
    }

    pub async fn contains_product(&self, name: &str) -> Result<bool> {
        let labels = self.actions.all_texts(&self.product_labels).await?;
        Ok(labels.iter().any(|label| label.contains(name)))
    }

    /// Asserts the displayed total matches `expected` within one cent.
    pub async fn validate_total_price(&self, expected: f64) -> Result<()> {
        let actual = self.total_price().await?;
        if !matches_total(actual, expected) {
            return Err(Error::assertion(
                "cart total price mismatch",
                format!("${expected:.2}"),
                format!("${actual:.2}"),
            ));
        }
        Ok(())
    }

    pub async fn validate_items_count(&self, expected: u32) -> Result<()> {
        let actual = self.total_items_count().await?;
        self.validations
            .validate_count_equals(actual as usize, expected as usize, "cart items")
    }

    pub async fn validate_screen_displayed(&self) -> Result<()> {
        self.validations.validate_displayed(&self.screen).await
    }

    pub async fn is_screen_displayed(&self) -> bool {
        self.validations.is_displayed(&self.screen).await
    }

    pub async fn has_items(&self) -> bool {
        self.validations.is_displayed(&self.remove_item).await
    }

    pub async fn is_empty(&self) -> bool {
        self.validations.is_displayed(&self.no_items_message).await
            || self.validations.is_displayed(&self.go_shopping).await
    }
}
