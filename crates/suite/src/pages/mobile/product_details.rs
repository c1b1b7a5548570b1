//! Product details screen.

use thirtyfour::By;

use autotest_harness::{Actions, Error, Locator, Result, Session, Validations};

use crate::catalog::ColorOption;
use crate::pages::mobile::cart::parse_price;

pub struct ProductDetailsPage {
    actions: Actions,
    validations: Validations,
    screen: Locator,
    add_to_cart: Locator,
    counter_plus: Locator,
    counter_minus: Locator,
    counter_amount: Locator,
    cart_badge: Locator,
    cart_badge_count: Locator,
    product_price: Locator,
    product_name: Locator,
}

impl ProductDetailsPage {
    pub fn new(session: &Session) -> Self {
        ProductDetailsPage {
            actions: Actions::new(session),
            validations: Validations::new(session),
            screen: Locator::accessibility("Product details screen", "product screen"),
            add_to_cart: Locator::accessibility("Add To Cart button", "Add To Cart button"),
            counter_plus: Locator::accessibility("Quantity plus button", "counter plus button"),
            counter_minus: Locator::accessibility("Quantity minus button", "counter minus button"),
            counter_amount: Locator::accessibility("Quantity amount", "counter amount"),
            cart_badge: Locator::accessibility("Cart badge", "cart badge"),
            cart_badge_count: Locator::mobile(
                "Cart badge count",
                By::XPath("//android.view.ViewGroup[@content-desc='cart badge']/android.widget.TextView"),
                By::XPath("//XCUIElementTypeOther[@name='cart badge']/XCUIElementTypeStaticText"),
            ),
            product_price: Locator::accessibility("Product price", "product price"),
            product_name: Locator::mobile(
                "Product name",
                By::XPath("//android.view.ViewGroup[@content-desc='container header']/android.widget.TextView"),
                By::XPath("//XCUIElementTypeOther[@name='container header']/XCUIElementTypeStaticText"),
            ),
        }
    }

    pub async fn add_to_cart(&self) -> Result<()> {
        self.actions.click(&self.add_to_cart).await
    }

    pub async fn increase_quantity(&self) -> Result<()> {
        self.actions.click(&self.counter_plus).await
    }

    pub async fn increase_quantity_by(&self, times: usize) -> Result<()> {
        for _ in 0..times {
            self.increase_quantity().await?;
        }
        Ok(())
    }

    pub async fn decrease_quantity(&self) -> Result<()> {
        self.actions.click(&self.counter_minus).await
    }

    pub async fn select_color(&self, color: ColorOption) -> Result<()> {
        let swatch = Locator::accessibility(
            format!("Color option: {}", color.name),
            color.control_id,
        );
        self.actions.click(&swatch).await
    }

    /// Taps a review star, 1 through 5.
    pub async fn give_star_review(&self, stars: u8) -> Result<()> {
        if !(1..=5).contains(&stars) {
            return Err(Error::Unsupported {
                what: "review stars",
                value: stars.to_string(),
            });
        }
        let star = Locator::accessibility(
            format!("Review star {stars}"),
            &format!("review star {stars}"),
        );
        self.actions.click(&star).await
    }

    pub async fn open_cart(&self) -> Result<()> {
        self.actions.click(&self.cart_badge).await
    }

    pub async fn back_to_products(&self) -> Result<()> {
        self.actions.back().await
    }

    pub async fn quantity_text(&self) -> Result<String> {
        self.actions.text(&self.counter_amount).await
    }

    pub async fn product_name(&self) -> Result<String> {
        self.actions.text(&self.product_name).await
    }

    pub async fn product_price(&self) -> Result<f64> {
        let text = self.actions.text(&self.product_price).await?;
        parse_price(&text)
    }

    pub async fn cart_badge_count(&self) -> usize {
        match self.actions.text(&self.cart_badge_count).await {
            Ok(text) => text.trim().parse().unwrap_or(0),
            Err(_) => 0,
        }
    }

    pub async fn validate_screen_displayed(&self) -> Result<()> {
        self.validations.validate_displayed(&self.screen).await
    }

    pub async fn is_add_to_cart_displayed(&self) -> bool {
        self.validations.is_displayed(&self.add_to_cart).await
    }

    pub async fn is_color_displayed(&self, color: ColorOption) -> bool {
        let swatch = Locator::accessibility(
            format!("Color option: {}", color.name),
            color.control_id,
        );
        self.validations.is_displayed(&swatch).await
    }
}
