//! Checkout flow: address, payment and order confirmation screens.

use autotest_harness::{Actions, Locator, Result, Session, Validations};

pub struct CheckoutPage {
    actions: Actions,
    validations: Validations,
    address_screen: Locator,
    full_name: Locator,
    address_line1: Locator,
    address_line2: Locator,
    city: Locator,
    state: Locator,
    zip_code: Locator,
    country: Locator,
    to_payment: Locator,
    payment_screen: Locator,
    card_number: Locator,
    expiration_date: Locator,
    security_code: Locator,
    review_order: Locator,
    complete_screen: Locator,
    continue_shopping: Locator,
}

impl CheckoutPage {
    pub fn new(session: &Session) -> Self {
        CheckoutPage {
            actions: Actions::new(session),
            validations: Validations::new(session),
            address_screen: Locator::accessibility(
                "Checkout address screen",
                "checkout address screen",
            ),
            full_name: Locator::accessibility("Full name field", "Full Name* input field"),
            address_line1: Locator::accessibility(
                "Address line 1 field",
                "Address Line 1* input field",
            ),
            address_line2: Locator::accessibility(
                "Address line 2 field",
                "Address Line 2 input field",
            ),
            city: Locator::accessibility("City field", "City* input field"),
            state: Locator::accessibility("State field", "State/Region input field"),
            zip_code: Locator::accessibility("Zip code field", "Zip Code* input field"),
            country: Locator::accessibility("Country field", "Country* input field"),
            to_payment: Locator::accessibility("To Payment button", "To Payment button"),
            payment_screen: Locator::accessibility(
                "Checkout payment screen",
                "checkout payment screen",
            ),
            card_number: Locator::accessibility("Card number field", "Card Number* input field"),
            expiration_date: Locator::accessibility(
                "Expiration date field",
                "Expiration Date* input field",
            ),
            security_code: Locator::accessibility(
                "Security code field",
                "Security Code* input field",
            ),
            review_order: Locator::accessibility("Review Order button", "Review Order button"),
            complete_screen: Locator::accessibility(
                "Checkout complete screen",
                "checkout complete screen",
            ),
            continue_shopping: Locator::accessibility(
                "Continue Shopping button",
                "Continue Shopping button",
            ),
        }
    }

    pub async fn fill_address(
        &self,
        full_name: &str,
        line1: &str,
        line2: &str,
        city: &str,
        state: &str,
        zip: &str,
        country: &str,
    ) -> Result<()> {
        self.actions.type_text(&self.full_name, full_name).await?;
        self.actions.type_text(&self.address_line1, line1).await?;
        if !line2.is_empty() {
            self.actions.type_text(&self.address_line2, line2).await?;
        }
        self.actions.type_text(&self.city, city).await?;
        if !state.is_empty() {
            self.actions.type_text(&self.state, state).await?;
        }
        self.actions.type_text(&self.zip_code, zip).await?;
        self.actions.type_text(&self.country, country).await?;
        Ok(())
    }

    /// The address form comes prefilled in the demo app; just move on.
    pub async fn continue_with_default_address(&self) -> Result<()> {
        self.actions.click(&self.to_payment).await
    }

    pub async fn pay_with_test_card(&self) -> Result<()> {
        // The card holder reuses the Full Name field id on the payment screen.
        self.actions.type_text(&self.full_name, "Test User").await?;
        self.actions
            .type_text(&self.card_number, "4111111111111111")
            .await?;
        self.actions.type_text(&self.expiration_date, "12/25").await?;
        self.actions.type_text(&self.security_code, "123").await?;
        self.actions.click(&self.review_order).await
    }

    pub async fn continue_shopping(&self) -> Result<()> {
        self.actions.click(&self.continue_shopping).await
    }

    pub async fn validate_address_screen_displayed(&self) -> Result<()> {
        self.validations.validate_displayed(&self.address_screen).await
    }

    pub async fn is_address_screen_displayed(&self) -> bool {
        self.validations.is_displayed(&self.address_screen).await
    }

    pub async fn is_payment_screen_displayed(&self) -> bool {
        self.validations.is_displayed(&self.payment_screen).await
    }

    pub async fn is_checkout_complete_displayed(&self) -> bool {
        self.validations.is_displayed(&self.complete_screen).await
    }
}
