//! Login screen.

use thirtyfour::By;

use autotest_harness::{Actions, Locator, Result, Session, Validations};

use crate::constants::{VALID_PASSWORD, VALID_USERNAME};

pub struct LoginPage {
    actions: Actions,
    validations: Validations,
    screen: Locator,
    username_field: Locator,
    password_field: Locator,
    login_button: Locator,
    bob_autofill: Locator,
    alice_autofill: Locator,
    username_error: Locator,
    password_error: Locator,
    generic_error: Locator,
}

impl LoginPage {
    pub fn new(session: &Session) -> Self {
        LoginPage {
            actions: Actions::new(session),
            validations: Validations::new(session),
            screen: Locator::accessibility("Login screen", "login screen"),
            username_field: Locator::mobile(
                "Username field",
                By::XPath("//*[@content-desc='Username input field']"),
                By::XPath("//XCUIElementTypeTextField"),
            ),
            password_field: Locator::mobile(
                "Password field",
                By::XPath("//*[@content-desc='Password input field']"),
                By::XPath("//XCUIElementTypeSecureTextField"),
            ),
            login_button: Locator::mobile(
                "Login button",
                By::XPath("//*[@content-desc='Login button']"),
                By::XPath("//XCUIElementTypeStaticText[@label='Login']"),
            ),
            bob_autofill: Locator::accessibility(
                "Bob autofill button",
                "bob@example.com-autofill",
            ),
            alice_autofill: Locator::accessibility(
                "Alice autofill button",
                "alice@example.com (locked out)-autofill",
            ),
            username_error: Locator::accessibility(
                "Username error message",
                "Username-error-message",
            ),
            password_error: Locator::accessibility(
                "Password error message",
                "Password-error-message",
            ),
            generic_error: Locator::accessibility(
                "Login error message",
                "generic-error-message",
            ),
        }
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        self.actions.type_text(&self.username_field, username).await?;
        self.actions.type_text(&self.password_field, password).await?;
        self.actions.click(&self.login_button).await
    }

    /// Logs in as the standard user via its autofill shortcut.
    pub async fn login_with_valid_credentials(&self) -> Result<()> {
        self.actions.click(&self.bob_autofill).await?;
        self.actions.click(&self.login_button).await
    }

    /// Fills the locked-out user via its autofill shortcut and submits.
    pub async fn login_as_locked_user(&self) -> Result<()> {
        self.actions.click(&self.alice_autofill).await?;
        self.actions.click(&self.login_button).await
    }

    pub async fn login_with_typed_valid_credentials(&self) -> Result<()> {
        self.login(VALID_USERNAME, VALID_PASSWORD).await
    }

    pub async fn username_text(&self) -> Result<String> {
        self.actions.text(&self.username_field).await
    }

    pub async fn validate_screen_displayed(&self) -> Result<()> {
        self.validations.validate_displayed(&self.screen).await
    }

    pub async fn is_screen_displayed(&self) -> bool {
        self.validations.is_displayed(&self.screen).await
    }

    pub async fn is_login_button_displayed(&self) -> bool {
        self.validations.is_displayed(&self.login_button).await
    }

    pub async fn is_username_error_displayed(&self) -> bool {
        self.validations.is_displayed(&self.username_error).await
    }

    pub async fn is_password_error_displayed(&self) -> bool {
        self.validations.is_displayed(&self.password_error).await
    }

    pub async fn is_generic_error_displayed(&self) -> bool {
        self.validations.is_displayed(&self.generic_error).await
    }
}
