//! Home screen and its burger menu.

use thirtyfour::By;

use autotest_harness::{Actions, Locator, Result, Session, Validations};

pub struct HomePage {
    actions: Actions,
    validations: Validations,
    open_menu: Locator,
    menu_login: Locator,
    menu_logout: Locator,
    menu_catalog: Locator,
    menu_about: Locator,
    menu_reset_app: Locator,
}

impl HomePage {
    pub fn new(session: &Session) -> Self {
        HomePage {
            actions: Actions::new(session),
            validations: Validations::new(session),
            open_menu: Locator::mobile(
                "Menu button",
                By::XPath("//*[@content-desc='open menu']"),
                By::XPath("//XCUIElementTypeButton[contains(@label, 'Menu')]"),
            ),
            menu_login: Locator::mobile(
                "Menu item: log in",
                By::XPath("//*[@content-desc='menu item log in']"),
                By::XPath("//*[@label='Log In']"),
            ),
            menu_logout: Locator::accessibility("Menu item: log out", "menu item log out"),
            menu_catalog: Locator::accessibility("Menu item: catalog", "menu item catalog"),
            menu_about: Locator::accessibility("Menu item: about", "menu item about"),
            menu_reset_app: Locator::accessibility("Menu item: reset app", "menu item reset app"),
        }
    }

    pub async fn open_menu(&self) -> Result<()> {
        self.actions.click(&self.open_menu).await
    }

    pub async fn go_to_login(&self) -> Result<()> {
        self.open_menu().await?;
        self.actions.click(&self.menu_login).await
    }

    pub async fn log_out(&self) -> Result<()> {
        self.open_menu().await?;
        self.actions.click(&self.menu_logout).await
    }

    pub async fn go_to_catalog(&self) -> Result<()> {
        self.open_menu().await?;
        self.actions.click(&self.menu_catalog).await
    }

    pub async fn go_to_about(&self) -> Result<()> {
        self.open_menu().await?;
        self.actions.click(&self.menu_about).await
    }

    pub async fn reset_app_from_menu(&self) -> Result<()> {
        self.open_menu().await?;
        self.actions.click(&self.menu_reset_app).await
    }

    pub async fn is_menu_button_displayed(&self) -> bool {
        self.validations.is_displayed(&self.open_menu).await
    }
}
