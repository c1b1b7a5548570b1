//! Google search page.

use std::time::Duration;

use thirtyfour::By;

use autotest_harness::{Actions, Locator, Result, Session, Validations};

use crate::constants::GOOGLE_URL;

pub struct SearchPage {
    actions: Actions,
    validations: Validations,
    search_box: Locator,
    search_button: Locator,
}

impl SearchPage {
    pub fn new(session: &Session) -> Self {
        SearchPage {
            actions: Actions::new(session),
            validations: Validations::new(session),
            search_box: Locator::web("Search box", By::Name("q")),
            search_button: Locator::web("Search button", By::Name("btnK")),
        }
    }

    pub async fn open(&self) -> Result<()> {
        self.actions.navigate_to(GOOGLE_URL).await
    }

    pub async fn search_for(&self, term: &str) -> Result<()> {
        self.actions.type_text(&self.search_box, term).await?;
        self.actions.press_enter(&self.search_box).await
    }

    pub async fn click_search_button(&self) -> Result<()> {
        self.actions.click(&self.search_button).await
    }

    pub async fn search_box_text(&self) -> Result<Option<String>> {
        self.actions.attribute(&self.search_box, "value").await
    }

    pub async fn title(&self) -> Result<String> {
        self.actions.title().await
    }

    pub async fn validate_title_contains(&self, expected: &str) -> Result<()> {
        self.validations.validate_title_contains(expected).await
    }

    pub async fn is_search_box_displayed(&self) -> bool {
        self.validations
            .is_displayed_within(&self.search_box, Duration::from_secs(10))
            .await
    }
}
