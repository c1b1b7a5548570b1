//! Action wrapper over the raw WebDriver session.
//!
//! Every element operation performs a bounded wait for the state it needs
//! (visible or clickable) before touching the element, then emits one
//! structured log line naming the action and a best-effort element
//! descriptor. Wait timeouts are not caught here; they propagate to the
//! caller as [`Error::Timeout`].

use std::time::{Duration, Instant};

use thirtyfour::components::SelectElement;
use thirtyfour::{Key, WebElement};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::selector::Locator;
use crate::session::Session;

/// Default bound for element-state waits.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Interval between condition polls inside a wait.
pub const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Element state a wait can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementState {
    Visible,
    Clickable,
    Invisible,
}

impl std::fmt::Display for ElementState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ElementState::Visible => "visible",
            ElementState::Clickable => "clickable",
            ElementState::Invisible => "invisible",
        })
    }
}

/// Synchronous-style UI operations bound to one session.
#[derive(Debug, Clone)]
pub struct Actions {
    session: Session,
}

impl Actions {
    pub fn new(session: &Session) -> Self {
        Actions {
            session: session.clone(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    // ---- click ----

    /// Clicks an element after waiting for it to be clickable.
    pub async fn click(&self, locator: &Locator) -> Result<()> {
        self.click_within(locator, DEFAULT_TIMEOUT).await
    }

    /// Clicks with a caller-supplied wait bound.
    pub async fn click_within(&self, locator: &Locator, timeout: Duration) -> Result<()> {
        let element = self
            .wait_for(locator, ElementState::Clickable, timeout)
            .await?;
        info!(element = %self.describe(&element).await, "click");
        element.click().await?;
        Ok(())
    }

    pub async fn double_click(&self, locator: &Locator) -> Result<()> {
        let element = self
            .wait_for(locator, ElementState::Clickable, DEFAULT_TIMEOUT)
            .await?;
        info!(element = %self.describe(&element).await, "double click");
        self.session
            .driver()
            .action_chain()
            .double_click_element(&element)
            .perform()
            .await?;
        Ok(())
    }

    pub async fn right_click(&self, locator: &Locator) -> Result<()> {
        let element = self
            .wait_for(locator, ElementState::Clickable, DEFAULT_TIMEOUT)
            .await?;
        info!(element = %self.describe(&element).await, "right click");
        self.session
            .driver()
            .action_chain()
            .context_click_element(&element)
            .perform()
            .await?;
        Ok(())
    }

    // ---- typing ----

    /// Clears the field, then types.
    pub async fn type_text(&self, locator: &Locator, text: &str) -> Result<()> {
        let element = self
            .wait_for(locator, ElementState::Visible, DEFAULT_TIMEOUT)
            .await?;
        info!(element = %self.describe(&element).await, text, "type");
        element.clear().await?;
        element.send_keys(text).await?;
        Ok(())
    }

    /// Types without clearing first.
    pub async fn append_text(&self, locator: &Locator, text: &str) -> Result<()> {
        let element = self
            .wait_for(locator, ElementState::Visible, DEFAULT_TIMEOUT)
            .await?;
        info!(element = %self.describe(&element).await, text, "append text");
        element.send_keys(text).await?;
        Ok(())
    }

    pub async fn clear_text(&self, locator: &Locator) -> Result<()> {
        let element = self
            .wait_for(locator, ElementState::Visible, DEFAULT_TIMEOUT)
            .await?;
        info!(element = %self.describe(&element).await, "clear text");
        element.clear().await?;
        Ok(())
    }

    pub async fn press_enter(&self, locator: &Locator) -> Result<()> {
        let element = self
            .wait_for(locator, ElementState::Visible, DEFAULT_TIMEOUT)
            .await?;
        info!(element = %self.describe(&element).await, "press ENTER");
        element.send_keys(Key::Enter + "").await?;
        Ok(())
    }

    pub async fn press_tab(&self, locator: &Locator) -> Result<()> {
        let element = self
            .wait_for(locator, ElementState::Visible, DEFAULT_TIMEOUT)
            .await?;
        info!(element = %self.describe(&element).await, "press TAB");
        element.send_keys(Key::Tab + "").await?;
        Ok(())
    }

    // ---- reads ----

    /// Visible text of an element.
    pub async fn text(&self, locator: &Locator) -> Result<String> {
        let element = self
            .wait_for(locator, ElementState::Visible, DEFAULT_TIMEOUT)
            .await?;
        let text = element.text().await?;
        info!(element = %self.describe(&element).await, text, "read text");
        Ok(text)
    }

    /// Attribute value of an element, `None` when absent.
    pub async fn attribute(&self, locator: &Locator, name: &str) -> Result<Option<String>> {
        let element = self
            .wait_for(locator, ElementState::Visible, DEFAULT_TIMEOUT)
            .await?;
        let value = element.attr(name).await?;
        info!(element = %self.describe(&element).await, attribute = name, value, "read attribute");
        Ok(value)
    }

    /// Visible text of every element matching the locator right now.
    /// No wait: an empty result set is a valid answer.
    pub async fn all_texts(&self, locator: &Locator) -> Result<Vec<String>> {
        let by = locator.resolve(self.session.platform())?;
        let elements = self.session.driver().find_all(by).await?;
        let mut texts = Vec::with_capacity(elements.len());
        for element in &elements {
            texts.push(element.text().await?);
        }
        Ok(texts)
    }

    /// Number of elements matching the locator right now.
    pub async fn count(&self, locator: &Locator) -> Result<usize> {
        let by = locator.resolve(self.session.platform())?;
        Ok(self.session.driver().find_all(by).await?.len())
    }

    pub async fn title(&self) -> Result<String> {
        let title = self.session.driver().title().await?;
        info!(title, "read page title");
        Ok(title)
    }

    pub async fn current_url(&self) -> Result<String> {
        let url = self.session.current_url().await?;
        info!(url, "read current url");
        Ok(url)
    }

    // ---- navigation ----

    pub async fn navigate_to(&self, url: &str) -> Result<()> {
        info!(url, "navigate");
        self.session.driver().goto(url).await?;
        Ok(())
    }

    pub async fn refresh(&self) -> Result<()> {
        info!("refresh page");
        self.session.driver().refresh().await?;
        Ok(())
    }

    pub async fn back(&self) -> Result<()> {
        info!("navigate back");
        self.session.driver().back().await?;
        Ok(())
    }

    pub async fn forward(&self) -> Result<()> {
        info!("navigate forward");
        self.session.driver().forward().await?;
        Ok(())
    }

    // ---- dropdowns ----

    pub async fn select_by_text(&self, locator: &Locator, text: &str) -> Result<()> {
        let element = self
            .wait_for(locator, ElementState::Visible, DEFAULT_TIMEOUT)
            .await?;
        info!(element = %self.describe(&element).await, text, "select by visible text");
        let select = SelectElement::new(&element).await?;
        select.select_by_visible_text(text).await?;
        Ok(())
    }

    pub async fn select_by_value(&self, locator: &Locator, value: &str) -> Result<()> {
        let element = self
            .wait_for(locator, ElementState::Visible, DEFAULT_TIMEOUT)
            .await?;
        info!(element = %self.describe(&element).await, value, "select by value");
        let select = SelectElement::new(&element).await?;
        select.select_by_value(value).await?;
        Ok(())
    }

    pub async fn select_by_index(&self, locator: &Locator, index: usize) -> Result<()> {
        let element = self
            .wait_for(locator, ElementState::Visible, DEFAULT_TIMEOUT)
            .await?;
        info!(element = %self.describe(&element).await, index, "select by index");
        let select = SelectElement::new(&element).await?;
        select.select_by_index(index as u32).await?;
        Ok(())
    }

    // ---- pointer ----

    pub async fn hover(&self, locator: &Locator) -> Result<()> {
        let element = self
            .wait_for(locator, ElementState::Visible, DEFAULT_TIMEOUT)
            .await?;
        info!(element = %self.describe(&element).await, "hover");
        self.session
            .driver()
            .action_chain()
            .move_to_element_center(&element)
            .perform()
            .await?;
        Ok(())
    }

    pub async fn scroll_into_view(&self, locator: &Locator) -> Result<()> {
        let element = self
            .wait_for(locator, ElementState::Visible, DEFAULT_TIMEOUT)
            .await?;
        info!(element = %self.describe(&element).await, "scroll into view");
        element.scroll_into_view().await?;
        Ok(())
    }

    // ---- explicit waits ----

    /// Waits until the element is displayed.
    pub async fn wait_visible(&self, locator: &Locator, timeout: Duration) -> Result<WebElement> {
        self.wait_for(locator, ElementState::Visible, timeout).await
    }

    /// Waits until the element is displayed and enabled.
    pub async fn wait_clickable(&self, locator: &Locator, timeout: Duration) -> Result<WebElement> {
        self.wait_for(locator, ElementState::Clickable, timeout)
            .await
    }

    /// Waits until the element is gone or hidden.
    pub async fn wait_invisible(&self, locator: &Locator, timeout: Duration) -> Result<()> {
        let by = locator.resolve(self.session.platform())?;
        let deadline = Instant::now() + timeout;
        debug!(element = locator.name(), timeout_ms = timeout.as_millis() as u64, "waiting for invisible");
        loop {
            let gone = match self.session.driver().find(by.clone()).await {
                Ok(element) => !element.is_displayed().await.unwrap_or(false),
                Err(_) => true,
            };
            if gone {
                debug!(element = locator.name(), "element is invisible");
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(Error::Timeout {
                    element: locator.name().to_string(),
                    state: ElementState::Invisible,
                    ms: timeout.as_millis() as u64,
                });
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// Polls the locator until the requested state holds, or fails with a
    /// timeout naming the element and state. The condition is checked at
    /// least once, so a zero timeout is a single immediate probe.
    pub(crate) async fn wait_for(
        &self,
        locator: &Locator,
        state: ElementState,
        timeout: Duration,
    ) -> Result<WebElement> {
        let by = locator.resolve(self.session.platform())?;
        let deadline = Instant::now() + timeout;
        debug!(
            element = locator.name(),
            state = %state,
            timeout_ms = timeout.as_millis() as u64,
            "waiting for element state"
        );
        loop {
            if let Ok(element) = self.session.driver().find(by.clone()).await
                && state_holds(&element, state).await
            {
                debug!(element = locator.name(), state = %state, "element reached state");
                return Ok(element);
            }
            if Instant::now() >= deadline {
                return Err(Error::Timeout {
                    element: locator.name().to_string(),
                    state,
                    ms: timeout.as_millis() as u64,
                });
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// Best-effort element descriptor for logs: `tag#id`, `tag[name=..]` or
    /// `tag.class`. Any lookup failure degrades to a plain tag or "element";
    /// a broken descriptor never fails the action that asked for it.
    async fn describe(&self, element: &WebElement) -> String {
        let tag = match element.tag_name().await {
            Ok(tag) => tag,
            Err(_) => return "element".to_string(),
        };
        if let Ok(Some(id)) = element.attr("id").await
            && !id.is_empty()
        {
            return format!("{tag}#{id}");
        }
        if let Ok(Some(name)) = element.attr("name").await
            && !name.is_empty()
        {
            return format!("{tag}[name={name}]");
        }
        if let Ok(Some(class)) = element.attr("class").await
            && let Some(first) = class.split_whitespace().next()
        {
            return format!("{tag}.{first}");
        }
        tag
    }
}

/// True when the element currently satisfies `state`. Driver errors (stale
/// or detached elements) count as the state not holding.
async fn state_holds(element: &WebElement, state: ElementState) -> bool {
    match state {
        ElementState::Visible => element.is_displayed().await.unwrap_or(false),
        ElementState::Clickable => {
            element.is_displayed().await.unwrap_or(false)
                && element.is_enabled().await.unwrap_or(false)
        }
        ElementState::Invisible => !element.is_displayed().await.unwrap_or(false),
    }
}
