//! [`Driver`] over a real Chrome, via the DevTools protocol.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use headless_chrome::browser::tab::NoElementFound;
use headless_chrome::util::Timeout;
use headless_chrome::{Browser, Element, LaunchOptions, Tab};
use tracing::debug;

use crate::driver::Driver;
use crate::error::DriverError;
use crate::selectors::{self, timeout};

/// Scrolls the element into view and checks that the topmost element at its
/// centre is the element itself (or one of its children).
const HIT_TEST_JS: &str = "function() {
    this.scrollIntoView({ block: 'center', inline: 'center' });
    const r = this.getBoundingClientRect();
    const hit = document.elementFromPoint(r.left + r.width / 2, r.top + r.height / 2);
    return hit !== null && (hit === this || this.contains(hit));
}";

const INNER_HTML_JS: &str = "function() { return this.innerHTML; }";

pub struct ChromeDriver {
    tab: Arc<Tab>,
    // Dropping the Browser kills the Chrome process, on every exit path.
    _browser: Browser,
}

impl ChromeDriver {
    pub fn launch(headless: bool) -> anyhow::Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(headless)
            .sandbox(false)
            .window_size(Some((1920, 1080)))
            .build()
            .context("Failed to build Chrome launch options")?;

        let browser = Browser::new(options).context("Failed to launch Chrome")?;
        let tab = browser.new_tab().context("Failed to create browser tab")?;

        Ok(Self { tab, _browser: browser })
    }

    /// All current matches of `selector`. An empty query is not an error;
    /// protocol failures are.
    fn find_all(&self, selector: &str) -> Result<Vec<Element<'_>>, DriverError> {
        match self.tab.find_elements(selector) {
            Ok(elements) => Ok(elements),
            Err(e) if e.is::<NoElementFound>() => Ok(Vec::new()),
            Err(e) => Err(DriverError::Browser(
                e.context(format!("query `{selector}` failed")),
            )),
        }
    }

    fn nth(&self, selector: &str, index: usize) -> Result<Element<'_>, DriverError> {
        let mut elements = self.find_all(selector)?;
        let found = elements.len();
        if index >= found {
            return Err(DriverError::MissingElement {
                selector: selector.to_string(),
                index,
                found,
            });
        }
        Ok(elements.swap_remove(index))
    }
}

/// Only a wait that ran out of time means the element is absent; anything
/// else is the browser failing.
fn wait_error(selector: &str, timeout: Duration, e: anyhow::Error) -> DriverError {
    if e.is::<Timeout>() || e.is::<NoElementFound>() {
        debug!("wait for `{}` gave up: {}", selector, e);
        DriverError::ElementNotFound {
            selector: selector.to_string(),
            timeout,
        }
    } else {
        DriverError::Browser(e.context(format!("wait for `{selector}` failed")))
    }
}

impl Driver for ChromeDriver {
    fn navigate_to(&mut self, url: &str) -> Result<(), DriverError> {
        self.tab
            .navigate_to(url)
            .and_then(|tab| tab.wait_until_navigated())
            .with_context(|| format!("Chrome navigate to {url} failed"))?;
        Ok(())
    }

    fn reload(&mut self) -> Result<(), DriverError> {
        self.tab
            .reload(false, None)
            .and_then(|tab| tab.wait_until_navigated())
            .context("Chrome reload failed")?;
        Ok(())
    }

    fn back(&mut self) -> Result<(), DriverError> {
        // Angular router: history.back() swaps the view without a page load,
        // so the schedule is waited for explicitly.
        self.tab
            .evaluate("window.history.back()", false)
            .context("Chrome history.back() failed")?;
        self.wait_for_all(selectors::MATCH_CARDS, timeout::MATCH_CARDS)?;
        Ok(())
    }

    fn wait_for_all(&mut self, selector: &str, timeout: Duration) -> Result<usize, DriverError> {
        self.tab
            .wait_for_element_with_custom_timeout(selector, timeout)
            .map_err(|e| wait_error(selector, timeout, e))?;

        match self.find_all(selector)?.len() {
            0 => Err(DriverError::ElementNotFound {
                selector: selector.to_string(),
                timeout,
            }),
            n => Ok(n),
        }
    }

    fn click(&mut self, selector: &str, index: usize) -> Result<(), DriverError> {
        let element = self.nth(selector, index)?;

        let hit = element
            .call_js_fn(HIT_TEST_JS, vec![], false)
            .with_context(|| format!("hit test on `{selector}` failed"))?;
        let reachable = hit.value.as_ref().and_then(|v| v.as_bool()).unwrap_or(true);
        if !reachable {
            return Err(DriverError::ClickIntercepted {
                selector: selector.to_string(),
            });
        }

        element
            .click()
            .with_context(|| format!("click on `{selector}`[{index}] failed"))?;
        Ok(())
    }

    fn inner_text(&mut self, selector: &str, index: usize) -> Result<String, DriverError> {
        let text = self
            .nth(selector, index)?
            .get_inner_text()
            .with_context(|| format!("innerText of `{selector}`[{index}]"))?;
        Ok(text)
    }

    fn inner_html(&mut self, selector: &str, index: usize) -> Result<String, DriverError> {
        let html = self
            .nth(selector, index)?
            .call_js_fn(INNER_HTML_JS, vec![], false)
            .with_context(|| format!("innerHTML of `{selector}`[{index}]"))?
            .value
            .and_then(|v| v.as_str().map(str::to_owned))
            .unwrap_or_default();
        Ok(html)
    }

    fn settle(&mut self, pause: Duration) {
        std::thread::sleep(pause);
    }
}
