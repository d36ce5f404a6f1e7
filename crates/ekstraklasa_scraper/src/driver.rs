use std::time::Duration;

use crate::error::DriverError;

/// The slice of browser automation the scraper needs.
///
/// Elements are addressed as (`selector`, `index`) pairs and re-resolved on
/// every call: the site re-renders freely, so handles go stale between steps.
pub trait Driver {
    fn navigate_to(&mut self, url: &str) -> Result<(), DriverError>;

    fn reload(&mut self) -> Result<(), DriverError>;

    /// History back, i.e. from a match detail view to the schedule. Returns
    /// once the schedule's match cards are rendered again.
    fn back(&mut self) -> Result<(), DriverError>;

    /// Blocks until at least one element matches `selector` or `timeout`
    /// passes. Returns the number of matching elements.
    fn wait_for_all(&mut self, selector: &str, timeout: Duration) -> Result<usize, DriverError>;

    /// Clicks the `index`-th match. Reports [`DriverError::ClickIntercepted`]
    /// when another element covers the target.
    fn click(&mut self, selector: &str, index: usize) -> Result<(), DriverError>;

    fn inner_text(&mut self, selector: &str, index: usize) -> Result<String, DriverError>;

    fn inner_html(&mut self, selector: &str, index: usize) -> Result<String, DriverError>;

    /// Unconditional pause for content that has no element to wait on.
    fn settle(&mut self, pause: Duration);

    fn wait_and_click(&mut self, selector: &str, timeout: Duration) -> Result<(), DriverError> {
        self.wait_for_all(selector, timeout)?;
        self.click(selector, 0)
    }
}
