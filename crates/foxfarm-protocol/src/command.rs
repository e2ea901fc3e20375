//! Browser commands and their wire encoding.
//!
//! Each command serializes to exactly one JSON object whose single
//! top-level key names the action, which is serde's external enum tagging.
//! The constructors carry the SDK's documented defaults; non-default values
//! are written with a plain struct literal since all fields are public.

use serde::{Deserialize, Serialize};

const DEFAULT_NAVIGATE_RETRIES: u32 = 3;
const DEFAULT_SCROLL_RETRIES: u32 = 10;
const DEFAULT_STEP_DELAY_MS: u64 = 500;
const DEFAULT_CLICK_TIMEOUT_MS: u64 = 3000;
const DEFAULT_SCREENSHOT_TIMEOUT_MS: u64 = 3000;
const DEFAULT_SELECTOR_TIMEOUT_MS: u64 = 30_000;

/// Page-load completion policy for [`Command::Navigate`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WaitUntil {
    Load,
    DomContentLoaded,
    #[default]
    NetworkIdle,
    Commit,
}

/// One browser action in a scenario.
///
/// Field casing follows the server's wire contract, which mixes camelCase
/// (`navigate`) and snake_case (everything else).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    Navigate {
        url: String,
        #[serde(rename = "retryCount")]
        retry_count: u32,
        #[serde(rename = "waitUntil")]
        wait_until: WaitUntil,
    },
    Fill {
        selector: String,
        value: String,
    },
    Scroll {
        selector: String,
        retry_count: u32,
        delay: u64,
    },
    Click {
        selector: String,
        timeout: u64,
        delay: u64,
    },
    EvaluateScript {
        script: String,
    },
    EvaluateScriptOnElements {
        selector: String,
        js_command: String,
    },
    #[serde(rename = "get_screenshot_base64")]
    ScreenshotBase64 {
        timeout: u64,
    },
    SelectOption {
        selector: String,
        value: String,
    },
    SelectRadio {
        selector: String,
        value: String,
    },
    #[serde(rename = "get_captcha_base64")]
    CaptchaBase64 {
        selector: String,
    },
    IsElementOnPage {
        selector: String,
    },
    /// Pause for the given number of milliseconds. The wire shape is a bare
    /// integer, not an object.
    Wait(u64),
    WaitForSelector {
        selector: String,
        timeout: u64,
    },
    WaitForNavigation {
        timeout: u64,
        url_parts: Vec<String>,
    },
}

impl Command {
    /// Navigate to `url` with the default retry count and completion policy.
    pub fn navigate(url: impl Into<String>) -> Self {
        Self::Navigate {
            url: url.into(),
            retry_count: DEFAULT_NAVIGATE_RETRIES,
            wait_until: WaitUntil::default(),
        }
    }

    /// Clear the matched input and type `value` into it.
    pub fn fill(selector: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Fill {
            selector: selector.into(),
            value: value.into(),
        }
    }

    /// Scroll the matched element into view.
    pub fn scroll(selector: impl Into<String>) -> Self {
        Self::Scroll {
            selector: selector.into(),
            retry_count: DEFAULT_SCROLL_RETRIES,
            delay: DEFAULT_STEP_DELAY_MS,
        }
    }

    /// Click the matched element once it is visible.
    pub fn click(selector: impl Into<String>) -> Self {
        Self::Click {
            selector: selector.into(),
            timeout: DEFAULT_CLICK_TIMEOUT_MS,
            delay: DEFAULT_STEP_DELAY_MS,
        }
    }

    /// Run `script` in the page context; its return value is a result.
    pub fn evaluate_script(script: impl Into<String>) -> Self {
        Self::EvaluateScript {
            script: script.into(),
        }
    }

    /// Run `js_command` against every element matching `selector`; non-null
    /// returns are collected into one array result.
    pub fn evaluate_script_on_elements(
        selector: impl Into<String>,
        js_command: impl Into<String>,
    ) -> Self {
        Self::EvaluateScriptOnElements {
            selector: selector.into(),
            js_command: js_command.into(),
        }
    }

    /// Capture a full-page screenshot as a base64 result.
    pub fn screenshot_base64() -> Self {
        Self::ScreenshotBase64 {
            timeout: DEFAULT_SCREENSHOT_TIMEOUT_MS,
        }
    }

    pub fn select_option(selector: impl Into<String>, value: impl Into<String>) -> Self {
        Self::SelectOption {
            selector: selector.into(),
            value: value.into(),
        }
    }

    pub fn select_radio(selector: impl Into<String>, value: impl Into<String>) -> Self {
        Self::SelectRadio {
            selector: selector.into(),
            value: value.into(),
        }
    }

    /// Capture the matched element (a captcha image, typically) as a base64
    /// result.
    pub fn captcha_base64(selector: impl Into<String>) -> Self {
        Self::CaptchaBase64 {
            selector: selector.into(),
        }
    }

    /// Check whether `selector` matches a visible element; always produces
    /// a boolean result.
    pub fn is_element_on_page(selector: impl Into<String>) -> Self {
        Self::IsElementOnPage {
            selector: selector.into(),
        }
    }

    /// Pause the scenario for `timeout` milliseconds.
    pub fn wait(timeout: u64) -> Self {
        Self::Wait(timeout)
    }

    /// Wait until `selector` matches a visible element.
    pub fn wait_for_selector(selector: impl Into<String>) -> Self {
        Self::WaitForSelector {
            selector: selector.into(),
            timeout: DEFAULT_SELECTOR_TIMEOUT_MS,
        }
    }

    /// Wait until the page URL contains any of `url_parts`.
    pub fn wait_for_navigation(
        timeout: u64,
        url_parts: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::WaitForNavigation {
            timeout,
            url_parts: url_parts.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn navigate_serializes_with_defaults() {
        let command = Command::navigate("https://example.com");
        assert_eq!(
            serde_json::to_value(&command).unwrap(),
            json!({
                "navigate": {
                    "url": "https://example.com",
                    "retryCount": 3,
                    "waitUntil": "networkidle"
                }
            })
        );
    }

    #[test]
    fn wait_serializes_as_bare_integer() {
        let command = Command::wait(1500);
        assert_eq!(
            serde_json::to_value(&command).unwrap(),
            json!({ "wait": 1500 })
        );
    }

    #[test]
    fn wait_until_uses_engine_casing() {
        assert_eq!(
            serde_json::to_value(WaitUntil::DomContentLoaded).unwrap(),
            json!("domcontentloaded")
        );
        assert_eq!(
            serde_json::to_value(WaitUntil::NetworkIdle).unwrap(),
            json!("networkidle")
        );
    }

    #[test]
    fn fill_escapes_embedded_quotes() {
        let command = Command::fill("input[name='q']", r#"He said "hi""#);
        let text = serde_json::to_string(&command).unwrap();
        assert!(text.contains(r#"He said \"hi\""#));

        // The escaped form must reproduce the original when reparsed.
        let reparsed: Command = serde_json::from_str(&text).unwrap();
        assert_eq!(reparsed, command);
    }

    #[test]
    fn script_with_backslashes_round_trips() {
        let command = Command::evaluate_script(r"return location.href.split('\\')");
        let text = serde_json::to_string(&command).unwrap();
        let reparsed: Command = serde_json::from_str(&text).unwrap();
        assert_eq!(reparsed, command);
    }

    #[test]
    fn empty_strings_are_preserved() {
        let command = Command::fill("", "");
        assert_eq!(
            serde_json::to_value(&command).unwrap(),
            json!({ "fill": { "selector": "", "value": "" } })
        );
    }

    #[test]
    fn select_option_is_a_complete_object() {
        let value = serde_json::to_value(Command::select_option("#country", "DE")).unwrap();
        let payload = value.get("select_option").unwrap();
        assert_eq!(payload.get("selector").unwrap(), "#country");
        assert_eq!(payload.get("value").unwrap(), "DE");
    }

    #[test]
    fn screenshot_and_captcha_use_get_prefixed_keys() {
        let screenshot = serde_json::to_value(Command::screenshot_base64()).unwrap();
        assert!(screenshot.get("get_screenshot_base64").is_some());

        let captcha = serde_json::to_value(Command::captcha_base64("img.captcha")).unwrap();
        assert!(captcha.get("get_captcha_base64").is_some());
    }

    #[test]
    fn wait_for_navigation_renders_url_parts_array() {
        let command = Command::wait_for_navigation(10_000, ["test", "kad.arbitr"]);
        assert_eq!(
            serde_json::to_value(&command).unwrap(),
            json!({
                "wait_for_navigation": {
                    "timeout": 10_000,
                    "url_parts": ["test", "kad.arbitr"]
                }
            })
        );
    }
}
