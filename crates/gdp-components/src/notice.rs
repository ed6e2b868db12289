//! Narrow-viewport advisory
//!
//! Rotated layouts get two alerts after a delay. The second one says "click"
//! although bars react to hover; the copy is kept as shipped.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

/// Shown in order, one alert each
pub const NOTICE_MESSAGES: [&str; 2] = [
    "Open on a computer system for better view.",
    "Click on a bar for details.",
];

/// Show the advisory once, `delay_ms` from now
pub fn schedule_narrow_notice(delay_ms: u32) {
    tracing::info!("Narrow viewport, advisory in {}ms", delay_ms);

    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        show_notice(&NOTICE_MESSAGES);
    });
}

fn show_notice(messages: &[&str]) {
    let Some(window) = web_sys::window() else {
        tracing::warn!("No window, skipping advisory");
        return;
    };

    for msg in messages {
        if let Err(e) = window.alert_with_message(msg) {
            tracing::warn!("Alert failed: {:?}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_messages_in_order() {
        assert_eq!(NOTICE_MESSAGES[0], "Open on a computer system for better view.");
        assert_eq!(NOTICE_MESSAGES[1], "Click on a bar for details.");
    }
}
