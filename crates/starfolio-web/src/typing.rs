//! Typing effect for the hero subtitle

use starfolio_scene::page::Typewriter;
use starfolio_scene::PageConfig;
use wasm_bindgen::prelude::*;

use crate::frames;
use crate::util;

/// Re-type the subtitle's text after the configured delay
pub fn start(config: &PageConfig) -> Result<(), JsValue> {
    let subtitle = util::query(".hero-subtitle")?;
    let text = subtitle.text_content().unwrap_or_default();
    let speed_ms = config.typing_speed_ms;

    util::set_timeout(config.typing_delay_ms as i32, move || {
        let writer = Typewriter::new(text, speed_ms, util::now_ms());
        let mut shown = usize::MAX;
        let started = frames::run_loop(move || {
            let now = util::now_ms();
            let count = writer.chars_at(now);
            if count != shown {
                subtitle.set_text_content(Some(writer.visible_at(now)));
                shown = count;
            }
            !writer.is_complete(now)
        });
        if let Err(e) = started {
            util::log(&format!("[page] Typing effect failed: {:?}", e));
        }
    })
}
