//! Contact form submit handling

use starfolio_scene::ContactForm;
use wasm_bindgen::prelude::*;

use crate::util::{self, log};

fn field_value(id: &str) -> String {
    if let Ok(input) = util::by_id::<web_sys::HtmlInputElement>(id) {
        return input.value();
    }
    util::by_id::<web_sys::HtmlTextAreaElement>(id)
        .map(|area| area.value())
        .unwrap_or_default()
}

/// Acknowledge every submission locally; nothing is sent anywhere
pub fn listen_submit() -> Result<(), JsValue> {
    let form = util::by_id::<web_sys::HtmlFormElement>("contactForm")?;
    let form_el = form.clone();

    util::listen(&form, "submit", move |e: web_sys::Event| {
        e.prevent_default();

        let mut fields = ContactForm::new(
            field_value("name"),
            field_value("email"),
            field_value("message"),
        );
        let ack = fields.submit();

        if let Ok(window) = util::window() {
            let _ = window.alert_with_message(ack.message());
        }
        form_el.reset();

        let submitted = serde_json::to_string(ack.submission())
            .unwrap_or_else(|_| "{}".to_string());
        log(&format!("[contact] Form submitted: {}", submitted));
    })
}
