//! Reveal-on-scroll content blocks and skill bars

use std::cell::RefCell;
use std::rc::Rc;

use starfolio_scene::page::{RevealStyle, SkillBar, REVEAL_SELECTORS};
use starfolio_scene::PageConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::util;

type ObserverCallback = dyn FnMut(js_sys::Array, web_sys::IntersectionObserver);

fn observer(
    threshold: f64,
    root_margin: Option<&str>,
    mut on_entry: impl FnMut(&web_sys::IntersectionObserverEntry) + 'static,
) -> Result<web_sys::IntersectionObserver, JsValue> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() {
                    on_entry(&entry);
                }
            }
        },
    ) as Box<ObserverCallback>);

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }
    let observer = web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    )?;
    callback.forget();
    Ok(observer)
}

/// Hide every content block and fade it in the first time it scrolls into view
pub fn observe_blocks(config: &PageConfig) -> Result<(), JsValue> {
    let style = RevealStyle::new(config);
    let shown_opacity = style.shown_opacity;
    let shown_transform = style.shown_transform;

    let reveal = observer(style.threshold, Some(&style.root_margin), move |entry| {
        if !RevealStyle::should_reveal(entry.is_intersecting()) {
            return;
        }
        if let Ok(target) = entry.target().dyn_into::<web_sys::HtmlElement>() {
            let css = target.style();
            let _ = css.set_property("opacity", shown_opacity);
            let _ = css.set_property("transform", shown_transform);
        }
    })?;

    let blocks = util::query_all(REVEAL_SELECTORS)?;
    for block in &blocks {
        let css = block.style();
        css.set_property("opacity", style.hidden_opacity)?;
        css.set_property("transform", &style.hidden_transform)?;
        css.set_property("transition", &style.transition)?;
        reveal.observe(block);
    }
    util::log(&format!("[page] Observing {} reveal blocks", blocks.len()));
    Ok(())
}

/// Collapse skill bars and fill each one once it is half on screen
pub fn observe_skill_bars(config: &PageConfig) -> Result<(), JsValue> {
    let elements = util::query_all(".skill-progress")?;
    let bars: Rc<RefCell<Vec<(web_sys::Element, SkillBar)>>> = Rc::new(RefCell::new(
        Vec::with_capacity(elements.len()),
    ));

    let state = bars.clone();
    let skills = observer(config.skill_threshold, None, move |entry| {
        let target = entry.target();
        let mut bars = state.borrow_mut();
        let Some((element, bar)) = bars.iter_mut().find(|(el, _)| *el == target) else {
            return;
        };
        if let Some(width) = bar.on_intersect(entry.is_intersecting()) {
            if let Some(element) = element.dyn_ref::<web_sys::HtmlElement>() {
                let _ = element.style().set_property("width", width);
            }
        }
    })?;

    for element in elements {
        let css = element.style();
        let bar = SkillBar::new(css.get_property_value("--progress")?);
        css.set_property("width", bar.initial_width())?;
        skills.observe(&element);
        bars.borrow_mut().push((element.into(), bar));
    }
    Ok(())
}
