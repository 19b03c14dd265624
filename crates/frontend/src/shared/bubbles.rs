//! Decorative floating bubbles behind the login pages.
//!
//! Pure presentation: a one-shot init routine with no connection to the
//! form logic. DOM failures are ignored, a missing bubble is invisible.

use wasm_bindgen::JsCast;

/// Append `count` randomized `div.bubble` elements to the document body.
/// The `float` keyframes animation comes from the page stylesheet.
pub fn spawn_bubbles(count: u32) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };

    for _ in 0..count {
        let Ok(element) = document.create_element("div") else {
            continue;
        };
        element.set_class_name("bubble");
        let Ok(bubble) = element.dyn_into::<web_sys::HtmlElement>() else {
            continue;
        };
        let style = bubble.style();

        // Random size between 40 and 120px
        let size = js_sys::Math::random() * 80.0 + 40.0;
        let _ = style.set_property("width", &format!("{}px", size));
        let _ = style.set_property("height", &format!("{}px", size));

        // Random position
        let _ = style.set_property("left", &format!("{}%", js_sys::Math::random() * 100.0));
        let _ = style.set_property("top", &format!("{}%", js_sys::Math::random() * 100.0));

        // Random animation
        let duration = js_sys::Math::random() * 7.0 + 5.0;
        let delay = js_sys::Math::random() * 5.0;
        let _ = style.set_property(
            "animation",
            &format!("float {}s ease-in-out infinite {}s", duration, delay),
        );

        let _ = body.append_child(&bubble);
    }
}
