use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Global from the canvas-confetti script loaded by index.html.
    #[wasm_bindgen(catch)]
    fn confetti(options: &JsValue) -> Result<(), JsValue>;
}

fn set_prop(target: &js_sys::Object, key: &str, value: &JsValue) {
    js_sys::Reflect::set(target, &JsValue::from_str(key), value)
        .expect("setting a property on an object literal cannot fail");
}

/// Fires the celebratory confetti burst. The caller guarantees this runs
/// exactly once per completion.
pub(crate) fn fire() {
    let origin = js_sys::Object::new();
    set_prop(&origin, "y", &JsValue::from_f64(0.6));

    let options = js_sys::Object::new();
    set_prop(&options, "particleCount", &JsValue::from_f64(200.0));
    set_prop(&options, "spread", &JsValue::from_f64(70.0));
    set_prop(&options, "origin", &origin);

    if let Err(err) = confetti(&options) {
        log::error!("Could not fire confetti: {:?}", err);
    }
}
