//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js map and tooltip code lives in `assets/js/*.js` and is embedded at
//! compile time. It is evaluated as globals (no ES modules) and exposed via
//! `window.*`. Pointer events on the map call back into Rust through
//! `window.__disOnHover` / `window.__disOnLeave`, installed by
//! [`install_hover_handlers`].

use dis_core::JoinKey;
use wasm_bindgen::prelude::*;

// Embed all chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static GEO_MAP_JS: &str = include_str!("../assets/js/geo-map.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Disability JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

fn escape_payload(json: &str) -> String {
    json.replace('\\', "\\\\").replace('\'', "\\'").replace('\n', "")
}

/// Initialize chart scripts once D3 and topojson are on the page.
///
/// The scripts are stored on `window` and evaluated at global scope via
/// indirect eval, then each function is promoted to `window.*` explicitly.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, GEO_MAP_JS].join("\n");

    let store_js = format!(
        "window.__disChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForLibs = setInterval(function() {
                if (typeof d3 !== 'undefined' && typeof topojson !== 'undefined') {
                    clearInterval(waitForLibs);
                    (0, eval)(window.__disChartScripts);
                    delete window.__disChartScripts;
                    if (typeof renderGeoMap !== 'undefined') window.renderGeoMap = renderGeoMap;
                    if (typeof restyleGeoMap !== 'undefined') window.restyleGeoMap = restyleGeoMap;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof moveTooltip !== 'undefined') window.moveTooltip = moveTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__disChartsReady = true;
                    console.log('Disability charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render the choropleth from a serialized `DashboardView` (its `map` panel).
///
/// Polls until the scripts are initialized and the container exists.
pub fn render_geo_map(container_id: &str, view_json: &str) {
    let escaped = escape_payload(view_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__disChartsReady &&
                    typeof window.renderGeoMap !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderGeoMap('{container_id}', '{escaped}');
                    }} catch(e) {{ console.error('[Disability] renderGeoMap error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Update opacity and stroke of already-drawn shapes from serialized
/// `ShapeStyle`s. A no-op until the map has been drawn.
pub fn restyle_geo_map(container_id: &str, styles_json: &str) {
    let escaped = escape_payload(styles_json);
    call_js(&format!(
        "if (window.restyleGeoMap) {{ window.restyleGeoMap('{container_id}', '{escaped}'); }}"
    ));
}

/// Route map pointer events to Rust. The closures live for the rest of the
/// page's lifetime.
pub fn install_hover_handlers(
    on_hover: impl Fn(JoinKey) + 'static,
    on_leave: impl Fn() + 'static,
) {
    let hover = Closure::wrap(Box::new(move |id: f64| {
        if id.is_finite() && id >= 0.0 {
            on_hover(id as JoinKey);
        }
    }) as Box<dyn Fn(f64)>);
    let leave = Closure::wrap(Box::new(move || on_leave()) as Box<dyn Fn()>);

    if let Some(window) = web_sys::window() {
        let _ = js_sys::Reflect::set(&window, &JsValue::from_str("__disOnHover"), hover.as_ref());
        let _ = js_sys::Reflect::set(&window, &JsValue::from_str("__disOnLeave"), leave.as_ref());
    } else {
        log::warn!("[Disability] no window; map hover is disabled");
    }

    hover.forget();
    leave.forget();
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}
