// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hands a [`ChartSpec`] to the page's Chart.js.
//!
//! Specs are plain data. Gradient fills arrive as a marker and are turned
//! into a `CanvasGradient` against the target canvas here.

use cohortdash_core::chart::{ChartSpec, Fill, LinearGradient};
use cohortdash_core::RenderError;
use js_sys::{Array, Function, Reflect};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

fn js_error(context: &str, err: JsValue) -> RenderError {
    RenderError(format!("{context}: {err:?}"))
}

/// The global `Chart` constructor, if Chart.js has been loaded.
pub fn chart_constructor() -> Result<Function, RenderError> {
    let window = web_sys::window().ok_or_else(|| RenderError("no window".to_string()))?;
    let ctor = Reflect::get(&window, &JsValue::from_str("Chart"))
        .map_err(|e| js_error("reading window.Chart", e))?;
    ctor.dyn_into::<Function>()
        .map_err(|_| RenderError("Chart.js is not loaded (window.Chart missing)".to_string()))
}

/// Spec as a plain JS object (no `Map`s), ready for Chart.js.
pub fn spec_to_js(spec: &ChartSpec) -> Result<JsValue, RenderError> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    spec.serialize(&serializer)
        .map_err(|e| RenderError(format!("serializing chart spec: {e}")))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, RenderError> {
    canvas
        .get_context("2d")
        .map_err(|e| js_error("getContext", e))?
        .ok_or_else(|| RenderError(format!("#{} has no 2d context", canvas.id())))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| RenderError(format!("#{} returned a foreign context", canvas.id())))
}

fn gradient(
    ctx: &CanvasRenderingContext2d,
    spec: &LinearGradient,
) -> Result<JsValue, RenderError> {
    let gradient = ctx.create_linear_gradient(0.0, 0.0, 0.0, spec.extent);
    gradient
        .add_color_stop(0.0, &spec.from)
        .map_err(|e| js_error("addColorStop", e))?;
    gradient
        .add_color_stop(1.0, &spec.to)
        .map_err(|e| js_error("addColorStop", e))?;
    Ok(gradient.into())
}

/// Replace every gradient marker in `config.data.datasets` with a real
/// `CanvasGradient`.
fn resolve_gradients(
    ctx: &CanvasRenderingContext2d,
    spec: &ChartSpec,
    config: &JsValue,
) -> Result<(), RenderError> {
    let data = Reflect::get(config, &JsValue::from_str("data"))
        .map_err(|e| js_error("reading data", e))?;
    let datasets: Array = Reflect::get(&data, &JsValue::from_str("datasets"))
        .map_err(|e| js_error("reading datasets", e))?
        .unchecked_into();

    for (index, dataset) in spec.data.datasets.iter().enumerate() {
        if let Some(Fill::Gradient { linear_gradient }) = &dataset.background_color {
            let target = datasets.get(index as u32);
            Reflect::set(
                &target,
                &JsValue::from_str("backgroundColor"),
                &gradient(ctx, linear_gradient)?,
            )
            .map_err(|e| js_error("setting backgroundColor", e))?;
        }
    }
    Ok(())
}

/// Construct a Chart.js chart on `canvas` and return the chart object.
pub fn draw_chart(canvas: &HtmlCanvasElement, spec: &ChartSpec) -> Result<JsValue, RenderError> {
    let ctor = chart_constructor()?;
    let ctx = context_2d(canvas)?;
    let config = spec_to_js(spec)?;
    resolve_gradients(&ctx, spec, &config)?;

    Reflect::construct(&ctor, &Array::of2(&ctx.into(), &config))
        .map_err(|e| js_error("new Chart", e))
}
