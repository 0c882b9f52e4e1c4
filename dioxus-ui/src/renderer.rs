// SPDX-License-Identifier: MIT OR Apache-2.0

//! [`Renderer`] that writes sections into the live page.

use cohortdash_core::{RenderError, Renderer, SectionDescriptor, SectionError, SectionOutput};
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement};

use crate::chart_bridge::draw_chart;

pub struct DomRenderer {
    document: Option<Document>,
}

impl DomRenderer {
    pub fn new() -> Self {
        Self {
            document: web_sys::window().and_then(|w| w.document()),
        }
    }

    pub fn with_document(document: Document) -> Self {
        Self {
            document: Some(document),
        }
    }
}

impl Default for DomRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for DomRenderer {
    fn render(
        &mut self,
        section: &SectionDescriptor,
        output: SectionOutput,
    ) -> Result<(), RenderError> {
        let slot = section.slot();
        let document = self
            .document
            .as_ref()
            .ok_or_else(|| RenderError("no document".to_string()))?;
        let element = document
            .get_element_by_id(slot)
            .ok_or_else(|| RenderError(format!("no element #{slot}")))?;

        match output {
            SectionOutput::Markup(html) => element.set_inner_html(&html),
            SectionOutput::Chart(spec) => {
                let canvas = element
                    .dyn_into::<HtmlCanvasElement>()
                    .map_err(|_| RenderError(format!("#{slot} is not a canvas")))?;
                draw_chart(&canvas, &spec)?;
            }
        }
        debug!("rendered {} into #{slot}", section.id);
        Ok(())
    }

    fn section_skipped(&mut self, section: &SectionDescriptor, error: &SectionError) {
        debug!("leaving #{} empty: {error}", section.slot());
    }
}
