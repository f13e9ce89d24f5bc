//! Splash render surface
//!
//! Display mutations go through `RenderTarget` so the controller can be
//! exercised against a recording fake in tests. The DOM implementation
//! holds explicit element handles resolved once at startup - no ambient
//! global lookups afterward.

/// Render surface for the splash overlay and the page root
pub trait RenderTarget {
    /// Update the progress bar fill width (percent, fractional)
    fn set_fill(&mut self, percent: f32);
    /// Update the percent label text (rounded)
    fn set_label(&mut self, percent: u32);
    /// Apply the fade-out marker class; the transition itself is CSS-driven
    fn begin_fade(&mut self);
    /// Remove the splash overlay from layout
    fn remove_splash(&mut self);
    /// Mark the page root so content becomes visible. Never reverted.
    fn reveal_content(&mut self);
}

#[cfg(target_arch = "wasm32")]
pub use dom::DomTarget;

#[cfg(target_arch = "wasm32")]
mod dom {
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, HtmlElement};

    use super::RenderTarget;

    /// Class applied to the splash container to start the fade
    const FADE_CLASS: &str = "fade-out";
    /// Class applied to the page root once content may show
    const DONE_CLASS: &str = "preloader-done";

    /// DOM-backed render target
    ///
    /// Holds the splash container, its fill bar and percent label, and the
    /// page root that downstream CSS keys content visibility on.
    pub struct DomTarget {
        splash: HtmlElement,
        fill: HtmlElement,
        label: Element,
        page_root: Element,
    }

    impl DomTarget {
        /// Resolve the expected splash elements once.
        ///
        /// Returns `None` if the markup contract is not honored (missing
        /// container, fill bar, label, or body).
        pub fn from_document(document: &Document) -> Option<Self> {
            let splash = document
                .get_element_by_id("preloader")?
                .dyn_into::<HtmlElement>()
                .ok()?;
            let fill = document
                .query_selector(".progress-fill")
                .ok()
                .flatten()?
                .dyn_into::<HtmlElement>()
                .ok()?;
            let label = document.get_element_by_id("progress-percent")?;
            let page_root: Element = document.body()?.into();

            Some(Self {
                splash,
                fill,
                label,
                page_root,
            })
        }
    }

    impl RenderTarget for DomTarget {
        fn set_fill(&mut self, percent: f32) {
            let _ = self
                .fill
                .style()
                .set_property("width", &format!("{}%", percent));
        }

        fn set_label(&mut self, percent: u32) {
            self.label.set_text_content(Some(&format!("{}%", percent)));
        }

        fn begin_fade(&mut self) {
            let _ = self.splash.class_list().add_1(FADE_CLASS);
        }

        fn remove_splash(&mut self) {
            let _ = self.splash.style().set_property("display", "none");
        }

        fn reveal_content(&mut self) {
            let _ = self.page_root.class_list().add_1(DONE_CLASS);
        }
    }
}
