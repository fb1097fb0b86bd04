use crate::download::DownloadRequest;
use crate::error::{PlayerError, Result};
use crate::surface::ControlId;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, HtmlAnchorElement, HtmlAudioElement, HtmlElement};

/// Id of the main `<audio>` element.
pub const MEDIA_ELEMENT_ID: &str = "musicPlayer";
/// Id of the short click-feedback `<audio>` element.
pub const CLICK_ELEMENT_ID: &str = "clickSound";

fn document() -> Result<Document> {
    window()
        .and_then(|w| w.document())
        .ok_or_else(|| PlayerError::Dom("no document".to_string()))
}

fn js_error(err: wasm_bindgen::JsValue) -> PlayerError {
    PlayerError::Dom(format!("{err:?}"))
}

fn element_by_id<T: JsCast>(document: &Document, id: &'static str) -> Result<T> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<T>().ok())
        .ok_or(PlayerError::MissingElement(id))
}

/// Handles to every element the player touches, looked up once after mount.
#[derive(Clone)]
pub struct ControlRefs {
    pub media: HtmlAudioElement,
    pub click: HtmlAudioElement,
    controls: Vec<HtmlElement>,
}

impl ControlRefs {
    pub fn resolve() -> Result<Self> {
        let document = document()?;
        let controls = ControlId::ALL
            .into_iter()
            .map(|control| element_by_id::<HtmlElement>(&document, control.dom_id()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            media: element_by_id(&document, MEDIA_ELEMENT_ID)?,
            click: element_by_id(&document, CLICK_ELEMENT_ID)?,
            controls,
        })
    }

    pub fn control(&self, control: ControlId) -> &HtmlElement {
        &self.controls[control.index()]
    }

    pub fn focus(&self, control: ControlId) {
        let _ = self.control(control).focus();
    }

    pub fn blur(&self, control: ControlId) {
        let _ = self.control(control).blur();
    }

    pub fn blur_all(&self) {
        for element in &self.controls {
            let _ = element.blur();
        }
    }

    pub fn is_hovered(&self, control: ControlId) -> bool {
        self.control(control).matches(":hover").unwrap_or(false)
    }
}

/// The element that currently has keyboard focus.
pub fn focused_element() -> Option<HtmlElement> {
    document()
        .ok()?
        .active_element()?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Save a track through a throwaway `<a download>`.
pub fn trigger_download(request: &DownloadRequest) -> Result<()> {
    let document = document()?;
    let body = document
        .body()
        .ok_or_else(|| PlayerError::Dom("no body".to_string()))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| PlayerError::Dom("created element is not an anchor".to_string()))?;
    anchor.set_href(&request.href);
    anchor.set_download(&request.filename);
    // Navigates instead when the browser refuses the download.
    anchor.set_target("_blank");

    body.append_child(&anchor).map_err(js_error)?;
    anchor.click();
    body.remove_child(&anchor).map_err(js_error)?;
    Ok(())
}
