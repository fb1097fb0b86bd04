//! Browser glue: binds the core to `web-sys` elements and `gloo` fetch.
//! Only compiled for `wasm32`.

mod dom;
mod fetch;
mod media;

pub use dom::{focused_element, trigger_download, ControlRefs, CLICK_ELEMENT_ID, MEDIA_ELEMENT_ID};
pub use fetch::{fetch_config, fetch_playlist, fetch_text};
