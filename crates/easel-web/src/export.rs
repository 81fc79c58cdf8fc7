use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlAnchorElement;

/// Offer a data URL (e.g. a canvas snapshot) to the user as a file download.
pub fn download_data_url(data_url: &str, file_name: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(data_url);
    anchor.set_download(file_name);
    anchor.click();
    log::info!("exported {}", file_name);
    Ok(())
}
