use bingo_core::{BingoError, Continuation, Result, SHARE_PARAM, ShareHost};
use gloo::utils::{document, window};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url, UrlSearchParams};

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}

pub(crate) fn js_error_message(err: &JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{err:?}"))
}

/// Value of the share parameter in a `location.search` string, already URL-decoded.
pub(crate) fn share_param_from_search(search: &str) -> Option<String> {
    let search = search.trim();
    if search.is_empty() {
        return None;
    }
    let params = UrlSearchParams::new_with_str(search).ok()?;
    params.get(SHARE_PARAM)
}

/// `href` with its query replaced by a single `param=value` pair and the fragment dropped.
pub(crate) fn url_with_param(href: &str, param: &str, value: &str) -> Option<String> {
    let url = Url::new(href).ok()?;
    url.set_search("");
    url.set_hash("");
    url.search_params().set(param, value);
    Some(url.href())
}

/// Share host backed by the page location and the async clipboard API.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct BrowserHost;

impl ShareHost for BrowserHost {
    fn read_share_param(&self) -> Option<String> {
        let search = window().location().search().ok()?;
        share_param_from_search(&search)
    }

    fn share_url(&self, param: &str, value: &str) -> Option<String> {
        let href = window().location().href().ok()?;
        url_with_param(&href, param, value)
    }

    fn write_clipboard(&self, text: String, done: Continuation<()>) {
        let promise = window().navigator().clipboard().write_text(&text);
        wasm_bindgen_futures::spawn_local(async move {
            let result = JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|err| BingoError::Clipboard(js_error_message(&err)));
            done(result);
        });
    }
}

/// Offers `text` as a download named `filename`.
pub(crate) fn save_text_as_file(
    filename: &str,
    text: &str,
    mime: &str,
) -> std::result::Result<(), JsValue> {
    let array = js_sys::Array::new();
    array.push(&JsValue::from_str(text));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&array, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;
    let anchor = document()
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();
    Url::revoke_object_url(&url)?;
    Ok(())
}

pub(crate) async fn read_file_text(file: web_sys::File) -> Result<String> {
    let name = file.name();
    let text = JsFuture::from(file.text())
        .await
        .map_err(|err| BingoError::FileRead(js_error_message(&err)))?;
    text.as_string()
        .ok_or_else(|| BingoError::FileRead(format!("{name} is not a text file")))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn share_param_is_url_decoded() {
        let value = share_param_from_search("?list=%5B%22X%22%2C%22Y%22%5D").unwrap();

        assert_eq!(value, r#"["X","Y"]"#);
        let pool = bingo_core::LabelPool::deserialize(&value).unwrap();
        assert_eq!(pool.labels(), ["X", "Y"]);
    }

    #[wasm_bindgen_test]
    fn other_params_are_ignored() {
        assert_eq!(share_param_from_search("?room=abc"), None);
        assert_eq!(share_param_from_search(""), None);
    }

    #[wasm_bindgen_test]
    fn share_url_replaces_query_and_fragment() {
        let url = url_with_param("https://bingo.test/app/?x=1#-v", "list", r#"["A"]"#).unwrap();

        assert_eq!(url, "https://bingo.test/app/?list=%5B%22A%22%5D");
        let search = Url::new(&url).unwrap().search();
        assert_eq!(share_param_from_search(&search).as_deref(), Some(r#"["A"]"#));
    }
}
