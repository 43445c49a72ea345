//! Browser retrieval and clipboard using Web APIs

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Promise;
use wasm_bindgen::prelude::*;
use web_sys::XmlHttpRequest;

use scorecard_core::RetrievalError;

/// Start an asynchronous GET of `location`.
///
/// `on_done` runs exactly once, from either the load or the error handler.
pub fn fetch_text<F>(location: &str, on_done: F) -> Result<(), JsValue>
where
    F: FnOnce(Result<String, RetrievalError>) + 'static,
{
    let xhr = XmlHttpRequest::new()?;
    xhr.open_with_async("GET", location, true)?;

    let done = Rc::new(RefCell::new(Some(on_done)));

    let onload = {
        let xhr = xhr.clone();
        let done = done.clone();
        let location = location.to_string();
        Closure::<dyn FnMut()>::new(move || {
            let result = response_text(&xhr, &location);
            if let Some(done) = done.borrow_mut().take() {
                done(result);
            }
        })
    };

    let onerror = {
        let done = done.clone();
        let location = location.to_string();
        Closure::<dyn FnMut()>::new(move || {
            if let Some(done) = done.borrow_mut().take() {
                done(Err(RetrievalError::Transport {
                    location: location.clone(),
                    message: "network error".to_string(),
                }));
            }
        })
    };

    xhr.set_onload(Some(onload.as_ref().unchecked_ref()));
    xhr.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onload.forget();
    onerror.forget();

    xhr.send()
}

fn response_text(xhr: &XmlHttpRequest, location: &str) -> Result<String, RetrievalError> {
    let transport = |message: String| RetrievalError::Transport {
        location: location.to_string(),
        message,
    };
    let no_body = || RetrievalError::NoBody {
        location: location.to_string(),
    };

    let status = xhr.status().map_err(|e| transport(format!("{:?}", e)))?;
    match status {
        204 | 205 | 304 => return Err(no_body()),
        400.. => return Err(transport(format!("HTTP status {}", status))),
        _ => {}
    }

    xhr.response_text()
        .map_err(|e| transport(format!("{:?}", e)))?
        .filter(|text| !text.is_empty())
        .ok_or_else(no_body)
}

/// Write `text` to the clipboard and report the outcome once the browser
/// settles the request.
pub fn copy_to_clipboard<F>(text: &str, on_done: F) -> Result<(), JsValue>
where
    F: FnOnce(Result<(), String>) + 'static,
{
    let window = web_sys::window().ok_or("No window")?;
    let promise: Promise = window.navigator().clipboard().write_text(text);

    let done = Rc::new(RefCell::new(Some(on_done)));

    let resolved = {
        let done = done.clone();
        Closure::<dyn FnMut(JsValue)>::new(move |_: JsValue| {
            if let Some(done) = done.borrow_mut().take() {
                done(Ok(()));
            }
        })
    };

    let rejected = {
        let done = done.clone();
        Closure::<dyn FnMut(JsValue)>::new(move |reason: JsValue| {
            web_sys::console::warn_2(&"clipboard write rejected".into(), &reason);
            if let Some(done) = done.borrow_mut().take() {
                done(Err(reason.as_string().unwrap_or_else(|| format!("{:?}", reason))));
            }
        })
    };

    let _ = promise.then2(&resolved, &rejected);
    resolved.forget();
    rejected.forget();
    Ok(())
}
