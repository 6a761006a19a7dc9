use std::time::Duration;
use wasm_bindgen_futures::JsFuture;

/// Resolves after `delay` on the browser event loop (`setTimeout`).
pub async fn sleep(delay: Duration) {
    let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
    let promise = js_sys::Promise::new(
        &mut (|resolve, _reject| {
            if let Some(window) = web_sys::window() {
                if
                    let Err(e) =
                        window.set_timeout_with_callback_and_timeout_and_arguments_0(
                            &resolve,
                            millis
                        )
                {
                    log::error!("setTimeout failed: {:?}", e);
                }
            }
        })
    );
    if let Err(e) = JsFuture::from(promise).await {
        log::error!("Timer promise rejected: {:?}", e);
    }
}
