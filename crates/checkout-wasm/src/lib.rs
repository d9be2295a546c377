//! # checkout-wasm
//!
//! WebAssembly bindings for paypal-checkout-rs.
//!
//! This crate provides the two callbacks the PayPal Buttons SDK needs —
//! order creation on click, capture on approval — plus the cookie reader
//! for the CSRF token. The SDK itself stays in JavaScript; this module is
//! what its callbacks delegate to.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { read_csrf_token, CheckoutBridge } from 'checkout-wasm';
//!
//! await init();
//!
//! const bridge = new CheckoutBridge(window.location.origin, read_csrf_token() ?? '');
//!
//! paypal.Buttons({
//!   createOrder: () => bridge.create_order(),
//!   onApprove: (data, actions) => bridge.on_approve(data, actions),
//! }).render('#paypal-button-container');
//! ```
//!
//! ## Building
//!
//! ```bash
//! wasm-pack build --target web
//! ```

use checkout_core::{
    ApprovalData, ApprovalFlow, CheckoutActions, CheckoutError, CheckoutResult, CsrfToken,
    UserNotifier, CSRF_COOKIE_NAME,
};
use checkout_http::{BackendConfig, HttpOrderBackend};
use std::sync::Arc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{future_to_promise, JsFuture};

/// DOM id of the element the SDK renders the button into
pub const BUTTON_CONTAINER_ID: &str = "paypal-button-container";

/// Initialize the WASM module (called automatically)
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Read the CSRF token from `document.cookie`, if present.
///
/// Source this once at startup and pass it to [`CheckoutBridge`]; a missing
/// token is not special-cased here — the backend rejects unauthenticated
/// requests and the failure surfaces through the SDK's error UI.
#[wasm_bindgen]
pub fn read_csrf_token() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let jar = document.dyn_into::<web_sys::HtmlDocument>().ok()?.cookie().ok()?;
    checkout_core::cookie_value(&jar, CSRF_COOKIE_NAME)
}

/// DOM id the SDK render target is expected under
#[wasm_bindgen]
pub fn button_container_id() -> String {
    BUTTON_CONTAINER_ID.to_string()
}

/// True if the render target element is present in the current document
#[wasm_bindgen]
pub fn button_container_exists() -> bool {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(BUTTON_CONTAINER_ID))
        .is_some()
}

/// Log to the browser console
#[wasm_bindgen]
pub fn log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

/// Get library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Bridge between the PayPal Buttons SDK and the order backend.
///
/// Construct once per page with the backend origin and the CSRF token, then
/// hand `create_order` / `on_approve` to the SDK as its callbacks.
#[wasm_bindgen]
pub struct CheckoutBridge {
    flow: ApprovalFlow,
}

#[wasm_bindgen]
impl CheckoutBridge {
    #[wasm_bindgen(constructor)]
    pub fn new(base_url: String, csrf_token: String) -> Result<CheckoutBridge, JsValue> {
        let config =
            BackendConfig::new(base_url, CsrfToken::new(csrf_token)).map_err(to_js_error)?;
        let backend = Arc::new(HttpOrderBackend::new(config));

        Ok(Self {
            flow: ApprovalFlow::new(backend),
        })
    }

    /// SDK `createOrder` callback: resolves to the server-issued order id.
    ///
    /// A rejection propagates to the SDK, which shows its own error UI.
    pub fn create_order(&self) -> js_sys::Promise {
        let flow = self.flow.clone();

        future_to_promise(async move {
            let order_id = flow.create_order().await.map_err(to_js_error)?;
            Ok(JsValue::from_str(&order_id))
        })
    }

    /// SDK `onApprove` callback: captures the approved order and either
    /// restarts the flow (recoverable decline), alerts the buyer (failure),
    /// or resolves silently (success — the SDK's confirmation takes over).
    pub fn on_approve(&self, data: JsValue, actions: JsValue) -> js_sys::Promise {
        let flow = self.flow.clone();

        future_to_promise(async move {
            let data: ApprovalData = serde_wasm_bindgen::from_value(data)
                .map_err(|e| JsValue::from_str(&format!("Invalid approval data: {}", e)))?;

            let actions = SdkActions { inner: actions };
            flow.on_approve(&data, &actions, &AlertNotifier)
                .await
                .map_err(to_js_error)?;

            Ok(JsValue::UNDEFINED)
        })
    }
}

/// The SDK's per-approval `actions` object, seen through the
/// `CheckoutActions` seam.
struct SdkActions {
    inner: JsValue,
}

#[async_trait::async_trait(?Send)]
impl CheckoutActions for SdkActions {
    async fn restart(&self) -> CheckoutResult<()> {
        let restart = js_sys::Reflect::get(&self.inner, &JsValue::from_str("restart"))
            .map_err(|_| CheckoutError::Sdk("actions object has no restart".to_string()))?;

        let restart: js_sys::Function = restart
            .dyn_into()
            .map_err(|_| CheckoutError::Sdk("restart is not a function".to_string()))?;

        let result = restart
            .call0(&self.inner)
            .map_err(|e| CheckoutError::Sdk(format!("restart threw: {:?}", e)))?;

        // actions.restart() returns a promise; settle it before resolving
        if let Ok(promise) = result.dyn_into::<js_sys::Promise>() {
            JsFuture::from(promise)
                .await
                .map_err(|e| CheckoutError::Sdk(format!("restart rejected: {:?}", e)))?;
        }

        Ok(())
    }
}

/// Failure messages go through a blocking browser alert, matching the
/// page's established behavior; the console is the fallback when no window
/// is available.
struct AlertNotifier;

impl UserNotifier for AlertNotifier {
    fn notify(&self, message: &str) {
        let shown = web_sys::window()
            .map(|window| window.alert_with_message(message).is_ok())
            .unwrap_or(false);

        if !shown {
            log(message);
        }
    }
}

fn to_js_error(err: CheckoutError) -> JsValue {
    JsValue::from_str(&err.to_string())
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_approval_data_from_js_object() {
        let obj = js_sys::Object::new();
        js_sys::Reflect::set(&obj, &"orderID".into(), &"ORDER1".into()).unwrap();

        let data: ApprovalData = serde_wasm_bindgen::from_value(obj.into()).unwrap();
        assert_eq!(data.order_id, "ORDER1");
    }
}
