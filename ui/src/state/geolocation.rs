//! Device Geolocation
//!
//! `navigator.geolocation.getCurrentPosition` as a future.

use coffee_snob::{Coordinate, GeoOutcome};
use js_sys::{Promise, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Ask the browser for the device position, once
pub async fn current_position() -> GeoOutcome {
    let Some(window) = web_sys::window() else {
        return GeoOutcome::Unavailable;
    };

    let navigator = window.navigator();
    let supported = Reflect::has(&navigator, &JsValue::from_str("geolocation")).unwrap_or(false);
    if !supported {
        return GeoOutcome::Unavailable;
    }

    let geolocation = match navigator.geolocation() {
        Ok(geolocation) => geolocation,
        Err(_) => return GeoOutcome::Unavailable,
    };

    let promise = Promise::new(&mut |resolve, reject| {
        if let Err(err) = geolocation.get_current_position_with_error_callback(&resolve, Some(&reject)) {
            let _ = reject.call1(&JsValue::NULL, &err);
        }
    });

    match JsFuture::from(promise).await {
        Ok(position) => match read_coordinate(&position) {
            Some(coordinate) => GeoOutcome::Located(coordinate),
            None => GeoOutcome::Failed("position had no coordinates".to_string()),
        },
        Err(err) => {
            let reason = error_message(&err);
            web_sys::console::warn_1(&format!("Geolocation error: {}", reason).into());
            GeoOutcome::Failed(reason)
        }
    }
}

/// `position.coords.{latitude, longitude}`
fn read_coordinate(position: &JsValue) -> Option<Coordinate> {
    let coords = Reflect::get(position, &JsValue::from_str("coords")).ok()?;
    let lat = Reflect::get(&coords, &JsValue::from_str("latitude")).ok()?.as_f64()?;
    let lng = Reflect::get(&coords, &JsValue::from_str("longitude")).ok()?.as_f64()?;
    Some(Coordinate::new(lat, lng))
}

/// `GeolocationPositionError.message`, or a debug rendering of whatever was thrown
fn error_message(err: &JsValue) -> String {
    Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("{:?}", err))
}
