// Display and logging helpers shared by the components.

/// Floors `n` and groups thousands with commas ("1,234,567").
pub fn format_number(n: f64) -> String {
    if !n.is_finite() || n <= 0.0 {
        return "0".to_string();
    }
    let digits = format!("{}", n.floor() as u64);
    if digits.len() <= 3 {
        return digits;
    }
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Writes to the browser console. Silent off-wasm so engine tests stay quiet.
pub fn clog(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

/// Logs the error of a failed browser call and keeps the success value.
pub fn log_failure<T, E: std::fmt::Debug>(context: &str, result: Result<T, E>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            clog(&format!("{context}: {e:?}"));
            None
        }
    }
}
