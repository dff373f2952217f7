/// Browser confirm prompt for destructive actions. Returns `false` when the
/// window is unavailable, so cancellation is the safe default.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}
