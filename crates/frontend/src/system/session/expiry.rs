//! Session expiry latch.
//!
//! The transport reports a 401 by calling `session_expired()`. Several
//! in-flight requests can observe the same expiry; the latch makes sure the
//! stored session is cleared and the sign-in navigation happens exactly
//! once. The page load that follows resets the latch with the rest of the
//! wasm instance.

use std::cell::Cell;

use super::storage;

thread_local! {
    static REDIRECTED: Cell<bool> = const { Cell::new(false) };
}

/// True only for the first caller of a 401 burst.
fn take_latch() -> bool {
    REDIRECTED.with(|c| {
        let first = !c.get();
        c.set(true);
        first
    })
}

pub fn session_expired() {
    if !take_latch() {
        return;
    }
    storage::clear_session();
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/signin");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_fires_once() {
        assert!(take_latch());
        assert!(!take_latch());
        assert!(!take_latch());
    }
}
