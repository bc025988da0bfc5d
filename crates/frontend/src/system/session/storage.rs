use contracts::system::auth::Role;
use web_sys::window;

const TOKEN_KEY: &str = "bms_token";
const REFRESH_TOKEN_KEY: &str = "bms_refresh_token";
const ROLE_KEY: &str = "bms_role";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Persist all three session keys at login
pub fn save_session(token: &str, refresh_token: &str, role: Role) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
        let _ = storage.set_item(REFRESH_TOKEN_KEY, refresh_token);
        let _ = storage.set_item(ROLE_KEY, role.as_str());
    }
}

pub fn get_token() -> Option<String> {
    get_local_storage()?.get_item(TOKEN_KEY).ok()?
}

pub fn get_refresh_token() -> Option<String> {
    get_local_storage()?.get_item(REFRESH_TOKEN_KEY).ok()?
}

pub fn get_role() -> Option<Role> {
    let raw = get_local_storage()?.get_item(ROLE_KEY).ok()??;
    Role::from_str(&raw)
}

/// Clear all session keys
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(REFRESH_TOKEN_KEY);
        let _ = storage.remove_item(ROLE_KEY);
    }
}
