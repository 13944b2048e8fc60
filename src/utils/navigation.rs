use crate::config::CONFIG;

/// True when `current_path` already is the entry route. Trailing slashes
/// are ignored; an absolute entry URL is compared by its path.
pub fn is_at_entry(current_path: &str, entry_route: &str) -> bool {
    let entry_path = match entry_route.split_once("://") {
        Some((_, rest)) => rest.find('/').map(|i| &rest[i..]).unwrap_or("/"),
        None => entry_route,
    };
    let normalize = |path: &str| {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() { "/".to_string() } else { trimmed.to_string() }
    };
    normalize(current_path) == normalize(entry_path)
}

/// Sends the browser to the entry (login) route, unless it is already
/// there: reloading the entry route would re-run the same redirect.
pub fn redirect_to_entry() {
    let route = &CONFIG.entry_route;
    let Some(window) = web_sys::window() else {
        log::warn!("⚠️ No window available, cannot redirect");
        return;
    };
    let location = window.location();

    match location.pathname() {
        Ok(path) if is_at_entry(&path, route) => {
            log::warn!("⚠️ Already on entry route {}, not redirecting", route);
            return;
        }
        Ok(_) => {}
        Err(e) => log::debug!("📍 Could not read current path: {:?}", e),
    }

    log::info!("↩️ Redirecting to {}", route);
    if let Err(e) = location.set_href(route) {
        log::error!("❌ Navigation to {} failed: {:?}", route, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_at_root_redirects_to_login() {
        assert!(!is_at_entry("/", "/login"));
        assert!(!is_at_entry("/overnight", "/login"));
    }

    #[test]
    fn entry_route_never_redirects_to_itself() {
        assert!(is_at_entry("/", "/"));
        assert!(is_at_entry("/login/", "/login"));
        assert!(is_at_entry("/login?next=%2F", "/login"));
        assert!(is_at_entry("/login", "https://valet.example.test/login"));
        assert!(is_at_entry("/", "https://valet.example.test"));
    }
}
