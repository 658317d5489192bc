pub const SESSION_COOKIE: &str = "admin_token";
pub const ADMIN_HOME: &str = "/admin";
pub const ADMIN_LOGIN: &str = "/admin/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Proceed,
    RedirectToLogin,
    RedirectToAdmin,
}

fn is_admin_path(path: &str) -> bool {
    path == ADMIN_HOME || path.starts_with("/admin/")
}

/// Only the presence of the session cookie is checked, never its value.
pub fn decide(path: &str, has_session: bool) -> GateDecision {
    let path = match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => path,
    };

    if path == ADMIN_LOGIN {
        return if has_session { GateDecision::RedirectToAdmin } else { GateDecision::Proceed };
    }

    if is_admin_path(path) && !has_session {
        return GateDecision::RedirectToLogin;
    }

    GateDecision::Proceed
}
