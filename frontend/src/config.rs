#[cfg(debug_assertions)]
pub fn get_site_url() -> &'static str {
    "http://localhost:8080" // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_site_url() -> &'static str {
    "https://morestars.io"
}

/// Where "Get started" and "Log in" send people. The dashboard app is hosted separately.
#[cfg(debug_assertions)]
pub fn get_app_url() -> &'static str {
    "http://localhost:3000"
}

#[cfg(not(debug_assertions))]
pub fn get_app_url() -> &'static str {
    "https://app.morestars.io"
}

pub fn absolute_url(path: &str) -> String {
    format!("{}{}", get_site_url(), path)
}

pub fn signup_url() -> String {
    format!("{}/signup", get_app_url())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_url_joins_site_root_and_path() {
        let url = absolute_url("/blog/why-reviews-matter");
        assert!(url.starts_with(get_site_url()));
        assert!(url.ends_with("/blog/why-reviews-matter"));
    }
}
