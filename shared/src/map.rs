const MAP_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Map service search link for `address`
pub fn map_search_url(address: &str) -> String {
    format!("{}{}", MAP_SEARCH_URL, urlencoding::encode(address))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RESTAURANT_ADDRESS;

    #[test]
    fn test_map_search_url_encodes_address() {
        let url = map_search_url(RESTAURANT_ADDRESS);
        assert!(url.starts_with("https://www.google.com/maps/search/?api=1&query="));
        assert!(url.ends_with("383%2C%205%EC%B8%B5"));
        assert!(!url.contains(' '));
        assert!(url.contains("%EB%8C%80%EA%B5%AC%EC%8B%9C"));
    }
}
