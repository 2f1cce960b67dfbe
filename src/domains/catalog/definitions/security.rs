//! Security & network tools category definition.

use crate::domains::catalog::model::{Category, Tool};
use crate::domains::catalog::slug::slugify;

/// Category display name.
pub const NAME: &str = "🛡️ Security & Network Tools";

/// Build the category with its authored tool list.
pub fn category() -> Category {
    let slug = slugify(NAME);
    let tool = |name: &str, icon: &str, page: &str| {
        Tool::new(name, icon, format!("tools/{}/{}", slug, page))
    };

    Category::new(
        NAME,
        "bi-shield-shaded",
        vec![
            tool("Password Generator", "bi-key-fill", "password-generator.html"),
            tool("MD5 Hash Generator", "bi-hash", "md5-hash-generator.html"),
            tool("SHA256 Hash Generator", "bi-hash", "sha256-hash-generator.html"),
            tool("UUID Generator", "bi-node-plus-fill", "uuid-generator.html"),
            tool("IP Address Lookup", "bi-geo-alt-fill", "ip-address-lookup.html"),
            tool("IP Geolocation", "bi-map-fill", "ip-geolocation-finder.html"),
            tool("Whois Lookup", "bi-question-circle-fill", "whois-lookup.html"),
            tool("SSL Certificate Checker", "bi-file-lock2-fill", "ssl-certificate-checker.html"),
            tool("HTTP Headers Checker", "bi-file-binary-fill", "http-headers-checker.html"),
            tool("URL Shortener", "bi-link-45deg", "url-shortener.html"),
            tool("Internet Speed Test", "bi-wifi", "internet-speed-test.html"),
        ],
    )
}
