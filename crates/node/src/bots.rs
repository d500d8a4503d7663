use std::sync::LazyLock;

use regex::Regex;

/// Signatures of crawlers, link previewers, and non-browser HTTP
/// clients. Case-insensitive substring matches against the user agent.
static BOT_SIGNATURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)
        bot\b | crawl | spider | slurp | scrape |
        headless | phantomjs | preview | validator |
        facebookexternalhit | mediapartners | whatsapp | telegrambot |
        curl/ | wget/ | python-requests | python-urllib | go-http-client |
        okhttp | java/ | libwww | httpclient |
        pingdom | uptime | statuscake | monitor",
    )
    .expect("bot signature pattern compiles")
});

/// Classify a `User-Agent` header value.
///
/// An absent or empty user agent is not treated as a bot — the filter
/// exists to drop link previewers and crawlers, not to demand a header.
#[must_use]
pub fn is_bot(user_agent: Option<&str>) -> bool {
    match user_agent {
        Some(ua) if !ua.is_empty() => BOT_SIGNATURE.is_match(ua),
        _ => false,
    }
}
