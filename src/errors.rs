use std::error::Error;

/// Render an error and every `source()` beneath it as `outer: inner: root`.
///
/// Transport errors from reqwest only name the failing request in their own
/// message; the reason (refused connection, DNS, TLS) lives further down.
pub fn error_chain(err: &(dyn Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut current = err.source();
    while let Some(cause) = current {
        let part = cause.to_string();
        if !message.ends_with(&part) {
            message.push_str(": ");
            message.push_str(&part);
        }
        current = cause.source();
    }
    message
}
