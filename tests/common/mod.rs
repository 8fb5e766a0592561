//! Shared fixtures for the premail test suite.

/// Wrap head and body markup in a minimal document.
#[allow(dead_code)]
pub fn html_page(head: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
{head}
</head>
<body>
{body}
</body>
</html>"#
    )
}

/// Initialise test logging once; later calls are no-ops.
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
