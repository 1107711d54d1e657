pub mod dump;
pub mod freeze;

#[cfg(test)]
mod freeze_tests;

/// Renders an error for stderr, always ending in a newline.
fn render_error(err: &codefreeze_lib::Error, source: &str, color: bool) -> String {
    let mut rendered = err.render(source, color);
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    rendered
}
