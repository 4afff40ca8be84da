use web_sys::{File, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::{
    events::{Event, InputEvent, TargetCast},
    NodeRef, UseStateHandle,
};
use zetho_admin_shared::{
    time::{format_date, now_from_millis, Timestamp},
    RecordId,
};

use crate::config::API_BASE;

/// Resolves an image reference from the backend.
///
/// Absolute, `data:` and `blob:` URLs pass through; bare paths are served
/// relative to the API base. Empty input means "no image".
pub fn image_url(path: &str) -> Option<String> {
    let path = path.trim();
    if path.is_empty() {
        return None;
    }
    let absolute = ["http://", "https://", "data:", "blob:", "//"]
        .iter()
        .any(|prefix| path.starts_with(prefix));
    if absolute {
        Some(path.to_string())
    } else {
        Some(format!("{}/{}", API_BASE.trim_end_matches('/'), path.trim_start_matches('/')))
    }
}

/// "5m ago" style label against the browser clock.
pub fn time_ago(timestamp: &Timestamp) -> String {
    let label = timestamp.relative(now_from_millis(js_sys::Date::now()));
    if label.is_empty() {
        "-".to_string()
    } else {
        label
    }
}

/// Calendar date, or a dash when the record has none.
pub fn calendar_date(timestamp: &Timestamp) -> String {
    timestamp
        .get()
        .map(format_date)
        .unwrap_or_else(|| "-".to_string())
}

/// Expands `id`, or collapses it when it is already the open card.
pub fn toggle_expanded(expanded: &UseStateHandle<Option<RecordId>>, id: &RecordId) {
    if (**expanded).as_ref() == Some(id) {
        expanded.set(None);
    } else {
        expanded.set(Some(id.clone()));
    }
}

/// Current text of the `<input>` that fired `event`.
pub fn input_value(event: &InputEvent) -> String {
    event.target_unchecked_into::<HtmlInputElement>().value()
}

/// Current text of the `<textarea>` that fired `event`.
pub fn textarea_value(event: &InputEvent) -> String {
    event.target_unchecked_into::<HtmlTextAreaElement>().value()
}

/// Selected value of the `<select>` that fired `event`.
pub fn select_value(event: &Event) -> String {
    event.target_unchecked_into::<HtmlSelectElement>().value()
}

/// First file picked in the `<input type="file">` behind `node`.
pub fn picked_file(node: &NodeRef) -> Option<File> {
    node.cast::<HtmlInputElement>()
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}

/// Empties a file input after its form was submitted or reset.
pub fn clear_file(node: &NodeRef) {
    if let Some(input) = node.cast::<HtmlInputElement>() {
        input.set_value("");
    }
}

#[cfg(test)]
mod tests {
    use super::image_url;
    use crate::config::API_BASE;

    #[test]
    fn absolute_image_urls_pass_through() {
        assert_eq!(
            image_url("https://cdn.example.com/a.png").as_deref(),
            Some("https://cdn.example.com/a.png")
        );
        assert_eq!(image_url("data:image/png;base64,AAAA").as_deref(), Some("data:image/png;base64,AAAA"));
    }

    #[test]
    fn bare_paths_hang_off_the_api_base() {
        assert_eq!(image_url("/uploads/a.png"), Some(format!("{API_BASE}/uploads/a.png")));
    }

    #[test]
    fn blank_means_no_image() {
        assert_eq!(image_url("   "), None);
    }
}
