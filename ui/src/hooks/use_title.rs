use yew::prelude::*;

const APP_NAME: &str = "Family Groups";

fn document_title(page: &str) -> String {
    let page = page.trim();
    if page.is_empty() {
        APP_NAME.to_string()
    } else {
        format!("{page} | {APP_NAME}")
    }
}

/// Titles the browser tab after the current view. The previous title is not
/// restored on unmount; the next view sets its own.
#[hook]
pub fn use_title(page: &str) {
    use_effect_with(document_title(page), |title| {
        match web_sys::window().and_then(|w| w.document()) {
            Some(document) => document.set_title(title),
            None => tracing::debug!(%title, "no document to title"),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_name_precedes_app_name() {
        assert_eq!(document_title("Farmers"), "Farmers | Family Groups");
        assert_eq!(document_title("  "), "Family Groups");
    }
}
