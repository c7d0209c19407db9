use crate::api::ApiError;
use leptos::*;
use serde_json::Value;

/// Flattens server-side field errors (`{"Field": ["msg", ..]}` or `["msg", ..]`).
pub fn detail_messages(details: &Value) -> Vec<String> {
    fn collect(value: &Value, prefix: Option<&str>, out: &mut Vec<String>) {
        match value {
            Value::String(text) if !text.trim().is_empty() => match prefix {
                Some(field) => out.push(format!("{}: {}", field, text)),
                None => out.push(text.clone()),
            },
            Value::Array(items) => items.iter().for_each(|item| collect(item, prefix, out)),
            Value::Object(map) => map
                .iter()
                .for_each(|(field, item)| collect(item, Some(field), out)),
            _ => {}
        }
    }
    let mut messages = Vec::new();
    collect(details, None, &mut messages);
    messages
}

#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded space-y-1 my-2" role="alert">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || {
                    let messages = error
                        .get()
                        .and_then(|e| e.details)
                        .map(|details| detail_messages(&details))
                        .unwrap_or_default();
                    (!messages.is_empty()).then(|| view! {
                        <ul class="list-disc list-inside text-sm">
                            {messages.into_iter().map(|m| view! { <li>{m}</li> }).collect_view()}
                        </ul>
                    })
                }}
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn detail_messages_flatten_problem_details() {
        let details = json!({ "FullName": ["Required"], "Position": ["Unknown", "Too long"] });
        assert_eq!(
            detail_messages(&details),
            vec!["FullName: Required", "Position: Unknown", "Position: Too long"]
        );
        assert_eq!(detail_messages(&json!(["a", "", 3])), vec!["a"]);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn inline_error_renders_field_errors() {
        let html = render_to_string(move || {
            let error = ApiError::http(400, "One or more validation errors occurred.")
                .with_details(json!({ "StartDate": ["Start date is required"] }));
            let signal = create_rw_signal(Some(error));
            view! { <InlineErrorMessage error=signal /> }
        });
        assert!(html.contains("One or more validation errors occurred."));
        assert!(html.contains("StartDate: Start date is required"));
    }

    #[test]
    fn inline_error_is_empty_without_error() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(None::<ApiError>);
            view! { <InlineErrorMessage error=signal /> }
        });
        assert!(!html.contains("role=\"alert\""));
    }
}
