use leptos::*;

pub fn display_value(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

/// Labelled read-only value used by the details dialogs.
#[component]
pub fn Field(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    let value = display_value(&value);
    view! {
        <div>
            <dt class="text-xs font-medium uppercase text-gray-500">{label}</dt>
            <dd class="mt-1 text-sm text-gray-900">{value}</dd>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_display_as_dash() {
        assert_eq!(display_value("  "), "-");
        assert_eq!(display_value("Vacation"), "Vacation");
    }
}
