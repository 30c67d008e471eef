use leptos::prelude::*;

pub fn icon(name: &str) -> AnyView {
    match name {
        "plate" => view! {
            <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <circle cx="12" cy="12" r="9"/>
                <circle cx="12" cy="12" r="5"/>
            </svg>
        }.into_any(),
        "starters" => view! {
            <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <path d="M3 11h18"/>
                <path d="M5 11a7 7 0 0 0 14 0"/>
                <path d="M9 7c0-1 1-2 1-3"/>
                <path d="M14 7c0-1 1-2 1-3"/>
            </svg>
        }.into_any(),
        "mains" => view! {
            <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <path d="M7 2v20"/>
                <path d="M4 2v6a3 3 0 0 0 6 0V2"/>
                <path d="M17 2c-2 2-3 5-3 8h3v12"/>
            </svg>
        }.into_any(),
        "desserts" => view! {
            <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <path d="M7 11a5 5 0 0 1 10 0"/>
                <path d="M6 11h12l-6 11z"/>
            </svg>
        }.into_any(),
        "generate" => view! {
            <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <path d="M20 6 9 17l-5-5"/>
            </svg>
        }.into_any(),
        _ => view! { <span></span> }.into_any(),
    }
}
