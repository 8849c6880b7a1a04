//! Landing page component

use dioxus::prelude::*;

use crate::components::{ImpactCounter, InquiryModal};

/// Smoothly scroll the viewport to the section with `id`.
#[cfg(feature = "web")]
fn scroll_to(id: &str) {
    use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));

    if let Some(element) = element {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[cfg(not(feature = "web"))]
fn scroll_to(_id: &str) {}

/// Landing page: hero with the live impact counter, product sections and
/// the inquiry modal.
#[component]
pub fn Home() -> Element {
    let mut inquiry_open = use_signal(|| false);

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-b from-green-50 to-white",

            // Navigation
            nav {
                class: "bg-white border-b border-gray-100 sticky top-0 z-10",
                div {
                    class: "max-w-6xl mx-auto px-4 py-4 flex items-center justify-between",
                    span { class: "text-xl font-bold text-green-700", "Verda" }
                    div {
                        class: "flex items-center gap-6 text-sm text-gray-600",
                        a {
                            href: "#solutions",
                            onclick: move |e| {
                                e.prevent_default();
                                scroll_to("solutions");
                            },
                            "Solutions"
                        }
                        a {
                            href: "#impact",
                            onclick: move |e| {
                                e.prevent_default();
                                scroll_to("impact");
                            },
                            "Impact"
                        }
                        a {
                            href: "#about",
                            onclick: move |e| {
                                e.prevent_default();
                                scroll_to("about");
                            },
                            "About"
                        }
                        button {
                            class: "px-4 py-2 bg-green-600 text-white rounded-lg hover:bg-green-700 transition-colors",
                            onclick: move |_| inquiry_open.set(true),
                            "Get a Quote"
                        }
                    }
                }
            }

            // Hero
            header {
                class: "max-w-6xl mx-auto px-4 py-16 text-center",
                h1 {
                    class: "text-4xl sm:text-5xl font-bold text-gray-900 mb-4",
                    "Carbon removal that adds up"
                }
                p {
                    class: "text-lg text-gray-600 max-w-2xl mx-auto mb-8",
                    "Verda sources verified offsets from forestry, direct air capture and blue carbon projects, retired on your behalf and audited end to end."
                }
                div {
                    class: "text-5xl font-bold text-green-700",
                    ImpactCounter {}
                    span { class: "text-2xl text-gray-500 ml-2", "tonnes retired" }
                }
            }

            // Solutions
            section {
                id: "solutions",
                class: "max-w-6xl mx-auto px-4 py-16",
                h2 { class: "text-3xl font-bold text-gray-900 mb-8", "Solutions" }
                div {
                    class: "grid sm:grid-cols-2 lg:grid-cols-4 gap-6",
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
                        h3 { class: "font-semibold text-gray-900 mb-2", "Forestry Credits" }
                        p { class: "text-sm text-gray-600", "Afforestation and avoided-deforestation projects across three continents." }
                    }
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
                        h3 { class: "font-semibold text-gray-900 mb-2", "Direct Air Capture" }
                        p { class: "text-sm text-gray-600", "Permanent removal with mineralized storage, delivered on multi-year offtake." }
                    }
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
                        h3 { class: "font-semibold text-gray-900 mb-2", "Renewable Energy" }
                        p { class: "text-sm text-gray-600", "Certificates from new-build wind and solar in emerging grids." }
                    }
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
                        h3 { class: "font-semibold text-gray-900 mb-2", "Blue Carbon" }
                        p { class: "text-sm text-gray-600", "Mangrove and seagrass restoration with community co-benefits." }
                    }
                }
            }

            // Impact
            section {
                id: "impact",
                class: "bg-green-700 text-white py-16",
                div {
                    class: "max-w-6xl mx-auto px-4 text-center",
                    h2 { class: "text-3xl font-bold mb-4", "Impact you can audit" }
                    p {
                        class: "max-w-2xl mx-auto text-green-100",
                        "Every tonne is serialized, retired against a public registry and reported quarterly. No double counting, no vintage games."
                    }
                }
            }

            // About
            section {
                id: "about",
                class: "max-w-6xl mx-auto px-4 py-16 text-center",
                h2 { class: "text-3xl font-bold text-gray-900 mb-4", "Ready to start?" }
                p { class: "text-gray-600 mb-8", "Tell us about your footprint and we'll put a programme together." }
                button {
                    class: "px-6 py-3 bg-green-600 text-white rounded-lg hover:bg-green-700 transition-colors font-medium",
                    onclick: move |_| inquiry_open.set(true),
                    "Make an Inquiry"
                }
            }

            InquiryModal { open: inquiry_open }
        }
    }
}
