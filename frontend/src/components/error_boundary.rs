//! Error boundary components for rendering failures.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |_err: ErrorContext| {
                rsx! {
                    h1 {
                        style: "color:#FF2F64; font-size: 54px; border: 1px solid #FF2F64; padding: 10px; border-radius: 5px; margin: 15px;",
                        "ThemeBase ran into an error",
                    }
                    p {
                        style: "color:darkred; font-size: 26px; border: 1px solid #FF2F64; padding: 10px; border-radius: 5px; margin: 15px;",
                        "While rendering: {boundary_name}"
                    }
                    a {
                        href: "/",
                        style: "color:#1C212D; font-size: 26px; border: 1px solid #1C212D; padding: 10px; border-radius: 5px; margin: 15px;",
                        "Return to Home Page"
                    }
                    pre {
                        style: "color:black; border: 1px solid #FF2F64; padding: 10px; border-radius: 5px; margin: 15px; text-wrap: auto;",
                        "{_err:#?}"
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |_err: ErrorContext| {
                let error = _err.error();
                let error_txt = if let Some(err) = error {
                    format!("{:#?}", err.0)
                } else {
                    "Unknown error".to_string()
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "color:#1C212D; font-size: 26px; border: 1px solid #1C212D; padding: 10px; border-radius: 5px; margin: 15px; cursor: pointer;",
                            onclick: move |_| {
                                _err.clear_errors();
                            },
                            "Try Again"
                        }
                    }
                }
            },
            div {
                width: "100%",
                height: "100%",
                {children}
            }
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            width: "100%",
            height: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",

            h1 {
                style: "color:#FF2F64; font-size: 34px; border: 1px solid #FF2F64; padding: 10px; border-radius: 5px; margin: 5px;",
                "Something went wrong",
            }

            pre {
                style: "color:darkred; border: 1px solid #FF2F64; padding: 10px; border-radius: 5px; margin: 5px; text-wrap: auto; max-width: 500px; max-height: 400px; overflow-y: auto;",
                "{error_txt}"
            }

            {children}
        }
    }
}
