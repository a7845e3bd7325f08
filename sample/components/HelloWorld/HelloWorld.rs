use dioxus::prelude::*;

/// Greets whoever is named in `msg`.
#[derive(Props, PartialEq, Clone)]
pub struct HelloWorldProps {
    /// Name to greet.
    pub msg: Option<String>,
}

/// Renders "Hello {msg}".
#[component]
pub fn HelloWorld(props: HelloWorldProps) -> Element {
    rsx! {
        div { "Hello {props.msg:?}" }
    }
}
