use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct FileSelectorProps {
    pub file_name: String,
    pub on_select: EventHandler<Vec<String>>,
}

/// File input that only reports the selected file names
#[component]
pub fn FileSelector(props: FileSelectorProps) -> Element {
    let on_select = props.on_select;

    rsx! {
        input {
            id: "file",
            class: "input-field",
            r#type: "file",
            onchange: move |evt| {
                let names = evt.files().map(|engine| engine.files()).unwrap_or_default();
                on_select.call(names);
            }
        }
        if !props.file_name.is_empty() {
            span {
                class: "file-name",
                "Selected: {props.file_name}"
            }
        }
    }
}
