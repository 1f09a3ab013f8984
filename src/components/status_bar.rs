use crate::util::modifier_label;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatusBarProps {
    pub product_name: Option<String>,
    pub modifier_key: String,
}

#[function_component]
pub fn StatusBar(props: &StatusBarProps) -> Html {
    let status = match &props.product_name {
        Some(name) => format!("Editing: {name}"),
        None => "No product selected".to_string(),
    };
    html! {<div style="height:32px; background:#fff; border-top:1px solid #e5e7eb; display:flex; align-items:center; justify-content:space-between; padding:0 16px; font-size:12px; color:#6b7280;">
        <span>{ status }</span>
        <span><strong>{ format!("Press {} + Scroll", modifier_label(&props.modifier_key)) }</strong>{" to zoom in/out"}</span>
    </div>}
}
