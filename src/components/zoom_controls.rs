use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ZoomControlsProps {
    pub on_zoom_in: Callback<()>,
    pub on_zoom_out: Callback<()>,
    pub on_reset: Callback<()>,
}

const BUTTON: &str = "width:32px; height:32px; display:flex; align-items:center; justify-content:center; background:none; border:none; color:#374151; cursor:pointer;";

#[function_component(ZoomControls)]
pub fn zoom_controls(props: &ZoomControlsProps) -> Html {
    let zo = {
        let cb = props.on_zoom_out.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let rs = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let zi = {
        let cb = props.on_zoom_in.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="position:absolute; top:16px; right:16px; z-index:10; background:#fff; border-radius:8px; box-shadow:0 2px 6px rgba(0,0,0,0.15); display:flex;">
        <button onclick={zo} title="Zoom Out" style={format!("{BUTTON} border-right:1px solid #d1d5db;")}>{"−"}</button>
        <button onclick={rs} title="Reset Zoom" style={format!("{BUTTON} border-right:1px solid #d1d5db;")}>{"⟳"}</button>
        <button onclick={zi} title="Zoom In" style={BUTTON}>{"+"}</button>
    </div>}
}
