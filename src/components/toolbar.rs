use yew::prelude::*;

// Layout/Elements/Text and Save are placeholders with no handlers.
#[function_component(Toolbar)]
pub fn toolbar() -> Html {
    let tool = "padding:4px 12px; font-size:14px; color:#4b5563; background:none; border:none; border-radius:4px;";
    html! {<div style="background:#fff; border-bottom:1px solid #e5e7eb; padding:8px 16px; display:flex; justify-content:space-between; align-items:center;">
        <div style="display:flex; align-items:center;">
            <h1 style="margin:0 16px 0 0; font-size:16px; font-weight:500; color:#1f2937;">{"Product Designer"}</h1>
            <div style="display:flex; gap:8px;">
                <button style={tool}>{"Layout"}</button>
                <button style={tool}>{"Elements"}</button>
                <button style={tool}>{"Text"}</button>
            </div>
        </div>
        <button style="background:#1e293b; color:#fff; padding:6px 16px; font-size:14px; border:none; border-radius:6px;">{"Save Design"}</button>
    </div>}
}
