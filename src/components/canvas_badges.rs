use crate::util::{format_scale, modifier_label};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CanvasBadgesProps {
    pub scale: f64,
    pub modifier_key: String,
    pub modifier_held: bool,
}

#[function_component]
pub fn CanvasBadges(props: &CanvasBadgesProps) -> Html {
    let badge = "position:absolute; z-index:10; background:#fff; border-radius:8px; box-shadow:0 2px 6px rgba(0,0,0,0.15); font-size:12px;";
    html! {<>
        { if props.modifier_held {
            html!{ <div style={format!("{badge} top:16px; left:16px; padding:6px 12px; color:#2563eb; font-weight:500;")}>
                { format!("{} pressed - Zoom enabled", modifier_label(&props.modifier_key)) }
            </div> }
        } else { html!{} } }
        <div style={format!("{badge} bottom:16px; right:16px; padding:4px 8px; color:#4b5563; font-variant-numeric:tabular-nums;")}>
            { format_scale(props.scale) }
        </div>
    </>}
}
