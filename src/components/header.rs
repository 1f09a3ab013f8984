use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header style="background:#1e293b; color:#fff; padding:12px 16px; display:flex; align-items:center; justify-content:space-between;">
            <div style="display:flex; align-items:center;">
                <svg style="width:32px; height:32px; margin-right:16px;" viewBox="0 0 32 32" xmlns="http://www.w3.org/2000/svg">
                    <path fill="white" d="M20.8 15.4c-.7-.2-1.3-.3-1.3-.8s.4-.7.9-.7c.6 0 1.2.2 1.8.7l1-3c-.6-.4-1.7-.8-2.8-.8-2.3 0-3.9 1.3-3.9 3.2 0 1.1.7 1.9 1.7 2.4 1 .5 1.2.6 1.2 1.1 0 .4-.4.8-1 .8-.8 0-1.6-.4-2.2-.8l-1 2.9c.7.5 1.9.9 3.1.9 2.2 0 4-1.1 4-3.3-.1-1.2-.8-2.1-2.5-2.6z" />
                    <path fill="white" d="M16.4 10L15.5 7c-.3-1-1-1-1.3-1-.1 0-2.3-.2-2.3-.2s-1.5-1.4-1.7-1.6c0 0-.1-.1-.2-.1l-.9 20.2c2 0 6.6.7 6.6.7s4.1-14.1 4.2-14.4c-.1-.2-3.5-1.5-3.5-1.5z" />
                </svg>
                <span style="font-weight:700; font-size:20px;">{"Product Designer"}</span>
            </div>
            <div style="background:#9333ea; width:32px; height:32px; border-radius:50%; display:flex; align-items:center; justify-content:center; font-weight:600;">
                {"LP"}
            </div>
        </header>
    }
}
