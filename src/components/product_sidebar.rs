use crate::model::{Category, Product};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProductSidebarProps {
    pub active_category: Category,
    /// Already filtered by `active_category`.
    pub products: Vec<Product>,
    pub selected: Option<String>,
    pub on_filter: Callback<Category>,
    pub on_select: Callback<String>,
}

#[function_component]
pub fn ProductSidebar(props: &ProductSidebarProps) -> Html {
    let tabs = Category::TABS.into_iter().map(|category| {
        let onclick = {
            let cb = props.on_filter.clone();
            Callback::from(move |_| cb.emit(category))
        };
        let style = if props.active_category == category {
            "background:#f3f4f6; color:#1f2937; font-weight:500;"
        } else {
            "background:none; color:#4b5563;"
        };
        html! {
            <button key={category.as_str()} {onclick}
                style={format!("padding:6px 12px; font-size:14px; white-space:nowrap; border:none; border-radius:6px; cursor:pointer; {style}")}>
                { category.as_str() }
            </button>
        }
    });

    let rows = props.products.iter().map(|product| {
        let onclick = {
            let cb = props.on_select.clone();
            let id = product.id.clone();
            Callback::from(move |_| cb.emit(id.clone()))
        };
        let selected = props.selected.as_deref() == Some(product.id.as_str());
        let style = if selected {
            "background:#eff6ff; border:1px solid #bfdbfe;"
        } else {
            "border:1px solid transparent;"
        };
        html! {
            <div key={product.id.clone()} {onclick}
                style={format!("display:flex; align-items:center; padding:8px; border-radius:6px; cursor:pointer; {style}")}>
                <div style="width:56px; height:56px; flex-shrink:0; overflow:hidden; background:#f3f4f6; border:1px solid #e5e7eb; border-radius:4px;">
                    <img src={product.image.clone()} alt={product.name.clone()} style="width:100%; height:100%; object-fit:contain;" />
                </div>
                <p style="margin:0 0 0 12px; flex:1; font-size:14px; color:#1f2937;">{ product.name.clone() }</p>
            </div>
        }
    });

    html! {<div style="width:256px; background:#fff; border-right:1px solid #e5e7eb; overflow:auto;">
        <div style="padding:16px;">
            <h2 style="margin:0 0 16px 0; font-size:16px; font-weight:500; color:#1f2937;">{"Products"}</h2>
            <div style="display:flex; gap:8px; margin-bottom:16px; padding-bottom:8px; overflow-x:auto;">
                { for tabs }
            </div>
            <div style="display:flex; flex-direction:column; gap:8px; margin-top:16px;">
                { for rows }
            </div>
        </div>
    </div>}
}
