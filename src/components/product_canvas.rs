use crate::model::Product;
use yew::prelude::*;

const PRICE: &str = "$24.99";
const DESCRIPTION: &str = "This amazing product offers superior quality and performance. Perfect for everyday use, it will quickly become a staple in your routine.";

#[derive(Properties, PartialEq, Clone)]
pub struct ProductCanvasProps {
    /// `None` renders the placeholder.
    pub product: Option<Product>,
}

/// The 600x400 mock product card shown inside the zoom viewport.
#[function_component(ProductCanvas)]
pub fn product_canvas(props: &ProductCanvasProps) -> Html {
    let panel = "position:absolute; background:#fff; padding:16px; border-radius:8px; box-shadow:0 2px 6px rgba(0,0,0,0.12); border:1px solid #e5e7eb;";
    let content = match &props.product {
        Some(product) => html! {<>
            <div style="position:absolute; z-index:10; width:160px; left:32px; top:40px;">
                <img src={product.image.clone()} alt="Selected product"
                    style="width:100%; height:auto; object-fit:contain; border-radius:4px; border:1px solid #e5e7eb; box-shadow:0 2px 6px rgba(0,0,0,0.12);" />
            </div>
            <div style={format!("{panel} right:32px; top:40px; width:256px;")}>
                <h3 style="margin:0 0 4px 0; font-size:18px; font-weight:700;">{ product.name.clone() }</h3>
                <p style="margin:0 0 8px 0; font-size:14px; color:#6b7280;">{ product.category.as_str() }</p>
                <div style="display:flex; align-items:center; margin-top:8px;">
                    <div style="flex:1;">
                        <span style="font-size:14px; color:#4b5563;">{"Price"}</span>
                        <p style="margin:0; font-size:18px; font-weight:700;">{ PRICE }</p>
                    </div>
                    <button style="background:#3b82f6; color:#fff; padding:4px 12px; border:none; border-radius:6px; font-size:14px;">{"Add to Cart"}</button>
                </div>
            </div>
            <div style={format!("{panel} bottom:40px; left:32px; right:32px;")}>
                <h4 style="margin:0 0 8px 0; font-weight:500;">{"Description"}</h4>
                <p style="margin:0; font-size:14px; color:#4b5563;">{ DESCRIPTION }</p>
            </div>
        </>},
        None => html! {
            <div style="display:flex; flex-direction:column; align-items:center; justify-content:center; color:#9ca3af;">
                <svg xmlns="http://www.w3.org/2000/svg" style="width:48px; height:48px; margin-bottom:8px;" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="1.5"
                        d="M4 16l4.586-4.586a2 2 0 012.828 0L16 16m-2-2l1.586-1.586a2 2 0 012.828 0L20 14m-6-6h.01M6 20h12a2 2 0 002-2V6a2 2 0 00-2-2H6a2 2 0 00-2 2v12a2 2 0 002 2z" />
                </svg>
                <p style="margin:0; font-size:14px;">{"Select a product from the list"}</p>
            </div>
        },
    };
    html! {
        <div style="position:relative; width:600px; height:400px; background:#fff; border-radius:4px; box-shadow:0 10px 15px rgba(0,0,0,0.1); overflow:hidden; cursor:default;">
            <div style="position:absolute; inset:0; opacity:0.1; background-image:linear-gradient(#000 1px, transparent 1px), linear-gradient(90deg, #000 1px, transparent 1px); background-size:20px 20px;"></div>
            <div style="position:relative; width:100%; height:100%; display:flex; align-items:center; justify-content:center;">
                { content }
            </div>
        </div>
    }
}
