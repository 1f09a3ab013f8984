use super::{
    canvas_badges::CanvasBadges, header::Header, product_canvas::ProductCanvas,
    product_sidebar::ProductSidebar, status_bar::StatusBar, toolbar::Toolbar,
    zoom_controls::ZoomControls, zoom_viewport::ZoomViewport,
};
use crate::config::ViewerConfig;
use crate::hooks::use_modifier_key;
use crate::model::{CatalogAction, CatalogState, Category};
use crate::state::ViewportHandle;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: ViewerConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let catalog = use_reducer(CatalogState::default);
    // The viewport owns its transform; the app only keeps this capability.
    let viewport = {
        let config = props.config.clone();
        use_memo((), move |_| ViewportHandle::new(config))
    };
    let scale = use_state_eq(|| viewport.scale());
    let modifier_held = use_modifier_key(props.config.modifier_key.clone());

    let on_filter = {
        let catalog = catalog.clone();
        Callback::from(move |category: Category| {
            catalog.dispatch(CatalogAction::FilterByCategory(category))
        })
    };
    let on_select = {
        let catalog = catalog.clone();
        Callback::from(move |id: String| catalog.dispatch(CatalogAction::SelectProduct(id)))
    };
    let on_transformed = {
        let scale = scale.clone();
        use_callback((), move |s: f64, _| scale.set(s))
    };

    let step = viewport.button_step();
    let zoom_in = {
        let viewport = (*viewport).clone();
        Callback::from(move |_| viewport.zoom_in(step))
    };
    let zoom_out = {
        let viewport = (*viewport).clone();
        Callback::from(move |_| viewport.zoom_out(step))
    };
    let reset = {
        let viewport = (*viewport).clone();
        Callback::from(move |_| viewport.reset())
    };

    let displayed = catalog.displayed_product().cloned();
    let visible: Vec<_> = catalog.visible_products().into_iter().cloned().collect();
    let product_name = displayed.as_ref().map(|p| p.name.clone());
    let modifier_key = props.config.modifier_key.clone();

    html! {
        <div style="display:flex; flex-direction:column; height:100vh; background:#f9fafb; font-family:system-ui, sans-serif;">
            <Header />
            <div style="display:flex; flex:1; overflow:hidden;">
                <ProductSidebar
                    active_category={catalog.active_category}
                    products={visible}
                    selected={catalog.selected.clone()}
                    {on_filter}
                    {on_select}
                />
                <div style="flex:1; background:#f3f4f6; display:flex; flex-direction:column;">
                    <Toolbar />
                    <div style="flex:1; padding:24px; display:flex; flex-direction:column;">
                        <div style="flex:1; position:relative; overflow:hidden; background:#f0f0f0; border:1px solid #d1d5db; border-radius:8px; box-shadow:inset 0 2px 4px rgba(0,0,0,0.06);">
                            <ZoomControls on_zoom_in={zoom_in} on_zoom_out={zoom_out} on_reset={reset} />
                            <CanvasBadges scale={*scale} {modifier_key} {modifier_held} />
                            <ZoomViewport handle={(*viewport).clone()} {modifier_held} {on_transformed}>
                                <ProductCanvas product={displayed} />
                            </ZoomViewport>
                        </div>
                    </div>
                    <StatusBar {product_name} modifier_key={props.config.modifier_key.clone()} />
                </div>
            </div>
        </div>
    }
}
