//! Product catalog and the selection/filter state that drives the canvas.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use yew::Reducible;

use crate::error::ViewerError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Pseudo-category: no filter.
    All,
    Cleanser,
    Moisturizers,
    Oils,
}

impl Category {
    /// Tab order in the sidebar.
    pub const TABS: [Category; 4] = [
        Category::All,
        Category::Cleanser,
        Category::Moisturizers,
        Category::Oils,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Cleanser => "Cleanser",
            Category::Moisturizers => "Moisturizers",
            Category::Oils => "Oils",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ViewerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::TABS
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ViewerError::UnknownCategory(s.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: Category,
    /// Resolved by the browser; a failed load just shows a broken image.
    pub image: String,
}

impl Product {
    fn new(id: &str, name: &str, category: Category, image: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category,
            image: image.to_string(),
        }
    }
}

/// The fixed product list shown in the sidebar.
pub fn catalog() -> Vec<Product> {
    use Category::*;
    vec![
        Product::new("1", "Suncream - La Roche Posay", Moisturizers, "https://picsum.photos/id/100/400/400"),
        Product::new("2", "Clean - Fruity Foaming Face Wash", Cleanser, "https://picsum.photos/id/200/400/400"),
        Product::new("3", "Multi Retinol Night Emulsion", Moisturizers, "https://picsum.photos/id/250/400/400"),
        Product::new("4", "Vitamins C+E+Ferulic Serum", Oils, "https://picsum.photos/id/225/400/400"),
        Product::new("5", "Renew Nourishing Cleanser", Cleanser, "https://picsum.photos/id/240/400/400"),
        Product::new("6", "Le Cleanser Gel to Milk Cleanser", Cleanser, "https://picsum.photos/id/26/400/400"),
        Product::new("7", "Brightening Cleanser", Cleanser, "https://picsum.photos/id/99/400/400"),
        Product::new("8", "Regenerating Cleanser", Cleanser, "https://picsum.photos/id/42/400/400"),
        Product::new("9", "Clarifying Cleanser", Cleanser, "https://picsum.photos/id/63/400/400"),
    ]
}

/// Subset of `products` in `category`, original order kept. `All` returns everything.
pub fn filter_by_category(products: &[Product], category: Category) -> Vec<&Product> {
    products
        .iter()
        .filter(|p| category == Category::All || p.category == category)
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct CatalogState {
    pub products: Rc<Vec<Product>>,
    pub active_category: Category,
    /// Sticky: once set it is only ever replaced, never cleared.
    pub selected: Option<String>,
}

pub enum CatalogAction {
    FilterByCategory(Category),
    SelectProduct(String),
}

impl CatalogState {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: Rc::new(products),
            active_category: Category::All,
            selected: None,
        }
    }

    pub fn visible_products(&self) -> Vec<&Product> {
        filter_by_category(&self.products, self.active_category)
    }

    /// Product the canvas should render. `None` for no selection or an unknown id.
    pub fn displayed_product(&self) -> Option<&Product> {
        let id = self.selected.as_deref()?;
        self.products.iter().find(|p| p.id == id)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new(catalog())
    }
}

impl Reducible for CatalogState {
    type Action = CatalogAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use CatalogAction::*;
        match action {
            FilterByCategory(category) => {
                if self.active_category == category {
                    return self;
                }
                log::debug!("filter: {} -> {}", self.active_category, category);
                Rc::new(CatalogState {
                    active_category: category,
                    ..(*self).clone()
                })
            }
            SelectProduct(id) => {
                if self.is_selected(&id) {
                    return self;
                }
                if !self.products.iter().any(|p| p.id == id) {
                    log::warn!("selected unknown product id `{id}`");
                }
                log::debug!("select product {id}");
                Rc::new(CatalogState {
                    selected: Some(id),
                    ..(*self).clone()
                })
            }
        }
    }
}
