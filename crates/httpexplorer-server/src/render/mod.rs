//! HTML documents served to clients that prefer markup.
//!
//! Templates live under `templates/` and are compiled into the binary, so the
//! server renders the same pages whatever its working directory. Tera
//! autoescapes every `.html` template.

use serde::Serialize;
use tera::{Context, Tera};

use httpexplorer_core::error::{ExplorerError, Result};
use httpexplorer_core::model::{Product, ProductQuery};

const TEMPLATES: [(&str, &str); 6] = [
    ("base.html", include_str!("../../templates/base.html")),
    ("macros.html", include_str!("../../templates/macros.html")),
    ("product_list.html", include_str!("../../templates/product_list.html")),
    ("product_detail.html", include_str!("../../templates/product_detail.html")),
    ("home.html", include_str!("../../templates/home.html")),
    ("negotiation.html", include_str!("../../templates/negotiation.html")),
];

/// Product fields as the templates show them.
#[derive(Debug, Serialize)]
struct ProductView<'a> {
    id: u64,
    nome: &'a str,
    descrizione: Option<&'a str>,
    prezzo: String,
    categoria: &'a str,
    disponibile: bool,
    tags: Vec<&'a str>,
}

impl<'a> From<&'a Product> for ProductView<'a> {
    fn from(p: &'a Product) -> Self {
        Self {
            id: p.id.unwrap_or_default(),
            nome: &p.nome,
            descrizione: p.descrizione.as_deref(),
            prezzo: format!("{:.2}", p.prezzo),
            categoria: &p.categoria,
            disponibile: p.disponibile,
            tags: p.tags.iter().flatten().map(String::as_str).collect(),
        }
    }
}

/// The compiled page set.
pub struct Pages {
    tera: Tera,
}

impl Pages {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)
            .map_err(|e| ExplorerError::Config(format!("templates: {e}")))?;
        Ok(Self { tera })
    }

    fn render(&self, name: &str, ctx: &Context) -> Result<String> {
        self.tera
            .render(name, ctx)
            .map_err(|e| ExplorerError::Internal(format!("rendering {name}: {e}")))
    }

    pub fn product_list(&self, products: &[Product], query: &ProductQuery) -> Result<String> {
        let mut ctx = Context::new();
        ctx.insert("titolo", &listing_title(query));
        ctx.insert(
            "prodotti",
            &products.iter().map(ProductView::from).collect::<Vec<_>>(),
        );
        self.render("product_list.html", &ctx)
    }

    pub fn product_detail(&self, product: &Product) -> Result<String> {
        let mut ctx = Context::new();
        ctx.insert("p", &ProductView::from(product));
        self.render("product_detail.html", &ctx)
    }

    pub fn homepage(&self) -> Result<String> {
        self.render("home.html", &Context::new())
    }

    pub fn negotiation_demo(&self, accept: Option<&str>) -> Result<String> {
        let mut ctx = Context::new();
        ctx.insert("accept", &accept);
        self.render("negotiation.html", &ctx)
    }
}

/// Title of a product listing, describing the active filters.
fn listing_title(query: &ProductQuery) -> String {
    let mut title = String::from("Lista Prodotti");
    if let Some(cat) = query.categoria.as_deref().filter(|c| !c.is_empty()) {
        title.push_str(&format!(" - Categoria: {}", capitalize_words(cat)));
    }
    if let Some(disp) = query.disponibile {
        title.push_str(if disp { " - Disponibili" } else { " - Non Disponibili" });
    }
    let mut range = Vec::new();
    if let Some(min) = query.prezzo_min.filter(|v| *v > 0.0) {
        range.push(format!("min €{min}"));
    }
    if let Some(max) = query.prezzo_max.filter(|v| *v > 0.0) {
        range.push(format!("max €{max}"));
    }
    if !range.is_empty() {
        title.push_str(&format!(" - Prezzo: {}", range.join(", ")));
    }
    title
}

fn capitalize_words(s: &str) -> String {
    s.split(' ')
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
