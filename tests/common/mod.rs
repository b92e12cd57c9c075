//! Fixture builders for results-page tests

/// URL the fixtures pretend to be rendered from
#[allow(dead_code)]
pub const PAGE_URL: &str = "https://listado.mercadolibre.com.mx/laptop";

/// One entry in the current `poly-component` layout
#[allow(dead_code)]
pub fn poly_item(title: Option<&str>, price: Option<&str>, href: Option<&str>) -> String {
    let title = title
        .map(|t| {
            let href = href.map(|h| format!(r#" href="{h}""#)).unwrap_or_default();
            format!(
                r#"<h2 class="poly-box poly-component__title"><a{href}>{t}</a></h2>"#
            )
        })
        .unwrap_or_default();
    let price = price
        .map(|p| {
            format!(
                r#"<div class="poly-component__price">
                     <span class="andes-money-amount">
                       <span class="andes-money-amount__currency-symbol">$</span>
                       <span class="andes-money-amount__fraction">{p}</span>
                     </span>
                   </div>"#
            )
        })
        .unwrap_or_default();

    format!(
        r#"<li class="ui-search-layout__item">
             <div class="poly-card"><div class="poly-card__content">{title}{price}</div></div>
           </li>"#
    )
}

/// One entry in the legacy `ui-search-result` layout
#[allow(dead_code)]
pub fn legacy_item(title: &str, price: Option<&str>, href: &str) -> String {
    let price = price
        .map(|p| format!(r#"<span class="price-tag-fraction">{p}</span>"#))
        .unwrap_or_default();
    format!(
        r#"<div class="ui-search-result">
             <a class="ui-search-link" href="{href}">
               <h2 class="ui-search-item__title">{title}</h2>
             </a>
             {price}
           </div>"#
    )
}

/// Wrap entries in a results page shell
#[allow(dead_code)]
pub fn results_page(items: &[String]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="es-MX">
<head><meta charset="UTF-8"><title>Laptop | MercadoLibre</title></head>
<body>
  <header class="nav-header"><a href="/">Mercado Libre</a></header>
  <main>
    <section class="ui-search-results">
      <ol class="ui-search-layout">{}</ol>
    </section>
  </main>
</body>
</html>"#,
        items.join("\n")
    )
}
