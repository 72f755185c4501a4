// src/views.rs
//! Server-rendered HTML for the product listing page.

use std::fmt::Write;

use crate::models::product::Product;

/// Marks the `<tr>` of each product row in the listing table.
pub const PRODUCT_ROW_CLASS: &str = "produto";

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="utf-8">
<title>Sistema de Estoque</title>
<style>
body { font-family: sans-serif; margin: 2rem; }
table { border-collapse: collapse; width: 100%; margin-bottom: 2rem; }
th, td { border: 1px solid #ccc; padding: .4rem .6rem; text-align: left; }
form label { display: block; margin-bottom: .5rem; }
</style>
</head>
<body>
<h1>Produtos</h1>
"#;

const ADD_FORM: &str = r#"<h2>Adicionar produto</h2>
<form method="post" action="/adicionar">
<label>Nome <input type="text" name="nome" required></label>
<label>Preço <input type="text" name="preco" inputmode="decimal" required></label>
<label>Quantidade <input type="number" name="quantidade" step="1" required></label>
<button type="submit">Salvar</button>
</form>
</body>
</html>
"#;

pub fn render_product_page(products: &[Product]) -> String {
    let mut html = String::with_capacity(PAGE_HEAD.len() + ADD_FORM.len() + products.len() * 128);
    html.push_str(PAGE_HEAD);
    html.push_str("<table>\n<thead><tr><th>ID</th><th>Produto</th><th>Quantidade</th><th>Preço</th></tr></thead>\n<tbody>\n");

    if products.is_empty() {
        html.push_str("<tr><td colspan=\"4\">Nenhum produto cadastrado.</td></tr>\n");
    }

    for product in products {
        // Writing into a String cannot fail
        let _ = writeln!(
            html,
            "<tr class=\"{}\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            PRODUCT_ROW_CLASS,
            product.id,
            escape_html(&product.nome),
            product.quantidade,
            format_price(product.preco_venda),
        );
    }

    html.push_str("</tbody>\n</table>\n");
    html.push_str(ADD_FORM);
    html
}

/// Two decimals, or `-` when the product has no sale price.
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("{p:.2}"),
        None => "-".to_string(),
    }
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, nome: &str, preco: Option<f64>) -> Product {
        Product {
            id,
            nome: nome.to_string(),
            descricao: None,
            quantidade: 4,
            preco_custo: None,
            preco_venda: preco,
            data_cadastro: None,
        }
    }

    fn row_count(html: &str) -> usize {
        html.matches(&format!("<tr class=\"{PRODUCT_ROW_CLASS}\">")).count()
    }

    #[test]
    fn empty_listing_has_no_product_rows() {
        let html = render_product_page(&[]);
        assert_eq!(row_count(&html), 0);
        assert!(html.contains("Nenhum produto cadastrado."));
        assert!(html.contains(r#"action="/adicionar""#));
    }

    #[test]
    fn each_product_gets_a_row() {
        let html = render_product_page(&[product(1, "Widget", Some(9.99)), product(2, "Gadget", None)]);
        assert_eq!(row_count(&html), 2);
        assert!(html.contains("<td>1</td><td>Widget</td><td>4</td><td>9.99</td>"));
        assert!(html.contains("<td>2</td><td>Gadget</td><td>4</td><td>-</td>"));
    }

    #[test]
    fn names_are_escaped() {
        let html = render_product_page(&[product(1, "<script>alert('x')</script>", Some(1.0))]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    }

    #[test]
    fn form_posts_expected_fields() {
        let html = render_product_page(&[]);
        for field in ["nome", "preco", "quantidade"] {
            assert!(html.contains(&format!("name=\"{field}\"")), "missing {field}");
        }
    }
}
