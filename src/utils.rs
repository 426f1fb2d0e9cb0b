use serde_json::Value;
use url::Url;

/// Build the per-product backend URL, `{base}/{product_id}`. The id may
/// arrive from the model as a JSON number or a string; both render without
/// quotes.
pub fn backend_item_url(base: &Url, product_id: &Value) -> String {
    let base = base.as_str().trim_end_matches('/');
    match product_id {
        Value::String(id) => format!("{base}/{id}"),
        other => format!("{base}/{other}"),
    }
}
