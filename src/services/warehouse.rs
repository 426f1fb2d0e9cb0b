use serde_json::{Map, Value};
use tracing::info;

use crate::config::Config;
use crate::utils::backend_item_url;

/// Reply used when the backend answers with an empty body.
pub const OPERATION_OK: &str = "✅ Operation successful";

/// Reply used when the model proposes a function outside the catalog.
pub const UNKNOWN_FUNCTION: &str = "Unknown function";

/// Translate a function proposal into one warehouse CRUD call and return
/// the backend's parsed JSON body.
///
/// The response status is deliberately not inspected: a 4xx/5xx with a
/// JSON body is passed through as the reply, matching the backend's own
/// error envelope. An empty body becomes [`OPERATION_OK`].
pub async fn dispatch(
    http: &reqwest::Client,
    cfg: &Config,
    function_name: &str,
    mut arguments: Map<String, Value>,
) -> Result<Value, String> {
    let base = cfg.backend_base_url.as_str().trim_end_matches('/');

    let req = match function_name {
        "get_all_products" => http.get(base),
        "add_product" => http.post(base).json(&arguments),
        "update_product" => {
            // product_id goes into the path, the remaining fields into the body
            let id = arguments
                .remove("product_id")
                .ok_or_else(|| "missing required argument 'product_id'".to_string())?;
            http.put(backend_item_url(&cfg.backend_base_url, &id))
                .json(&arguments)
        }
        "delete_product" => {
            let id = arguments
                .get("product_id")
                .cloned()
                .ok_or_else(|| "missing required argument 'product_id'".to_string())?;
            http.delete(backend_item_url(&cfg.backend_base_url, &id))
        }
        other => {
            info!("Model proposed unknown function '{other}'");
            return Ok(Value::String(UNKNOWN_FUNCTION.to_string()));
        }
    };

    let res = req
        .send()
        .await
        .map_err(|e| format!("request error: {e}"))?;
    let body = res
        .text()
        .await
        .map_err(|e| format!("body error: {e}"))?;

    if body.is_empty() {
        return Ok(Value::String(OPERATION_OK.to_string()));
    }
    serde_json::from_str(&body).map_err(|e| format!("json error: {e}"))
}
