//! Static catalog of warehouse functions advertised to the model.

use serde_json::{json, Value};

use crate::models::llm::{FunctionDescriptor, ToolDescriptor};

/// Build the four warehouse CRUD descriptors. The catalog is constructed
/// once at startup and attached verbatim to every completion call; it
/// never changes at runtime.
pub fn catalog() -> Vec<ToolDescriptor> {
    vec![
        function(
            "get_all_products",
            "Retrieve all warehouse products",
            json!({"type": "object", "properties": {}, "required": []}),
        ),
        function(
            "add_product",
            "Add a product to the warehouse",
            json!({
                "type": "object",
                "properties": {
                    "product_name": {"type": "string"},
                    "product_desc": {"type": "string"},
                    "quantity": {"type": "integer"},
                    "location": {"type": "string"}
                },
                "required": ["product_name", "quantity", "location"]
            }),
        ),
        function(
            "update_product",
            "Update a product in the warehouse",
            json!({
                "type": "object",
                "properties": {
                    "product_id": {"type": "integer"},
                    "product_name": {"type": "string"},
                    "quantity": {"type": "integer"},
                    "location": {"type": "string"}
                },
                "required": ["product_id"]
            }),
        ),
        function(
            "delete_product",
            "Delete a product from the warehouse",
            json!({
                "type": "object",
                "properties": {
                    "product_id": {"type": "integer"}
                },
                "required": ["product_id"]
            }),
        ),
    ]
}

fn function(name: &str, description: &str, parameters: Value) -> ToolDescriptor {
    ToolDescriptor {
        kind: "function".to_string(),
        function: FunctionDescriptor {
            name: name.to_string(),
            description: description.to_string(),
            parameters,
        },
    }
}
