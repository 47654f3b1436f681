//! OpenAPI document and interactive docs UI.
//!
//! The route schemas are declared by hand in one place and served as a
//! static document; `/docs` is a Swagger UI page pointed at it.

use axum::{Json, response::Html};
use serde_json::{Value, json};

const DOCS_PAGE: &str = r##"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Shortly API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => {
      SwaggerUIBundle({ url: "/openapi.json", dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;

/// Serves the OpenAPI document.
///
/// # Endpoint
///
/// `GET /openapi.json`
pub async fn openapi_handler() -> Json<Value> {
    Json(openapi_document())
}

/// Serves the Swagger UI page.
///
/// # Endpoint
///
/// `GET /docs`
pub async fn docs_handler() -> Html<&'static str> {
    Html(DOCS_PAGE)
}

fn openapi_document() -> Value {
    let error_schema = json!({
        "type": "object",
        "properties": {
            "error": {
                "type": "object",
                "properties": {
                    "code": { "type": "string" },
                    "message": { "type": "string" },
                    "details": {}
                },
                "required": ["code", "message"]
            }
        },
        "required": ["error"]
    });

    let link_schema = json!({
        "type": "object",
        "properties": {
            "code": { "type": "string" },
            "originalUrl": { "type": "string" },
            "createdAt": { "type": "string", "format": "date-time" },
            "expiresAt": { "type": "string", "format": "date-time", "nullable": true }
        },
        "required": ["code", "originalUrl", "createdAt", "expiresAt"]
    });

    let click_event_schema = json!({
        "type": "object",
        "properties": {
            "id": { "type": "integer", "format": "int64" },
            "linkId": { "type": "integer", "format": "int64" },
            "clickedAt": { "type": "string", "format": "date-time" },
            "userAgent": { "type": "string", "nullable": true },
            "referer": { "type": "string", "nullable": true },
            "ipHash": { "type": "string", "nullable": true }
        },
        "required": ["id", "linkId", "clickedAt", "userAgent", "referer", "ipHash"]
    });

    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Shortly",
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/api/links": {
                "post": {
                    "summary": "Create a short link",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": {
                                    "type": "object",
                                    "properties": {
                                        "url": { "type": "string" },
                                        "expiresAt": { "type": "string", "format": "date-time" }
                                    },
                                    "required": ["url"]
                                }
                            }
                        }
                    },
                    "responses": {
                        "200": {
                            "description": "Short link created",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "properties": {
                                            "code": { "type": "string" },
                                            "shortUrl": { "type": "string" },
                                            "originalUrl": { "type": "string" },
                                            "expiresAt": {
                                                "type": "string",
                                                "format": "date-time",
                                                "nullable": true
                                            }
                                        },
                                        "required": ["code", "shortUrl", "originalUrl", "expiresAt"]
                                    }
                                }
                            }
                        },
                        "400": {
                            "description": "Validation error",
                            "content": { "application/json": { "schema": error_schema.clone() } }
                        },
                        "500": {
                            "description": "Server error",
                            "content": { "application/json": { "schema": error_schema.clone() } }
                        }
                    }
                }
            },
            "/api/links/{code}": {
                "get": {
                    "summary": "Link metadata and click count",
                    "parameters": [{
                        "name": "code",
                        "in": "path",
                        "required": true,
                        "schema": { "type": "string" }
                    }],
                    "responses": {
                        "200": {
                            "description": "Link metadata",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "allOf": [
                                            link_schema,
                                            {
                                                "type": "object",
                                                "properties": {
                                                    "clickCount": { "type": "integer", "format": "int64" }
                                                },
                                                "required": ["clickCount"]
                                            }
                                        ]
                                    }
                                }
                            }
                        },
                        "404": {
                            "description": "Link not found",
                            "content": { "application/json": { "schema": error_schema.clone() } }
                        }
                    }
                }
            },
            "/api/links/{code}/events": {
                "get": {
                    "summary": "Click events for a link, most recent first",
                    "parameters": [
                        {
                            "name": "code",
                            "in": "path",
                            "required": true,
                            "schema": { "type": "string" }
                        },
                        {
                            "name": "from",
                            "in": "query",
                            "schema": { "type": "string", "format": "date-time" }
                        },
                        {
                            "name": "to",
                            "in": "query",
                            "schema": { "type": "string", "format": "date-time" }
                        },
                        {
                            "name": "limit",
                            "in": "query",
                            "schema": { "type": "string" }
                        }
                    ],
                    "responses": {
                        "200": {
                            "description": "Click events",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "properties": {
                                            "code": { "type": "string" },
                                            "events": {
                                                "type": "array",
                                                "items": click_event_schema
                                            }
                                        },
                                        "required": ["code", "events"]
                                    }
                                }
                            }
                        },
                        "404": {
                            "description": "Link not found",
                            "content": { "application/json": { "schema": error_schema.clone() } }
                        }
                    }
                }
            },
            "/{code}": {
                "get": {
                    "summary": "Redirect to the original URL",
                    "parameters": [{
                        "name": "code",
                        "in": "path",
                        "required": true,
                        "schema": { "type": "string" }
                    }],
                    "responses": {
                        "302": { "description": "Redirect to original URL" },
                        "404": {
                            "description": "Link not found",
                            "content": { "text/plain": { "schema": { "type": "string" } } }
                        },
                        "410": {
                            "description": "Link expired",
                            "content": { "text/plain": { "schema": { "type": "string" } } }
                        }
                    }
                }
            },
            "/health": {
                "get": {
                    "summary": "Service health",
                    "responses": {
                        "200": { "description": "Healthy" },
                        "503": { "description": "Degraded" }
                    }
                }
            }
        }
    })
}
