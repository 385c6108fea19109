use actix_cors::Cors;

/// Browser callers from `allowed_origins` may use any method and header, with
/// credentials. `"*"` admits every origin.
pub fn create_cors(allowed_origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials();

    for origin in allowed_origins {
        cors = if origin == "*" {
            cors.allow_any_origin()
        } else {
            cors.allowed_origin(origin)
        };
    }

    cors
}
