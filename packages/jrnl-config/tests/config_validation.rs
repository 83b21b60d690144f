use jrnl_config::{Config, Error};

const VALID: &str = r#"
[service]
http_bind = "127.0.0.1:8080"
log_level = "info"

[storage.postgres]
dsn = "postgres://localhost/jrnl"
pool_max_conns = 8

[providers.embedding]
api_base = "http://localhost:9000"
path = "/embedding/general"
dimensions = 768
timeout_ms = 180000
connect_timeout_ms = 10000
read_timeout_ms = 90000

[search]
default_page_size = 10
"#;

fn parse(raw: &str) -> Config {
	toml::from_str(raw).expect("Failed to parse config.")
}

#[test]
fn valid_config_passes_validation() {
	let cfg = parse(VALID);

	jrnl_config::validate(&cfg).expect("Valid config must pass validation.");
	assert!(cfg.providers.embedding.api_key.is_none());
	assert!(cfg.providers.embedding.default_headers.is_empty());
}

#[test]
fn rejects_zero_dimensions() {
	let raw = VALID.replace("dimensions = 768", "dimensions = 0");
	let cfg = parse(&raw);

	assert!(matches!(jrnl_config::validate(&cfg), Err(Error::Validation { .. })));
}

#[test]
fn rejects_zero_timeouts() {
	for field in ["timeout_ms = 180000", "connect_timeout_ms = 10000", "read_timeout_ms = 90000"] {
		let zeroed = format!("{} = 0", field.split(' ').next().unwrap());
		let raw = VALID.replace(field, &zeroed);
		let cfg = parse(&raw);

		assert!(matches!(jrnl_config::validate(&cfg), Err(Error::Validation { .. })));
	}
}

#[test]
fn rejects_empty_dsn() {
	let raw = VALID.replace("postgres://localhost/jrnl", " ");
	let cfg = parse(&raw);

	assert!(matches!(jrnl_config::validate(&cfg), Err(Error::Validation { .. })));
}

#[test]
fn rejects_non_positive_default_page_size() {
	let raw = VALID.replace("default_page_size = 10", "default_page_size = 0");
	let cfg = parse(&raw);

	assert!(matches!(jrnl_config::validate(&cfg), Err(Error::Validation { .. })));
}

#[test]
fn rejects_zero_pool_size() {
	let raw = VALID.replace("pool_max_conns = 8", "pool_max_conns = 0");
	let cfg = parse(&raw);

	assert!(matches!(jrnl_config::validate(&cfg), Err(Error::Validation { .. })));
}
